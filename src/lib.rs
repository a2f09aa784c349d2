//! Lead intake form: a Yew/WASM component that collects an applicant's
//! details and résumé and posts them to the leads endpoint.

pub mod config;
pub mod form;
pub mod lead;
pub mod payload;
pub mod state;
pub mod submit;

pub use config::{LeadFormConfig, PayloadEncoding};
pub use form::LeadForm;
pub use lead::{LeadField, LeadSubmission, ResumeAttachment, VisaType};
pub use state::{FormAction, FormState, Notice, NoticeKind, Phase};
pub use submit::SubmitError;
