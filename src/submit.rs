use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::FormData;

use crate::config::{LeadFormConfig, PayloadEncoding};
use crate::lead::{LeadSubmission, ResumeAttachment};
use crate::payload::{self, LeadPayload, RESUME_PART};

pub const REJECTED_MESSAGE: &str = "Error submitting the form. Please try again.";
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";
pub const REDIRECT_ALERT: &str = "Lead submitted successfully!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("lead rejected: HTTP {status}")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not build request: {0}")]
    Encode(String),
}

impl SubmitError {
    /// Text shown to the applicant. Backend details never leak into it.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Network(_) => NETWORK_MESSAGE,
            SubmitError::Rejected { .. } | SubmitError::Encode(_) => REJECTED_MESSAGE,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, SubmitError::Network(_))
    }
}

/// Any 2xx is acceptance; the body is never read.
pub fn classify_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

/// Posts the lead once. No retry, no timeout.
pub async fn submit_lead(
    config: &LeadFormConfig,
    lead: &LeadSubmission<web_sys::File>,
) -> Result<(), SubmitError> {
    let builder = Request::post(&config.endpoint);
    let request = match config.encoding {
        PayloadEncoding::Multipart => builder.body(multipart_body(lead)?),
        PayloadEncoding::Json => builder.json(&LeadPayload::from(lead)),
    }
    .map_err(|err| SubmitError::Encode(err.to_string()))?;

    let resp = request
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;

    classify_status(resp.status())
}

/// The browser fills in the multipart boundary header from the FormData.
fn multipart_body(lead: &LeadSubmission<web_sys::File>) -> Result<FormData, SubmitError> {
    let form = FormData::new().map_err(encode_error)?;
    for (name, value) in payload::text_parts(lead) {
        form.append_with_str(name, &value).map_err(encode_error)?;
    }
    if let Some(resume) = &lead.resume {
        form.append_with_blob_and_filename(RESUME_PART, resume, &resume.file_name())
            .map_err(encode_error)?;
    }
    Ok(form)
}

fn encode_error(err: JsValue) -> SubmitError {
    SubmitError::Encode(js_error_text(&err))
}

fn js_error_text(err: &JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn navigate(url: &str) -> Result<(), String> {
    let win = web_sys::window().ok_or("no window")?;
    win.location()
        .set_href(url)
        .map_err(|err| js_error_text(&err))
}
