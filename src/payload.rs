//! Wire shapes for `POST /api/leads`.
//!
//! Multipart is the default: the résumé travels as a real file part. The JSON
//! body is kept for backends that only take `application/json`; there the
//! résumé is described, not embedded.

use serde::Serialize;

use crate::lead::{LeadField, LeadSubmission, ResumeAttachment, VisaType};

pub const RESUME_PART: &str = "resume";
pub const VISAS_PART: &str = "visas";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ResumeDescriptor {
    pub fn of<F: ResumeAttachment>(file: &F) -> Self {
        Self {
            name: file.file_name(),
            size: file.byte_len(),
            mime_type: file.mime_type(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub linkedin: String,
    pub visas: Vec<VisaType>,
    pub resume: Option<ResumeDescriptor>,
    pub additional_info: String,
}

impl<F: ResumeAttachment> From<&LeadSubmission<F>> for LeadPayload {
    fn from(lead: &LeadSubmission<F>) -> Self {
        Self {
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            email: lead.email.clone(),
            linkedin: lead.linkedin.clone(),
            visas: lead.visas.clone(),
            resume: lead.resume.as_ref().map(ResumeDescriptor::of),
            additional_info: lead.additional_info.clone(),
        }
    }
}

/// Text parts of the multipart body, in send order: every text field (even
/// when empty), then one `visas` part per selection. The résumé file part is
/// appended separately by the browser layer.
pub fn text_parts<F: ResumeAttachment>(lead: &LeadSubmission<F>) -> Vec<(&'static str, String)> {
    let mut parts: Vec<(&'static str, String)> = LeadField::ALL
        .into_iter()
        .map(|field| (field.name(), lead.field(field).to_string()))
        .collect();
    parts.extend(
        lead.visas
            .iter()
            .map(|visa| (VISAS_PART, visa.as_str().to_string())),
    );
    parts
}
