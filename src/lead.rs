use serde::{Deserialize, Serialize};

/// Visa categories the applicant can tick. Declaration order is the order
/// they are rendered and sent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VisaType {
    H1B,
    L1,
    O1,
    TN,
}

impl VisaType {
    pub const ALL: [VisaType; 4] = [VisaType::H1B, VisaType::L1, VisaType::O1, VisaType::TN];

    pub fn as_str(self) -> &'static str {
        match self {
            VisaType::H1B => "H1B",
            VisaType::L1 => "L1",
            VisaType::O1 => "O1",
            VisaType::TN => "TN",
        }
    }

    pub fn parse(raw: &str) -> Option<VisaType> {
        VisaType::ALL.into_iter().find(|v| v.as_str() == raw.trim())
    }
}

/// Text fields of a lead, keyed by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Linkedin,
    AdditionalInfo,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::FirstName,
        LeadField::LastName,
        LeadField::Email,
        LeadField::Linkedin,
        LeadField::AdditionalInfo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LeadField::FirstName => "firstName",
            LeadField::LastName => "lastName",
            LeadField::Email => "email",
            LeadField::Linkedin => "linkedin",
            LeadField::AdditionalInfo => "additionalInfo",
        }
    }

    pub fn from_name(name: &str) -> Option<LeadField> {
        LeadField::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// What the form needs to know about a picked résumé file.
///
/// The browser handle (`web_sys::File`) only exists inside wasm, so the rest
/// of the crate talks to it through this trait.
pub trait ResumeAttachment: Clone + PartialEq {
    fn file_name(&self) -> String;
    fn byte_len(&self) -> u64;
    fn mime_type(&self) -> String;
}

impl ResumeAttachment for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn byte_len(&self) -> u64 {
        self.size() as u64
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Transient form state for one applicant.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSubmission<F> {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub linkedin: String,
    pub visas: Vec<VisaType>,
    pub resume: Option<F>,
    pub additional_info: String,
}

impl<F> Default for LeadSubmission<F> {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            linkedin: String::new(),
            visas: Vec::new(),
            resume: None,
            additional_info: String::new(),
        }
    }
}

impl<F: ResumeAttachment> LeadSubmission<F> {
    pub fn field(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Email => &self.email,
            LeadField::Linkedin => &self.linkedin,
            LeadField::AdditionalInfo => &self.additional_info,
        }
    }

    /// Overwrites one text field verbatim. No trimming, no validation.
    pub fn update_field(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::FirstName => &mut self.first_name,
            LeadField::LastName => &mut self.last_name,
            LeadField::Email => &mut self.email,
            LeadField::Linkedin => &mut self.linkedin,
            LeadField::AdditionalInfo => &mut self.additional_info,
        };
        *slot = value;
    }

    /// Same as [`update_field`](Self::update_field) but keyed by the input's
    /// `name` attribute. Returns false for names the form doesn't own.
    pub fn update_named(&mut self, name: &str, value: String) -> bool {
        match LeadField::from_name(name) {
            Some(field) => {
                self.update_field(field, value);
                true
            }
            None => false,
        }
    }

    pub fn set_visa(&mut self, visa: VisaType, selected: bool) {
        if selected {
            if !self.visas.contains(&visa) {
                self.visas.push(visa);
                self.visas.sort();
            }
        } else {
            self.visas.retain(|v| *v != visa);
        }
    }

    pub fn has_visa(&self, visa: VisaType) -> bool {
        self.visas.contains(&visa)
    }

    /// Takes the first picked file. An empty pick keeps whatever was there.
    pub fn update_resume(&mut self, picked: Option<F>) {
        if let Some(file) = picked {
            self.resume = Some(file);
        }
    }
}
