use serde::Deserialize;
use thiserror::Error;

/// Id of the `<script type="application/json">` block in index.html.
pub const CONFIG_ELEMENT_ID: &str = "lead-form-config";

pub const DEFAULT_ENDPOINT: &str = "/api/leads";
pub const DEFAULT_CONFIRMATION: &str =
    "Thank you for your submission! We will review your information and get back to you.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadEncoding {
    #[default]
    Multipart,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeadFormConfig {
    pub endpoint: String,
    pub encoding: PayloadEncoding,
    /// When set, a successful post navigates here instead of showing the
    /// in-place confirmation.
    pub success_redirect: Option<String>,
    pub confirmation_message: String,
}

impl Default for LeadFormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            encoding: PayloadEncoding::default(),
            success_redirect: None,
            confirmation_message: DEFAULT_CONFIRMATION.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing <script id=\"lead-form-config\" type=\"application/json\">")]
    Missing,
    #[error("lead form config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LeadFormConfig {
    /// Blank input counts as "use the defaults".
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: LeadFormConfig = serde_json::from_str(raw)?;
        config.endpoint = config.endpoint.trim().to_string();
        if config.endpoint.is_empty() {
            config.endpoint = DEFAULT_ENDPOINT.to_string();
        }
        config.success_redirect = config
            .success_redirect
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        Ok(config)
    }

    /// Reads the embedded config block. Never fails: problems are logged and
    /// the defaults win.
    pub fn from_document() -> Self {
        match read_config_block().and_then(|raw| Self::from_json(&raw)) {
            Ok(config) => {
                gloo::console::log!(format!("lead form posting to {}", config.endpoint));
                config
            }
            Err(ConfigError::Missing) => {
                gloo::console::log!("no lead form config block, using defaults");
                Self::default()
            }
            Err(err) => {
                gloo::console::error!(err.to_string());
                Self::default()
            }
        }
    }
}

fn read_config_block() -> Result<String, ConfigError> {
    let el = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .ok_or(ConfigError::Missing)?;
    Ok(el.text_content().unwrap_or_default())
}
