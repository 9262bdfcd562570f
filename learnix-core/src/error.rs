use thiserror::Error;

/// Failures raised by the site logic outside of per-field validation.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("site config could not be parsed: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown theme `{0}` (expected `light` or `dark`)")]
    UnknownTheme(String),
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("unknown FAQ category `{0}`")]
    UnknownCategory(String),
    #[error("panel {index} out of range (group has {len} panels)")]
    PanelOutOfRange { index: usize, len: usize },
    #[error("unknown contact method `{0}`")]
    UnknownContactMethod(String),
}
