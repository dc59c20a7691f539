//! Error type for crack construction and I/O.
//!
//! Geometric edge cases (zero-length curves, queries off the curve) are not
//! errors; they resolve to defined values and are reported through `log`.

/// Errors surfaced to the caller.
#[derive(Debug, thiserror::Error)]
pub enum CrackError {
    /// A `crack` record is missing a required field, holds a malformed
    /// value, or could not be parsed at all.
    #[error("invalid crack record field `{field}`: {reason}")]
    Configuration { field: String, reason: String },

    /// Reading a configuration file or writing export data failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CrackError {
    pub fn configuration(field: &str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for CrackError {
    fn from(e: toml::de::Error) -> Self {
        Self::configuration(crate::config::CRACK_INPUT_RECORD_NAME, e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CrackError>;
