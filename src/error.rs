use std::path::PathBuf;
use thiserror::Error;

/// Rejection returned by the validated setters on `Throw`, `Weapon` and the
/// zombie types. The field keeps its previous value whenever one of these is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: i32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i32 },

    #[error("{field} value {value} is out of range (min: {min}, max: {max})")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

impl StatError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

pub(crate) fn require_positive(field: &'static str, value: i32) -> Result<i32, StatError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(StatError::NonPositive { field, value })
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: i32) -> Result<i32, StatError> {
    if value >= 0 {
        Ok(value)
    } else {
        Err(StatError::Negative { field, value })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse demo config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: String, reason: String },

    #[error("{} problems in demo config: {}", .0.len(), join_messages(.0))]
    Multiple(Vec<ConfigError>),
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Every individual problem carried by this error.
    pub fn problems(&self) -> Vec<&ConfigError> {
        match self {
            Self::Multiple(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }
}

fn join_messages(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates config problems so one validation pass reports all of them.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ConfigError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }

    /// A single problem comes back as itself, several as `Multiple`.
    pub fn into_result<T>(mut self, value: T) -> Result<T, ConfigError> {
        match self.errors.len() {
            0 => Ok(value),
            1 => Err(self.errors.remove(0)),
            _ => Err(ConfigError::Multiple(self.errors)),
        }
    }
}
