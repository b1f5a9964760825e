#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PreferencesError {
    #[error("Unknown destination: {0}")]
    UnknownDestination(String),
    #[error("Duration must be a positive whole number of days, got: {0}")]
    InvalidDuration(String),
}
