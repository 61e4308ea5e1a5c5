use thiserror::Error;

/// Input rejected before it reaches session state or the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("calories consumed is required")]
    EmptyConsumed,

    #[error("{field} must be a whole number, got {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("exercise {0} is required")]
    MissingExerciseField(&'static str),

    #[error("profile is missing required fields: {}", .0.join(", "))]
    MissingProfileFields(Vec<&'static str>),
}
