use thiserror::Error;

/// Errors raised when parsing sort vocabulary from user-facing text.
///
/// Sorting itself never fails; these only surface at the edges where a
/// caller wants to reject input instead of falling back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortParseError {
    /// The name is not one of the sortable book attributes.
    #[error("unknown sort attribute '{0}'")]
    UnknownAttribute(String),

    /// The name is not a sort direction.
    #[error("unknown sort direction '{0}'")]
    UnknownDirection(String),

    /// The name is not a known setting value.
    #[error("invalid value '{value}' for {setting}")]
    InvalidSetting {
        /// Setting that was being parsed.
        setting: &'static str,
        /// The rejected raw value.
        value: String,
    },
}
