pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid options JSON: {message}")]
    InvalidOptionsJson { message: String },

    #[error("Invalid options YAML: {message}")]
    InvalidOptionsYaml { message: String },

    #[error("Invalid value for option `{option}`: {message}")]
    InvalidOption {
        option: &'static str,
        message: String,
    },

    #[error("Unknown {kind} `{value}` (expected one of: {expected})")]
    UnknownKeyword {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("Prompt template has no `{{topic}}` slot")]
    MissingTopicSlot,
}
