#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Malformed options query parameter: {0}")]
    MalformedOptions(#[source] serde_json::Error),

    #[error("Options query parameter is not a JSON object")]
    OptionsNotAnObject,

    #[error("Invalid location: {0}")]
    InvalidLocation(#[from] url::ParseError),
}
