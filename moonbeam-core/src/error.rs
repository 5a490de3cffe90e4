#[derive(Debug, thiserror::Error)]
pub enum SerdeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    JsonWithPath(#[from] serde_path_to_error::Error<serde_json::Error>),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    YamlWithPath(#[from] serde_path_to_error::Error<serde_yaml::Error>),
}

/// Reasons an operation is left out of the generated client.
///
/// These are never fatal: the offending operation is skipped, and
/// its siblings are still generated.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum IrError {
    #[error("can't generate code for an operation without an ID")]
    NoOperationId,
    #[error("operation ID `{0}` doesn't have the form `<Group>_<Action>`")]
    BadOperationId(String),
}
