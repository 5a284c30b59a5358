/// Errors raised while building a `SchoolStore`.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed school data: {message}")]
    Parse { message: String },

    #[error("duplicate school handle: {handle}")]
    DuplicateHandle { handle: String },
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
