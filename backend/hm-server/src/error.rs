use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to create log directory {path}: {source}")]
    LogDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
