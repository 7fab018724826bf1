use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment error: {0}")]
    Env(String),

    #[error("Failed to launch `{command}`: {source}")]
    Process {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Io(_) => "IO_ERROR",
            Error::Env(_) => "ENV_ERROR",
            Error::Process { .. } => "PROCESS_LAUNCH_ERROR",
            Error::InvalidArgument(_) => "INVALID_ARGUMENT",
            Error::Other(_) => "ERROR",
        }
    }
}
