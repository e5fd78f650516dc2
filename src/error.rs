use thiserror::Error;

#[derive(Error, Debug)]
pub enum CssBuildError {
    #[error("Log file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Selector error: {0}")]
    Selector(#[from] cssel::SelectorError),

    #[error("Object error: {0}")]
    Object(#[from] objects::ObjectError),

    #[error("A logger was already installed")]
    LoggerInstalled,
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, CssBuildError>;
