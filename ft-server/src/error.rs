use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Environment variable error: {message}")]
    EnvVar { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Database error: {0}")]
    Db(#[from] ft_db::DbError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
