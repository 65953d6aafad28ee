use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pc_config::ConfigError),

    #[error("Key material error: {0}")]
    Auth(#[from] pc_auth::AuthError),

    #[error("Logger setup failed: {message}")]
    Logger { message: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write audit report: {source}")]
    Report {
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
