use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LaterError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error in configuration file {}, line {line}: {message}", .path.display())]
    Config {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Duplicate configuration profile '{0}'.")]
    DuplicateProfile(String),

    #[error("Configuration profile not found: '{0}'.")]
    ProfileNotFound(String),

    #[error("later configuration file not found.")]
    ConfigNotFound,
}

pub type Result<T> = std::result::Result<T, LaterError>;
