// error.rs - Failures of the headless renderer

use std::fmt;

use water_engine::ConfigError;

#[derive(Debug)]
pub enum OutputError {
    /// Config file was unreadable as a water config.
    Config(ConfigError),
    /// Texture load or PNG encode failed.
    Image(image::ImageError),
    /// Reading the config or creating the output directory failed.
    Io(std::io::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Config(e) => write!(f, "Invalid config: {}", e),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
            OutputError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Config(e) => Some(e),
            OutputError::Image(e) => Some(e),
            OutputError::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for OutputError {
    fn from(e: ConfigError) -> Self {
        OutputError::Config(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

impl From<std::io::Error> for OutputError {
    fn from(e: std::io::Error) -> Self {
        OutputError::Io(e)
    }
}
