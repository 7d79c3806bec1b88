use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Configuration Error: missing field '{field}' in {file}")]
    MissingField { file: String, field: String },

    #[error("Weather Provider Error: {0}")]
    Weather(String),

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Error: HTTP status {status} from camera {camera_name} for url: {url}")]
    HttpStatus {
        camera_name: String,
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Unsupported auth method '{method}' for camera {camera_name}, expected 'digest' or 'none'")]
    UnsupportedAuth { camera_name: String, method: String },

    #[error("Time Conversion Error: {0}")]
    Time(String),

    #[error("File I/O Error: {0}")]
    Io(String),

    #[error("Resource Not Found: {0}")]
    NotFound(String),
}

// Allow conversion from std::io::Error to AppError::Io
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
