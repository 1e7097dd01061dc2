//! FILENAME: dataset/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("payload has no data array")]
    MissingData,
}
