use thiserror::Error;

#[derive(Error, Debug)]
pub enum CubeDeckError {
    #[error("Input Format Error: {0}")]
    InputFormat(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Canonicalization Error: {0}")]
    Canonicalization(String),

    #[error("Solver Error: {0}")]
    Solver(String),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CdResult<T> = Result<T, CubeDeckError>;
