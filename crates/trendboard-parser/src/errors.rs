use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{name}' not found in header")]
    MissingColumn { name: &'static str },

    #[error("file did not contain any data rows")]
    EmptyData,
}
