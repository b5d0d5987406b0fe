// crates/trendboard-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Trend table parsing failed: {0}")]
    Parse(#[from] trendboard_parser::ParserError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
