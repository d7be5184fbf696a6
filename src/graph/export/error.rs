use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failures while turning a graph into text or reading one back.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("edge list codec failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),
    #[error("exported text is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("flushing exported text failed: {0}")]
    Io(#[from] io::Error),
}
