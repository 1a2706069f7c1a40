use thiserror::Error;

/// Failures of the interactive runner. Analysis itself cannot fail.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("no password provided: input stream closed")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
