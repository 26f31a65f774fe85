use thiserror::Error;

/// Errors related to exchange-rate handling.
///
/// Missing rate data is not an error (the converter degrades to a 1.0
/// rate); this covers provider I/O failures only.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("Rate provider error: {0}")]
    Provider(String),
}
