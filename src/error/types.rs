use thiserror::Error;

/// Unified result type for the easel crate.
pub type Result<T> = std::result::Result<T, EaselError>;

/// Errors surfaced by shape construction and the console session.
///
/// Move-time bounds violations are deliberately not errors; they stay a
/// `bool` on the move operations so callers can recover in place.
#[derive(Debug, Error)]
pub enum EaselError {
    #[error("{shape} at ({x}, {y}) does not fit the canvas")]
    OutOfCanvas { shape: &'static str, x: i32, y: i32 },
    #[error("{shape} {what} must not be negative (got {value})")]
    NegativeExtent {
        shape: &'static str,
        what: &'static str,
        value: i32,
    },
    #[error("invalid number `{input}`")]
    InvalidNumber { input: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
