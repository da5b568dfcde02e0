//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by concrete
//! backend implementations as well as the high-level `Error` type used
//! across the verification API.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code. All of them are local, synchronous and
//! recoverable: a failed decode or a parameter mismatch is reported to the
//! immediate caller and is never fatal to the process. Note that a negative
//! verification result is *not* an error; [`Verifier::verify`](crate::Verifier::verify)
//! returns `Ok(false)` on a legitimate failed proof check.

use thiserror::Error;

/// Errors bubbled up from backend implementations (Arkworks, etc.).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
}

/// Failures decoding a fixed-width byte encoding of a group element.
///
/// Decoding is strict: an encoding that is the wrong length, carries a
/// coordinate outside the field, or names a point that is not a valid group
/// element is rejected. It is never silently coerced to the identity.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("encoding is {got} bytes, expected {expected}")]
    Length { expected: usize, got: usize },
    #[error("coordinate is not reduced modulo the field modulus")]
    OutOfRange,
    #[error("point does not satisfy the curve equation")]
    OffCurve,
    #[error("point is not in the order-r subgroup")]
    WrongSubgroup,
}

/// High-level errors returned by the verification API.
#[derive(Debug, Error)]
pub enum Error {
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
    /// A derived curve parameter does not match its trusted literal constant.
    ///
    /// This indicates a wrong `u` or a transcription error in the constants
    /// and aborts parameter loading; nothing built on the mismatched
    /// parameters is allowed to run.
    #[error("derived {name} = {derived} does not match the expected constant {expected}")]
    ParameterMismatch {
        name: &'static str,
        expected: String,
        derived: String,
    },
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    /// The term list of a pairing equation has an invalid shape.
    #[error("malformed equation: {0}")]
    MalformedEquation(String),
}
