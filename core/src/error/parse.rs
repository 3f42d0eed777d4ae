use thiserror::Error;

/// The single failure kind of the converter stage.
///
/// Empty tokens, non-numeric text and values outside the `i64` range all
/// collapse into this one error; the stage treats them identically. Its
/// display text is the fixed diagnostic line emitted on each failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("could not parse")]
pub struct ParseFailure;
