use crate::error::ParseFailure;

/// Conversion seam between raw tokens and the stage's output type.
pub trait TokenParser: Send {
    fn parse_token(&self, token: &str) -> Result<i64, ParseFailure>;
}

/// Standard base-10 integer parser: optional leading sign, decimal digits
/// only. No whitespace trimming, so `" 42"` is malformed.
pub struct DecimalParser;

impl TokenParser for DecimalParser {
    fn parse_token(&self, token: &str) -> Result<i64, ParseFailure> {
        token.parse::<i64>().map_err(|_| ParseFailure)
    }
}
