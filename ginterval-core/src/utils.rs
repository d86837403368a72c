use crate::errors::{GenomicIntervalError, Result};

///
/// Split interval notation such as `chr1:123-456` or `chr1:123` into its
/// chromosome, start token and optional end token.
///
/// Only the first `:` separates the chromosome from the range. The range is
/// split on `-` and trailing empty tokens are dropped, so `chr1:5-` has no
/// end token. An empty token in the middle (`chr1:5--3`) is kept and fails
/// later as a coordinate. Tokens past the second are ignored.
///
/// # Arguments
///
/// - text: the interval notation to split
///
pub fn split_interval_notation(text: &str) -> Result<(&str, &str, Option<&str>)> {
    let (chrom, range) = text
        .split_once(':')
        .ok_or_else(|| GenomicIntervalError::parse_error(text, "missing ':' separator"))?;

    let mut bounds: Vec<&str> = range.split('-').collect();
    while bounds.last().is_some_and(|s| s.trim().is_empty()) {
        bounds.pop();
    }

    let start = bounds
        .first()
        .copied()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| GenomicIntervalError::parse_error(text, "missing start coordinate"))?;
    let end = bounds.get(1).copied();

    Ok((chrom, start, end))
}

///
/// Parse a single base-10 coordinate token. Surrounding whitespace is ignored.
///
/// # Arguments
///
/// - token: the coordinate to parse
/// - text: the full interval notation, used for error reporting
///
pub fn parse_coordinate(token: &str, text: &str) -> Result<i64> {
    token.trim().parse::<i64>().map_err(|e| {
        GenomicIntervalError::parse_error(text, format!("invalid coordinate {:?}: {}", token, e))
    })
}
