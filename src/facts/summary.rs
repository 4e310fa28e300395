//! Extracts process-wide facts from `show ip bgp summary`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

// Anchored at the start of the text and `.` stops at a newline, so only the
// first line of the report is ever considered.
static LOCAL_ASN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*local AS number ([0-9]+)").expect("static regex must compile")
});

/// Local AS number, if the report's first line carries it.
pub fn parse_summary(text: &str) -> Result<Option<u32>, ParseError> {
    let Some(digits) = LOCAL_ASN.captures(text).and_then(|caps| caps.get(1)) else {
        return Ok(None);
    };

    digits
        .as_str()
        .parse()
        .map(Some)
        .map_err(|_| ParseError::InvalidNumber {
            field: "local AS number",
            value: digits.as_str().to_string(),
            line: text.lines().next().unwrap_or_default().to_string(),
        })
}
