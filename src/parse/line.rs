//! Header line matching.
//!
//! A header looks like `2024年5月1日 9:00 Alice Hello`. Anything else is a
//! continuation of the previous message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::MessageHeader;

// Sender is `[^ ]+`: only the ASCII space ends it, so names with spaces never
// parse as headers.
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}年\d{1,2}月\d{1,2}日) (\d{1,2}:\d{2}) ([^ ]+) (.+)$").unwrap()
});

/// Match one raw line (without its line terminator) against the header pattern.
///
/// Returns `None` for continuation lines.
pub fn parse_header(line: &str) -> Option<MessageHeader> {
    let caps = HEADER_REGEX.captures(line)?;
    Some(MessageHeader {
        date: caps[1].to_string(),
        time: caps[2].to_string(),
        sender: caps[3].to_string(),
        first_line: caps[4].to_string(),
    })
}
