//! 时长字面量解析
//!
//! 配置文档中的时长以字符串表示，如 "30m"、"3s"。

use std::time::Duration;

/// Parse duration literals like "500ms", "3s", "30m", "1h".
///
/// A bare "0" is the zero duration. Anything unparsable returns None so
/// the caller falls back to its documented default.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s == "0" {
        return Some(Duration::ZERO);
    }

    let (num_part, unit) = match s.find(|c: char| !c.is_ascii_digit()) {
        Some(0) => return None,
        Some(idx) => (&s[..idx], &s[idx..]),
        None => return None,
    };

    let num: u64 = num_part.parse().ok()?;

    match unit {
        "ms" => Some(Duration::from_millis(num)),
        "s" => Some(Duration::from_secs(num)),
        "m" => Some(Duration::from_secs(num * 60)),
        "h" => Some(Duration::from_secs(num * 3600)),
        _ => None,
    }
}
