use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid error pattern `{pattern}`: {source}")]
    Invalid {
        pattern: String,
        source: regex::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub message: String,
    pub timestamp: Option<DateTime<Utc>>, // from the leading prefix, or None
    pub is_error: bool,
}

static TS_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})").unwrap());

/// Compile caller-supplied error patterns case-insensitively, failing fast on
/// the first invalid one. Plain words are valid regexes, so substring-style
/// patterns like `ERROR` come through unchanged.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>, PatternError> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|source| PatternError::Invalid {
                    pattern: p.clone(),
                    source,
                })
        })
        .collect()
}

/// Split raw log text into records. Blank lines produce no record. A leading
/// `YYYY-MM-DD HH:MM:SS` prefix that parses as a valid datetime is stripped
/// into the timestamp; a prefix with the right shape but an impossible date
/// is treated the same as no prefix at all.
pub fn parse_lines(text: &str, patterns: &[Regex]) -> Vec<LogRecord> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line, patterns))
        .collect()
}

fn parse_line(line: &str, patterns: &[Regex]) -> LogRecord {
    let (timestamp, message) = match TS_PREFIX.find(line) {
        Some(m) => match NaiveDateTime::parse_from_str(m.as_str(), "%Y-%m-%d %H:%M:%S") {
            Ok(ndt) => (
                Some(Utc.from_utc_datetime(&ndt)),
                line[m.end()..].trim().to_string(),
            ),
            Err(_) => (None, line.to_string()),
        },
        None => (None, line.to_string()),
    };
    let is_error = patterns.iter().any(|p| p.is_match(&message));
    LogRecord {
        message,
        timestamp,
        is_error,
    }
}
