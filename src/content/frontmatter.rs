//! Front-matter parsing

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// A delimited header at the very start of a file: a `---` line,
    /// key/value lines, and a closing `---` line. Tolerates `\r\n`.
    static ref HEADER_RE: Regex = Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n?").unwrap();
}

/// Front-matter data from the top of a content file.
///
/// Keys of interest are `title`, `date`, and `status`; any other keys
/// are kept in the mapping but unused downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from raw file content.
    /// Returns (front_matter, body).
    ///
    /// When no well-formed header is found at the start of the input,
    /// the mapping is empty and the body is the entire input unmodified.
    /// An unterminated header counts as no header. When a header is
    /// found, the body is everything after the closing delimiter with
    /// surrounding whitespace trimmed.
    pub fn parse(raw: &str) -> (Self, String) {
        let Some(caps) = HEADER_RE.captures(raw) else {
            return (Self::default(), raw.to_string());
        };

        let mut fields = HashMap::new();
        for line in caps[1].lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // Split on the first colon; lines without one are ignored.
            let Some(idx) = line.find(':') else {
                continue;
            };
            let key = line[..idx].trim().to_string();
            let value = strip_quotes(line[idx + 1..].trim()).to_string();
            fields.insert(key, value);
        }

        let body = raw[caps.get(0).unwrap().end()..].trim().to_string();
        (Self { fields }, body)
    }

    /// Look up a raw field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    pub fn status(&self) -> Option<&str> {
        self.get("status")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Strip one layer of surrounding quotes, only when the same quote
/// character brackets the entire value.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
