use chrono::{DateTime, Utc};
use url::form_urlencoded;

use crate::domain::ports::LineNames;
use crate::domain::services::calendar::format_date;

/// Longest rendered line the ingestion endpoint displays, in characters.
pub const MAX_LINE_CHARS: usize = 50;
pub const ELLIPSIS: char = '…';

/// Cuts a line longer than [`MAX_LINE_CHARS`] to one character less and
/// appends [`ELLIPSIS`], so the result is exactly the maximum.
pub fn clamp_line(text: &str) -> String {
    if text.chars().count() <= MAX_LINE_CHARS {
        return text.to_string();
    }

    let mut clipped: String = text.chars().take(MAX_LINE_CHARS - 1).collect();
    clipped.push(ELLIPSIS);
    clipped
}

/// Serializes rendered lines into `prefix_1=..&prefix_2=..&updated=..`.
pub struct LineEncoder<'a> {
    names: &'a LineNames,
    limit: Option<usize>,
}

impl<'a> LineEncoder<'a> {
    pub fn new(names: &'a LineNames) -> Self {
        Self { names, limit: None }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn encode(&self, lines: &[String], empty_message: &str, updated_at: DateTime<Utc>) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if lines.is_empty() {
            serializer.append_pair(&self.line_key(1), empty_message);
        } else {
            let shown = self.limit.unwrap_or(lines.len());
            for (index, line) in lines.iter().take(shown).enumerate() {
                serializer.append_pair(&self.line_key(index + 1), &clamp_line(line));
            }
        }

        serializer.append_pair(&self.names.updated_param, &format_date(updated_at));
        serializer.finish()
    }

    fn line_key(&self, position: usize) -> String {
        format!("{}_{}", self.names.line_prefix, position)
    }
}
