//! Output size guard: serialized results are capped at a character ceiling by
//! keeping the head and tail halves around a marker. Truncation is a warning
//! on a successful result, never an error.

/// Marker spliced between the kept head and tail segments
pub const TRUNCATION_MARKER: &str = "\n\n[... RESPONSE TRUNCATED ...]\n\n";

/// Result of applying the ceiling to a serialized payload
#[derive(Debug, Clone)]
pub struct Truncation {
    pub truncated: bool,
    pub data: String,
    pub message: Option<String>,
}

/// Cap `content` at `character_limit` characters.
///
/// Content within the ceiling is returned unchanged. Oversized content keeps
/// the first and last `character_limit / 2` characters around the marker.
/// Counts characters, not bytes, so multi-byte content never splits inside a
/// codepoint.
pub fn apply(content: &str, character_limit: usize) -> Truncation {
    let total = content.chars().count();
    if total <= character_limit {
        return Truncation {
            truncated: false,
            data: content.to_string(),
            message: None,
        };
    }

    let keep = character_limit / 2;
    let head: String = content.chars().take(keep).collect();
    let tail: String = content.chars().skip(total - keep).collect();

    Truncation {
        truncated: true,
        data: format!("{}{}{}", head, TRUNCATION_MARKER, tail),
        message: Some(format!(
            "Response truncated from {} to {} characters. \
             Use more specific filters (reduce date range or limit) to reduce data volume.",
            total, character_limit
        )),
    }
}
