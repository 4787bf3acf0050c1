use chrono::DateTime;

/// Human-readable publication date from the backend's RFC 3339 timestamp.
/// Falls back to the raw string when the timestamp does not parse.
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Short listing excerpt, truncated on a character boundary.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let truncated: String = content.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_dates() {
        assert_eq!(format_date("2025-03-09T14:30:00Z"), "March 9, 2025");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn excerpt_truncates_long_content_only() {
        assert_eq!(excerpt("short post", 150), "short post");
        let long = "a".repeat(200);
        let cut = excerpt(&long, 150);
        assert_eq!(cut.chars().count(), 153);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn excerpt_respects_multibyte_boundaries() {
        let text = "héllo wörld".repeat(30);
        let cut = excerpt(&text, 150);
        assert!(cut.ends_with("..."));
    }
}
