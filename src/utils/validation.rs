/// Client-side password policy for the register form. Returns the list of
/// unmet requirements, phrased so they can be joined into one message.
pub fn password_issues(password: &str, full_name: &str, email: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if password.chars().count() < 12 {
        issues.push("at least 12 characters".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        issues.push("one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push("one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        issues.push("one number".to_string());
    }
    if !password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
    {
        issues.push("one special character".to_string());
    }

    let lowered = password.to_lowercase();
    if !full_name.is_empty() && lowered.contains(&full_name.to_lowercase()) {
        issues.push("should not contain your full name".to_string());
    }
    if let Some(local_part) = email.split('@').next() {
        if !local_part.is_empty() && lowered.contains(&local_part.to_lowercase()) {
            issues.push("should not contain part of your email".to_string());
        }
    }

    issues
}

/// Comma-separated tag input -> trimmed, non-empty tag list.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_passes() {
        assert!(password_issues("Correct-Horse-Battery-9", "Jane Doe", "jane@example.com")
            .is_empty());
    }

    #[test]
    fn weak_password_reports_each_missing_rule() {
        let issues = password_issues("short", "", "");
        assert!(issues.iter().any(|i| i.contains("12 characters")));
        assert!(issues.iter().any(|i| i.contains("uppercase")));
        assert!(issues.iter().any(|i| i.contains("number")));
        assert!(issues.iter().any(|i| i.contains("special")));
    }

    #[test]
    fn password_must_not_contain_name_or_email_local_part() {
        let issues = password_issues("Janedoe-Secret-99", "janedoe", "someone@example.com");
        assert!(issues.iter().any(|i| i.contains("full name")));

        let issues = password_issues("Writer42!-Extra-Long", "Jane", "writer42@example.com");
        assert!(issues.iter().any(|i| i.contains("your email")));
    }

    #[test]
    fn tags_are_trimmed_and_empty_entries_dropped() {
        assert_eq!(
            parse_tags(" rust, wasm ,, yew ,"),
            vec!["rust".to_string(), "wasm".to_string(), "yew".to_string()]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }
}
