//! Markdown code-fence stripping.
//!
//! Models often wrap JSON in ```` ```json ```` fences even when asked not to.

/// Return the body of the first code fence in `text`, or `text` unchanged.
///
/// A fence without a closing marker (truncated output) yields everything
/// after the opening marker and language tag.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let Some(start) = text.find("```") else {
        return text;
    };
    let after_marker = start + 3;
    // Skip the language tag, if any
    let rest = &text[after_marker..];
    let tag_len = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    let body_start = after_marker + tag_len;

    match text[body_start..].find("```") {
        Some(end) => text[body_start..body_start + end].trim(),
        None => text[body_start..].trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fence_is_identity() {
        assert_eq!(strip_code_fence("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_json_fence() {
        let text = "```json\n{\"Main + Extras\": \"40h\"}\n```";
        assert_eq!(strip_code_fence(text), "{\"Main + Extras\": \"40h\"}");
    }

    #[test]
    fn test_single_line_fence() {
        assert_eq!(strip_code_fence("```{\"a\": 1}```\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_unterminated_fence() {
        let text = "```\n{\"x\": \"y\"}";
        assert_eq!(strip_code_fence(text), "{\"x\": \"y\"}");
    }
}
