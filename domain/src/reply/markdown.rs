//! Markdown cleanup for model output.
//!
//! The hosted models decorate answers with fenced code blocks and heading
//! markers that read poorly in a chat bubble. The cleanup removes the
//! markers, keeps the content, and normalizes paragraph spacing: blank-line
//! runs collapse to a single break and single newlines become paragraph
//! breaks.

/// Strip markdown artifacts and normalize paragraph structure.
///
/// Rule set, in order: remove fenced-code openers with an optional language
/// tag and bare fence markers, strip leading heading markers (`#` repeated,
/// followed by a space), trim, and re-join non-empty lines as paragraphs.
pub fn strip_markdown(text: &str) -> String {
    let without_fences = remove_fences(text);
    without_fences
        .lines()
        .map(strip_heading)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Remove every ``` marker together with an attached language tag.
fn remove_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        let tag_len = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        rest = &rest[tag_len..];
    }
    out.push_str(rest);
    out
}

/// Strip a leading run of `#` followed by a space; other lines pass through.
fn strip_heading(line: &str) -> &str {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if hashes > 0 {
        if let Some(stripped) = line[hashes..].strip_prefix(' ') {
            return stripped;
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_fenced_code_markers() {
        let text = "Here is code:\n```python\nprint(1)\n```\nDone.";
        let cleaned = strip_markdown(text);
        assert!(!cleaned.contains("```"));
        assert!(!cleaned.contains("python"));
        assert!(cleaned.contains("print(1)"));
        assert!(cleaned.contains("Done."));
    }

    #[test]
    fn test_removes_heading_markers() {
        let text = "## The Water Cycle\nWater evaporates.";
        let cleaned = strip_markdown(text);
        assert_eq!(cleaned, "The Water Cycle\n\nWater evaporates.");
    }

    #[test]
    fn test_hash_without_space_is_kept() {
        let cleaned = strip_markdown("#1 rule of math");
        assert_eq!(cleaned, "#1 rule of math");
    }

    #[test]
    fn test_collapses_blank_line_runs() {
        let cleaned = strip_markdown("first\n\n\n\nsecond");
        assert_eq!(cleaned, "first\n\nsecond");
    }

    #[test]
    fn test_single_newline_becomes_paragraph_break() {
        let cleaned = strip_markdown("one line\nanother line");
        assert_eq!(cleaned, "one line\n\nanother line");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let cleaned = strip_markdown("  \n  padded answer  \n  ");
        assert_eq!(cleaned, "padded answer");
    }

    #[test]
    fn test_prose_survives_round_trip() {
        let text = "# Heading\n```\nlet x = 1;\n```\nThe value of x is 1.";
        let cleaned = strip_markdown(text);
        assert_eq!(cleaned, "Heading\n\nlet x = 1;\n\nThe value of x is 1.");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_markdown(""), "");
        assert_eq!(strip_markdown("```\n```"), "");
    }
}
