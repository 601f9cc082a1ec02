//! Minimal markdown to terminal text conversion.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::theme::Theme;


fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold pattern"))
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"))
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("valid code pattern"))
}

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("valid heading pattern"))
}


/// Apply inline styles: bold, links, inline code.
pub fn inline(text: &str, theme: &Theme) -> String {
    let text = link_re().replace_all(text, |caps: &Captures| {
        if caps[1] == caps[2] {
            theme.link(&caps[2])
        } else {
            format!("{} ({})", &caps[1], theme.link(&caps[2]))
        }
    });
    let text = bold_re().replace_all(&text, |caps: &Captures| theme.bold(&caps[1]));
    let text = code_re().replace_all(&text, |caps: &Captures| theme.cyan(&caps[1]));
    text.into_owned()
}


/// Convert a markdown block to display lines.
pub fn to_lines(text: &str, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in text.lines() {
        let trimmed = raw.trim_start();
        let indent = &raw[..raw.len() - trimmed.len()];

        if let Some(caps) = heading_re().captures(trimmed) {
            let level = caps[1].len();
            let title = inline(&caps[2], theme);
            if level <= 2 {
                lines.push(theme.heading(&title));
            } else {
                lines.push(theme.bold(&title));
            }
        } else if trimmed == "---" {
            lines.push(theme.dim(&"─".repeat(40)));
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            lines.push(format!("{indent}  • {}", inline(item, theme)));
        } else {
            lines.push(format!("{indent}{}", inline(trimmed, theme)));
        }
    }

    lines
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_plain() {
        let theme = Theme::plain();
        assert_eq!(inline("**Be Specific**: say it", &theme), "Be Specific: say it");
        assert_eq!(
            inline("- [Replit](https://replit.com) now", &theme),
            "- Replit (https://replit.com) now"
        );
        assert_eq!(inline("run `sabg`", &theme), "run sabg");
    }

    #[test]
    fn test_inline_colored_bold() {
        let theme = Theme::colored();
        let out = inline("**x**", &theme);
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains('x'));
    }

    #[test]
    fn test_to_lines_structure() {
        let theme = Theme::plain();
        let lines = to_lines("### 1. Coding Academy\n- item\n   - nested\n---\nplain", &theme);
        assert_eq!(lines[0], "1. Coding Academy");
        assert_eq!(lines[1], "  • item");
        assert_eq!(lines[2], "     • nested");
        assert!(lines[3].starts_with('─'));
        assert_eq!(lines[4], "plain");
    }
}
