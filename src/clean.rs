//! Whitespace normalization for extracted page text.

/// Characters that end a line, including the separators PDF text extractors
/// tend to leave behind (form feeds between pages, bare carriage returns).
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Characters stripped from both ends of a line: Unicode whitespace plus the
/// C0 separators, which extractors emit as padding.
fn is_strippable(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{1C}'..='\u{1F}')
}

/// Normalize raw page text.
///
/// Each line is trimmed, lines that end up empty are dropped, and the
/// survivors are joined with a single `\n` in their original order. Absent
/// text cleans to the empty string.
pub fn clean_page_text(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    raw.split(is_line_break)
        .map(|line| line.trim_matches(is_strippable))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
