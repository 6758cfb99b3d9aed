use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` terminal cells, ending in `…` when cut.
/// Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `offset`, if any
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    let rest = s.get(offset..)?;
    let g = rest.graphemes(true).next()?;
    Some(offset + g.len())
}

/// Byte offset of the grapheme boundary before `offset`, if any
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    let head = s.get(..offset)?;
    let g = head.graphemes(true).next_back()?;
    Some(offset - g.len())
}

/// Start of the word before `offset` (skips trailing whitespace first)
pub fn word_start_before(s: &str, offset: usize) -> usize {
    let head = &s[..offset.min(s.len())];
    let trimmed = head.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(pos) => pos + trimmed[pos..].chars().next().map_or(1, char::len_utf8),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_glyphs() {
        assert_eq!(display_width("quest"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("Read", 10), "Read");
        assert_eq!(truncate_to_width("Read", 4), "Read");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Marathon training", 8), "Maratho\u{2026}");
        assert_eq!(truncate_to_width("你好世界", 5), "你好\u{2026}");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn grapheme_boundaries_step_over_clusters() {
        let s = "ae\u{0301}b";
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(4));
        assert_eq!(next_grapheme_boundary(s, s.len()), None);
        assert_eq!(prev_grapheme_boundary(s, 4), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn word_start_before_skips_trailing_space() {
        assert_eq!(word_start_before("read a book", 11), 7);
        assert_eq!(word_start_before("read a book  ", 13), 7);
        assert_eq!(word_start_before("read", 4), 0);
        assert_eq!(word_start_before("", 0), 0);
    }
}
