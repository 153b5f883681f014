//! Text windowing with overlap and word-boundary-aware cuts.
//!
//! The windower walks the document left to right, producing bounded-size
//! character windows. When a window ends before the end of the text, the
//! cut prefers the last whitespace in the final 15% of the window so words
//! stay intact. Consecutive windows overlap by a configured number of
//! characters so no sentence is orphaned at a boundary.

/// One bounded-size window of the document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based sequence index
    pub index: usize,

    /// Window text, trimmed of surrounding whitespace
    pub text: String,

    /// Char offsets of the raw window in the document, pre-trim
    pub span: (usize, usize),
}

/// Split `text` into ordered, overlapping windows of at most `max_chars`
/// characters each.
///
/// Offsets are measured in chars, not bytes, so a cut can never land inside
/// a UTF-8 sequence. Window text is trimmed; windows that trim to nothing
/// are dropped. Text that fits in one window is returned whole.
///
/// The cursor always advances, even for degenerate configurations
/// (`overlap >= max_chars`): when stepping back by `overlap` would not make
/// progress, the next window starts at the current end instead.
pub fn window(text: &str, max_chars: usize, overlap: usize) -> Vec<Chunk> {
    let max_chars = max_chars.max(1);
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();

    if n <= max_chars {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        return vec![Chunk {
            index: 1,
            text: trimmed.to_string(),
            span: (0, n),
        }];
    }

    let mut chunks = Vec::new();
    let mut i = 0;

    while i < n {
        let mut end = (i + max_chars).min(n);

        if end < n {
            // Prefer cutting at the last whitespace in the final 15% of the
            // window; fall back to the hard cut when there is none.
            let floor = i + max_chars * 85 / 100;
            if let Some(cut) = (floor..end).rev().find(|&p| chars[p].is_whitespace()) {
                if cut > i {
                    end = cut;
                }
            }
        }

        let slice: String = chars[i..end].iter().collect();
        let trimmed = slice.trim();
        if !trimmed.is_empty() {
            chunks.push(Chunk {
                index: chunks.len() + 1,
                text: trimmed.to_string(),
                span: (i, end),
            });
        }

        if end == n {
            break;
        }

        let next = end.saturating_sub(overlap);
        // Forced minimum advancement: never let the cursor stall
        i = if next > i { next } else { end };
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_passthrough() {
        let chunks = window("  hello world  ", 100, 10);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 1);
        assert_eq!(chunks[0].text, "hello world");
        assert_eq!(chunks[0].span, (0, 15));
    }

    #[test]
    fn test_blank_text_yields_nothing() {
        assert!(window("", 100, 10).is_empty());
        assert!(window("   \n\t  ", 100, 10).is_empty());
    }

    #[test]
    fn test_three_windows_with_overlap() {
        // 12000 chars without whitespace: every cut is the hard cut
        let text = "a".repeat(12_000);
        let chunks = window(&text, 5000, 400);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].span, (0, 5000));
        assert_eq!(chunks[1].span, (4600, 9600));
        assert_eq!(chunks[2].span, (9200, 12_000));
        assert_eq!(chunks[0].text.len(), 5000);
        assert_eq!(
            chunks.iter().map(|c| c.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_coverage_and_overlap_regions_match() {
        let text: String = ('a'..='z').cycle().take(1000).collect();
        let overlap = 30;
        let chunks = window(&text, 100, overlap);

        // Spans cover the text with no gaps
        assert_eq!(chunks[0].span.0, 0);
        assert_eq!(chunks.last().unwrap().span.1, 1000);
        for pair in chunks.windows(2) {
            assert_eq!(pair[1].span.0, pair[0].span.1 - overlap);
        }

        // The shared region of consecutive chunks is identical text
        for pair in chunks.windows(2) {
            let prev_tail: String = pair[0].text.chars().skip(100 - overlap).collect();
            let next_head: String = pair[1].text.chars().take(overlap).collect();
            assert_eq!(prev_tail, next_head);
        }
    }

    #[test]
    fn test_iteration_bound() {
        // No whitespace: advancement is exactly max_chars - overlap
        let text = "x".repeat(1000);
        let chunks = window(&text, 100, 30);

        // ceil(1000 / (100 - 30)) = 15 windows at most
        assert!(chunks.len() <= 15);
        assert_eq!(chunks.last().unwrap().span.1, 1000);
    }

    #[test]
    fn test_word_boundary_preferred() {
        // "abcd " repeated: whitespace every 5th char, always inside the
        // final 15% of a 100-char window
        let text = "abcd ".repeat(30);
        let chunks = window(&text, 100, 10);

        assert!(chunks.len() > 1);
        for chunk in &chunks[..chunks.len() - 1] {
            let chars: Vec<char> = text.chars().collect();
            assert!(chars[chunk.span.1].is_whitespace());
        }
        // Trimmed text never ends mid-word
        assert!(chunks[0].text.ends_with("abcd"));
    }

    #[test]
    fn test_no_whitespace_falls_back_to_hard_cut() {
        let text = "x".repeat(250);
        let chunks = window(&text, 100, 0);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].span, (0, 100));
        assert_eq!(chunks[1].span, (100, 200));
        assert_eq!(chunks[2].span, (200, 250));
    }

    #[test]
    fn test_degenerate_overlap_terminates() {
        // overlap >= max_chars would stall the cursor without the guard
        let text = "a".repeat(1000);

        let chunks = window(&text, 100, 100);
        assert_eq!(chunks.len(), 10);
        assert_eq!(chunks.last().unwrap().span.1, 1000);

        let chunks = window(&text, 100, 150);
        assert_eq!(chunks.len(), 10);
        for pair in chunks.windows(2) {
            assert!(pair[1].span.0 >= pair[0].span.0 + 1);
        }
    }

    #[test]
    fn test_multibyte_text_cuts_on_char_boundaries() {
        let text = "ü".repeat(250);
        let chunks = window(&text, 100, 10);

        assert_eq!(chunks[0].span, (0, 100));
        assert_eq!(chunks[0].text.chars().count(), 100);
        assert_eq!(chunks.last().unwrap().span.1, 250);
    }
}
