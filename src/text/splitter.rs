//! Zero-copy splitting of byte buffers on a single-byte separator

/// Split `src` on `sep` into the slots of `out`, returning how many were used.
///
/// Empty spans between consecutive separators are dropped. Scanning stops as
/// soon as every slot is filled and the rest of `src` is ignored. If slots
/// remain after the scan, whatever follows the last separator is stored as the
/// final piece, as is.
///
/// Pieces borrow `src`; nothing is copied or allocated.
pub fn split_in_place<'a>(src: &'a [u8], sep: u8, out: &mut [&'a [u8]]) -> usize {
    let mut start = 0;
    let mut used = 0;

    for (i, &byte) in src.iter().enumerate() {
        if used == out.len() {
            break;
        }

        if byte == sep {
            if start != i {
                out[used] = &src[start..i];
                used += 1;
            }
            start = i + 1;
        }
    }

    if used != out.len() && start < src.len() {
        out[used] = &src[start..];
        used += 1;
    }

    used
}

/// Count occurrences of `sep` in `src`
///
/// Used as the slot count when splitting a file into lines.
pub fn count_separators(src: &[u8], sep: u8) -> usize {
    src.iter().filter(|&&b| b == sep).count()
}

/// Length of `line` up to (not including) the first `comment` byte
pub fn comment_boundary(line: &[u8], comment: u8) -> usize {
    line.iter().position(|&b| b == comment).unwrap_or(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split<'a>(src: &'a str, sep: u8, slots: usize) -> Vec<&'a str> {
        let mut out: Vec<&[u8]> = vec![&[][..]; slots];
        let n = split_in_place(src.as_bytes(), sep, &mut out);
        out[..n]
            .iter()
            .map(|&piece| std::str::from_utf8(piece).unwrap())
            .collect()
    }

    #[test]
    fn test_simple() {
        assert_eq!(split("1 2 3", b' ', 3), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(split("12.5", b' ', 1), vec!["12.5"]);
        assert_eq!(split("12.5", b' ', 4), vec!["12.5"]);
    }

    #[test]
    fn test_consecutive_separators() {
        assert_eq!(split("  1   2 ", b' ', 5), vec!["1", "2"]);
    }

    #[test]
    fn test_only_separators() {
        assert!(split("    ", b' ', 3).is_empty());
        assert!(split("", b' ', 3).is_empty());
    }

    #[test]
    fn test_zero_capacity() {
        assert!(split("1 2 3", b' ', 0).is_empty());
    }

    #[test]
    fn test_capacity_exhausted_drops_rest() {
        assert_eq!(split("1 2 3 4", b' ', 2), vec!["1", "2"]);
    }

    #[test]
    fn test_trailing_piece_only_when_room() {
        // The trailing "3" needs a third slot
        assert_eq!(split("1 2 3", b' ', 3), vec!["1", "2", "3"]);
        assert_eq!(split("1 2 3", b' ', 2), vec!["1", "2"]);
    }

    #[test]
    fn test_lines_with_newline_count() {
        let text = "a b\n\nc d\n";
        let slots = count_separators(text.as_bytes(), b'\n');
        assert_eq!(slots, 3);
        assert_eq!(split(text, b'\n', slots), vec!["a b", "c d"]);
    }

    #[test]
    fn test_unterminated_last_line_has_no_slot() {
        let text = "a\nb";
        let slots = count_separators(text.as_bytes(), b'\n');
        assert_eq!(split(text, b'\n', slots), vec!["a"]);
    }

    #[test]
    fn test_comment_boundary() {
        assert_eq!(comment_boundary(b"1 2 # x", b'#'), 4);
        assert_eq!(comment_boundary(b"# x", b'#'), 0);
        assert_eq!(comment_boundary(b"1 2", b'#'), 3);
    }

    #[test]
    fn test_slots_are_reusable() {
        let mut out: Vec<&[u8]> = vec![&[][..]; 3];
        assert_eq!(split_in_place(b"1 2 3", b' ', &mut out), 3);
        assert_eq!(split_in_place(b"4", b' ', &mut out), 1);
        assert_eq!(out[0], b"4");
    }
}
