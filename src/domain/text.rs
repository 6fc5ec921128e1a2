use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Keeps the rightmost part of `s` that fits in `width` columns.
///
/// Dropped characters are replaced by a leading `…`. Numerals are read from
/// the right, so the least significant digits stay visible.
pub fn truncate_left(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }
    if s.width() <= width {
        return s.to_string();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut kept: Vec<char> = Vec::new();
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(c);
    }

    let tail: String = kept.into_iter().rev().collect();
    format!("…{tail}")
}

/// Keeps the leftmost part of `s` that fits in `width` columns, ending in `…`
pub fn truncate_right(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }
    if s.width() <= width {
        return s.to_string();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut head = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        head.push(c);
    }

    format!("{head}…")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_truncate_left_fits() {
        assert_eq!(truncate_left("1,234", 5), "1,234");
        assert_eq!(truncate_left("1,234", 10), "1,234");
    }

    #[test]
    fn test_truncate_left_keeps_tail() {
        assert_eq!(truncate_left("123456789", 5), "…6789");
    }

    #[test]
    fn test_truncate_left_zero_width() {
        assert_eq!(truncate_left("123", 0), "");
    }

    #[test]
    fn test_truncate_left_one_column() {
        assert_eq!(truncate_left("123", 1), "…");
    }

    #[test]
    fn test_truncate_right_keeps_head() {
        assert_eq!(truncate_right("7 + 3 = 10", 6), "7 + 3…");
        assert_eq!(truncate_right("7 + 3 = 10", 20), "7 + 3 = 10");
        assert_eq!(truncate_right("abc", 0), "");
    }
}
