use crate::error::ChunkSizeError;
use crate::random::{RandomSource, ThreadSource};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of chars (Unicode scalar values), not bytes.
pub fn rune_length(s: &str) -> usize {
    s.chars().count()
}

/// Up to `length` chars starting at `offset`; a negative offset counts back
/// from the end. Out-of-range bounds are clamped.
pub fn substring(s: &str, offset: isize, length: usize) -> String {
    let total = rune_length(s);
    let start = if offset < 0 {
        total.saturating_sub(offset.unsigned_abs())
    } else {
        offset as usize
    };
    if start >= total {
        return String::new();
    }
    s.chars().skip(start).take(length).collect()
}

/// Split into pieces of `size` chars. An empty input yields one empty piece.
pub fn chunk_string(s: &str, size: usize) -> Result<Vec<String>, ChunkSizeError> {
    if size == 0 {
        return Err(ChunkSizeError);
    }
    if s.is_empty() {
        return Ok(vec![String::new()]);
    }
    let chars: Vec<char> = s.chars().collect();
    Ok(chars.chunks(size).map(|c| c.iter().collect()).collect())
}

/// Trim, then cut to `length` chars ending in `...` if longer. The result
/// never exceeds `length` chars: below 3 only part of the marker fits.
pub fn ellipsis(s: &str, length: usize) -> String {
    let s = s.trim();
    if rune_length(s) <= length {
        return s.to_string();
    }
    if length < 3 {
        return ".".repeat(length);
    }
    let mut out: String = s.chars().take(length - 3).collect();
    out.push_str("...");
    out
}

pub fn random_string(size: usize, charset: &str) -> String {
    random_string_with(size, charset, ThreadSource)
}

/// `size` chars drawn independently from `charset`.
pub fn random_string_with<R: RandomSource>(size: usize, charset: &str, mut source: R) -> String {
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    (0..size)
        .map(|_| chars[source.intn(chars.len()).min(chars.len() - 1)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn substring_bounds() {
        assert_eq!(substring("hello", 1, 3), "ell");
        assert_eq!(substring("hello", -3, 2), "ll");
        assert_eq!(substring("hello", -10, 2), "he");
        assert_eq!(substring("hello", 2, 100), "llo");
        assert_eq!(substring("hello", 5, 1), "");
        assert_eq!(substring("héllo", 1, 1), "é");
    }

    #[test]
    fn chunks() {
        assert_eq!(chunk_string("abcde", 2).unwrap(), vec!["ab", "cd", "e"]);
        assert_eq!(chunk_string("", 2).unwrap(), vec![""]);
        assert_eq!(chunk_string("ab", 0), Err(ChunkSizeError));
        assert_eq!(rune_length("日本語"), 3);
    }

    #[test]
    fn ellipsis_cuts() {
        assert_eq!(ellipsis("  short  ", 10), "short");
        assert_eq!(ellipsis("hello world", 8), "hello...");
        assert_eq!(ellipsis("hello", 2), "..");
        assert_eq!(ellipsis("hello", 0), "");
        assert_eq!(ellipsis("héllo wörld", 4), "h...");
    }

    #[test]
    fn random_strings() {
        let s = random_string(32, ALPHANUMERIC);
        assert_eq!(rune_length(&s), 32);
        assert!(s.chars().all(|c| ALPHANUMERIC.contains(c)));

        assert_eq!(random_string(5, ""), "");
        assert_eq!(random_string(0, NUMBERS), "");
        assert_eq!(random_string_with(3, "xyz", |_: usize| -> usize { 1 }), "yyy");
    }
}
