/// Longest prefix of `value` that fits in `max_bytes` without splitting a
/// UTF-8 sequence.
pub fn truncate_utf8_prefix(value: &str, max_bytes: usize) -> String {
    if value.len() <= max_bytes {
        return value.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::truncate_utf8_prefix;

    #[test]
    fn keeps_short_values_whole() {
        assert_eq!(truncate_utf8_prefix("not found", 512), "not found");
    }

    #[test]
    fn cuts_ascii_at_limit() {
        assert_eq!(truncate_utf8_prefix("hello", 3), "hel");
        assert_eq!(truncate_utf8_prefix("hello", 0), "");
    }

    #[test]
    fn does_not_split_multibyte_chars() {
        // "é" is two bytes.
        assert_eq!(truncate_utf8_prefix("aéb", 2), "a");
        assert_eq!(truncate_utf8_prefix("aéb", 3), "aé");
    }
}
