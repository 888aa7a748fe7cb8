/// Strips everything but decimal digits from a raw number string,
/// ignoring any formatting noise around them.
pub fn significant_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Returns true when the string carries an explicit country-code marker:
/// a leading `+` or the `00` international dialing prefix. Leading
/// punctuation like `(` or whitespace is skipped before the check.
pub fn has_country_code_marker(s: &str) -> bool {
    let trimmed = s.trim_start_matches(|c: char| c.is_whitespace() || c == '(' || c == '-');
    if trimmed.starts_with('+') {
        return true;
    }
    let digits = significant_digits(trimmed);
    digits.starts_with("00")
}

#[cfg(test)]
mod tests {
    use super::{has_country_code_marker, significant_digits};

    #[test]
    fn strips_formatting_noise() {
        assert_eq!(significant_digits("+1 (415) 555-2671"), "14155552671");
        assert_eq!(significant_digits("00 44 20 7946 0000"), "00442079460000");
        assert_eq!(significant_digits("no digits"), "");
    }

    #[test]
    fn detects_country_code_markers() {
        assert!(has_country_code_marker("+14155552671"));
        assert!(has_country_code_marker(" (+44) 20 7946 0000"));
        assert!(has_country_code_marker("0044 20 7946 0000"));
        assert!(!has_country_code_marker("(415) 555-2671"));
    }
}
