/// Strips punctuation, upper-cases, and inserts the inward-code space when the
/// input is a compact postcode such as `SW11AA`.
pub fn format_postcode(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    match split_compact(&cleaned) {
        Some((outward, inward)) => format!("{} {}", outward, inward),
        None => cleaned,
    }
}

/// UK postcode shape check, e.g. `SW1A 1AA`, `M1 1AE`, `CR26XH`.
pub fn is_valid_postcode(input: &str) -> bool {
    let upper = input.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    if bytes.len() < 5 {
        return false;
    }

    let (rest, inward) = bytes.split_at(bytes.len() - 3);
    if !(inward[0].is_ascii_digit() && inward[1].is_ascii_uppercase() && inward[2].is_ascii_uppercase()) {
        return false;
    }

    let outward = rest.strip_suffix(b" ").unwrap_or(rest);
    let letters = outward.iter().take_while(|b| b.is_ascii_uppercase()).count();
    if !(1..=2).contains(&letters) {
        return false;
    }

    match &outward[letters..] {
        [digit] => digit.is_ascii_digit(),
        [digit, extra] => digit.is_ascii_digit() && (extra.is_ascii_uppercase() || extra.is_ascii_digit()),
        _ => false,
    }
}

// `[A-Z]{1,2}\d{1,2}` followed by `\d[A-Z]{2}`, no separator.
fn split_compact(cleaned: &str) -> Option<(&str, &str)> {
    if !cleaned.is_ascii() || cleaned.len() < 5 {
        return None;
    }

    let (outward, inward) = cleaned.split_at(cleaned.len() - 3);
    let inward_bytes = inward.as_bytes();
    if !(inward_bytes[0].is_ascii_digit()
        && inward_bytes[1].is_ascii_uppercase()
        && inward_bytes[2].is_ascii_uppercase())
    {
        return None;
    }

    let letters = outward.bytes().take_while(|b| b.is_ascii_uppercase()).count();
    let digits = outward.len() - letters;
    let valid = (1..=2).contains(&letters)
        && (1..=2).contains(&digits)
        && outward.bytes().skip(letters).all(|b| b.is_ascii_digit());

    valid.then_some((outward, inward))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inserts_space() {
        assert_eq!(format_postcode("sw11aa"), "SW1 1AA");
        assert_eq!(format_postcode("m11ae"), "M1 1AE");
        assert_eq!(format_postcode("ec12 3ab"), "EC12 3AB");
    }

    #[test]
    fn test_format_strips_punctuation_only() {
        assert_eq!(format_postcode("sw1a-1aa"), "SW1A1AA");
        assert_eq!(format_postcode("n1!"), "N1");
    }

    #[test]
    fn test_validation() {
        assert!(is_valid_postcode("SW1A 1AA"));
        assert!(is_valid_postcode("sw1a1aa"));
        assert!(is_valid_postcode("M1 1AE"));
        assert!(is_valid_postcode("CR2 6XH"));
        assert!(!is_valid_postcode("SW1A  1AA"));
        assert!(!is_valid_postcode("123 4AB"));
        assert!(!is_valid_postcode("ABC1 1AA"));
        assert!(!is_valid_postcode("SW1"));
    }
}
