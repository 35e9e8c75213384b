/// Reduce mixed-script text to a comparable key.
///
/// Lowercases, then keeps only ASCII letters, ASCII digits and Hangul
/// syllables. Whitespace is dropped as well, so "Benti Korbo" and
/// "BentiKorbo" normalize to the same key.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || is_hangul_syllable(c))
        .collect()
}

/// Hangul syllables block, U+AC00 through U+D7A3.
pub fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// First run of ASCII digits in `s`, if any.
pub fn first_digit_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Length in characters, which is what every score weight is measured in.
pub fn char_len(s: &str) -> i64 {
    s.chars().count() as i64
}
