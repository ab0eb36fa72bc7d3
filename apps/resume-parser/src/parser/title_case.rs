//! Token cleaning and the title-case heuristic that decides whether a token
//! looks like a skill name.

/// Characters stripped from both ends of a raw token. Nothing else is trimmed.
const STRIPPED_PUNCTUATION: [char; 2] = [',', '.'];

/// Splits text into tokens on runs of whitespace. The ASCII information
/// separators U+001C–U+001F count as whitespace too, unlike in
/// `str::split_whitespace`.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Removes leading and trailing `,` and `.` from a raw token.
pub fn clean_token(raw: &str) -> &str {
    raw.trim_matches(STRIPPED_PUNCTUATION.as_slice())
}

/// Returns true when `token` is shaped like a capitalised word:
///
/// - the very first character is an uppercase letter,
/// - no later character is uppercase,
/// - at least one later character is a lowercase letter.
///
/// Characters without case (digits, symbols, uncased scripts) are ignored by
/// the last two checks. `Python` and `Skills:` qualify; `PYTHON`, `python`,
/// `PyThon`, `C++` and `2024` do not.
pub fn is_title_case(token: &str) -> bool {
    let mut chars = token.chars();

    match chars.next() {
        Some(first) if first.is_uppercase() => {}
        _ => return false,
    }

    let mut saw_lowercase = false;
    for c in chars {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            saw_lowercase = true;
        }
    }

    saw_lowercase
}
