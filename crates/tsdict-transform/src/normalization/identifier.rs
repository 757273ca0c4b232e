//! Display name to snake-case identifier conversion.
//!
//! Words are found by a small state machine over character classes:
//!
//! - `(` and `)` are removed before segmentation, so they never split a word.
//! - Any other character that is not a letter or digit separates words.
//! - A run of uppercase letters starts a new word.
//! - Inside an uppercase run, an uppercase letter followed by a lowercase one
//!   starts a new word (`EHMFortifier` -> `EHM`, `Fortifier`).
//!
//! Digits never start a word on their own, so `Similac360` stays one word.
//!
//! Case boundaries are ASCII only. Other letters (`é`, `İ`, `ß`) never split
//! a word; they are lowercased with their word, and any lowercase mapping
//! that yields a combining mark is reduced to its alphanumeric part.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    /// Digits and non-ASCII letters.
    Caseless,
    Separator,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_ascii_uppercase() {
            CharClass::Upper
        } else if ch.is_ascii_lowercase() {
            CharClass::Lower
        } else if ch.is_alphanumeric() {
            CharClass::Caseless
        } else {
            CharClass::Separator
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Previous character ended a word (or nothing was read yet).
    Boundary,
    /// Inside a run of uppercase letters.
    UpperRun,
    /// Inside a word, last character not uppercase.
    InWord,
}

/// Splits a display name into words.
pub fn segment_words(display_name: &str) -> Vec<String> {
    let chars: Vec<char> = display_name
        .chars()
        .filter(|ch| !matches!(ch, '(' | ')'))
        .collect();

    let mut words = Vec::new();
    let mut current = String::new();
    let mut state = State::Boundary;

    for (idx, &ch) in chars.iter().enumerate() {
        let class = CharClass::of(ch);
        if class == CharClass::Separator {
            flush(&mut words, &mut current);
            state = State::Boundary;
            continue;
        }
        let next_is_lower = chars
            .get(idx + 1)
            .is_some_and(|next| CharClass::of(*next) == CharClass::Lower);
        let starts_word = match (state, class) {
            (State::Boundary, _) => true,
            (State::UpperRun, CharClass::Upper) => next_is_lower,
            (State::InWord, CharClass::Upper) => true,
            _ => false,
        };
        if starts_word {
            flush(&mut words, &mut current);
        }
        current.push(ch);
        state = if class == CharClass::Upper {
            State::UpperRun
        } else {
            State::InWord
        };
    }
    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Converts a display name into a lowercase, underscore-separated identifier.
///
/// ```
/// use tsdict_transform::to_identifier;
///
/// assert_eq!(to_identifier("Breast Milk (Donor)"), "breast_milk_donor");
/// assert_eq!(to_identifier("EHMFortifier"), "ehm_fortifier");
/// ```
pub fn to_identifier(display_name: &str) -> String {
    segment_words(display_name)
        .iter()
        .map(|word| lowercase_word(word))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn lowercase_word(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_alphanumeric())
        .collect()
}
