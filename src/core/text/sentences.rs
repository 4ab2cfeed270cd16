//! Sentence segmentation over sanitized text.
//!
//! Splits at sentence-terminal punctuation (`.`, `?`, `!`) followed
//! by whitespace, with two abbreviation guards to suppress false
//! splits. This is a documented heuristic, not a grammar: it assumes
//! Latin sentence punctuation and will mis-segment exotic input
//! rather than fail.
//!
//! Scanning works on a `char` vector, so multi-byte UTF-8 sequences
//! never produce invalid split points.

/// Split text into trimmed, non-empty sentences in original order.
///
/// Never fails: input without any split point comes back as a single
/// element (the whole trimmed text), and empty input yields an empty
/// vector.
pub fn segment(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let terminated = chars[i].is_whitespace() && matches!(chars[i - 1], '.' | '?' | '!');
        if terminated && !looks_like_abbreviation(&chars, i) {
            push_trimmed(&mut sentences, &chars[start..i]);
            // The separating whitespace is consumed, not emitted
            start = i + 1;
        }
    }

    if start < chars.len() {
        push_trimmed(&mut sentences, &chars[start..]);
    }

    sentences
}

/// Abbreviation guards, checked at the whitespace position `i`
/// (so `chars[i - 1]` is the terminator).
fn looks_like_abbreviation(chars: &[char], i: usize) -> bool {
    // Initials run like "U.S.": word, '.', word immediately before
    // the terminator
    if i >= 4 && is_word(chars[i - 4]) && chars[i - 3] == '.' && is_word(chars[i - 2]) {
        return true;
    }

    // Title abbreviation like "Dr.": uppercase, lowercase, '.'
    if i >= 3 && chars[i - 3].is_uppercase() && chars[i - 2].is_lowercase() && chars[i - 1] == '.' {
        return true;
    }

    false
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn push_trimmed(out: &mut Vec<String>, slice: &[char]) {
    let s: String = slice.iter().collect();
    let trimmed = s.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
