//! Identifier slugs for sections and links.

/// Convert free text into a stable identifier.
///
/// Lowercases the text and replaces every run of whitespace with a single
/// hyphen. Everything else (punctuation, symbols, existing hyphens) is kept
/// verbatim, so `"FAQ & Help"` becomes `"faq-&-help"`.
///
/// Whitespace is the set browsers match with `\s`: Unicode `White_Space`
/// without U+0085 (NEXT LINE), plus U+FEFF (BYTE ORDER MARK). Host-side
/// identifiers built from the same titles therefore agree.
///
/// Distinct inputs may produce the same slug; callers do not rely on
/// uniqueness.
pub fn slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut result = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if is_separator(c) {
            if !in_whitespace {
                result.push('-');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }

    result
}

fn is_separator(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}
