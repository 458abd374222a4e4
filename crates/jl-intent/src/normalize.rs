//! Input normalization — the first tier of every classification.
//!
//! Truncates oversized payloads, strips control characters, lowercases, and
//! removes wake words, politeness prefixes, and trailing sentence
//! punctuation. Pure; never fails; may return an empty string.

/// Maximum raw input length in characters. Anything beyond is dropped.
pub const MAX_INPUT_CHARS: usize = 500;

/// Wake-word prefixes stripped before matching. Longest first so
/// "hey joule" wins over "joule".
const WAKE_WORDS: &[&str] = &["hey joule", "okay joule", "ok joule", "hey jewel", "joule"];

/// Polite-request prefixes. Stripping these turns "please set temp to 70"
/// into the canonical "set temp to 70". The longer "can/could you …"
/// question openers are deliberately NOT stripped here: the grammar's guard
/// rules need to see them to tell permission questions from commands.
const POLITE_PREFIXES: &[&str] = &["please ", "kindly ", "go ahead and ", "i want you to "];

/// A normalized query string. Constructed only by [`normalize`]; immutable
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn for_tests(s: &str) -> Self {
        normalize(s)
    }
}

impl std::fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize raw input into the pipeline's canonical form.
pub fn normalize(raw: &str) -> NormalizedQuery {
    // Length clamp first, on chars, so multi-byte input can't overrun.
    let clamped: String = raw.chars().take(MAX_INPUT_CHARS).collect();

    let cleaned: String = clamped
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .to_lowercase();

    let mut text = cleaned.trim().to_string();

    for wake in WAKE_WORDS {
        if let Some(rest) = text.strip_prefix(wake) {
            // Word boundary: "joules per second" is not a wake word.
            if !rest.is_empty() && !rest.starts_with([',', ' ']) {
                continue;
            }
            text = rest.trim_start_matches([',', ' ']).to_string();
            break;
        }
    }

    // Politeness can stack ("please kindly …"); strip repeatedly.
    loop {
        let mut changed = false;
        for prefix in POLITE_PREFIXES {
            if let Some(rest) = text.strip_prefix(prefix) {
                text = rest.trim_start().to_string();
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    let text = text.trim_end_matches(['.', '?', '!']).trim().to_string();

    NormalizedQuery(collapse_spaces(&text))
}

fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_space = false;
    for c in s.chars() {
        if c == ' ' {
            if !last_space {
                out.push(c);
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }
    out
}
