//! Personality fallback — the lowest-priority tier.
//!
//! A genuine keyed match may fire even when the input superficially looks
//! like a command, but the generic catch-all is suppressed for anything with
//! a leading action verb or HVAC vocabulary: technical questions must never
//! receive a joke instead of an answer.

use tokio::sync::OnceCell;

use jl_protocol::FunResponse;

use crate::error::CatalogError;
use crate::escalate::{has_technical_vocabulary, opens_with_action_verb};

/// Above this token count the residue is no longer "small talk".
const FALLBACK_MAX_TOKENS: usize = 4;

/// One personality entry. `exact` entries match the whole query only, so a
/// greeting key can't swallow a longer sentence that happens to contain it.
#[derive(Debug, Clone)]
struct FunEntry {
    key: &'static str,
    patterns: &'static [&'static str],
    exact: bool,
    texts: &'static [&'static str],
}

type Loader = fn() -> Result<Vec<FunEntry>, CatalogError>;

/// Lazily loaded personality catalog.
pub struct FunCatalog {
    cell: OnceCell<Vec<FunEntry>>,
    loader: Loader,
}

impl FunCatalog {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            loader: builtin_catalog,
        }
    }

    /// Try the personality tier. Keyed matches win; the generic fallback only
    /// applies to short, non-technical, non-command residue.
    pub async fn lookup(&self, query: &str) -> Option<FunResponse> {
        let loader = self.loader;
        let entries = match self
            .cell
            .get_or_try_init(|| async move { loader() })
            .await
        {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "personality catalog unavailable, skipping tier");
                return None;
            }
        };

        for entry in entries {
            let hit = if entry.exact {
                entry.patterns.contains(&query)
            } else {
                entry.patterns.iter().any(|p| query.contains(p))
            };
            if hit {
                // Deterministic selection: query hash, not RNG, so the whole
                // pipeline stays idempotent.
                let idx = (fnv1a(query) as usize) % entry.texts.len();
                return Some(FunResponse::keyed(entry.key, entry.texts[idx]));
            }
        }

        if query.split_whitespace().count() <= FALLBACK_MAX_TOKENS
            && !opens_with_action_verb(query)
            && !has_technical_vocabulary(query)
        {
            return Some(FunResponse {
                key: "fallback".into(),
                text: "I'm better with thermostats than small talk. Try asking \
                       about your system, or say \"help\"."
                    .into(),
                fallback: true,
            });
        }

        None
    }
}

impl Default for FunCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// FNV-1a over the query bytes.
fn fnv1a(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in s.bytes() {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

fn builtin_catalog() -> Result<Vec<FunEntry>, CatalogError> {
    Ok(vec![
        FunEntry {
            key: "greeting",
            patterns: &["hello", "hi", "hey", "good morning", "good evening", "howdy"],
            exact: true,
            texts: &[
                "Hi there. Your comfort is my command.",
                "Hello! Warm enough for you?",
            ],
        },
        FunEntry {
            key: "joke",
            patterns: &["tell me a joke", "know any jokes", "make me laugh"],
            exact: false,
            texts: &[
                "Why did the heat pump break up with the furnace? Too much hot air.",
                "I'd tell you a refrigerant joke, but it might not land — R-22 jokes \
                 are being phased out.",
            ],
        },
        FunEntry {
            key: "identity",
            patterns: &["who are you", "what are you", "what is your name"],
            exact: false,
            texts: &[
                "I'm Joule — your thermostat's brain. I resolve what you say into \
                 what your system should do.",
            ],
        },
        FunEntry {
            key: "thanks",
            patterns: &["thanks", "thank you", "thx"],
            exact: true,
            texts: &["Anytime.", "Happy to help."],
        },
        FunEntry {
            key: "sing",
            patterns: &["sing me a song", "sing something", "can you sing"],
            exact: false,
            texts: &["🎵 Hooome, home on the range... is set to 68 degrees. 🎵"],
        },
        FunEntry {
            key: "meaning-of-life",
            patterns: &["meaning of life"],
            exact: false,
            texts: &["42. Coincidentally also a poor choice of setpoint."],
        },
    ])
}
