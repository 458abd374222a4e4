//! Intent resolution for the Joule conversational assistant.
//!
//! Raw utterances come in; exactly one [`jl_protocol::Classification`] comes
//! out. Resolution is tiered, cheapest first:
//!
//! 1. **Normalizer** — wake words, politeness, case, length clamp.
//! 2. **FAQ** — canned product answers.
//! 3. **Offline knowledge** — deterministic facts and conversions.
//! 4. **Command grammar** — an ordered first-match-wins rule table.
//! 5. **Escalation + remote extraction** — command-like residue goes to a
//!    hosted model for structured extraction, when credentials allow.
//! 6. **Personality** — small talk; the last tier before the question
//!    default.
//!
//! Every deterministic tier is pure and synchronous; the pipeline is only
//! async for catalog loading and the extraction call.

pub mod error;
pub mod escalate;
pub mod extract;
pub mod faq;
pub mod fun;
pub mod grammar;
pub mod knowledge;
pub mod normalize;
pub mod pipeline;

pub use error::CatalogError;
pub use normalize::{MAX_INPUT_CHARS, NormalizedQuery, normalize};
pub use pipeline::{Classifier, ClassifyContext};
