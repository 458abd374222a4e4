//! Domain FAQ matcher — short-circuits on known sales/product questions.
//!
//! The catalog is loaded lazily; concurrent first callers share one in-flight
//! load via `OnceCell` rather than triggering duplicate fetches. A failed
//! load makes this tier unavailable, never fatal.

use tokio::sync::OnceCell;

use jl_protocol::{FaqAnswer, FaqCategory};

use crate::error::CatalogError;

/// One FAQ entry: any contained pattern matches the whole entry.
#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub patterns: &'static [&'static str],
    pub category: FaqCategory,
    pub answer: &'static str,
}

type Loader = fn() -> Result<Vec<FaqEntry>, CatalogError>;

/// Lazily loaded FAQ catalog.
pub struct FaqMatcher {
    cell: OnceCell<Vec<FaqEntry>>,
    loader: Loader,
}

impl FaqMatcher {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            loader: builtin_catalog,
        }
    }

    /// Construct with a custom loader (tests exercise the failure path).
    pub fn with_loader(loader: Loader) -> Self {
        Self {
            cell: OnceCell::new(),
            loader,
        }
    }

    /// Match the query against the catalog. `None` on no match or when the
    /// catalog failed to load (tier unavailable).
    pub async fn lookup(&self, query: &str) -> Option<FaqAnswer> {
        let loader = self.loader;
        let entries = match self
            .cell
            .get_or_try_init(|| async move { loader() })
            .await
        {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "faq catalog unavailable, skipping tier");
                return None;
            }
        };

        for entry in entries {
            if entry.patterns.iter().any(|p| query.contains(p)) {
                tracing::debug!(category = ?entry.category, "faq hit");
                return Some(FaqAnswer {
                    category: entry.category,
                    text: entry.answer.to_string(),
                });
            }
        }
        None
    }
}

impl Default for FaqMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_catalog() -> Result<Vec<FaqEntry>, CatalogError> {
    Ok(vec![
        FaqEntry {
            patterns: &[
                "how much does joule cost",
                "how much is joule",
                "what does joule cost",
                "price of joule",
                "joule pricing",
                "subscription fee",
            ],
            category: FaqCategory::Pricing,
            answer: "Joule is $179 with no subscription. Energy analytics and \
                     voice control are included.",
        },
        FaqEntry {
            patterns: &[
                "when will it ship",
                "when does it ship",
                "shipping time",
                "how long is shipping",
                "track my order",
            ],
            category: FaqCategory::Shipping,
            answer: "Orders ship within 2 business days from our Ohio warehouse; \
                     free ground shipping in the continental US.",
        },
        FaqEntry {
            patterns: &[
                "work with my system",
                "compatible with",
                "is joule compatible",
                "work with homekit",
                "work with a boiler",
                "support two stage",
            ],
            category: FaqCategory::Compatibility,
            answer: "Joule supports conventional and heat-pump systems up to \
                     2 heat / 2 cool stages, plus HomeKit. Line-voltage and \
                     proprietary-bus systems are not supported.",
        },
        FaqEntry {
            patterns: &["warranty", "money back", "return policy", "refund"],
            category: FaqCategory::Warranty,
            answer: "2-year warranty and a 60-day no-questions return window.",
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pricing_question_matches() {
        let faq = FaqMatcher::new();
        let hit = faq.lookup("how much does joule cost").await.unwrap();
        assert_eq!(hit.category, FaqCategory::Pricing);
        assert!(hit.text.contains("$179"));
    }

    #[tokio::test]
    async fn compatibility_question_matches() {
        let faq = FaqMatcher::new();
        let hit = faq.lookup("will joule work with my system").await.unwrap();
        assert_eq!(hit.category, FaqCategory::Compatibility);
    }

    #[tokio::test]
    async fn technical_question_does_not_match() {
        let faq = FaqMatcher::new();
        assert!(faq.lookup("what is a balance point").await.is_none());
        assert!(faq.lookup("set temp to 72").await.is_none());
    }

    #[tokio::test]
    async fn failed_load_means_tier_unavailable() {
        let faq = FaqMatcher::with_loader(|| {
            Err(CatalogError::Unavailable("backend down".into()))
        });
        assert!(faq.lookup("how much is joule").await.is_none());
        // Still none on retry; the tier stays quiet, classification continues.
        assert!(faq.lookup("how much is joule").await.is_none());
    }

    #[tokio::test]
    async fn concurrent_first_lookups_share_one_load() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static LOADS: AtomicUsize = AtomicUsize::new(0);

        let faq = std::sync::Arc::new(FaqMatcher::with_loader(|| {
            LOADS.fetch_add(1, Ordering::SeqCst);
            builtin_catalog()
        }));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let faq = faq.clone();
            handles.push(tokio::spawn(async move {
                faq.lookup("joule pricing").await
            }));
        }
        for h in handles {
            assert!(h.await.unwrap().is_some());
        }
        assert_eq!(LOADS.load(Ordering::SeqCst), 1);
    }
}
