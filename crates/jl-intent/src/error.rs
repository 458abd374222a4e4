//! Pipeline error types.
//!
//! No-match is never an error — tiers return `Option`. Errors exist only at
//! the catalog-load boundary, and even those degrade to "tier unavailable".

/// A catalog (FAQ or personality) failed to load.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("catalog malformed: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let e = CatalogError::Unavailable("faq fetch failed".into());
        assert!(e.to_string().contains("faq fetch failed"));
    }
}
