//! Slides and the slide catalog
//!
//! The catalog is a fixed, ordered list loaded once. Rendering code never
//! indexes it directly: [`Catalog::get`] wraps the index, and an empty catalog
//! yields [`Slide::placeholder`] through [`Catalog::slide_or_placeholder`].

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Compile-time embedded default catalog
const EMBEDDED_SLIDES: &str = include_str!("../assets/slides.toml");

/// Text shown when a slide has no fact
pub const FALLBACK_FACT: &str = "Exquisite taste in every bite.";

/// Accent used when a slide has none
pub const FALLBACK_ACCENT: &str = "white";

/// One carousel item
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Slide {
    /// Image URL
    pub image: String,
    pub title: String,
    pub description: String,
    /// Any CSS colour
    pub accent: String,
    pub ingredients: Vec<String>,
    pub fact: Option<String>,
}

impl Slide {
    /// Blank slide used when the catalog is empty
    #[must_use]
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Accent colour, or white
    #[must_use]
    pub fn accent_or_default(&self) -> &str {
        non_blank(&self.accent).unwrap_or(FALLBACK_ACCENT)
    }

    /// Fun fact, or the generic line
    #[must_use]
    pub fn fact_or_default(&self) -> &str {
        self.fact
            .as_deref()
            .and_then(non_blank)
            .unwrap_or(FALLBACK_FACT)
    }

    /// Image URL if one is set
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        non_blank(&self.image)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    slides: Vec<Slide>,
}

/// Ordered, immutable list of slides
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    slides: Vec<Slide>,
}

impl Catalog {
    #[must_use]
    pub const fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Parses a TOML document of `[[slides]]` tables
    ///
    /// An empty document is a valid, empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogParseFailed` if the document is not valid TOML or a
    /// slide has a field of the wrong type.
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        toml::from_str::<CatalogDocument>(doc)
            .map(|parsed| Self::new(parsed.slides))
            .map_err(|e| Error::catalog_parse_failed(e.to_string()))
    }

    /// The catalog bundled with the page
    ///
    /// # Errors
    ///
    /// Returns `CatalogParseFailed` if the bundled document is malformed, or
    /// `EmptyCatalog` if it has no slides.
    pub fn embedded() -> Result<Self> {
        let catalog = Self::from_toml_str(EMBEDDED_SLIDES)?;
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        tracing::debug!(slides = catalog.len(), "loaded embedded slide catalog");
        Ok(catalog)
    }

    /// Slide at `index` modulo the catalog length
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        index
            .checked_rem(self.slides.len())
            .and_then(|i| self.slides.get(i))
    }

    /// Slide at `index`, the first slide if `index` is somehow out of range,
    /// or a placeholder for an empty catalog
    #[must_use]
    pub fn slide_or_placeholder(&self, index: usize) -> Slide {
        self.get(index)
            .or_else(|| self.slides.first())
            .cloned()
            .unwrap_or_else(Slide::placeholder)
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_embedded_catalog() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.len(), 5);

        let titles = catalog
            .slides()
            .iter()
            .map(|s| s.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "Pink Donut Dream",
                "Midnight Cocoa Mousse",
                "Morning Honey Stack",
                "Molten Vanilla Brownie",
                "Golden Orchard Pie",
            ]
        );
        assert!(catalog.slides().iter().all(|s| s.ingredients.len() == 4));
    }

    #[test]
    fn test_get_wraps() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.get(5), catalog.get(0));
        assert_eq!(catalog.get(7).map(|s| s.title.as_str()), Some("Morning Honey Stack"));
    }

    #[test]
    fn test_empty_catalog_falls_back() {
        let catalog = Catalog::default();
        assert!(catalog.get(0).is_none());

        let slide = catalog.slide_or_placeholder(3);
        assert_eq!(slide, Slide::placeholder());
        assert_eq!(slide.accent_or_default(), "white");
        assert_eq!(slide.fact_or_default(), FALLBACK_FACT);
        assert!(slide.image_url().is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[slides]]
            title = "Plain Scone"
            "#,
        )
        .unwrap();

        let slide = catalog.slide_or_placeholder(0);
        assert_eq!(slide.title, "Plain Scone");
        assert!(slide.ingredients.is_empty());
        assert_eq!(slide.fact_or_default(), FALLBACK_FACT);
        assert_eq!(slide.accent_or_default(), FALLBACK_ACCENT);
    }

    #[test]
    fn test_blank_fact_falls_back() {
        let slide = Slide {
            fact: Some("   ".to_string()),
            ..Slide::default()
        };
        assert_eq!(slide.fact_or_default(), FALLBACK_FACT);
    }

    #[test]
    fn test_parse_error() {
        let result = Catalog::from_toml_str("[[slides]]\ntitle = 3");
        assert!(matches!(result, Err(Error::CatalogParseFailed { .. })));
    }

    #[test]
    fn test_empty_document_is_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }
}
