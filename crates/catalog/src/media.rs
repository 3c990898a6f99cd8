//! Value objects shared by catalog aggregates: images and SEO metadata.

use serde::{Deserialize, Serialize};

use storefront_core::{guard, DomainResult, ValueObject};

/// Reference to an image asset (e.g. a brand logo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    path: String,
    alt_text: Option<String>,
}

impl Image {
    /// Build an image reference. `path` must not be empty.
    pub fn new(path: impl Into<String>, alt_text: Option<String>) -> DomainResult<Self> {
        let path = path.into();
        guard::non_empty("image path", &path)?;
        Ok(Self { path, alt_text })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }
}

impl ValueObject for Image {}

/// Search-engine metadata block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoData {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SeoData {
    pub fn new(title: Option<String>, description: Option<String>) -> Self {
        Self { title, description }
    }

    /// True when neither field carries any text.
    pub fn is_blank(&self) -> bool {
        let empty = |v: &Option<String>| v.as_deref().is_none_or(str::is_empty);
        empty(&self.title) && empty(&self.description)
    }
}

impl ValueObject for SeoData {}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::DomainError;

    #[test]
    fn image_requires_a_path() {
        let err = Image::new("", None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));

        let logo = Image::new("/img/acme.png", Some("Acme".to_string())).unwrap();
        assert_eq!(logo.path(), "/img/acme.png");
        assert_eq!(logo.alt_text(), Some("Acme"));
    }

    #[test]
    fn seo_blank_when_no_text() {
        assert!(SeoData::default().is_blank());
        assert!(SeoData::new(Some(String::new()), None).is_blank());
        assert!(!SeoData::new(None, Some("Running shoes".to_string())).is_blank());
    }
}
