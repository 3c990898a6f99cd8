use storefront_core::{guard, AggregateRoot, DomainError, DomainResult};

use crate::ids::BrandId;
use crate::media::{Image, SeoData};
use crate::product::Product;

/// Aggregate root: Brand.
///
/// Never physically removed; `delete`/`restore` toggle a soft-delete flag.
/// Product membership is owned by the product side (`Product::set_brand`),
/// so a brand only offers a read-only projection over a product set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    id: BrandId,
    name: String,
    description: Option<String>,
    url: String,
    deleted: bool,
    logo: Option<Image>,
    seo: Option<SeoData>,
}

impl Brand {
    /// Create a new brand with a freshly allocated id.
    pub fn create(name: impl Into<String>, url: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let url = url.into();
        guard::non_empty("name", &name)?;
        guard::non_empty("url", &url)?;

        Ok(Self {
            id: BrandId::generate(),
            name,
            description: None,
            url,
            deleted: false,
            logo: None,
            seo: None,
        })
    }

    pub fn id_typed(&self) -> BrandId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn logo(&self) -> Option<&Image> {
        self.logo.as_ref()
    }

    pub fn seo(&self) -> Option<&SeoData> {
        self.seo.as_ref()
    }

    /// Products of `catalog` that belong to this brand, in source order.
    pub fn products_in<'a>(
        &self,
        catalog: impl IntoIterator<Item = &'a Product>,
    ) -> impl Iterator<Item = &'a Product> {
        let id = self.id;
        catalog
            .into_iter()
            .filter(move |product| product.brand_id() == Some(id))
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        guard::non_empty("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn change_description(&mut self, description: impl Into<String>) -> DomainResult<()> {
        let description = description.into();
        guard::non_empty("description", &description)?;
        self.description = Some(description);
        Ok(())
    }

    pub fn change_url(&mut self, url: impl Into<String>) -> DomainResult<()> {
        let url = url.into();
        guard::non_empty("url", &url)?;
        self.url = url;
        Ok(())
    }

    /// `Image` can only be built with a path, so there is nothing left to check.
    pub fn set_logo(&mut self, logo: Image) {
        self.logo = Some(logo);
    }

    pub fn set_seo_data(&mut self, seo: SeoData) -> DomainResult<()> {
        if seo.is_blank() {
            return Err(DomainError::invalid_argument("seo cannot be empty"));
        }
        self.seo = Some(seo);
        Ok(())
    }

    pub fn delete(&mut self) -> DomainResult<()> {
        if self.deleted {
            return Err(DomainError::invalid_state("the brand is already deleted"));
        }
        self.deleted = true;
        tracing::debug!(brand_id = %self.id, "brand deleted");
        Ok(())
    }

    pub fn restore(&mut self) -> DomainResult<()> {
        if !self.deleted {
            return Err(DomainError::invalid_state("the brand is not deleted"));
        }
        self.deleted = false;
        tracing::debug!(brand_id = %self.id, "brand restored");
        Ok(())
    }
}

impl AggregateRoot for Brand {
    type Id = BrandId;

    const ENTITY_TYPE: &'static str = "catalog.brand";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Brand {
        Brand::create("Acme", "acme").unwrap()
    }

    #[test]
    fn create_sets_fields_and_is_not_deleted() {
        let brand = acme();
        assert_eq!(brand.name(), "Acme");
        assert_eq!(brand.url(), "acme");
        assert!(!brand.is_deleted());
        assert_eq!(brand.description(), None);
        assert!(brand.logo().is_none());
        assert!(brand.seo().is_none());
    }

    #[test]
    fn create_allocates_distinct_ids() {
        assert_ne!(acme().id_typed(), acme().id_typed());
    }

    #[test]
    fn create_rejects_empty_name_or_url() {
        match Brand::create("", "acme").unwrap_err() {
            DomainError::InvalidArgument(msg) => assert!(msg.contains("name")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
        match Brand::create("Acme", "").unwrap_err() {
            DomainError::InvalidArgument(msg) => assert!(msg.contains("url")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn change_operations_assign_and_reject_empty_values() {
        let mut brand = acme();

        brand.change_name("Acme Corp").unwrap();
        brand.change_description("Everything for coyotes").unwrap();
        brand.change_url("acme-corp").unwrap();
        assert_eq!(brand.name(), "Acme Corp");
        assert_eq!(brand.description(), Some("Everything for coyotes"));
        assert_eq!(brand.url(), "acme-corp");

        let before = brand.clone();
        assert!(matches!(brand.change_name(""), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(brand.change_description(""), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(brand.change_url(""), Err(DomainError::InvalidArgument(_))));
        assert_eq!(brand, before);
    }

    #[test]
    fn logo_and_seo_are_stored() {
        let mut brand = acme();
        let logo = Image::new("/img/acme.png", None).unwrap();
        brand.set_logo(logo.clone());
        assert_eq!(brand.logo(), Some(&logo));

        let seo = SeoData::new(Some("Acme".to_string()), None);
        brand.set_seo_data(seo.clone()).unwrap();
        assert_eq!(brand.seo(), Some(&seo));
    }

    #[test]
    fn blank_seo_is_rejected_and_previous_kept() {
        let mut brand = acme();
        let seo = SeoData::new(Some("Acme".to_string()), None);
        brand.set_seo_data(seo.clone()).unwrap();

        let err = brand.set_seo_data(SeoData::default()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(brand.seo(), Some(&seo));
    }

    #[test]
    fn delete_twice_is_invalid_state() {
        let mut brand = acme();
        brand.delete().unwrap();
        assert!(brand.is_deleted());

        match brand.delete().unwrap_err() {
            DomainError::InvalidState(msg) => assert!(msg.contains("already deleted")),
            other => panic!("Expected InvalidState, got {other:?}"),
        }
        assert!(brand.is_deleted());
    }

    #[test]
    fn restore_requires_deleted_brand() {
        let mut brand = acme();
        assert!(matches!(brand.restore(), Err(DomainError::InvalidState(_))));

        brand.delete().unwrap();
        brand.restore().unwrap();
        assert!(!brand.is_deleted());
    }

    #[test]
    fn products_projection_follows_product_side() {
        let acme = acme();
        let other = Brand::create("Globex", "globex").unwrap();

        let mut anvil = Product::create("0000000000017", "ANV-1", "Anvil", "anvil").unwrap();
        let mut rocket = Product::create("0000000000024", "RKT-1", "Rocket", "rocket").unwrap();
        let mut lamp = Product::create("0000000000031", "LMP-1", "Lamp", "lamp").unwrap();
        anvil.set_brand(&acme);
        lamp.set_brand(&other);
        rocket.set_brand(&acme);

        let catalog = vec![anvil, lamp, rocket];
        let names: Vec<&str> = acme.products_in(&catalog).map(Product::name).collect();
        assert_eq!(names, vec!["Anvil", "Rocket"]);
        assert_eq!(other.products_in(&catalog).count(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-empty name/url round-trips through the factory.
            #[test]
            fn create_keeps_non_empty_values(s in ".{1,40}") {
                let brand = Brand::create(s.clone(), s.clone()).unwrap();
                prop_assert_eq!(brand.name(), s.as_str());
                prop_assert_eq!(brand.url(), s.as_str());
                prop_assert!(!brand.is_deleted());
            }

            /// Property: an empty argument in either position is rejected.
            #[test]
            fn create_rejects_empty_in_either_position(s in ".{1,40}") {
                prop_assert!(matches!(Brand::create("", s.clone()), Err(DomainError::InvalidArgument(_))));
                prop_assert!(matches!(Brand::create(s, ""), Err(DomainError::InvalidArgument(_))));
            }
        }
    }
}
