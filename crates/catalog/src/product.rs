use storefront_core::{guard, AggregateRoot, DomainError, DomainResult};
use storefront_events::DomainEvent;

use crate::brand::Brand;
use crate::events::{CatalogDomainEvent, CatalogEvent};
use crate::ids::{BrandId, ProductId, TierPriceId};
use crate::tier_price::TierPrice;

/// Aggregate root: Product.
///
/// Fires [`CatalogEvent`]s for the changes that are audited. Fired events
/// queue up on the aggregate until the caller drains them with
/// [`Product::take_events`] and hands them to the event collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    ean_code: String,
    sku: String,
    name: String,
    url: String,
    description: Option<String>,
    brand_id: Option<BrandId>,
    deleted: bool,
    tier_prices: Vec<TierPrice>,
    pending_events: Vec<CatalogDomainEvent>,
}

impl Product {
    /// Create a new product with a freshly allocated id.
    pub fn create(
        ean_code: impl Into<String>,
        sku: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> DomainResult<Self> {
        let ean_code = ean_code.into();
        let sku = sku.into();
        let name = name.into();
        let url = url.into();
        guard::non_empty("ean code", &ean_code)?;
        guard::non_empty("sku", &sku)?;
        guard::non_empty("name", &name)?;
        guard::non_empty("url", &url)?;

        Ok(Self {
            id: ProductId::generate(),
            ean_code,
            sku,
            name,
            url,
            description: None,
            brand_id: None,
            deleted: false,
            tier_prices: Vec::new(),
            pending_events: Vec::new(),
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn ean_code(&self) -> &str {
        &self.ean_code
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn brand_id(&self) -> Option<BrandId> {
        self.brand_id
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn tier_prices(&self) -> &[TierPrice] {
        &self.tier_prices
    }

    /// Unit price for `quantity`, if a tier covers it.
    pub fn tier_price_for(&self, quantity: u32) -> Option<u64> {
        self.tier_prices
            .iter()
            .find(|t| t.covers(quantity))
            .map(TierPrice::price)
    }

    /// Events fired since the last drain, oldest first.
    pub fn pending_events(&self) -> &[CatalogDomainEvent] {
        &self.pending_events
    }

    pub fn take_events(&mut self) -> Vec<CatalogDomainEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Change the EAN code and fire `ProductEanCodeChanged`.
    pub fn change_ean_code(&mut self, ean_code: impl Into<String>) -> DomainResult<()> {
        let ean_code = ean_code.into();
        guard::non_empty("ean code", &ean_code)?;
        self.ean_code = ean_code.clone();
        self.pending_events.push(DomainEvent::new(
            CatalogEvent::product_ean_code_changed(self.id, ean_code),
        ));
        Ok(())
    }

    pub fn change_sku(&mut self, sku: impl Into<String>) -> DomainResult<()> {
        let sku = sku.into();
        guard::non_empty("sku", &sku)?;
        self.sku = sku;
        Ok(())
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        guard::non_empty("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn change_url(&mut self, url: impl Into<String>) -> DomainResult<()> {
        let url = url.into();
        guard::non_empty("url", &url)?;
        self.url = url;
        Ok(())
    }

    pub fn change_description(&mut self, description: impl Into<String>) -> DomainResult<()> {
        let description = description.into();
        guard::non_empty("description", &description)?;
        self.description = Some(description);
        Ok(())
    }

    /// Associate the product with a brand. This is the only place brand
    /// membership is established.
    pub fn set_brand(&mut self, brand: &Brand) {
        self.brand_id = Some(brand.id_typed());
    }

    /// Add a quantity band. Bands are inclusive and must not overlap.
    pub fn add_tier_price(
        &mut self,
        from_quantity: u32,
        to_quantity: u32,
        price: u64,
    ) -> DomainResult<TierPriceId> {
        if from_quantity == 0 {
            return Err(DomainError::invalid_argument("from quantity must be greater than zero"));
        }
        if to_quantity < from_quantity {
            return Err(DomainError::invalid_argument(
                "to quantity cannot be lower than from quantity",
            ));
        }
        if price == 0 {
            return Err(DomainError::invalid_argument("price must be greater than zero"));
        }
        if self
            .tier_prices
            .iter()
            .any(|t| t.overlaps(from_quantity, to_quantity))
        {
            return Err(DomainError::invalid_state(format!(
                "a tier price already covers quantities {from_quantity}..={to_quantity}"
            )));
        }

        let tier = TierPrice::new(self.id, from_quantity, to_quantity, price);
        let id = tier.id_typed();
        self.tier_prices.push(tier);
        Ok(id)
    }

    pub fn remove_tier_price(&mut self, tier_price_id: TierPriceId) -> DomainResult<()> {
        let index = self
            .tier_prices
            .iter()
            .position(|t| t.id_typed() == tier_price_id)
            .ok_or_else(|| DomainError::invalid_state("the product does not contain the tier price"))?;
        self.tier_prices.remove(index);
        Ok(())
    }

    pub fn delete(&mut self) -> DomainResult<()> {
        if self.deleted {
            return Err(DomainError::invalid_state("the product is already deleted"));
        }
        self.deleted = true;
        tracing::debug!(product_id = %self.id, "product deleted");
        Ok(())
    }

    pub fn restore(&mut self) -> DomainResult<()> {
        if !self.deleted {
            return Err(DomainError::invalid_state("the product is not deleted"));
        }
        self.deleted = false;
        tracing::debug!(product_id = %self.id, "product restored");
        Ok(())
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    const ENTITY_TYPE: &'static str = "catalog.product";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
