//! Catalog domain event payloads.
//!
//! Each variant holds only its own payload; the subject id, entity-type tag
//! and firing time live on the [`DomainEvent`] envelope.

use serde::{Deserialize, Serialize};

use storefront_core::{AggregateId, AggregateRoot};
use storefront_events::{DomainEvent, Event};

use crate::custom_attribute::CustomAttribute;
use crate::ids::{CustomAttributeId, ProductId};
use crate::product::Product;

/// A fired catalog event.
pub type CatalogDomainEvent = DomainEvent<CatalogEvent>;

/// Event: the EAN code of a product changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEanCodeChanged {
    pub product_id: ProductId,
    pub ean_code: String,
}

/// Event: the unit of measure of a custom attribute was set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttributeUnitOfMeasureSet {
    pub attribute_id: CustomAttributeId,
    pub unit_of_measure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    ProductEanCodeChanged(ProductEanCodeChanged),
    CustomAttributeUnitOfMeasureSet(CustomAttributeUnitOfMeasureSet),
}

impl CatalogEvent {
    pub fn product_ean_code_changed(product_id: ProductId, ean_code: impl Into<String>) -> Self {
        Self::ProductEanCodeChanged(ProductEanCodeChanged {
            product_id,
            ean_code: ean_code.into(),
        })
    }

    pub fn custom_attribute_unit_of_measure_set(
        attribute_id: CustomAttributeId,
        unit_of_measure: impl Into<String>,
    ) -> Self {
        Self::CustomAttributeUnitOfMeasureSet(CustomAttributeUnitOfMeasureSet {
            attribute_id,
            unit_of_measure: unit_of_measure.into(),
        })
    }
}

impl Event for CatalogEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::ProductEanCodeChanged(_) => "catalog.product.ean_code_changed",
            CatalogEvent::CustomAttributeUnitOfMeasureSet(_) => {
                "catalog.custom_attribute.unit_of_measure_set"
            }
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn subject_id(&self) -> AggregateId {
        match self {
            CatalogEvent::ProductEanCodeChanged(e) => e.product_id.into(),
            CatalogEvent::CustomAttributeUnitOfMeasureSet(e) => e.attribute_id.into(),
        }
    }

    fn subject_type(&self) -> &'static str {
        match self {
            CatalogEvent::ProductEanCodeChanged(_) => Product::ENTITY_TYPE,
            CatalogEvent::CustomAttributeUnitOfMeasureSet(_) => CustomAttribute::ENTITY_TYPE,
        }
    }
}

impl core::fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CatalogEvent::ProductEanCodeChanged(e) => {
                write!(f, "Product {} EAN changed to {}", e.product_id, e.ean_code)
            }
            CatalogEvent::CustomAttributeUnitOfMeasureSet(e) => write!(
                f,
                "Attribute {} unit of measure set to {}",
                e.attribute_id, e.unit_of_measure
            ),
        }
    }
}
