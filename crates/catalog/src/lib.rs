//! Catalog domain module.
//!
//! Brands, categories, products and custom attributes, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Persistence and
//! event storage are collaborators that consume these aggregates and the
//! events they fire.

pub mod brand;
pub mod category;
pub mod custom_attribute;
pub mod events;
pub mod hierarchy;
pub mod ids;
pub mod media;
pub mod product;
pub mod read_model;
pub mod tier_price;

pub use brand::Brand;
pub use category::{Category, ProductCategory};
pub use custom_attribute::CustomAttribute;
pub use events::{
    CatalogDomainEvent, CatalogEvent, CustomAttributeUnitOfMeasureSet, ProductEanCodeChanged,
};
pub use hierarchy::CategoryTree;
pub use ids::{BrandId, CategoryId, CustomAttributeId, ProductId, TierPriceId};
pub use media::{Image, SeoData};
pub use product::Product;
pub use read_model::{TierPriceFilter, TierPriceQueryExt};
pub use tier_price::TierPrice;
