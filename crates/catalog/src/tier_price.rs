use serde::{Deserialize, Serialize};

use storefront_core::Entity;

use crate::ids::{ProductId, TierPriceId};

/// Entity: a quantity-banded unit price for one product.
///
/// Owned by its [`Product`](crate::Product); the product validates the band
/// when the tier is added. `price` is in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPrice {
    id: TierPriceId,
    product_id: ProductId,
    from_quantity: u32,
    to_quantity: u32,
    price: u64,
}

impl TierPrice {
    pub(crate) fn new(product_id: ProductId, from_quantity: u32, to_quantity: u32, price: u64) -> Self {
        Self {
            id: TierPriceId::generate(),
            product_id,
            from_quantity,
            to_quantity,
            price,
        }
    }

    pub fn id_typed(&self) -> TierPriceId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn from_quantity(&self) -> u32 {
        self.from_quantity
    }

    pub fn to_quantity(&self) -> u32 {
        self.to_quantity
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    /// Whether `quantity` falls inside this band (both ends inclusive).
    pub fn covers(&self, quantity: u32) -> bool {
        (self.from_quantity..=self.to_quantity).contains(&quantity)
    }

    pub(crate) fn overlaps(&self, from_quantity: u32, to_quantity: u32) -> bool {
        from_quantity <= self.to_quantity && self.from_quantity <= to_quantity
    }
}

impl Entity for TierPrice {
    type Id = TierPriceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
