//! Read-model query shaping for tier prices.
//!
//! Nothing here executes a query. `TierPriceFilter` is a predicate value a
//! query engine can translate; `TierPriceQueryExt` applies the same predicate
//! to any in-memory sequence.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::tier_price::TierPrice;

/// Filter criteria for tier-price queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPriceFilter {
    /// Restrict to tiers of this product (optional).
    pub product_id: Option<ProductId>,
}

impl TierPriceFilter {
    pub fn by_product(product_id: ProductId) -> Self {
        Self {
            product_id: Some(product_id),
        }
    }

    pub fn matches(&self, tier_price: &TierPrice) -> bool {
        self.product_id
            .is_none_or(|product_id| tier_price.product_id() == product_id)
    }
}

/// Query helpers over sequences of tier prices (owned or borrowed).
pub trait TierPriceQueryExt: Iterator + Sized
where
    Self::Item: Borrow<TierPrice>,
{
    /// Items matching `filter`, in source order.
    fn matching(self, filter: TierPriceFilter) -> impl Iterator<Item = Self::Item> {
        self.filter(move |t| filter.matches(<Self::Item as Borrow<TierPrice>>::borrow(t)))
    }

    /// Tiers whose product id equals `product_id`, in source order.
    fn by_product(self, product_id: ProductId) -> impl Iterator<Item = Self::Item> {
        self.matching(TierPriceFilter::by_product(product_id))
    }
}

impl<I> TierPriceQueryExt for I
where
    I: Iterator,
    I::Item: Borrow<TierPrice>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tier(product_id: ProductId, from: u32) -> TierPrice {
        TierPrice::new(product_id, from, from + 9, 100)
    }

    #[test]
    fn by_product_on_empty_sequence() {
        let empty: Vec<TierPrice> = Vec::new();
        assert_eq!(empty.iter().by_product(ProductId::generate()).count(), 0);
    }

    #[test]
    fn by_product_keeps_source_order() {
        let (a, b) = (ProductId::generate(), ProductId::generate());
        let tiers = vec![tier(a, 1), tier(b, 1), tier(a, 10), tier(b, 10), tier(a, 20)];

        let froms: Vec<u32> = tiers.iter().by_product(a).map(TierPrice::from_quantity).collect();
        assert_eq!(froms, vec![1, 10, 20]);

        let owned: Vec<TierPrice> = tiers.clone().into_iter().by_product(b).collect();
        assert_eq!(owned, vec![tiers[1].clone(), tiers[3].clone()]);
    }

    #[test]
    fn default_filter_matches_everything() {
        let t = tier(ProductId::generate(), 1);
        assert!(TierPriceFilter::default().matches(&t));
        assert!(!TierPriceFilter::by_product(ProductId::generate()).matches(&t));
    }

    proptest! {
        /// Property: by_product returns exactly the order-preserving subsequence
        /// whose product id matches.
        #[test]
        fn by_product_is_an_ordered_subsequence(picks in proptest::collection::vec(0usize..3, 0..40)) {
            let products = [ProductId::generate(), ProductId::generate(), ProductId::generate()];
            let tiers: Vec<TierPrice> = picks
                .iter()
                .enumerate()
                .map(|(i, p)| tier(products[*p], i as u32 + 1))
                .collect();

            let target = products[0];
            let expected: Vec<&TierPrice> = tiers.iter().filter(|t| t.product_id() == target).collect();
            let actual: Vec<&TierPrice> = tiers.iter().by_product(target).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
