//! Typed identifiers for catalog aggregates and entities.

use serde::{Deserialize, Serialize};

use storefront_core::AggregateId;

macro_rules! catalog_id {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(pub AggregateId);

        impl $t {
            pub fn new(id: AggregateId) -> Self {
                Self(id)
            }

            /// Allocate a fresh identifier.
            pub fn generate() -> Self {
                Self(AggregateId::new())
            }

            pub fn as_aggregate_id(&self) -> AggregateId {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for AggregateId {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

catalog_id!(
    /// Brand identifier.
    BrandId
);
catalog_id!(
    /// Category identifier.
    CategoryId
);
catalog_id!(
    /// Product identifier.
    ProductId
);
catalog_id!(
    /// Custom attribute identifier.
    CustomAttributeId
);
catalog_id!(
    /// Tier price identifier (scoped to its product).
    TierPriceId
);
