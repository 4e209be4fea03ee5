use serde::{Deserialize, Serialize};

use yakshop_core::{DomainError, DomainResult, Litres};
use yakshop_inventory::Stock;

/// Quantities of each good, as requested by a customer or as shipped.
///
/// A zero quantity means "not requested" (or "not shipped") and is left out
/// when serialized.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedGoods {
    #[serde(default, skip_serializing_if = "is_no_milk")]
    pub milk: Litres,
    #[serde(default, skip_serializing_if = "is_no_skins")]
    pub skins: u32,
}

fn is_no_milk(milk: &Litres) -> bool {
    *milk == Litres::ZERO
}

fn is_no_skins(skins: &u32) -> bool {
    *skins == 0
}

impl OrderedGoods {
    pub fn validate(&self) -> DomainResult<()> {
        let milk = self.milk.get();
        if !milk.is_finite() {
            return Err(DomainError::validation("milk must be a finite quantity"));
        }
        if milk < 0.0 {
            return Err(DomainError::validation("milk cannot be negative"));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        is_no_milk(&self.milk) && is_no_skins(&self.skins)
    }
}

/// A customer's order. Ephemeral: built per request, never retained.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub customer: String,
    #[serde(rename = "order")]
    pub goods: OrderedGoods,
}

impl Order {
    pub fn validate(&self) -> DomainResult<()> {
        self.goods.validate()
    }
}

/// Outcome class of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    /// Everything requested was shipped.
    Created,
    /// Some requested goods were shipped, others were not available.
    Partial,
    /// Nothing was requested, or nothing requested was available.
    NotFound,
}

impl FulfillmentStatus {
    /// Classify from the count of requested goods and of those unavailable.
    /// First match wins.
    pub fn classify(requested: usize, unavailable: usize) -> Self {
        if requested == 0 || unavailable == requested {
            FulfillmentStatus::NotFound
        } else if unavailable > 0 {
            FulfillmentStatus::Partial
        } else {
            FulfillmentStatus::Created
        }
    }
}

/// Result of fulfilling one order.
#[derive(Debug, Clone, PartialEq)]
pub struct Fulfillment {
    pub status: FulfillmentStatus,
    pub shipped: OrderedGoods,
    pub requested: usize,
    pub unavailable: usize,
}

/// Withdraw each requested good from `stock` independently.
///
/// A good that cannot be withdrawn in full is not shipped at all; a failed
/// good never rolls back a good that was withdrawn.
pub fn fulfill(stock: &Stock, goods: &OrderedGoods) -> Fulfillment {
    let mut shipped = *goods;
    let mut requested = 0;
    let mut unavailable = 0;

    if goods.milk > Litres::ZERO {
        requested += 1;
        if let Err(e) = stock.take_milk(goods.milk) {
            tracing::debug!(error = %e, "milk not shipped");
            unavailable += 1;
            shipped.milk = Litres::ZERO;
        }
    }

    if goods.skins > 0 {
        requested += 1;
        if let Err(e) = stock.take_skins(goods.skins) {
            tracing::debug!(error = %e, "skins not shipped");
            unavailable += 1;
            shipped.skins = 0;
        }
    }

    Fulfillment {
        status: FulfillmentStatus::classify(requested, unavailable),
        shipped,
        requested,
        unavailable,
    }
}
