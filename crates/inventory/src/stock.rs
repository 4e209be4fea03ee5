use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use thiserror::Error;

use yakshop_core::Litres;

/// A kind of good the shop keeps in stock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Good {
    Milk,
    Skins,
}

impl Good {
    pub fn as_str(self) -> &'static str {
        match self {
            Good::Milk => "milk",
            Good::Skins => "skins",
        }
    }
}

impl core::fmt::Display for Good {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A withdrawal asked for more than is on hand. Nothing was taken.
///
/// This is an expected business outcome rather than a fault: order
/// fulfillment folds it into its classification.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("not enough {good} in stock (requested {requested}, available {available})")]
pub struct InsufficientStock {
    pub good: Good,
    pub requested: f64,
    pub available: f64,
}

/// Point-in-time copy of the stock levels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct StockSnapshot {
    pub milk: Litres,
    pub skins: u32,
}

/// Mutable inventory of milk and skins.
///
/// Every read and write takes the same lock; each operation does O(1) work
/// inside it and never blocks on anything else while holding it.
#[derive(Debug, Default)]
pub struct Stock {
    levels: Mutex<StockSnapshot>,
}

impl Stock {
    /// Empty stock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock starting at the given levels.
    pub fn with_levels(milk: Litres, skins: u32) -> Self {
        Self {
            levels: Mutex::new(StockSnapshot { milk, skins }),
        }
    }

    /// Consistent copy of both levels.
    pub fn snapshot(&self) -> StockSnapshot {
        *self.levels()
    }

    pub fn milk(&self) -> Litres {
        self.levels().milk
    }

    pub fn skins(&self) -> u32 {
        self.levels().skins
    }

    /// Credit a day's production. Both goods are added under one lock.
    ///
    /// `milk` is added as-is, including a negative yield.
    /// Credit a day's production. A negative milk amount lowers the balance
    /// but never below zero.
    pub fn deposit(&self, milk: Litres, skins: u32) {
        let mut levels = self.levels();
        levels.milk += milk;
        if levels.milk.is_negative() {
            tracing::warn!(deposited = milk.get(), "milk balance clamped at zero");
            levels.milk = Litres::ZERO;
        }
        levels.skins = levels.skins.saturating_add(skins);
    }

    pub fn deposit_milk(&self, milk: Litres) {
        self.deposit(milk, 0);
    }

    pub fn deposit_skins(&self, skins: u32) {
        self.deposit(Litres::ZERO, skins);
    }

    /// Take `quantity` litres of milk, or nothing at all.
    ///
    /// `quantity` must be non-negative; order parsing enforces that before a
    /// withdrawal is attempted.
    pub fn take_milk(&self, quantity: Litres) -> Result<(), InsufficientStock> {
        let mut levels = self.levels();

        // Written as a negated `<=` so a NaN request fails too.
        if !(quantity <= levels.milk) {
            return Err(InsufficientStock {
                good: Good::Milk,
                requested: quantity.get(),
                available: levels.milk.get(),
            });
        }

        levels.milk -= quantity;
        tracing::trace!(good = "milk", taken = quantity.get(), left = levels.milk.get(), "stock withdrawn");
        Ok(())
    }

    /// Take `quantity` skins, or nothing at all.
    pub fn take_skins(&self, quantity: u32) -> Result<(), InsufficientStock> {
        let mut levels = self.levels();

        if quantity > levels.skins {
            return Err(InsufficientStock {
                good: Good::Skins,
                requested: f64::from(quantity),
                available: f64::from(levels.skins),
            });
        }

        levels.skins -= quantity;
        tracing::trace!(good = "skins", taken = quantity, left = levels.skins, "stock withdrawn");
        Ok(())
    }

    /// Zero both levels.
    pub fn clear(&self) {
        *self.levels() = StockSnapshot::default();
    }

    fn levels(&self) -> MutexGuard<'_, StockSnapshot> {
        // The critical sections cannot panic half-way through an update, so a
        // poisoned lock still guards consistent levels.
        self.levels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn new_stock_is_empty() {
        let stock = Stock::new();
        assert_eq!(stock.snapshot(), StockSnapshot::default());
    }

    #[test]
    fn negative_deposit_never_drives_milk_below_zero() {
        let stock = Stock::with_levels(Litres::new(2.0), 1);
        stock.deposit(Litres::new(-0.5), 1);
        assert_eq!(stock.snapshot(), StockSnapshot { milk: Litres::new(1.5), skins: 2 });

        stock.deposit(Litres::new(-3.0), 0);
        assert_eq!(stock.snapshot(), StockSnapshot { milk: Litres::ZERO, skins: 2 });
    }

    #[test]
    fn take_milk_decrements_on_success() {
        let stock = Stock::with_levels(Litres::new(10.0), 2);
        stock.take_milk(Litres::new(4.5)).unwrap();
        assert_eq!(stock.milk(), Litres::new(5.5));
        assert_eq!(stock.skins(), 2);
    }

    #[test]
    fn take_milk_exact_balance_empties_stock() {
        let stock = Stock::with_levels(Litres::new(3.0), 0);
        stock.take_milk(Litres::new(3.0)).unwrap();
        assert_eq!(stock.milk(), Litres::ZERO);
    }

    #[test]
    fn take_milk_over_balance_fails_without_mutation() {
        let stock = Stock::with_levels(Litres::new(1188.81), 4);
        let err = stock.take_milk(Litres::new(1200.0)).unwrap_err();
        assert_eq!(err.good, Good::Milk);
        assert_eq!(err.requested, 1200.0);
        assert_eq!(stock.snapshot(), StockSnapshot { milk: Litres::new(1188.81), skins: 4 });
    }

    #[test]
    fn take_milk_rejects_nan() {
        let stock = Stock::with_levels(Litres::new(5.0), 0);
        assert!(stock.take_milk(Litres::new(f64::NAN)).is_err());
        assert_eq!(stock.milk(), Litres::new(5.0));
    }

    #[test]
    fn take_skins_over_balance_fails_without_mutation() {
        let stock = Stock::with_levels(Litres::new(1.0), 4);
        let err = stock.take_skins(31).unwrap_err();
        assert_eq!(err.good, Good::Skins);
        assert_eq!(err.available, 4.0);
        assert_eq!(stock.skins(), 4);
        assert_eq!(stock.milk(), Litres::new(1.0));
    }

    #[test]
    fn deposit_adds_both_goods() {
        let stock = Stock::new();
        stock.deposit(Litres::new(125.5), 3);
        stock.deposit_milk(Litres::new(0.5));
        stock.deposit_skins(1);
        assert_eq!(stock.snapshot(), StockSnapshot { milk: Litres::new(126.0), skins: 4 });
    }

    #[test]
    fn clear_zeroes_levels() {
        let stock = Stock::with_levels(Litres::new(7.0), 7);
        stock.clear();
        assert_eq!(stock.snapshot(), StockSnapshot::default());
    }

    #[test]
    fn concurrent_withdrawals_never_oversell() {
        let stock = Arc::new(Stock::with_levels(Litres::new(100.0), 50));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stock = stock.clone();
                thread::spawn(move || {
                    let mut taken = 0u32;
                    for _ in 0..20 {
                        if stock.take_skins(1).is_ok() {
                            taken += 1;
                        }
                        let _ = stock.take_milk(Litres::new(1.0));
                    }
                    taken
                })
            })
            .collect();

        let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 50);
        assert_eq!(stock.skins(), 0);
        assert_eq!(stock.milk(), Litres::ZERO);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: over-withdrawal of either good leaves every level unchanged.
        #[test]
        fn over_withdrawal_leaves_balances_unchanged(
            milk in 0.0f64..10_000.0,
            skins in 0u32..1_000,
            extra_milk in 0.001f64..1_000.0,
            extra_skins in 1u32..1_000,
        ) {
            let stock = Stock::with_levels(Litres::new(milk), skins);
            let before = stock.snapshot();

            prop_assert!(stock.take_milk(Litres::new(milk + extra_milk)).is_err());
            prop_assert!(stock.take_skins(skins + extra_skins).is_err());
            prop_assert_eq!(stock.snapshot(), before);
        }

        /// Property: a successful withdrawal lowers exactly one level by exactly the quantity.
        #[test]
        fn successful_withdrawal_decrements_exactly(
            milk in 0.0f64..10_000.0,
            skins in 0u32..1_000,
            milk_fraction in 0.0f64..=1.0,
            skins_taken in 0u32..1_000,
        ) {
            let stock = Stock::with_levels(Litres::new(milk), skins);
            let wanted = Litres::new(milk * milk_fraction);

            stock.take_milk(wanted).unwrap();
            prop_assert_eq!(stock.milk(), Litres::new(milk) - wanted);
            prop_assert_eq!(stock.skins(), skins);

            let skins_taken = skins_taken.min(skins);
            let milk_after = stock.milk();
            stock.take_skins(skins_taken).unwrap();
            prop_assert_eq!(stock.skins(), skins - skins_taken);
            prop_assert_eq!(stock.milk(), milk_after);
        }
    }
}
