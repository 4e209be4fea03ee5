use chrono::{DateTime, Utc};

use yakshop_core::Days;
use yakshop_herd::Herd;
use yakshop_inventory::Stock;

use crate::order::{self, Fulfillment, Order};
use crate::report::{HerdReport, StockReport};

/// Simulation context: a day counter bound to one herd and one stock.
///
/// A shop is an explicit value; callers that share one across threads wrap
/// it in their own lock. `advance_to` and `load` take `&mut self`, so the
/// borrow checker keeps day-stepping exclusive, while stock withdrawals only
/// need `&self`.
#[derive(Debug)]
pub struct Shop {
    current_day: Days,
    herd: Herd,
    stock: Stock,
    loaded_at: DateTime<Utc>,
}

impl Shop {
    /// An empty shop at day zero.
    pub fn new() -> Self {
        Self::with_herd(Herd::new())
    }

    /// A shop at day zero with `herd` and no stock.
    pub fn with_herd(herd: Herd) -> Self {
        Self {
            current_day: Days::ZERO,
            herd,
            stock: Stock::new(),
            loaded_at: Utc::now(),
        }
    }

    pub fn current_day(&self) -> Days {
        self.current_day
    }

    pub fn herd(&self) -> &Herd {
        &self.herd
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    /// When the current herd was loaded.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Replace the herd, empty the stock and restart the calendar at day zero.
    pub fn load(&mut self, herd: Herd) {
        tracing::info!(animals = herd.len(), previous_day = self.current_day.get(), "loading herd");
        self.herd = herd;
        self.stock.clear();
        self.current_day = Days::ZERO;
        self.loaded_at = Utc::now();
    }

    /// Load an empty herd.
    pub fn reset(&mut self) {
        self.load(Herd::new());
    }

    /// Simulate every day from the current one up to (not including) `target`.
    ///
    /// Each day is a morning attendance followed by an evening of aging and
    /// culling. Returns how many days were simulated.
    ///
    /// A target at or before the current day simulates nothing. There is no
    /// rewind: asking for an earlier day leaves the shop where it is.
    pub fn advance_to(&mut self, target: Days) -> u32 {
        let start = self.current_day;
        while self.current_day < target {
            let produced = self.herd.attend(&self.stock);
            let culled = self.herd.day_passes();
            tracing::trace!(
                day = self.current_day.get(),
                milk = produced.milk.get(),
                skins = produced.skins,
                culled,
                "day simulated"
            );
            self.current_day = self.current_day.succ();
        }

        let simulated = self.current_day.since(start).get();
        if simulated > 0 {
            tracing::debug!(from = start.get(), to = self.current_day.get(), "shop advanced");
        }
        simulated
    }

    /// Fulfill `order` against the current stock.
    pub fn place_order(&self, order: &Order) -> Fulfillment {
        let fulfillment = order::fulfill(&self.stock, &order.goods);
        tracing::info!(
            customer = %order.customer,
            day = self.current_day.get(),
            status = ?fulfillment.status,
            milk = fulfillment.shipped.milk.get(),
            skins = fulfillment.shipped.skins,
            "order processed"
        );
        fulfillment
    }

    pub fn stock_report(&self) -> StockReport {
        StockReport::from(self.stock.snapshot())
    }

    pub fn herd_report(&self) -> HerdReport {
        HerdReport::from(&self.herd)
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}
