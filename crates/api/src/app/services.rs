use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use yakshop_core::{Days, DomainError, DomainResult};
use yakshop_herd::Herd;
use yakshop_shop::{Fulfillment, HerdReport, Order, Shop, StockReport};

/// Snapshot of the shop's calendar, for the state endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopState {
    pub current_day: Days,
    pub animals: usize,
    pub loaded_at: DateTime<Utc>,
}

/// The shop shared by all requests.
///
/// Each operation holds the shop lock for its whole "advance, then act"
/// sequence, so concurrent requests see days advance in order and never
/// interleave a day step with an order or a reload.
#[derive(Debug)]
pub struct ShopService {
    shop: Mutex<Shop>,
    max_day: u32,
}

impl ShopService {
    pub fn new(shop: Shop, max_day: u32) -> Self {
        Self {
            shop: Mutex::new(shop),
            max_day,
        }
    }

    /// Validate a requested day against the configured ceiling.
    pub fn check_day(&self, day: u32) -> DomainResult<Days> {
        if day > self.max_day {
            return Err(DomainError::validation(format!(
                "day {day} is beyond the last supported day {}",
                self.max_day
            )));
        }
        Ok(Days::new(day))
    }

    /// Replace the herd and restart at day zero. Returns the herd size.
    pub fn load(&self, herd: Herd) -> usize {
        let animals = herd.len();
        self.lock().load(herd);
        animals
    }

    pub fn stock_at(&self, day: Days) -> StockReport {
        let mut shop = self.lock();
        shop.advance_to(day);
        shop.stock_report()
    }

    pub fn herd_at(&self, day: Days) -> HerdReport {
        let mut shop = self.lock();
        shop.advance_to(day);
        shop.herd_report()
    }

    pub fn order_at(&self, day: Days, order: &Order) -> Fulfillment {
        let mut shop = self.lock();
        shop.advance_to(day);
        shop.place_order(order)
    }

    pub fn state(&self) -> ShopState {
        let shop = self.lock();
        ShopState {
            current_day: shop.current_day(),
            animals: shop.herd().len(),
            loaded_at: shop.loaded_at(),
        }
    }

    /// Run `f` with exclusive access to the shop.
    pub fn with_shop<R>(&self, f: impl FnOnce(&mut Shop) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Shop> {
        self.shop.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("shop lock was poisoned; continuing with its last state");
            PoisonError::into_inner(poisoned)
        })
    }
}
