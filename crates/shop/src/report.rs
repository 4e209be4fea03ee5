//! Serializable views of the shop state.
//!
//! Quantities are rounded for display only; the simulation itself keeps
//! full precision and whole days.

use serde::Serialize;

use yakshop_core::round_to;
use yakshop_herd::{Animal, Herd};
use yakshop_inventory::StockSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockReport {
    /// Litres, two decimals.
    pub milk: f64,
    pub skins: u32,
}

impl From<StockSnapshot> for StockReport {
    fn from(snapshot: StockSnapshot) -> Self {
        Self {
            milk: snapshot.milk.rounded(),
            skins: snapshot.skins,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalReport {
    pub name: String,
    /// Years, two decimals.
    pub age: f64,
    #[serde(rename = "age-last-shaved")]
    pub age_last_shaved: f64,
}

impl From<&Animal> for AnimalReport {
    fn from(animal: &Animal) -> Self {
        Self {
            name: animal.name().to_string(),
            age: round_to(animal.age().as_years(), 2),
            age_last_shaved: round_to(animal.age_last_shaved().as_years(), 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HerdReport {
    pub herd: Vec<AnimalReport>,
}

impl From<&Herd> for HerdReport {
    fn from(herd: &Herd) -> Self {
        Self {
            herd: herd.animals().iter().map(AnimalReport::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yakshop_core::{Days, Litres};
    use yakshop_herd::Sex;
    use yakshop_inventory::Stock;

    #[test]
    fn herd_report_uses_years_and_dashed_key() {
        let mut herd = Herd::from(vec![
            Animal::new("Betty-1", Days::new(400), Sex::Female).unwrap(),
            Animal::new("Betty-3", Days::new(950), Sex::Female).unwrap(),
        ]);
        let stock = Stock::new();
        for _ in 0..13 {
            herd.attend(&stock);
            herd.day_passes();
        }

        let json = serde_json::to_value(HerdReport::from(&herd)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "herd": [
                    { "name": "Betty-1", "age": 4.13, "age-last-shaved": 4.0 },
                    { "name": "Betty-3", "age": 9.63, "age-last-shaved": 9.5 },
                ]
            })
        );
    }

    #[test]
    fn stock_report_rounds_milk() {
        let report = StockReport::from(StockSnapshot {
            milk: Litres::new(88.80999999999995),
            skins: 1,
        });
        assert_eq!(serde_json::to_value(report).unwrap(), serde_json::json!({ "milk": 88.81, "skins": 1 }));
    }
}
