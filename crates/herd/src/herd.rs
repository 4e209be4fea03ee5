use yakshop_core::Litres;
use yakshop_inventory::Stock;

use crate::animal::Animal;

/// What the herd produced during one morning's attendance.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DailyYield {
    pub milk: Litres,
    pub skins: u32,
}

/// Ordered collection of animals.
///
/// Order is preserved across culling so that reports stay deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Herd {
    animals: Vec<Animal>,
}

impl Herd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn push(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    /// Morning attendance: shave every animal whose wool has grown back, milk
    /// every animal, and credit the day's production to `stock`.
    ///
    /// Production reflects each animal's age before the day's aging, so call
    /// this before [`Herd::day_passes`].
    pub fn attend(&mut self, stock: &Stock) -> DailyYield {
        let mut produced = DailyYield::default();

        for animal in &mut self.animals {
            if animal.can_shave() {
                animal.shave();
                produced.skins += 1;
            }

            let milk = animal.milk();
            if milk.is_negative() {
                tracing::warn!(
                    name = animal.name(),
                    age_days = animal.age().get(),
                    litres = milk.get(),
                    "negative milk yield"
                );
            }
            produced.milk += milk;
        }

        stock.deposit(produced.milk, produced.skins);
        produced
    }

    /// Evening: every animal ages one day, then animals that reached the end
    /// of their lifespan are culled. Returns how many were culled.
    pub fn day_passes(&mut self) -> usize {
        let mut any_expired = false;
        for animal in &mut self.animals {
            animal.age_one_day();
            any_expired |= animal.is_past_lifespan();
        }

        if !any_expired {
            return 0;
        }

        let before = self.animals.len();
        self.animals.retain(|animal| !animal.is_past_lifespan());
        let culled = before - self.animals.len();
        tracing::debug!(culled, remaining = self.animals.len(), "herd culled");
        culled
    }
}

impl From<Vec<Animal>> for Herd {
    fn from(animals: Vec<Animal>) -> Self {
        Self { animals }
    }
}

impl FromIterator<Animal> for Herd {
    fn from_iter<I: IntoIterator<Item = Animal>>(iter: I) -> Self {
        Self {
            animals: iter.into_iter().collect(),
        }
    }
}
