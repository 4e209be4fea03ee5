use core::str::FromStr;

use yakshop_core::{Days, DomainError, DomainResult, Litres};

/// Age at which an animal is culled (10 years).
pub const LIFESPAN: Days = Days::years(10);

/// Days of wool regrowth every animal needs before it can be shaved again.
const BASE_REGROWTH_DAYS: f64 = 8.0;

/// Extra regrowth days per day of age.
const REGROWTH_PER_DAY_OF_AGE: f64 = 0.01;

/// Daily yield of a newborn female, in litres.
const BASE_MILK_YIELD: f64 = 50.0;

/// Litres the daily yield drops per day of age.
const MILK_DECLINE_PER_DAY: f64 = 0.03;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl FromStr for Sex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "female" => Ok(Sex::Female),
            "m" | "male" => Ok(Sex::Male),
            other => Err(DomainError::validation(format!(
                "sex must be one of: f, m (got {other:?})"
            ))),
        }
    }
}

/// A single animal of the herd.
///
/// `age_last_shaved` and `age_last_milked` never exceed `age`: they are only
/// ever set to the current age, and age only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    name: String,
    age: Days,
    sex: Sex,
    age_last_milked: Days,
    age_last_shaved: Days,
}

impl Animal {
    /// A freshly loaded animal. It has never been milked or shaved, so both
    /// bookkeeping ages start at day zero.
    pub fn new(name: impl Into<String>, age: Days, sex: Sex) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            name,
            age,
            sex,
            age_last_milked: Days::ZERO,
            age_last_shaved: Days::ZERO,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Days {
        self.age
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn age_last_milked(&self) -> Days {
        self.age_last_milked
    }

    pub fn age_last_shaved(&self) -> Days {
        self.age_last_shaved
    }

    /// Whether the wool has grown back since the last shave.
    ///
    /// Regrowth takes 8 days plus 1% of the animal's current age.
    pub fn can_shave(&self) -> bool {
        let grown = self.age.since(self.age_last_shaved).as_f64();
        grown >= BASE_REGROWTH_DAYS + self.age.as_f64() * REGROWTH_PER_DAY_OF_AGE
    }

    pub fn shave(&mut self) {
        self.age_last_shaved = self.age;
    }

    /// Milk the animal and return the yield.
    ///
    /// Females give `50 - age * 0.03` litres, males nothing. No floor is
    /// applied; the yield turns negative past 1666 days of age.
    pub fn milk(&mut self) -> Litres {
        self.age_last_milked = self.age;
        match self.sex {
            Sex::Female => Litres::new(BASE_MILK_YIELD - self.age.as_f64() * MILK_DECLINE_PER_DAY),
            Sex::Male => Litres::ZERO,
        }
    }

    pub fn age_one_day(&mut self) {
        self.age = self.age.succ();
    }

    /// Whether the animal has reached the end of its life.
    pub fn is_past_lifespan(&self) -> bool {
        self.age >= LIFESPAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn female(days: u32) -> Animal {
        Animal::new("Betty", Days::new(days), Sex::Female).unwrap()
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Animal::new("  ", Days::new(10), Sex::Male).unwrap_err();
        assert_eq!(err, DomainError::validation("name cannot be empty"));
    }

    #[test]
    fn sex_parses_short_and_long_forms() {
        assert_eq!("f".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert!(matches!("x".parse::<Sex>(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn female_yield_declines_with_age() {
        assert_eq!(female(0).milk(), Litres::new(50.0));
        assert_eq!(female(400).milk(), Litres::new(38.0));
        assert_eq!(female(800).milk(), Litres::new(26.0));
        assert_eq!(female(950).milk(), Litres::new(21.5));
    }

    #[test]
    fn male_gives_no_milk() {
        let mut billy = Animal::new("Billy", Days::new(500), Sex::Male).unwrap();
        assert_eq!(billy.milk(), Litres::ZERO);
        assert_eq!(billy.age_last_milked(), Days::new(500));
    }

    #[test]
    fn yield_is_not_floored() {
        assert!(female(2000).milk().is_negative());
    }

    #[test]
    fn milking_records_age() {
        let mut betty = female(412);
        betty.milk();
        assert_eq!(betty.age_last_milked(), Days::new(412));
    }

    #[test]
    fn shave_eligibility_follows_regrowth_rule() {
        let mut betty = female(400);
        // Never shaved: 400 days of wool.
        assert!(betty.can_shave());
        betty.shave();
        assert_eq!(betty.age_last_shaved(), Days::new(400));
        assert!(!betty.can_shave());

        // Needs 8 + 4.12 days at age 412, so not yet.
        for _ in 0..12 {
            betty.age_one_day();
        }
        assert!(!betty.can_shave());

        // At 413: 13 >= 12.13.
        betty.age_one_day();
        assert!(betty.can_shave());
    }

    #[test]
    fn newborn_cannot_be_shaved() {
        assert!(!female(0).can_shave());
        assert!(!female(7).can_shave());
        assert!(female(9).can_shave());
    }

    #[test]
    fn lifespan_is_ten_years() {
        assert!(!female(999).is_past_lifespan());
        assert!(female(1000).is_past_lifespan());
    }
}
