//! Units the simulation counts in: whole days of age and litres of milk.
//!
//! A "year" is a display unit only. Internally every age is an integer number
//! of days, converted at a fixed scale of [`DAYS_PER_YEAR`].

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Fixed conversion scale between external years and internal days.
pub const DAYS_PER_YEAR: u32 = 100;

/// A count of elapsed days (an age, or a day number of the simulation).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Days(u32);

impl Days {
    pub const ZERO: Days = Days(0);

    pub const fn new(days: u32) -> Self {
        Self(days)
    }

    pub const fn years(years: u32) -> Self {
        Self(years * DAYS_PER_YEAR)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Convert a decimal number of years into whole days.
    ///
    /// Rounds to the nearest day so that inputs like `4.13` land on 413 rather
    /// than on 412 through floating point truncation.
    pub fn from_years(years: f64) -> DomainResult<Self> {
        if !years.is_finite() {
            return Err(DomainError::validation("age must be a finite number of years"));
        }
        if years < 0.0 {
            return Err(DomainError::validation("age cannot be negative"));
        }

        let days = (years * f64::from(DAYS_PER_YEAR)).round();
        if days > f64::from(u32::MAX) {
            return Err(DomainError::validation("age is out of range"));
        }
        Ok(Self(days as u32))
    }

    /// Age in years, unrounded.
    pub fn as_years(self) -> f64 {
        f64::from(self.0) / f64::from(DAYS_PER_YEAR)
    }

    /// Days elapsed since `earlier`; zero when `earlier` lies in the future.
    pub fn since(self, earlier: Days) -> Days {
        Days(self.0.saturating_sub(earlier.0))
    }

    /// The following day.
    pub fn succ(self) -> Days {
        Days(self.0.saturating_add(1))
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl From<u32> for Days {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}

/// A volume of milk.
///
/// Not clamped: a yield formula may produce a negative value and callers
/// decide what to do with it.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Litres(f64);

impl Litres {
    pub const ZERO: Litres = Litres(0.0);

    pub const fn new(litres: f64) -> Self {
        Self(litres)
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// Rounded to two decimals, the precision quantities are reported in.
    pub fn rounded(self) -> f64 {
        round_to(self.0, 2)
    }
}

impl From<f64> for Litres {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Litres {
    type Output = Litres;

    fn add(self, rhs: Litres) -> Litres {
        Litres(self.0 + rhs.0)
    }
}

impl AddAssign for Litres {
    fn add_assign(&mut self, rhs: Litres) {
        self.0 += rhs.0;
    }
}

impl Sub for Litres {
    type Output = Litres;

    fn sub(self, rhs: Litres) -> Litres {
        Litres(self.0 - rhs.0)
    }
}

impl SubAssign for Litres {
    fn sub_assign(&mut self, rhs: Litres) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Litres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} l", self.0)
    }
}

/// Round `value` to `decimals` places (half away from zero).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
