use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// The fixed variety pool. Varieties correlate potatoes and recipes by
/// string equality only; this is a soft key, not a foreign-key invariant.
pub const VARIETIES: [&str; 6] = [
    "Russet",
    "Yukon Gold",
    "Red Potato",
    "Fingerling",
    "Sweet Potato",
    "Purple Potato",
];

/// Quality grade. Ordered: `Premium > Standard > Economy`.
///
/// Aging moves a potato down this ladder one step at a time
/// (see the degrader task); nothing ever moves it back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quality {
    Economy,
    Standard,
    Premium,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Premium => "Premium",
            Quality::Standard => "Standard",
            Quality::Economy => "Economy",
        }
    }

    /// The grade this quality decays into after `age_days` whole days
    /// since harvest, if any.
    ///
    /// One-directional and idempotent: Premium older than 30 days becomes
    /// Standard, Standard older than 60 days becomes Economy, Economy
    /// never changes.
    pub fn degraded(self, age_days: i64) -> Option<Quality> {
        match self {
            Quality::Premium if age_days > 30 => Some(Quality::Standard),
            Quality::Standard if age_days > 60 => Some(Quality::Economy),
            _ => None,
        }
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Quality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Premium" => Ok(Quality::Premium),
            "Standard" => Ok(Quality::Standard),
            "Economy" => Ok(Quality::Economy),
            other => Err(DomainError::validation(format!("unknown quality: {other}"))),
        }
    }
}

/// Inventory record for a single potato.
///
/// Owned exclusively by the registry; every read hands out an independent
/// clone, never an alias into store-internal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Potato {
    pub id: String,
    pub variety: String,
    pub origin: String,
    pub weight: f64,
    pub quality: Quality,
    pub harvest_date: DateTime<Utc>,
    pub price: f64,
}

impl Potato {
    /// Check the record invariants.
    ///
    /// Called before any store mutation; a failing record leaves the
    /// registry untouched.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::validation("id cannot be empty"));
        }
        if self.variety.is_empty() {
            return Err(DomainError::validation("variety cannot be empty"));
        }
        if self.weight <= 0.0 {
            return Err(DomainError::validation("weight must be positive"));
        }
        if self.price < 0.0 {
            return Err(DomainError::validation("price must be non-negative"));
        }
        Ok(())
    }

    /// Age in whole days at `now`.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.harvest_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Potato {
        Potato {
            id: "p001".to_string(),
            variety: "Russet".to_string(),
            origin: "Idaho".to_string(),
            weight: 0.45,
            quality: Quality::Premium,
            harvest_date: Utc::now(),
            price: 2.99,
        }
    }

    #[test]
    fn valid_potato_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn rejects_empty_id_and_variety() {
        let mut p = sample();
        p.id.clear();
        assert!(matches!(p.validate(), Err(DomainError::Validation(_))));

        let mut p = sample();
        p.variety.clear();
        assert!(matches!(p.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_non_positive_weight() {
        let mut p = sample();
        p.weight = 0.0;
        assert!(p.validate().is_err());
        p.weight = -1.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_negative_price() {
        let mut p = sample();
        p.price = -0.01;
        assert!(p.validate().is_err());
        p.price = 0.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn quality_order_matches_grade() {
        assert!(Quality::Premium > Quality::Standard);
        assert!(Quality::Standard > Quality::Economy);
    }

    #[test]
    fn degradation_is_one_directional() {
        assert_eq!(Quality::Premium.degraded(31), Some(Quality::Standard));
        assert_eq!(Quality::Premium.degraded(30), None);
        assert_eq!(Quality::Standard.degraded(61), Some(Quality::Economy));
        assert_eq!(Quality::Standard.degraded(60), None);
        assert_eq!(Quality::Economy.degraded(1000), None);
    }

    #[test]
    fn degradation_never_raises_quality() {
        for q in [Quality::Premium, Quality::Standard, Quality::Economy] {
            for days in [0, 30, 31, 60, 61, 365] {
                if let Some(next) = q.degraded(days) {
                    assert!(next < q);
                }
            }
        }
    }
}
