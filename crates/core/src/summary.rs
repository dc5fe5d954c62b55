//! Derived read-only views over the inventory.
//!
//! These are ephemeral: recomputed on every read from one snapshot of the
//! potato records, never stored, never mutated independently.

use serde::{Deserialize, Serialize};

/// Per-variety rollup inside an [`InventorySummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarietySummary {
    pub variety: String,
    pub total_quantity: usize,
    pub total_weight: f64,
    pub average_price: f64,
}

/// Whole-inventory rollup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_potatoes: usize,
    pub total_weight: f64,
    pub total_value: f64,
    pub by_variety: Vec<VarietySummary>,
}

/// Aggregate analytics over the whole inventory.
///
/// An empty inventory yields the zero value of this type rather than an
/// error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PotatoAnalytics {
    pub most_popular_variety: String,
    pub average_weight: f64,
    pub premium_percentage: f64,
    pub total_value: f64,
}

/// Freshness classification, a pure function of age since harvest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Freshness {
    Fresh,
    Good,
    Fair,
    Old,
}

impl Freshness {
    /// Classify an age in whole days.
    pub fn for_age_days(days: i64) -> Freshness {
        match days {
            d if d <= 7 => Freshness::Fresh,
            d if d <= 30 => Freshness::Good,
            d if d <= 90 => Freshness::Fair,
            _ => Freshness::Old,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Freshness::Fresh => "Fresh",
            Freshness::Good => "Good",
            Freshness::Fair => "Fair",
            Freshness::Old => "Old",
        }
    }
}

impl core::fmt::Display for Freshness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freshness_boundaries() {
        assert_eq!(Freshness::for_age_days(0), Freshness::Fresh);
        assert_eq!(Freshness::for_age_days(7), Freshness::Fresh);
        assert_eq!(Freshness::for_age_days(8), Freshness::Good);
        assert_eq!(Freshness::for_age_days(30), Freshness::Good);
        assert_eq!(Freshness::for_age_days(31), Freshness::Fair);
        assert_eq!(Freshness::for_age_days(90), Freshness::Fair);
        assert_eq!(Freshness::for_age_days(91), Freshness::Old);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: freshness never improves as age grows.
            #[test]
            fn freshness_is_monotone_in_age(a in 0i64..1000, b in 0i64..1000) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(Freshness::for_age_days(lo) <= Freshness::for_age_days(hi));
            }
        }
    }
}
