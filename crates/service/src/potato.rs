use std::collections::HashMap;

use chrono::{DateTime, Utc};

use spudstock_core::{
    DomainResult, Freshness, InventorySummary, Potato, PotatoAnalytics, Quality, VarietySummary,
};
use spudstock_registry::Registry;

/// Potato CRUD plus the aggregation engine.
pub struct PotatoService<R: Registry> {
    registry: R,
}

impl<R: Registry> PotatoService<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Validate and insert a new potato. The registry is untouched when
    /// validation fails.
    pub fn create(&self, potato: Potato) -> DomainResult<Potato> {
        potato.validate()?;
        self.registry.add_potato(potato.clone());
        Ok(potato)
    }

    pub fn get(&self, id: &str) -> DomainResult<Potato> {
        self.registry
            .potato(id)
            .ok_or_else(spudstock_core::DomainError::not_found)
    }

    pub fn all(&self) -> Vec<Potato> {
        self.registry.potatoes()
    }

    pub fn by_variety(&self, variety: &str) -> Vec<Potato> {
        self.registry.potatoes_by_variety(variety)
    }

    /// Validate and replace the full record. `NotFound` when the key is
    /// absent; a valid record for an absent key is still `NotFound`, not a
    /// validation failure.
    pub fn update(&self, id: &str, potato: Potato) -> DomainResult<Potato> {
        potato.validate()?;
        self.registry.update_potato(id, potato.clone())?;
        Ok(potato)
    }

    pub fn delete(&self, id: &str) -> DomainResult<()> {
        self.registry.delete_potato(id)
    }

    /// Whole-inventory rollup from one snapshot.
    ///
    /// Per-variety average price is maintained as a running average,
    /// `avg' = (avg*(n-1) + p) / n`, which equals the arithmetic mean of
    /// the group regardless of visitation order. Group ordering in the
    /// result is unspecified.
    pub fn inventory_summary(&self) -> InventorySummary {
        let potatoes = self.registry.potatoes();

        let mut by_variety: HashMap<String, VarietySummary> = HashMap::new();
        let mut total_weight = 0.0;
        let mut total_value = 0.0;

        for potato in &potatoes {
            total_weight += potato.weight;
            total_value += potato.price;

            match by_variety.get_mut(&potato.variety) {
                Some(group) => {
                    group.total_quantity += 1;
                    group.total_weight += potato.weight;
                    let n = group.total_quantity as f64;
                    group.average_price = (group.average_price * (n - 1.0) + potato.price) / n;
                }
                None => {
                    by_variety.insert(
                        potato.variety.clone(),
                        VarietySummary {
                            variety: potato.variety.clone(),
                            total_quantity: 1,
                            total_weight: potato.weight,
                            average_price: potato.price,
                        },
                    );
                }
            }
        }

        InventorySummary {
            total_potatoes: potatoes.len(),
            total_weight,
            total_value,
            by_variety: by_variety.into_values().collect(),
        }
    }

    /// Aggregate analytics from one snapshot.
    ///
    /// An empty inventory yields the zero value. The most-popular tie-break
    /// is whichever variety first reaches the maximum count in a single
    /// pass; with equal counts the winner is unspecified (snapshot
    /// iteration order is not guaranteed).
    pub fn analytics(&self) -> PotatoAnalytics {
        let potatoes = self.registry.potatoes();
        if potatoes.is_empty() {
            return PotatoAnalytics::default();
        }

        let mut variety_count: HashMap<&str, usize> = HashMap::new();
        let mut total_weight = 0.0;
        let mut total_value = 0.0;
        let mut premium_count = 0usize;

        for potato in &potatoes {
            *variety_count.entry(potato.variety.as_str()).or_default() += 1;
            total_weight += potato.weight;
            total_value += potato.price;
            if potato.quality == Quality::Premium {
                premium_count += 1;
            }
        }

        let mut most_popular = "";
        let mut max_count = 0;
        for (&variety, &count) in &variety_count {
            if count > max_count {
                max_count = count;
                most_popular = variety;
            }
        }

        let len = potatoes.len() as f64;
        PotatoAnalytics {
            most_popular_variety: most_popular.to_string(),
            average_weight: total_weight / len,
            premium_percentage: premium_count as f64 / len * 100.0,
            total_value,
        }
    }

    /// Freshness of an already-fetched record, relative to now.
    pub fn freshness(&self, potato: &Potato) -> Freshness {
        freshness_at(potato, Utc::now())
    }
}

/// Freshness at an explicit instant. Pure; no store access.
pub fn freshness_at(potato: &Potato, now: DateTime<Utc>) -> Freshness {
    Freshness::for_age_days(potato.age_days(now))
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use spudstock_core::DomainError;
    use spudstock_registry::{InMemoryRegistry, Registry as _};

    use super::*;

    fn potato(id: &str, variety: &str, weight: f64, price: f64) -> Potato {
        Potato {
            id: id.to_string(),
            variety: variety.to_string(),
            origin: "Idaho".to_string(),
            weight,
            quality: Quality::Standard,
            harvest_date: Utc::now(),
            price,
        }
    }

    fn service() -> PotatoService<InMemoryRegistry> {
        PotatoService::new(InMemoryRegistry::new())
    }

    #[test]
    fn create_validates_before_mutating() {
        let svc = service();

        let mut bad = potato("p001", "Russet", 0.4, 2.5);
        bad.weight = -1.0;
        assert!(matches!(svc.create(bad), Err(DomainError::Validation(_))));
        assert!(svc.all().is_empty());

        svc.create(potato("p001", "Russet", 0.4, 2.5)).unwrap();
        assert_eq!(svc.all().len(), 1);
    }

    #[test]
    fn update_validates_before_mutating() {
        let svc = service();
        svc.create(potato("p001", "Russet", 0.4, 2.5)).unwrap();

        let mut bad = potato("p001", "Russet", 0.4, 2.5);
        bad.price = -1.0;
        assert!(matches!(
            svc.update("p001", bad),
            Err(DomainError::Validation(_))
        ));
        // The stored record is unchanged.
        assert_eq!(svc.get("p001").unwrap().price, 2.5);
    }

    #[test]
    fn update_missing_is_not_found() {
        let svc = service();
        assert_eq!(
            svc.update("p404", potato("p404", "Russet", 0.4, 2.5)),
            Err(DomainError::NotFound)
        );
    }

    #[test]
    fn summary_for_known_russets() {
        let svc = service();
        svc.create(potato("p001", "Russet", 0.1, 1.0)).unwrap();
        svc.create(potato("p002", "Russet", 0.2, 2.0)).unwrap();
        svc.create(potato("p003", "Russet", 0.3, 3.0)).unwrap();

        let summary = svc.inventory_summary();
        assert_eq!(summary.total_potatoes, 3);

        let russet = summary
            .by_variety
            .iter()
            .find(|g| g.variety == "Russet")
            .unwrap();
        assert_eq!(russet.total_quantity, 3);
        assert!((russet.total_weight - 0.6).abs() < 1e-9);
        assert!((russet.average_price - 2.0).abs() < 1e-9);
    }

    #[test]
    fn summary_totals_match_a_quiescent_scan() {
        let svc = service();
        for i in 0..20 {
            let variety = ["Russet", "Fingerling", "Yukon Gold"][i % 3];
            svc.create(potato(
                &format!("p{i:03}"),
                variety,
                0.2 + i as f64 * 0.01,
                1.0 + i as f64 * 0.1,
            ))
            .unwrap();
        }

        let summary = svc.inventory_summary();
        let scanned: f64 = svc.all().iter().map(|p| p.weight).sum();
        assert!((summary.total_weight - scanned).abs() < 1e-9);
        let value: f64 = svc.all().iter().map(|p| p.price).sum();
        assert!((summary.total_value - value).abs() < 1e-9);
    }

    #[test]
    fn analytics_on_empty_inventory_is_zero_valued() {
        let svc = service();
        let analytics = svc.analytics();
        assert_eq!(analytics, PotatoAnalytics::default());
        assert!(analytics.most_popular_variety.is_empty());
    }

    #[test]
    fn analytics_over_mixed_inventory() {
        let svc = service();
        svc.create(potato("p001", "Russet", 0.2, 1.0)).unwrap();
        svc.create(potato("p002", "Russet", 0.4, 2.0)).unwrap();
        let mut premium = potato("p003", "Fingerling", 0.3, 5.0);
        premium.quality = Quality::Premium;
        svc.create(premium).unwrap();

        let analytics = svc.analytics();
        assert_eq!(analytics.most_popular_variety, "Russet");
        assert!((analytics.average_weight - 0.3).abs() < 1e-9);
        assert!((analytics.premium_percentage - 100.0 / 3.0).abs() < 1e-9);
        assert!((analytics.total_value - 8.0).abs() < 1e-9);
    }

    #[test]
    fn freshness_boundaries() {
        let now = Utc::now();
        let cases = [
            (0, Freshness::Fresh),
            (7, Freshness::Fresh),
            (8, Freshness::Good),
            (30, Freshness::Good),
            (31, Freshness::Fair),
            (90, Freshness::Fair),
            (91, Freshness::Old),
        ];
        for (days, expected) in cases {
            let mut p = potato("p001", "Russet", 0.4, 2.5);
            p.harvest_date = now - Duration::days(days);
            assert_eq!(freshness_at(&p, now), expected, "age {days}");
        }
    }

    #[test]
    fn delete_removes_from_registry() {
        let registry = InMemoryRegistry::arc();
        let svc = PotatoService::new(registry.clone());
        svc.create(potato("p001", "Russet", 0.4, 2.5)).unwrap();

        svc.delete("p001").unwrap();
        assert!(registry.potato("p001").is_none());
        assert_eq!(svc.delete("p001"), Err(DomainError::NotFound));
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        fn arb_potatoes() -> impl Strategy<Value = Vec<(f64, f64, u8)>> {
            prop::collection::vec((0.01f64..5.0, 0.0f64..10.0, 0u8..3), 1..40)
        }

        proptest! {
            /// Property: the running group average equals the arithmetic
            /// mean, and summary totals equal the naive fold, for any
            /// dataset.
            #[test]
            fn summary_matches_naive_fold(records in arb_potatoes()) {
                let svc = service();
                let varieties = ["Russet", "Fingerling", "Purple Potato"];

                for (i, (weight, price, v)) in records.iter().enumerate() {
                    svc.create(potato(
                        &format!("p{i:04}"),
                        varieties[usize::from(*v)],
                        *weight,
                        *price,
                    )).unwrap();
                }

                let summary = svc.inventory_summary();
                let naive_weight: f64 = records.iter().map(|(w, _, _)| w).sum();
                let naive_value: f64 = records.iter().map(|(_, p, _)| p).sum();
                prop_assert!((summary.total_weight - naive_weight).abs() < 1e-6);
                prop_assert!((summary.total_value - naive_value).abs() < 1e-6);

                for group in &summary.by_variety {
                    let members: Vec<_> = records
                        .iter()
                        .filter(|(_, _, v)| varieties[usize::from(*v)] == group.variety)
                        .collect();
                    prop_assert_eq!(group.total_quantity, members.len());
                    let mean: f64 =
                        members.iter().map(|(_, p, _)| p).sum::<f64>() / members.len() as f64;
                    prop_assert!((group.average_price - mean).abs() < 1e-6);
                }
            }
        }
    }
}
