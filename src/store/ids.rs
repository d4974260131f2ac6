use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How new record ids are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Decimal counter: "1", "2", ...
    #[default]
    Sequential,
    /// UUID v7, ordered by creation time.
    TimeOrdered,
}

/// Mints ids for one store. The sequential counter only moves forward, so
/// an id freed by `remove` is never handed out again.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    /// `None` once the counter has handed out `u64::MAX`.
    next: Option<u64>,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next: Some(1),
        }
    }

    /// Moves the counter past every numeric id in `existing`.
    pub fn skip_past<'a>(&mut self, existing: impl IntoIterator<Item = &'a str>) {
        for id in existing {
            let Ok(n) = id.parse::<u64>() else {
                continue;
            };
            self.next = match (self.next, n.checked_add(1)) {
                (Some(next), Some(after)) => Some(next.max(after)),
                _ => None,
            };
        }
        if self.next.is_none() && self.strategy == IdStrategy::Sequential {
            log::warn!("Sequential ids exhausted by existing data, minting UUIDs instead");
        }
    }

    pub fn next_id(&mut self) -> String {
        match (self.strategy, self.next) {
            (IdStrategy::Sequential, Some(id)) => {
                self.next = id.checked_add(1);
                id.to_string()
            }
            (IdStrategy::Sequential, None) | (IdStrategy::TimeOrdered, _) => {
                Uuid::now_v7().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_starts_at_one() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");
    }

    #[test]
    fn skip_past_ignores_non_numeric_ids() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        ids.skip_past(["3", "welcome", "12", "7"]);
        assert_eq!(ids.next_id(), "13");
    }

    #[test]
    fn counter_switches_to_uuids_after_u64_max() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        ids.skip_past([(u64::MAX - 1).to_string().as_str()]);
        assert_eq!(ids.next_id(), u64::MAX.to_string());

        let a = ids.next_id();
        let b = ids.next_id();
        assert!(Uuid::parse_str(&a).is_ok());
        assert_ne!(a, b);
    }

    #[test]
    fn max_numeric_seed_id_exhausts_the_counter() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        ids.skip_past(["18446744073709551615", "4"]);
        let id = ids.next_id();
        assert_ne!(id, "18446744073709551615");
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn time_ordered_ids_are_distinct_uuids() {
        let mut ids = IdGenerator::new(IdStrategy::TimeOrdered);
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn strategy_uses_snake_case_in_json() {
        let json = serde_json::to_string(&IdStrategy::TimeOrdered).unwrap();
        assert_eq!(json, "\"time_ordered\"");
    }
}
