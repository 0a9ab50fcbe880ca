//! Explicit memoization for repeated resolutions.

use std::collections::HashMap;
use std::sync::Mutex;

use rust_decimal::Decimal;

use crate::calculations::schedule::IgsSchedule;
use crate::models::IgsResolution;

/// Caches resolutions keyed by `(revenue, reduced-rate flag)`.
///
/// The underlying schedule is immutable, so a cached entry never goes
/// stale. Callers that resolve the same figures repeatedly (a summary
/// table re-rendered row by row, say) can wrap the schedule once instead
/// of keeping ad-hoc caches of their own.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use igs_core::{IgsSchedule, MemoizedResolver};
///
/// let resolver = MemoizedResolver::new(IgsSchedule::statutory());
///
/// let first = resolver.resolve(dec!(750000), true);
/// let second = resolver.resolve(dec!(750000), true);
///
/// assert_eq!(first, second);
/// assert_eq!(resolver.cached(), 1);
/// ```
pub struct MemoizedResolver {
    schedule: IgsSchedule,
    cache: Mutex<HashMap<(Decimal, bool), IgsResolution>>,
}

impl MemoizedResolver {
    /// Wraps a validated schedule with an empty cache.
    pub fn new(schedule: IgsSchedule) -> Self {
        Self {
            schedule,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The wrapped schedule.
    pub fn schedule(&self) -> &IgsSchedule {
        &self.schedule
    }

    /// Number of distinct `(revenue, flag)` pairs currently cached.
    pub fn cached(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Same contract as [`IgsSchedule::resolve`], serving repeats from
    /// the cache. A poisoned cache lock degrades to uncached resolution.
    pub fn resolve(
        &self,
        annual_revenue: Decimal,
        cga_member: bool,
    ) -> IgsResolution {
        let key = (annual_revenue, cga_member);

        if let Ok(cache) = self.cache.lock() {
            if let Some(hit) = cache.get(&key) {
                return hit.clone();
            }
        }

        let resolution = self.schedule.resolve(annual_revenue, cga_member);

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, resolution.clone());
        }

        resolution
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn memoized_results_match_the_schedule() {
        let schedule = IgsSchedule::statutory();
        let resolver = MemoizedResolver::new(schedule.clone());

        for revenue in [dec!(0), dec!(499999), dec!(5000000), dec!(50000000)] {
            for cga_member in [false, true] {
                assert_eq!(
                    resolver.resolve(revenue, cga_member),
                    schedule.resolve(revenue, cga_member),
                );
            }
        }
    }

    #[test]
    fn repeats_are_served_from_the_cache() {
        let resolver = MemoizedResolver::new(IgsSchedule::statutory());

        resolver.resolve(dec!(750000), false);
        resolver.resolve(dec!(750000), false);
        resolver.resolve(dec!(750000), true);

        // Same revenue with a different flag is a distinct entry.
        assert_eq!(resolver.cached(), 2);
    }

    #[test]
    fn cache_starts_empty() {
        let resolver = MemoizedResolver::new(IgsSchedule::statutory());

        assert_eq!(resolver.cached(), 0);
    }
}
