use std::{num::NonZeroUsize, sync::Arc};

use lru::LruCache;

use crate::domain::{
    day_view::{DayRequest, DayView, build_day_view},
    weather::ForecastBundle,
};

const DEFAULT_CAPACITY: usize = 16;

/// Memoises built day views for one forecast bundle.
///
/// Keys are whole [`DayRequest`]s, which is sound because building is a pure
/// function of bundle and request. Call [`DayViewCache::replace_bundle`]
/// whenever fresh data arrives.
#[derive(Debug)]
pub struct DayViewCache {
    bundle: Arc<ForecastBundle>,
    views: LruCache<DayRequest, Arc<DayView>>,
    hits: u64,
    misses: u64,
}

impl DayViewCache {
    #[must_use]
    pub fn new(bundle: Arc<ForecastBundle>) -> Self {
        Self::with_capacity(bundle, DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(bundle: Arc<ForecastBundle>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            bundle,
            views: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    #[must_use]
    pub fn bundle(&self) -> &ForecastBundle {
        &self.bundle
    }

    pub fn replace_bundle(&mut self, bundle: Arc<ForecastBundle>) {
        if Arc::ptr_eq(&self.bundle, &bundle) {
            return;
        }
        tracing::debug!(evicted = self.views.len(), "forecast replaced, clearing views");
        self.bundle = bundle;
        self.views.clear();
    }

    pub fn view(&mut self, request: &DayRequest) -> Arc<DayView> {
        if let Some(view) = self.views.get(request) {
            self.hits += 1;
            return Arc::clone(view);
        }
        self.misses += 1;
        let view = Arc::new(build_day_view(&self.bundle, request));
        self.views.put(*request, Arc::clone(&view));
        view
    }

    #[must_use]
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::{TimeFormat, UnitPreferences};
    use crate::test_support::forecast_bundle;

    fn request(day_index: usize) -> DayRequest {
        DayRequest {
            day_index,
            ..DayRequest::default()
        }
    }

    #[test]
    fn repeated_request_is_served_from_cache() {
        let mut cache = DayViewCache::new(Arc::new(forecast_bundle(72, 3, |_| 5.0)));
        let first = cache.view(&request(1));
        let second = cache.view(&request(1));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats(), (1, 1));
    }

    #[test]
    fn cached_view_equals_fresh_build() {
        let bundle = Arc::new(forecast_bundle(72, 3, |idx| idx as f32));
        let mut cache = DayViewCache::new(Arc::clone(&bundle));
        let req = DayRequest {
            day_index: 2,
            units: UnitPreferences::imperial(),
            time_format: TimeFormat::Hour12,
            ..DayRequest::default()
        };
        assert_eq!(*cache.view(&req), build_day_view(&bundle, &req));
    }

    #[test]
    fn different_units_are_distinct_entries() {
        let mut cache = DayViewCache::new(Arc::new(forecast_bundle(48, 2, |_| 5.0)));
        let metric = cache.view(&request(0));
        let imperial = cache.view(&DayRequest {
            units: UnitPreferences::imperial(),
            ..request(0)
        });
        assert_ne!(metric.points[0].temperature, imperial.points[0].temperature);
        assert_eq!(cache.stats(), (0, 2));
    }

    #[test]
    fn replacing_bundle_drops_old_views() {
        let mut cache = DayViewCache::new(Arc::new(forecast_bundle(48, 2, |_| 5.0)));
        let _ = cache.view(&request(0));
        cache.replace_bundle(Arc::new(forecast_bundle(48, 2, |_| 30.0)));
        let view = cache.view(&request(0));

        assert_eq!(view.points[0].temperature, Some(30));
        assert_eq!(cache.stats(), (0, 2));
    }

    #[test]
    fn capacity_evicts_least_recent() {
        let mut cache = DayViewCache::with_capacity(Arc::new(forecast_bundle(72, 3, |_| 5.0)), 1);
        let _ = cache.view(&request(0));
        let _ = cache.view(&request(1));
        let _ = cache.view(&request(0));
        assert_eq!(cache.stats(), (0, 3));
    }
}
