//! Per-page view state machine.
//!
//! A page starts in `Loading` and moves exactly once: to `Ready` when its
//! datasets resolve, or to `Failed` when the load errors. `Failed` is
//! terminal for that attempt (the page shows a static error, no automatic
//! retry). In `Ready`, toggling the dataset selection swaps which records
//! feed the trace builders; trace recomputation is pure and synchronous, so
//! no toggle ever re-enters `Loading`.

/// Which named dataset is active on a dual-source page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataSource {
    /// Reanalysis model output (the reference/primary dataset).
    #[default]
    Era5,
    /// Decoded station reports (the alternate dataset).
    Metar,
}

impl DataSource {
    pub fn toggled(self) -> DataSource {
        match self {
            DataSource::Era5 => DataSource::Metar,
            DataSource::Metar => DataSource::Era5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DataSource::Era5 => "ERA5",
            DataSource::Metar => "METAR",
        }
    }
}

/// The reference and alternate dataset of one page, loaded together.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetPair<T> {
    pub era5: T,
    pub metar: T,
}

impl<T> DatasetPair<T> {
    pub fn get(&self, source: DataSource) -> &T {
        match source {
            DataSource::Era5 => &self.era5,
            DataSource::Metar => &self.metar,
        }
    }
}

/// Load lifecycle of a page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewPhase<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewPhase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Settle a pending load. Only honored while still `Loading`: a fetch
    /// that resolves after the page already settled (or was torn down and
    /// replaced) must not mutate the discarded state.
    pub fn resolve(&mut self, result: Result<T, String>) {
        if !self.is_loading() {
            return;
        }
        *self = match result {
            Ok(data) => ViewPhase::Ready(data),
            Err(message) => ViewPhase::Failed(message),
        };
    }
}

/// View controller for a dual-source page: load phase plus the active
/// dataset selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewController<T> {
    pub phase: ViewPhase<DatasetPair<T>>,
    source: DataSource,
}

impl<T> ViewController<T> {
    pub fn new() -> ViewController<T> {
        ViewController {
            phase: ViewPhase::Loading,
            source: DataSource::default(),
        }
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    /// Swap the active dataset. Pure state update; only meaningful once the
    /// page is `Ready`.
    pub fn toggle(&mut self) {
        if matches!(self.phase, ViewPhase::Ready(_)) {
            self.source = self.source.toggled();
        }
    }

    /// The records currently feeding the trace builders.
    pub fn active(&self) -> Option<&T> {
        match &self.phase {
            ViewPhase::Ready(pair) => Some(pair.get(self.source)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meteogram::wind_traces;
    use meteo_obs::observation::Observation;

    fn pair() -> DatasetPair<Vec<Observation>> {
        let make = |speed: f64| Observation {
            time: "00:00".to_string(),
            temperature: -2.0,
            dew_point: -4.0,
            pressure: 1024.0,
            precipitation: 0.0,
            wind_speed: speed,
            wind_direction: 290.0,
            weather_event: String::new(),
            metar_report: String::new(),
        };
        DatasetPair {
            era5: vec![make(18.0)],
            metar: vec![make(24.0)],
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let controller: ViewController<Vec<Observation>> = ViewController::new();
        assert!(controller.phase.is_loading());
        assert_eq!(controller.source(), DataSource::Era5);
        assert!(controller.active().is_none());
    }

    #[test]
    fn test_successful_load_reaches_ready() {
        let mut controller = ViewController::new();
        controller.phase.resolve(Ok(pair()));
        assert_eq!(controller.active().unwrap()[0].wind_speed, 18.0);
    }

    #[test]
    fn test_failed_load_is_terminal() {
        let mut controller: ViewController<Vec<Observation>> = ViewController::new();
        controller.phase.resolve(Err("dataset request returned status 404".to_string()));
        assert_eq!(
            controller.phase.error(),
            Some("dataset request returned status 404")
        );
        // A late success must not resurrect the page.
        controller.phase.resolve(Ok(pair()));
        assert!(controller.phase.error().is_some());
    }

    #[test]
    fn test_late_resolution_after_ready_is_noop() {
        let mut controller = ViewController::new();
        controller.phase.resolve(Ok(pair()));
        controller.phase.resolve(Err("late failure".to_string()));
        assert!(controller.active().is_some());
    }

    #[test]
    fn test_toggle_swaps_active_dataset_without_reloading() {
        let mut controller = ViewController::new();
        controller.phase.resolve(Ok(pair()));
        controller.toggle();
        assert_eq!(controller.source(), DataSource::Metar);
        assert!(!controller.phase.is_loading());
        assert_eq!(controller.active().unwrap()[0].wind_speed, 24.0);
    }

    #[test]
    fn test_double_toggle_restores_identical_traces() {
        let mut controller = ViewController::new();
        controller.phase.resolve(Ok(pair()));

        let before = serde_json::to_string(&wind_traces(controller.active().unwrap())).unwrap();
        controller.toggle();
        controller.toggle();
        let after = serde_json::to_string(&wind_traces(controller.active().unwrap())).unwrap();

        assert_eq!(controller.source(), DataSource::Era5);
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_ignored_while_loading() {
        let mut controller: ViewController<Vec<Observation>> = ViewController::new();
        controller.toggle();
        assert_eq!(controller.source(), DataSource::Era5);
    }
}
