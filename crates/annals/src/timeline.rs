//! Timeline derivations over historical events.
//!
//! Filtering by date window, ordering, the overall time range and a
//! normalized position in `[0, 1]` for drawing events along a timeline.

use annals_core::event::{HistoricalEvent, TimeSpan};

/// Date window over events.
///
/// An event passes when it starts no earlier than `from` and ends no later
/// than `until`. A missing bound leaves that side open.
///
/// # Examples
///
/// ```
/// # use annals::timeline::EventFilter;
/// # use annals_core::event::{EventId, HistoricalEvent, TimeSpan};
/// let partition = HistoricalEvent::new(EventId::new(1), "Partition", TimeSpan::Instant(1772.0));
///
/// assert!(EventFilter::new(Some(1700.0), None).matches(&partition));
/// assert!(!EventFilter::new(None, Some(1700.0)).matches(&partition));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EventFilter {
    from: Option<f64>,
    until: Option<f64>,
}

impl EventFilter {
    pub fn new(from: Option<f64>, until: Option<f64>) -> Self {
        Self { from, until }
    }

    /// Returns true when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.until.is_none()
    }

    pub fn matches(&self, event: &HistoricalEvent) -> bool {
        let time = event.time();
        self.from.is_none_or(|from| time.start() >= from)
            && self.until.is_none_or(|until| time.end() <= until)
    }

    /// Keeps the matching events, preserving their order
    pub fn apply<'a>(&self, events: &'a [HistoricalEvent]) -> Vec<&'a HistoricalEvent> {
        events.iter().filter(|event| self.matches(event)).collect()
    }
}

/// Sorts events by start, keeping the relative order of equal starts.
pub fn sort_by_start(events: &mut [HistoricalEvent]) {
    events.sort_by(|a, b| a.time().start().total_cmp(&b.time().start()));
}

/// Sorts events by end, keeping the relative order of equal ends.
pub fn sort_by_end(events: &mut [HistoricalEvent]) {
    events.sort_by(|a, b| a.time().end().total_cmp(&b.time().end()));
}

/// Returns the smallest start among `events`.
pub fn earliest_start(events: &[HistoricalEvent]) -> Option<f64> {
    events
        .iter()
        .map(|event| event.time().start())
        .min_by(f64::total_cmp)
}

/// Returns the largest end among `events`.
pub fn latest_end(events: &[HistoricalEvent]) -> Option<f64> {
    events
        .iter()
        .map(|event| event.time().end())
        .max_by(f64::total_cmp)
}

/// Formats the date of an event for display: `"1648 - 1657"` or `"1772"`.
pub fn format_dates(time: TimeSpan) -> String {
    time.to_string()
}

/// Maps times onto a unit-length timeline.
///
/// # Examples
///
/// ```
/// # use annals::timeline::TimelinePositioner;
/// # use annals_core::event::TimeSpan;
/// let positioner = TimelinePositioner::new(1500.0, 1800.0);
///
/// assert_eq!(positioner.position(1650.0), 0.5);
/// // Periods sit at the midpoint of their start and end
/// let deluge = TimeSpan::Period { start: 1500.0, end: 1800.0 };
/// assert_eq!(positioner.position_of(deluge), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePositioner {
    earliest: f64,
    latest: f64,
}

impl TimelinePositioner {
    pub fn new(earliest: f64, latest: f64) -> Self {
        Self { earliest, latest }
    }

    /// Spans the range from the earliest start to the latest end of `events`.
    ///
    /// Returns `None` when there are no events.
    pub fn for_events(events: &[HistoricalEvent]) -> Option<Self> {
        Some(Self::new(earliest_start(events)?, latest_end(events)?))
    }

    /// Position of a single time value; `0.5` when the window has zero length
    pub fn position(&self, value: f64) -> f64 {
        let length = self.latest - self.earliest;
        if length == 0.0 {
            return 0.5;
        }
        (value - self.earliest) / length
    }

    /// Position of an instant, or the midpoint of a period
    pub fn position_of(&self, time: TimeSpan) -> f64 {
        match time {
            TimeSpan::Instant(at) => self.position(at),
            TimeSpan::Period { start, end } => (self.position(start) + self.position(end)) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use annals_core::event::EventId;
    use float_cmp::approx_eq;

    use super::*;

    fn instant(id: u32, at: f64) -> HistoricalEvent {
        HistoricalEvent::new(EventId::new(id), format!("event {id}"), TimeSpan::Instant(at))
    }

    fn period(id: u32, start: f64, end: f64) -> HistoricalEvent {
        HistoricalEvent::new(
            EventId::new(id),
            format!("event {id}"),
            TimeSpan::Period { start, end },
        )
    }

    fn ids(events: &[HistoricalEvent]) -> Vec<u32> {
        events.iter().map(|event| event.id().get()).collect()
    }

    fn sample() -> Vec<HistoricalEvent> {
        vec![
            instant(0, 1772.0),
            period(1, 1648.0, 1657.0),
            instant(2, 1569.0),
            period(3, 1655.0, 1660.0),
        ]
    }

    #[test]
    fn test_filter_window() {
        let events = sample();

        let after = EventFilter::new(Some(1600.0), None).apply(&events);
        assert_eq!(after.iter().map(|e| e.id().get()).collect::<Vec<_>>(), vec![0, 1, 3]);

        let within = EventFilter::new(Some(1600.0), Some(1658.0)).apply(&events);
        assert_eq!(within.iter().map(|e| e.id().get()).collect::<Vec<_>>(), vec![1]);

        assert_eq!(EventFilter::default().apply(&events).len(), 4);
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let event = period(1, 1648.0, 1657.0);
        assert!(EventFilter::new(Some(1648.0), Some(1657.0)).matches(&event));
        assert!(!EventFilter::new(Some(1648.5), None).matches(&event));
    }

    #[test]
    fn test_sort_by_start_and_end() {
        let mut events = sample();
        sort_by_start(&mut events);
        assert_eq!(ids(&events), vec![2, 1, 3, 0]);

        let mut events = vec![period(0, 1600.0, 1700.0), instant(1, 1650.0), instant(2, 1650.0)];
        sort_by_end(&mut events);
        assert_eq!(ids(&events), vec![1, 2, 0]);
    }

    #[test]
    fn test_range_extraction() {
        let events = sample();
        assert_eq!(earliest_start(&events), Some(1569.0));
        assert_eq!(latest_end(&events), Some(1772.0));
        assert_eq!(earliest_start(&[]), None);
        assert_eq!(latest_end(&[]), None);
    }

    #[test]
    fn test_positions() {
        let events = sample();
        let positioner = TimelinePositioner::for_events(&events).unwrap();

        assert_eq!(positioner.position_of(events[2].time()), 0.0);
        assert_eq!(positioner.position_of(events[0].time()), 1.0);

        let expected = ((1648.0 - 1569.0) + (1657.0 - 1569.0)) / 2.0 / (1772.0 - 1569.0);
        assert!(approx_eq!(
            f64,
            positioner.position_of(events[1].time()),
            expected,
            epsilon = 1e-12
        ));
    }

    #[test]
    fn test_zero_length_window() {
        let positioner = TimelinePositioner::new(1600.0, 1600.0);
        assert_eq!(positioner.position(1600.0), 0.5);
        assert!(TimelinePositioner::for_events(&[]).is_none());
    }

    #[test]
    fn test_format_dates() {
        assert_eq!(format_dates(TimeSpan::Instant(1772.0)), "1772");
        assert_eq!(
            format_dates(TimeSpan::Period { start: 1648.0, end: 1657.0 }),
            "1648 - 1657"
        );
    }
}
