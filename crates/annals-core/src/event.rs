//! Historical events and the agents taking part in them.
//!
//! Events are either instantaneous or span a period. Their serialized form
//! follows the dataset format used by the explorer front-end: `eventTime` is
//! a bare number for an instant, or an object with `start` and `end`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a historical event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u32);

impl EventId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Identifier of an agent (a participant in events).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(u32);

impl AgentId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    name: String,
}

impl Agent {
    pub fn new(id: AgentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// When an event happened: a single instant or a closed period.
///
/// # Examples
///
/// ```
/// # use annals_core::event::TimeSpan;
/// let instant: TimeSpan = serde_json::from_str("1569").unwrap();
/// assert_eq!(instant, TimeSpan::Instant(1569.0));
///
/// let period: TimeSpan = serde_json::from_str(r#"{"start":1648,"end":1657}"#).unwrap();
/// assert_eq!(period.start(), 1648.0);
/// assert_eq!(period.end(), 1657.0);
/// assert_eq!(period.to_string(), "1648 - 1657");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeSpan {
    Instant(f64),
    Period { start: f64, end: f64 },
}

impl TimeSpan {
    /// Returns when the span begins; an instant begins and ends at its value
    pub fn start(self) -> f64 {
        match self {
            Self::Instant(at) => at,
            Self::Period { start, .. } => start,
        }
    }

    /// Returns when the span ends
    pub fn end(self) -> f64 {
        match self {
            Self::Instant(at) => at,
            Self::Period { end, .. } => end,
        }
    }

    pub fn is_period(self) -> bool {
        matches!(self, Self::Period { .. })
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant(at) => write!(f, "{at}"),
            Self::Period { start, end } => write!(f, "{start} - {end}"),
        }
    }
}

/// A dated event with optional participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEvent {
    id: EventId,
    event_name: String,
    #[serde(default)]
    event_info: String,
    event_time: TimeSpan,
    #[serde(default)]
    participants: Vec<AgentId>,
}

impl HistoricalEvent {
    pub fn new(id: EventId, name: impl Into<String>, time: TimeSpan) -> Self {
        Self {
            id,
            event_name: name.into(),
            event_info: String::new(),
            event_time: time,
            participants: Vec::new(),
        }
    }

    /// Sets the free-form description (usually a reference link)
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.event_info = info.into();
        self
    }

    /// Sets the agents taking part in the event
    pub fn with_participants(mut self, participants: Vec<AgentId>) -> Self {
        self.participants = participants;
        self
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.event_name
    }

    pub fn info(&self) -> &str {
        &self.event_info
    }

    pub fn time(&self) -> TimeSpan {
        self.event_time
    }

    pub fn participants(&self) -> &[AgentId] {
        &self.participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_bounds() {
        let span = TimeSpan::Instant(1772.0);
        assert_eq!(span.start(), 1772.0);
        assert_eq!(span.end(), 1772.0);
        assert!(!span.is_period());
        assert_eq!(span.to_string(), "1772");
    }

    #[test]
    fn test_deserialize_event_dataset_shape() {
        let json = r#"{
            "id": 1,
            "eventTime": 1569,
            "eventName": "Union of Lublin",
            "eventInfo": "https://en.wikipedia.org/wiki/Union_of_Lublin",
            "participants": [1, 0]
        }"#;
        let event: HistoricalEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.id(), EventId::new(1));
        assert_eq!(event.name(), "Union of Lublin");
        assert_eq!(event.time(), TimeSpan::Instant(1569.0));
        assert_eq!(event.participants(), &[AgentId::new(1), AgentId::new(0)]);
    }

    #[test]
    fn test_deserialize_event_without_participants() {
        let json = r#"{
            "id": 2,
            "eventTime": { "start": 1648, "end": 1657 },
            "eventName": "Khmelnytsky Uprising"
        }"#;
        let event: HistoricalEvent = serde_json::from_str(json).unwrap();

        assert!(event.time().is_period());
        assert!(event.participants().is_empty());
        assert_eq!(event.info(), "");
    }

    #[test]
    fn test_builder_methods() {
        let event = HistoricalEvent::new(EventId::new(3), "Partition", TimeSpan::Instant(1772.0))
            .with_info("first partition")
            .with_participants(vec![AgentId::new(2), AgentId::new(3)]);

        assert_eq!(event.info(), "first partition");
        assert_eq!(event.participants().len(), 2);
    }
}
