//! Append-only event log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::entry::{Details, EventType, LogEntry, Phase};

/// Ordered record of everything that happened in a game.
///
/// Entries can be appended and read, never edited or removed. Insertion order
/// is causal order. Backed by a persistent vector so clones are cheap.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    entries: Vector<LogEntry>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event stamped with the current time.
    pub fn append(
        &mut self,
        round: u32,
        phase: Phase,
        event_type: EventType,
        details: Details,
    ) -> &LogEntry {
        self.entries.push_back(LogEntry::new(round, phase, event_type, details));
        // Non-empty: we just pushed.
        &self.entries[self.entries.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries of one type, in insertion order.
    pub fn of_type(&self, event_type: EventType) -> impl Iterator<Item = &LogEntry> {
        self.iter().filter(move |e| e.event_type() == event_type)
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a LogEntry;
    type IntoIter = im::vector::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(key: &str, value: &str) -> Details {
        let mut d = Details::new();
        d.insert(key.to_string(), value.into());
        d
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = EventLog::new();
        log.append(1, Phase::Night, EventType::WwTarget, details("target", "A"));
        log.append(1, Phase::Night, EventType::Elimination, details("player", "A"));
        log.append(1, Phase::Day, EventType::Discussion, details("speaker", "B"));

        let kinds: Vec<_> = log.iter().map(LogEntry::event_type).collect();
        assert_eq!(
            kinds,
            vec![EventType::WwTarget, EventType::Elimination, EventType::Discussion]
        );
        assert_eq!(log.len(), 3);
        assert_eq!(log.last().unwrap().detail_str("speaker"), Some("B"));
    }

    #[test]
    fn test_clone_is_unaffected_by_later_appends() {
        let mut log = EventLog::new();
        log.append(1, Phase::Day, EventType::Vote, Details::new());

        let earlier = log.clone();
        log.append(1, Phase::Day, EventType::Vote, Details::new());

        assert_eq!(earlier.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_of_type_and_serialization() {
        let mut log = EventLog::new();
        log.append(1, Phase::Day, EventType::Vote, details("voter", "A"));
        log.append(1, Phase::Day, EventType::Discussion, details("speaker", "A"));
        log.append(1, Phase::Day, EventType::Vote, details("voter", "B"));

        assert_eq!(log.of_type(EventType::Vote).count(), 2);

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
        assert_eq!(json[2]["details"]["voter"], "B");
    }
}
