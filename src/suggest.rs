//! Address-suggestion sequencing
//!
//! The geocoding lookup itself is an external, debounced, cancelable call
//! owned by the UI. This module keeps the one piece that must be correct:
//! last-write-wins by request sequence. Each keystroke begins a new request
//! and invalidates every earlier in-flight one, so a slow response that
//! resolves late can never overwrite newer suggestions.

use crate::order::GeoPoint;

/// One suggestion returned by the mapping service
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub label: String,
    pub geo: GeoPoint,
}

/// Sequences lookups for one address input field
#[derive(Debug, Clone, Default)]
pub struct SuggestionSession {
    next_ticket: u64,
    latest: Option<u64>,
    suggestions: Vec<Suggestion>,
}

impl SuggestionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a lookup; the returned ticket supersedes all earlier ones
    pub fn begin(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.latest = Some(ticket);
        ticket
    }

    /// Apply results for `ticket`. Stale tickets are ignored and leave the
    /// current suggestions untouched; returns whether the results applied.
    pub fn resolve(&mut self, ticket: u64, results: Vec<Suggestion>) -> bool {
        if self.latest != Some(ticket) {
            return false;
        }
        self.suggestions = results;
        true
    }

    /// Record a failed lookup: current suggestions clear, stale failures
    /// are ignored
    pub fn fail(&mut self, ticket: u64) {
        if self.latest == Some(ticket) {
            self.suggestions.clear();
        }
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Drop everything, e.g. when the input field empties
    pub fn clear(&mut self) {
        self.latest = None;
        self.suggestions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(label: &str) -> Suggestion {
        Suggestion {
            label: label.to_string(),
            geo: GeoPoint { lat: 0.0, lon: 0.0 },
        }
    }

    #[test]
    fn test_latest_ticket_wins() {
        let mut session = SuggestionSession::new();
        let first = session.begin();
        let second = session.begin();

        // The newer request resolves first
        assert!(session.resolve(second, vec![suggestion("new")]));
        // The older one arrives late and is ignored
        assert!(!session.resolve(first, vec![suggestion("stale")]));

        assert_eq!(session.suggestions(), &[suggestion("new")]);
    }

    #[test]
    fn test_failure_leaves_empty_not_error() {
        let mut session = SuggestionSession::new();
        let ticket = session.begin();
        assert!(session.resolve(ticket, vec![suggestion("a")]));

        let newer = session.begin();
        session.fail(newer);
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_stale_failure_ignored() {
        let mut session = SuggestionSession::new();
        let old = session.begin();
        let newer = session.begin();
        assert!(session.resolve(newer, vec![suggestion("kept")]));

        session.fail(old);
        assert_eq!(session.suggestions().len(), 1);
    }

    #[test]
    fn test_clear_invalidates_in_flight() {
        let mut session = SuggestionSession::new();
        let ticket = session.begin();
        session.clear();
        assert!(!session.resolve(ticket, vec![suggestion("late")]));
        assert!(session.suggestions().is_empty());
    }
}
