//! Autocomplete State
//!
//! Debounced suggestion lookup for the roster search box. Each change of the
//! search term starts a new cycle identified by a ticket; only the newest
//! ticket may fire its request or apply its response.

use crate::config::AUTOCOMPLETE_MIN_CHARS;
use crate::error::{ApiError, ApiResult};
use crate::models::Suggestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Nothing to look up
    #[default]
    Idle,
    /// Quiet-period timer armed
    Pending,
    /// Request sent
    InFlight,
    /// Options hold the latest response
    Resolved,
}

/// One debounce cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub ticket: SearchTicket,
    pub term: String,
}

/// What happened to a response
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Options replaced with this many suggestions
    Applied(usize),
    /// A newer cycle started; response dropped
    Stale,
    /// Request was aborted; nothing to report
    Cancelled,
    /// Request failed; previous options kept
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Autocomplete {
    term: String,
    generation: u64,
    phase: SearchPhase,
    options: Vec<Suggestion>,
    selected: Option<Suggestion>,
}

impl Autocomplete {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn options(&self) -> &[Suggestion] {
        &self.options
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::InFlight
    }

    /// A lookup completed and found nothing
    pub fn shows_no_results(&self) -> bool {
        self.phase == SearchPhase::Resolved && self.options.is_empty()
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Record a new search term. Supersedes any armed timer or in-flight
    /// request and returns the ticket for the next quiet period, or `None`
    /// when the term is too short to look up.
    pub fn set_term(&mut self, term: &str) -> Option<SearchTicket> {
        self.term = term.to_string();
        self.generation += 1;

        let trimmed = term.trim();
        let keeps_selection = self
            .selected
            .as_ref()
            .is_some_and(|s| s.name.to_lowercase() == trimmed.to_lowercase());
        if !keeps_selection {
            self.selected = None;
        }

        if trimmed.chars().count() < AUTOCOMPLETE_MIN_CHARS {
            self.options.clear();
            self.phase = SearchPhase::Idle;
            return None;
        }

        self.phase = SearchPhase::Pending;
        Some(SearchTicket(self.generation))
    }

    /// The quiet period for `ticket` elapsed. Returns the query to send if
    /// the ticket is still current.
    pub fn fire(&mut self, ticket: SearchTicket) -> Option<SearchQuery> {
        if !self.is_current(ticket) || self.phase != SearchPhase::Pending {
            return None;
        }
        self.phase = SearchPhase::InFlight;
        Some(SearchQuery {
            ticket,
            term: self.term.trim().to_string(),
        })
    }

    pub fn resolve(
        &mut self,
        ticket: SearchTicket,
        result: ApiResult<Vec<Suggestion>>,
    ) -> Resolution {
        if matches!(&result, Err(e) if e.is_cancelled()) {
            return Resolution::Cancelled;
        }
        if !self.is_current(ticket) {
            return Resolution::Stale;
        }
        match result {
            Ok(options) => {
                let count = options.len();
                self.options = options;
                self.phase = SearchPhase::Resolved;
                Resolution::Applied(count)
            }
            Err(e) => {
                self.phase = SearchPhase::Idle;
                Resolution::Failed(e)
            }
        }
    }

    /// Take a suggestion: the term becomes its name and the list closes.
    /// Any pending lookup is superseded and no new one starts.
    pub fn select(&mut self, suggestion: Suggestion) {
        self.term = suggestion.name.clone();
        self.generation += 1;
        self.options.clear();
        self.phase = SearchPhase::Idle;
        self.selected = Some(suggestion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SuggestionRecord;

    fn suggestion(id: i64, name: &str) -> Suggestion {
        Suggestion::from(SuggestionRecord {
            id,
            name: Some(name.to_string()),
            party: Some("PODE".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_typing_within_quiet_period_issues_one_query() {
        let mut ac = Autocomplete::default();
        let first = ac.set_term("An").unwrap();
        let second = ac.set_term("Ana").unwrap();

        let mut sent = Vec::new();
        for ticket in [first, second] {
            if let Some(query) = ac.fire(ticket) {
                sent.push(query);
            }
        }

        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].term, "Ana");
        assert_eq!(sent[0].ticket, second);
        assert!(ac.is_loading());
    }

    #[test]
    fn test_short_terms_never_query() {
        let mut ac = Autocomplete::default();
        let ticket = ac.set_term("Ana").unwrap();
        ac.fire(ticket).unwrap();
        ac.resolve(ticket, Ok(vec![suggestion(1, "Ana Souza")]));
        assert_eq!(ac.options().len(), 1);

        assert_eq!(ac.set_term("A"), None);
        assert!(ac.options().is_empty());
        assert_eq!(ac.phase(), SearchPhase::Idle);

        assert_eq!(ac.set_term("   "), None);
        assert_eq!(ac.set_term(" A "), None);
    }

    #[test]
    fn test_query_term_is_trimmed() {
        let mut ac = Autocomplete::default();
        let ticket = ac.set_term("  Maria ").unwrap();
        assert_eq!(ac.fire(ticket).unwrap().term, "Maria");
        assert_eq!(ac.term(), "  Maria ");
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut ac = Autocomplete::default();
        let ticket = ac.set_term("Ana").unwrap();
        assert!(ac.fire(ticket).is_some());
        assert!(ac.fire(ticket).is_none());
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut ac = Autocomplete::default();
        let old = ac.set_term("Ana").unwrap();
        ac.fire(old).unwrap();
        let new = ac.set_term("Ana S").unwrap();

        let outcome = ac.resolve(old, Ok(vec![suggestion(1, "Ana Lima")]));
        assert_eq!(outcome, Resolution::Stale);
        assert!(ac.options().is_empty());
        assert_eq!(ac.phase(), SearchPhase::Pending);

        ac.fire(new).unwrap();
        assert_eq!(ac.resolve(new, Ok(vec![suggestion(2, "Ana Souza")])), Resolution::Applied(1));
        assert_eq!(ac.options()[0].name, "Ana Souza");
    }

    #[test]
    fn test_abort_is_silent_even_for_current_ticket() {
        let mut ac = Autocomplete::default();
        let ticket = ac.set_term("Ana").unwrap();
        ac.fire(ticket).unwrap();

        assert_eq!(ac.resolve(ticket, Err(ApiError::Aborted)), Resolution::Cancelled);
    }

    #[test]
    fn test_failure_keeps_previous_options() {
        let mut ac = Autocomplete::default();
        let first = ac.set_term("Ana").unwrap();
        ac.fire(first).unwrap();
        ac.resolve(first, Ok(vec![suggestion(1, "Ana Souza"), suggestion(2, "Ana Lima")]));

        let second = ac.set_term("Ana L").unwrap();
        ac.fire(second).unwrap();
        let outcome = ac.resolve(second, Err(ApiError::Status { status: 502, url: "/x".into() }));

        assert!(matches!(outcome, Resolution::Failed(ApiError::Status { status: 502, .. })));
        assert_eq!(ac.options().len(), 2);
        assert!(!ac.is_loading());
    }

    #[test]
    fn test_empty_result_reports_no_results() {
        let mut ac = Autocomplete::default();
        let ticket = ac.set_term("Zz").unwrap();
        assert!(!ac.shows_no_results());
        ac.fire(ticket).unwrap();
        ac.resolve(ticket, Ok(vec![]));
        assert!(ac.shows_no_results());
    }

    #[test]
    fn test_select_fills_term_and_closes_list() {
        let mut ac = Autocomplete::default();
        let ticket = ac.set_term("Ana").unwrap();
        ac.fire(ticket).unwrap();
        ac.resolve(ticket, Ok(vec![suggestion(1, "Ana Souza"), suggestion(2, "Ana Lima")]));

        ac.select(suggestion(1, "Ana Souza"));

        assert_eq!(ac.term(), "Ana Souza");
        assert!(ac.options().is_empty());
        assert_eq!(ac.selected().map(|s| s.id), Some(1));
        assert!(!ac.is_current(ticket));
    }

    #[test]
    fn test_select_supersedes_in_flight_request() {
        let mut ac = Autocomplete::default();
        let ticket = ac.set_term("Ana").unwrap();
        ac.fire(ticket).unwrap();
        ac.select(suggestion(1, "Ana Souza"));

        assert_eq!(ac.resolve(ticket, Ok(vec![suggestion(2, "Ana Lima")])), Resolution::Stale);
        assert!(ac.options().is_empty());
    }

    #[test]
    fn test_editing_away_from_selection_clears_it() {
        let mut ac = Autocomplete::default();
        ac.select(suggestion(1, "Ana Souza"));

        ac.set_term("ana souza ");
        assert!(ac.selected().is_some());

        ac.set_term("Ana Sou");
        assert!(ac.selected().is_none());
    }

    #[test]
    fn test_clearing_term_clears_selection() {
        let mut ac = Autocomplete::default();
        ac.select(suggestion(1, "Ana Souza"));
        assert_eq!(ac.set_term(""), None);
        assert!(ac.selected().is_none());
        assert_eq!(ac.phase(), SearchPhase::Idle);
    }
}
