//! Roster State
//!
//! The candidate list shown in the table, the fetch-failure flag, and the
//! single add/edit form session. All transitions are synchronous; network
//! calls live in `actions`.

mod actions;
mod draft;

pub use actions::{load_roster, submit_create, submit_update};
pub use draft::{CandidateDraft, CandidatePayload};

use crate::error::SessionConflict;
use crate::models::{Candidate, CandidateStatus, Suggestion};

/// The one form that may be open at a time
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormSession {
    #[default]
    Closed,
    Adding(CandidateDraft),
    /// Draft holds the edited record's id
    Editing(CandidateDraft),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    rows: Vec<Candidate>,
    fetch_failed: bool,
    session: FormSession,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            rows: vec![Candidate::placeholder()],
            fetch_failed: false,
            session: FormSession::Closed,
        }
    }
}

/// Stable ascending sort; rows without a position go last in their
/// original order.
pub fn sort_by_position(rows: &mut [Candidate]) {
    rows.sort_by_key(|c| (c.position.is_none(), c.position));
}

impl Roster {
    pub fn rows(&self) -> &[Candidate] {
        &self.rows
    }

    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn is_placeholder_only(&self) -> bool {
        self.rows.iter().all(Candidate::is_placeholder)
    }

    /// Replace the roster with a successful load
    pub fn apply_loaded(&mut self, mut list: Vec<Candidate>) {
        if list.is_empty() {
            self.rows = vec![Candidate::placeholder()];
        } else {
            sort_by_position(&mut list);
            self.rows = list;
        }
        self.fetch_failed = false;
    }

    /// Reset to the placeholder row and raise the failure banner
    pub fn apply_load_failure(&mut self) {
        self.rows = vec![Candidate::placeholder()];
        self.fetch_failed = true;
    }

    /// Rows whose ballot name contains `term`, ignoring case
    pub fn visible_rows(&self, term: &str) -> Vec<Candidate> {
        let needle = term.to_lowercase();
        self.rows
            .iter()
            .filter(|c| c.ballot_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn is_adding(&self) -> bool {
        matches!(self.session, FormSession::Adding(_))
    }

    pub fn editing_id(&self) -> Option<i64> {
        match &self.session {
            FormSession::Editing(draft) => draft.id,
            _ => None,
        }
    }

    pub fn has_open_form(&self) -> bool {
        self.session != FormSession::Closed
    }

    pub fn draft(&self) -> Option<&CandidateDraft> {
        match &self.session {
            FormSession::Adding(draft) | FormSession::Editing(draft) => Some(draft),
            FormSession::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut CandidateDraft> {
        match &mut self.session {
            FormSession::Adding(draft) | FormSession::Editing(draft) => Some(draft),
            FormSession::Closed => None,
        }
    }

    /// Open the add form, pre-filled from `prefill` when given. Reopening
    /// an add form resets its draft; an open edit form blocks it.
    pub fn begin_add(&mut self, prefill: Option<&Suggestion>) -> Result<(), SessionConflict> {
        if matches!(self.session, FormSession::Editing(_)) {
            return Err(SessionConflict);
        }
        let draft = prefill.map(CandidateDraft::from_suggestion).unwrap_or_default();
        self.session = FormSession::Adding(draft);
        Ok(())
    }

    /// Snapshot row `id` into an edit draft. Returns `Ok(false)` when no
    /// such real row exists.
    pub fn begin_edit(&mut self, id: i64) -> Result<bool, SessionConflict> {
        match &self.session {
            FormSession::Closed => {}
            FormSession::Editing(draft) if draft.id == Some(id) => return Ok(true),
            _ => return Err(SessionConflict),
        }
        let Some(candidate) = self.rows.iter().find(|c| c.real_id() == Some(id)) else {
            return Ok(false);
        };
        self.session = FormSession::Editing(CandidateDraft::from_candidate(candidate));
        Ok(true)
    }

    /// Discard the open draft; rows are untouched
    pub fn cancel_form(&mut self) {
        self.session = FormSession::Closed;
    }

    /// Merge a server-created record and close the add form
    pub fn insert_created(&mut self, created: Candidate) {
        self.rows.retain(|c| !c.is_placeholder());
        self.rows.push(created);
        sort_by_position(&mut self.rows);
        if self.is_adding() {
            self.session = FormSession::Closed;
        }
    }

    /// Replace the row with the same id and close its edit form
    pub fn apply_updated(&mut self, saved: Candidate) {
        let Some(id) = saved.real_id() else {
            return;
        };
        if self.editing_id() == Some(id) {
            self.session = FormSession::Closed;
        }
        if let Some(row) = self.rows.iter_mut().find(|c| c.real_id() == Some(id)) {
            *row = saved;
        }
        sort_by_position(&mut self.rows);
    }

    /// Local-only status change; ignored for the row being edited
    pub fn set_status(&mut self, id: i64, status: CandidateStatus) -> bool {
        if self.editing_id() == Some(id) {
            return false;
        }
        match self.rows.iter_mut().find(|c| c.real_id() == Some(id)) {
            Some(row) => {
                row.status = status.as_str().to_string();
                true
            }
            None => false,
        }
    }

    /// Local-only removal; cancels the edit form if it was for this row
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|c| c.real_id() != Some(id));
        if self.rows.len() == before {
            return false;
        }
        if self.editing_id() == Some(id) {
            self.session = FormSession::Closed;
        }
        if self.rows.is_empty() {
            self.rows.push(Candidate::placeholder());
        }
        true
    }
}
