//! In-memory gateway for tests. Records every call.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use web_sys::AbortSignal;

use super::CandidateGateway;
use crate::error::{ApiError, ApiResult};
use crate::models::{Candidate, FederalHistoryRecord, StateLeaderRecord, Suggestion};
use crate::roster::CandidatePayload;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(CandidatePayload),
    Update(i64, CandidatePayload),
    Search(String),
    StateLeaders,
    FederalHistory,
}

pub struct MockGateway {
    pub calls: RefCell<Vec<Call>>,
    pub roster: ApiResult<Vec<Candidate>>,
    pub suggestions: ApiResult<Vec<Suggestion>>,
    /// Returned by create/update instead of echoing the payload
    pub write_error: Option<ApiError>,
    pub next_id: Cell<i64>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            roster: Ok(Vec::new()),
            suggestions: Ok(Vec::new()),
            write_error: None,
            next_id: Cell::new(100),
        }
    }
}

impl MockGateway {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn stored(id: i64, payload: &CandidatePayload) -> Candidate {
        Candidate {
            id: Some(id),
            position: Some(payload.position),
            ballot_name: payload.ballot_name.clone(),
            party: payload.party.clone().unwrap_or_default(),
            gender: payload.gender.clone().unwrap_or_default(),
            race: payload.race.clone().unwrap_or_default(),
            status: payload.status.clone().unwrap_or_default(),
            has_note: payload.has_note,
            ..Default::default()
        }
    }
}

#[async_trait(?Send)]
impl CandidateGateway for MockGateway {
    async fn list_candidates(&self) -> ApiResult<Vec<Candidate>> {
        self.record(Call::List);
        self.roster.clone()
    }

    async fn create_candidate(&self, payload: &CandidatePayload) -> ApiResult<Candidate> {
        self.record(Call::Create(payload.clone()));
        if let Some(err) = &self.write_error {
            return Err(err.clone());
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(Self::stored(id, payload))
    }

    async fn update_candidate(&self, id: i64, payload: &CandidatePayload) -> ApiResult<Candidate> {
        self.record(Call::Update(id, payload.clone()));
        if let Some(err) = &self.write_error {
            return Err(err.clone());
        }
        Ok(Self::stored(id, payload))
    }

    async fn search_suggestions(
        &self,
        term: &str,
        _abort: Option<&AbortSignal>,
    ) -> ApiResult<Vec<Suggestion>> {
        self.record(Call::Search(term.to_string()));
        self.suggestions.clone()
    }

    async fn list_state_leaders(&self) -> ApiResult<Vec<StateLeaderRecord>> {
        self.record(Call::StateLeaders);
        Ok(Vec::new())
    }

    async fn list_federal_history(&self) -> ApiResult<Vec<FederalHistoryRecord>> {
        self.record(Call::FederalHistory);
        Ok(Vec::new())
    }
}
