//! Backend Gateway
//!
//! Typed access to the roster CRUD API and the historical datasets.

mod http;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use web_sys::AbortSignal;

use crate::error::ApiResult;
use crate::models::{Candidate, FederalHistoryRecord, StateLeaderRecord, Suggestion};
use crate::roster::CandidatePayload;

pub use http::{decode_list, decode_one, is_json_content_type, HttpGateway};

/// Calls the dashboard makes against the backend. Futures are not `Send`:
/// everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait CandidateGateway {
    /// GET the full roster
    async fn list_candidates(&self) -> ApiResult<Vec<Candidate>>;

    /// POST a new candidate, returning the stored record
    async fn create_candidate(&self, payload: &CandidatePayload) -> ApiResult<Candidate>;

    /// PUT the full record for `id`, returning the stored record
    async fn update_candidate(&self, id: i64, payload: &CandidatePayload) -> ApiResult<Candidate>;

    /// Autocomplete lookup; `abort` cancels the request when signalled
    async fn search_suggestions(
        &self,
        term: &str,
        abort: Option<&AbortSignal>,
    ) -> ApiResult<Vec<Suggestion>>;

    async fn list_state_leaders(&self) -> ApiResult<Vec<StateLeaderRecord>>;

    async fn list_federal_history(&self) -> ApiResult<Vec<FederalHistoryRecord>>;
}
