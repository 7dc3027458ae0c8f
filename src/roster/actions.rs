//! Roster network actions
//!
//! Each action validates locally before touching the network and returns
//! the server's record; the caller applies it to the `Roster`.

use super::CandidateDraft;
use crate::api::CandidateGateway;
use crate::error::{ApiResult, SubmitError};
use crate::models::Candidate;

pub async fn load_roster<G: CandidateGateway + ?Sized>(gateway: &G) -> ApiResult<Vec<Candidate>> {
    match gateway.list_candidates().await {
        Ok(list) => {
            log::info!("[ROSTER] Loaded {} candidates", list.len());
            Ok(list)
        }
        Err(e) => {
            log::error!("[ROSTER] Load failed: {}", e);
            Err(e)
        }
    }
}

pub async fn submit_create<G: CandidateGateway + ?Sized>(
    gateway: &G,
    draft: &CandidateDraft,
) -> Result<Candidate, SubmitError> {
    let payload = draft.to_create_payload()?;
    let created = gateway.create_candidate(&payload).await.map_err(|e| {
        log::error!("[ROSTER] Create failed: {}", e);
        e
    })?;
    log::info!("[ROSTER] Created candidate {:?}", created.id);
    Ok(created)
}

pub async fn submit_update<G: CandidateGateway + ?Sized>(
    gateway: &G,
    draft: &CandidateDraft,
) -> Result<Candidate, SubmitError> {
    let (id, payload) = draft.to_update_payload()?;
    let saved = gateway.update_candidate(id, &payload).await.map_err(|e| {
        log::error!("[ROSTER] Update of {} failed: {}", id, e);
        e
    })?;
    log::info!("[ROSTER] Updated candidate {}", id);
    Ok(saved)
}
