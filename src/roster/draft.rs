//! Candidate Draft
//!
//! Form state for the add and edit forms. Every field is held as entered;
//! validation turns a draft into the wire payload.

use serde::Serialize;

use crate::error::ValidationError;
use crate::models::{Candidate, CandidateField, CandidateStatus, Suggestion};
use crate::normalize::normalize_race;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateDraft {
    /// Server id when editing an existing record
    pub id: Option<i64>,
    pub slot: String,
    pub position: String,
    pub ballot_name: String,
    pub max_votes: String,
    pub min_votes: String,
    pub historical_votes: String,
    pub office: String,
    pub year: String,
    pub projected_fund: String,
    pub historical_fund: String,
    pub stronghold: String,
    pub party: String,
    pub gender: String,
    pub race: String,
    pub status: CandidateStatus,
    pub has_note: bool,
}

/// Body for create and update requests. Blank text is sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidatePayload {
    #[serde(rename = "vaga")]
    pub slot: Option<String>,
    #[serde(rename = "nome_urna")]
    pub ballot_name: String,
    #[serde(rename = "voto_proj_max")]
    pub max_votes: Option<String>,
    #[serde(rename = "voto_proj_min")]
    pub min_votes: Option<String>,
    #[serde(rename = "historico_votos")]
    pub historical_votes: Option<String>,
    #[serde(rename = "cargo_disputado")]
    pub office: Option<String>,
    #[serde(rename = "ano")]
    pub year: Option<String>,
    #[serde(rename = "fefc_projetado")]
    pub projected_fund: Option<String>,
    #[serde(rename = "fefc_historico")]
    pub historical_fund: Option<String>,
    #[serde(rename = "reduto")]
    pub stronghold: Option<String>,
    #[serde(rename = "partido")]
    pub party: Option<String>,
    #[serde(rename = "genero")]
    pub gender: Option<String>,
    #[serde(rename = "raca")]
    pub race: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "has_info")]
    pub has_note: bool,
    #[serde(rename = "posicao_candidato")]
    pub position: i64,
}

fn blank_to_none(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn opt_to_text<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl CandidateDraft {
    /// Snapshot of an existing record for inline editing
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            id: candidate.real_id(),
            slot: candidate.slot.clone(),
            position: opt_to_text(candidate.position),
            ballot_name: candidate.ballot_name.clone(),
            max_votes: candidate.max_votes.clone(),
            min_votes: candidate.min_votes.clone(),
            historical_votes: candidate.historical_votes.clone(),
            office: candidate.office.clone(),
            year: candidate.year.clone(),
            projected_fund: candidate.projected_fund.clone(),
            historical_fund: candidate.historical_fund.clone(),
            stronghold: candidate.stronghold.clone(),
            party: candidate.party.clone(),
            gender: candidate.gender.clone(),
            race: normalize_race(&candidate.race).to_string(),
            status: candidate.parsed_status().unwrap_or_default(),
            has_note: candidate.has_note,
        }
    }

    /// Pre-filled add form from a picked autocomplete suggestion
    pub fn from_suggestion(suggestion: &Suggestion) -> Self {
        let raw = &suggestion.raw;
        let race = raw
            .race
            .as_deref()
            .map(normalize_race)
            .filter(|r| !r.is_empty())
            .unwrap_or("");
        Self {
            ballot_name: raw.name.clone().unwrap_or_else(|| suggestion.name.clone()),
            historical_votes: opt_to_text(raw.historical_votes),
            office: raw.office.clone().unwrap_or_else(|| suggestion.office.clone()),
            year: opt_to_text(raw.year),
            historical_fund: opt_to_text(raw.historical_fund),
            party: raw.party.clone().unwrap_or_else(|| suggestion.party.clone()),
            gender: raw.gender.clone().unwrap_or_default(),
            race: race.to_string(),
            status: raw
                .situation
                .as_deref()
                .and_then(CandidateStatus::parse)
                .unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn field(&self, field: CandidateField) -> &str {
        match field {
            CandidateField::Slot => &self.slot,
            CandidateField::Position => &self.position,
            CandidateField::BallotName => &self.ballot_name,
            CandidateField::MaxVotes => &self.max_votes,
            CandidateField::MinVotes => &self.min_votes,
            CandidateField::HistoricalVotes => &self.historical_votes,
            CandidateField::Office => &self.office,
            CandidateField::Year => &self.year,
            CandidateField::ProjectedFund => &self.projected_fund,
            CandidateField::HistoricalFund => &self.historical_fund,
            CandidateField::Stronghold => &self.stronghold,
            CandidateField::Party => &self.party,
            CandidateField::Gender => &self.gender,
        }
    }

    pub fn set_field(&mut self, field: CandidateField, value: String) {
        let slot = match field {
            CandidateField::Slot => &mut self.slot,
            CandidateField::Position => &mut self.position,
            CandidateField::BallotName => &mut self.ballot_name,
            CandidateField::MaxVotes => &mut self.max_votes,
            CandidateField::MinVotes => &mut self.min_votes,
            CandidateField::HistoricalVotes => &mut self.historical_votes,
            CandidateField::Office => &mut self.office,
            CandidateField::Year => &mut self.year,
            CandidateField::ProjectedFund => &mut self.projected_fund,
            CandidateField::HistoricalFund => &mut self.historical_fund,
            CandidateField::Stronghold => &mut self.stronghold,
            CandidateField::Party => &mut self.party,
            CandidateField::Gender => &mut self.gender,
        };
        *slot = value;
    }

    /// Race input is stored normalized; unknown values become blank
    pub fn set_race(&mut self, value: &str) {
        self.race = normalize_race(value).to_string();
    }

    /// Validate for creation
    pub fn to_create_payload(&self) -> Result<CandidatePayload, ValidationError> {
        let ballot_name = self.ballot_name.trim();
        if ballot_name.is_empty() {
            return Err(ValidationError::MissingBallotName);
        }
        let position = self.parse_position()?;
        Ok(self.payload(ballot_name, position))
    }

    /// Validate for update; the record must carry its server id
    pub fn to_update_payload(&self) -> Result<(i64, CandidatePayload), ValidationError> {
        let payload = self.to_create_payload()?;
        let id = self.id.ok_or(ValidationError::MissingId)?;
        Ok((id, payload))
    }

    fn parse_position(&self) -> Result<i64, ValidationError> {
        self.position
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidPosition)
    }

    fn payload(&self, ballot_name: &str, position: i64) -> CandidatePayload {
        CandidatePayload {
            slot: blank_to_none(&self.slot),
            ballot_name: ballot_name.to_string(),
            max_votes: blank_to_none(&self.max_votes),
            min_votes: blank_to_none(&self.min_votes),
            historical_votes: blank_to_none(&self.historical_votes),
            office: blank_to_none(&self.office),
            year: blank_to_none(&self.year),
            projected_fund: blank_to_none(&self.projected_fund),
            historical_fund: blank_to_none(&self.historical_fund),
            stronghold: blank_to_none(&self.stronghold),
            party: blank_to_none(&self.party),
            gender: blank_to_none(&self.gender),
            race: blank_to_none(&self.race),
            status: Some(self.status.as_str().to_string()),
            has_note: self.has_note,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SuggestionRecord;

    fn named(name: &str, position: &str) -> CandidateDraft {
        CandidateDraft {
            ballot_name: name.to_string(),
            position: position.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_ballot_name() {
        assert_eq!(named("", "3").to_create_payload(), Err(ValidationError::MissingBallotName));
        assert_eq!(named("   ", "3").to_create_payload(), Err(ValidationError::MissingBallotName));
    }

    #[test]
    fn test_requires_numeric_position() {
        assert_eq!(named("Maria", "abc").to_create_payload(), Err(ValidationError::InvalidPosition));
        assert_eq!(named("Maria", "").to_create_payload(), Err(ValidationError::InvalidPosition));
    }

    #[test]
    fn test_payload_trims_name_and_nulls_blanks() {
        let mut draft = named("  Maria  ", " 3 ");
        draft.party = "PODE".to_string();
        draft.has_note = true;

        let payload = draft.to_create_payload().unwrap();
        assert_eq!(payload.ballot_name, "Maria");
        assert_eq!(payload.position, 3);
        assert_eq!(payload.party.as_deref(), Some("PODE"));
        assert_eq!(payload.slot, None);
        assert_eq!(payload.status.as_deref(), Some("Filiado"));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["nome_urna"], "Maria");
        assert_eq!(json["posicao_candidato"], 3);
        assert_eq!(json["vaga"], serde_json::Value::Null);
        assert_eq!(json["has_info"], true);
    }

    #[test]
    fn test_update_requires_id() {
        let draft = named("Maria", "3");
        assert_eq!(draft.to_update_payload(), Err(ValidationError::MissingId));

        let draft = CandidateDraft { id: Some(5), ..named("Maria", "3") };
        let (id, payload) = draft.to_update_payload().unwrap();
        assert_eq!(id, 5);
        assert_eq!(payload.position, 3);
    }

    #[test]
    fn test_update_checks_name_before_id() {
        let draft = named("", "x");
        assert_eq!(draft.to_update_payload(), Err(ValidationError::MissingBallotName));
    }

    #[test]
    fn test_snapshot_of_candidate() {
        let candidate = Candidate {
            id: Some(4),
            position: Some(2),
            ballot_name: "João".to_string(),
            race: "parda".to_string(),
            status: "Em negociação".to_string(),
            ..Default::default()
        };
        let draft = CandidateDraft::from_candidate(&candidate);

        assert_eq!(draft.id, Some(4));
        assert_eq!(draft.position, "2");
        assert_eq!(draft.race, "Parda");
        assert_eq!(draft.status, CandidateStatus::Negotiating);
    }

    #[test]
    fn test_prefill_from_suggestion() {
        let raw = SuggestionRecord {
            id: 11,
            name: Some("Ana Souza".to_string()),
            historical_votes: Some(15000),
            office: Some("Deputado Federal".to_string()),
            year: Some(2022),
            historical_fund: Some(200000),
            party: Some("PODE".to_string()),
            gender: Some("Feminino".to_string()),
            race: Some("PRETA".to_string()),
            situation: Some("NÃO ELEITO".to_string()),
            ..Default::default()
        };
        let draft = CandidateDraft::from_suggestion(&Suggestion::from(raw));

        assert_eq!(draft.id, None);
        assert_eq!(draft.ballot_name, "Ana Souza");
        assert_eq!(draft.historical_votes, "15000");
        assert_eq!(draft.year, "2022");
        assert_eq!(draft.historical_fund, "200000");
        assert_eq!(draft.race, "Preta");
        assert_eq!(draft.status, CandidateStatus::Affiliated);
        assert_eq!(draft.position, "");
    }

    #[test]
    fn test_set_race_normalizes() {
        let mut draft = CandidateDraft::default();
        draft.set_race("indigena");
        assert_eq!(draft.race, "Indígena");
        draft.set_race("verde");
        assert_eq!(draft.race, "");
    }
}
