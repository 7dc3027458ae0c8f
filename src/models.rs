//! Frontend Models
//!
//! Data structures matching backend records. Wire names follow the backend
//! (Portuguese); Rust names describe the field.

use serde::{Deserialize, Deserializer};

/// Id carried by the synthetic "no data yet" row
pub const PLACEHOLDER_ID: i64 = -1;

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Roster status of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateStatus {
    /// Affiliated to the party
    #[default]
    Affiliated,
    /// Still negotiating affiliation
    Negotiating,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 2] = [CandidateStatus::Affiliated, CandidateStatus::Negotiating];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Affiliated => "Filiado",
            CandidateStatus::Negotiating => "Em negociação",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CandidateStatus::Affiliated => "Filiado",
            CandidateStatus::Negotiating => "Em Negociação",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CandidateStatus::Affiliated => "status-filiado",
            CandidateStatus::Negotiating => "status-negociacao",
        }
    }

    /// Case- and whitespace-insensitive match against the wire values
    pub fn parse(value: &str) -> Option<Self> {
        let key = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|s| s.as_str().to_lowercase() == key)
    }
}

/// Editable text columns, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateField {
    Slot,
    Position,
    BallotName,
    MaxVotes,
    MinVotes,
    HistoricalVotes,
    Office,
    Year,
    ProjectedFund,
    HistoricalFund,
    Stronghold,
    Party,
    Gender,
}

impl CandidateField {
    pub const TABLE_ORDER: [CandidateField; 13] = [
        CandidateField::Slot,
        CandidateField::Position,
        CandidateField::BallotName,
        CandidateField::MaxVotes,
        CandidateField::MinVotes,
        CandidateField::HistoricalVotes,
        CandidateField::Office,
        CandidateField::Year,
        CandidateField::ProjectedFund,
        CandidateField::HistoricalFund,
        CandidateField::Stronghold,
        CandidateField::Party,
        CandidateField::Gender,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CandidateField::Slot => "Vagas",
            CandidateField::Position => "Posição",
            CandidateField::BallotName => "Nome de Urna",
            CandidateField::MaxVotes => "Voto Proj. MAX.",
            CandidateField::MinVotes => "Voto Proj. MIN.",
            CandidateField::HistoricalVotes => "Hist. Votação",
            CandidateField::Office => "Cargo Disputado",
            CandidateField::Year => "Ano",
            CandidateField::ProjectedFund => "FEFC Projetado",
            CandidateField::HistoricalFund => "Histórico FEFC",
            CandidateField::Stronghold => "Reduto",
            CandidateField::Party => "Partido",
            CandidateField::Gender => "Gênero",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            CandidateField::Slot => "Vaga/ID",
            CandidateField::Position => "Posição",
            CandidateField::BallotName => "Nome",
            CandidateField::MaxVotes => "Max",
            CandidateField::MinVotes => "Min",
            CandidateField::HistoricalVotes => "Histórico",
            CandidateField::Office => "Cargo",
            CandidateField::Year => "Ano",
            CandidateField::ProjectedFund => "FEFC Proj.",
            CandidateField::HistoricalFund => "Hist. FEFC",
            CandidateField::Stronghold => "Reduto",
            CandidateField::Party => "Partido",
            CandidateField::Gender => "Gênero",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            CandidateField::Position => "number",
            _ => "text",
        }
    }
}

/// Candidate on the roster (matches backend grid record)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "vaga", default, deserialize_with = "text")]
    pub slot: String,
    #[serde(rename = "posicao_candidato", default)]
    pub position: Option<i64>,
    #[serde(rename = "nome_urna", default, deserialize_with = "text")]
    pub ballot_name: String,
    #[serde(rename = "voto_proj_max", default, deserialize_with = "text")]
    pub max_votes: String,
    #[serde(rename = "voto_proj_min", default, deserialize_with = "text")]
    pub min_votes: String,
    #[serde(rename = "historico_votos", default, deserialize_with = "text")]
    pub historical_votes: String,
    #[serde(rename = "cargo_disputado", default, deserialize_with = "text")]
    pub office: String,
    #[serde(rename = "ano", default, deserialize_with = "text")]
    pub year: String,
    #[serde(rename = "fefc_projetado", default, deserialize_with = "text")]
    pub projected_fund: String,
    #[serde(rename = "fefc_historico", default, deserialize_with = "text")]
    pub historical_fund: String,
    #[serde(rename = "reduto", default, deserialize_with = "text")]
    pub stronghold: String,
    #[serde(rename = "partido", default, deserialize_with = "text")]
    pub party: String,
    #[serde(rename = "genero", default, deserialize_with = "text")]
    pub gender: String,
    #[serde(rename = "raca", default, deserialize_with = "text")]
    pub race: String,
    #[serde(default, deserialize_with = "text")]
    pub status: String,
    #[serde(rename = "has_info", default, deserialize_with = "flag")]
    pub has_note: bool,
}

impl Candidate {
    /// The synthetic row shown while no real data exists
    pub fn placeholder() -> Self {
        let dash = || "-".to_string();
        Self {
            id: Some(PLACEHOLDER_ID),
            slot: dash(),
            position: None,
            ballot_name: "Carregando candidatos...".to_string(),
            max_votes: dash(),
            min_votes: dash(),
            historical_votes: dash(),
            office: dash(),
            year: dash(),
            projected_fund: dash(),
            historical_fund: dash(),
            stronghold: dash(),
            party: dash(),
            gender: dash(),
            race: dash(),
            status: CandidateStatus::Affiliated.as_str().to_string(),
            has_note: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == Some(PLACEHOLDER_ID)
    }

    /// Server-assigned id; `None` for the placeholder and unsaved rows
    pub fn real_id(&self) -> Option<i64> {
        self.id.filter(|id| *id != PLACEHOLDER_ID)
    }

    pub fn parsed_status(&self) -> Option<CandidateStatus> {
        CandidateStatus::parse(&self.status)
    }

    /// Table cell text for a column
    pub fn display(&self, field: CandidateField) -> String {
        let value = match field {
            CandidateField::Position => {
                return self.position.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
            }
            CandidateField::Slot => &self.slot,
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
        };
        if value.trim().is_empty() {
            "-".to_string()
        } else {
            value.clone()
        }
    }
}

/// Raw row from the 2022 SP candidates dataset (autocomplete source)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SuggestionRecord {
    pub id: i64,
    #[serde(rename = "uf", default)]
    pub state: Option<String>,
    #[serde(rename = "candidato", default)]
    pub name: Option<String>,
    #[serde(rename = "historico_de_votos", default)]
    pub historical_votes: Option<i64>,
    #[serde(rename = "cargo", default)]
    pub office: Option<String>,
    #[serde(rename = "ano", default)]
    pub year: Option<i64>,
    #[serde(rename = "historico_de_fefc", default)]
    pub historical_fund: Option<i64>,
    #[serde(rename = "partido", default)]
    pub party: Option<String>,
    #[serde(rename = "genero", default)]
    pub gender: Option<String>,
    #[serde(rename = "raca_cor", default)]
    pub race: Option<String>,
    #[serde(rename = "situacao", default)]
    pub situation: Option<String>,
}

/// Autocomplete option shown under the search box
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub id: i64,
    pub name: String,
    pub party: String,
    pub office: String,
    pub raw: SuggestionRecord,
}

impl From<SuggestionRecord> for Suggestion {
    fn from(raw: SuggestionRecord) -> Self {
        Self {
            id: raw.id,
            name: raw.name.clone().unwrap_or_default(),
            party: raw.party.clone().unwrap_or_default(),
            office: raw.office.clone().unwrap_or_default(),
            raw,
        }
    }
}

/// Non-elected state representative, 2022
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StateLeaderRecord {
    pub id: i64,
    #[serde(rename = "uf", default)]
    pub state: Option<String>,
    #[serde(rename = "candidato", default)]
    pub name: Option<String>,
    #[serde(rename = "historico_de_votos", default)]
    pub votes: Option<i64>,
    #[serde(rename = "cargo", default)]
    pub office: Option<String>,
    #[serde(rename = "historico_de_fefc", default)]
    pub fund: Option<i64>,
    #[serde(rename = "partido", default)]
    pub party: Option<String>,
    #[serde(rename = "genero", default)]
    pub gender: Option<String>,
    #[serde(rename = "situacao", default)]
    pub situation: Option<String>,
}

/// SP candidate result, 2022 or 2024
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FederalHistoryRecord {
    pub id: i64,
    #[serde(rename = "ano", default)]
    pub year: Option<i64>,
    #[serde(rename = "nome", default)]
    pub full_name: Option<String>,
    #[serde(rename = "nome_urna", default)]
    pub ballot_name: Option<String>,
    #[serde(rename = "raca", default)]
    pub race: Option<String>,
    #[serde(rename = "genero", default)]
    pub gender: Option<String>,
    #[serde(rename = "cargo", default)]
    pub office: Option<String>,
    #[serde(rename = "partido", default)]
    pub party: Option<String>,
    #[serde(rename = "resultado_agregado", default)]
    pub outcome: Option<String>,
    #[serde(rename = "votos", default)]
    pub votes: Option<i64>,
    #[serde(rename = "fundo_total", default)]
    pub total_fund: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_decodes_nulls_as_blank() {
        let json = r#"{
            "id": 7, "vaga": null, "posicao_candidato": 3, "nome_urna": "Maria",
            "voto_proj_max": "12000", "voto_proj_min": null, "historico_votos": null,
            "cargo_disputado": "Deputado Federal", "ano": "2026", "fefc_projetado": null,
            "fefc_historico": null, "reduto": "Campinas", "partido": "PODE",
            "genero": "Feminino", "raca": "Parda", "status": "Filiado", "has_info": null
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();

        assert_eq!(candidate.real_id(), Some(7));
        assert_eq!(candidate.position, Some(3));
        assert_eq!(candidate.slot, "");
        assert_eq!(candidate.max_votes, "12000");
        assert!(!candidate.has_note);
        assert_eq!(candidate.parsed_status(), Some(CandidateStatus::Affiliated));
    }

    #[test]
    fn test_candidate_tolerates_missing_fields() {
        let candidate: Candidate = serde_json::from_str(r#"{"id": 1, "nome_urna": "Ana"}"#).unwrap();
        assert_eq!(candidate.position, None);
        assert_eq!(candidate.status, "");
        assert_eq!(candidate.display(CandidateField::Party), "-");
        assert_eq!(candidate.display(CandidateField::Position), "-");
    }

    #[test]
    fn test_placeholder_has_no_real_id() {
        let placeholder = Candidate::placeholder();
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.real_id(), None);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(CandidateStatus::parse(" filiado "), Some(CandidateStatus::Affiliated));
        assert_eq!(CandidateStatus::parse("EM NEGOCIAÇÃO"), Some(CandidateStatus::Negotiating));
        assert_eq!(CandidateStatus::parse("NÃO ELEITO"), None);
    }

    #[test]
    fn test_suggestion_from_record() {
        let raw: SuggestionRecord = serde_json::from_str(
            r#"{"id": 9, "uf": "SP", "candidato": "Ana Souza", "cargo": "Deputado Federal",
                "ano": 2022, "partido": "PODE", "raca_cor": "PRETA", "historico_de_votos": 15000}"#,
        )
        .unwrap();
        let suggestion = Suggestion::from(raw);

        assert_eq!(suggestion.id, 9);
        assert_eq!(suggestion.name, "Ana Souza");
        assert_eq!(suggestion.party, "PODE");
        assert_eq!(suggestion.office, "Deputado Federal");
        assert_eq!(suggestion.raw.historical_votes, Some(15000));
    }
}
