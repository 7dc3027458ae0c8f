//! Historical Tables
//!
//! Display rows for the 2022/2024 result tables and the exact-match column
//! filters behind their dropdowns.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::format::{format_currency, format_number};
use crate::models::{FederalHistoryRecord, StateLeaderRecord};

pub const LOAD_ERROR: &str = "Erro ao carregar dados. Tente novamente mais tarde.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// A row whose columns can be filtered by exact value
pub trait Filterable {
    type Column: Copy + Eq + Hash;

    fn column_value(&self, column: Self::Column) -> &str;
}

/// Active dropdown selections, one per column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilters<C: Eq + Hash> {
    active: HashMap<C, String>,
}

impl<C: Eq + Hash> Default for ColumnFilters<C> {
    fn default() -> Self {
        Self { active: HashMap::new() }
    }
}

impl<C: Copy + Eq + Hash> ColumnFilters<C> {
    /// An empty value clears the column's filter
    pub fn set(&mut self, column: C, value: &str) {
        if value.is_empty() {
            self.active.remove(&column);
        } else {
            self.active.insert(column, value.to_string());
        }
    }

    /// Selected value, `""` when unfiltered
    pub fn get(&self, column: C) -> &str {
        self.active.get(&column).map(String::as_str).unwrap_or("")
    }

    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn matches<R: Filterable<Column = C>>(&self, row: &R) -> bool {
        self.active
            .iter()
            .all(|(column, value)| row.column_value(*column) == value)
    }

    /// Rows satisfying every active filter, in input order
    pub fn apply<R: Filterable<Column = C> + Clone>(&self, rows: &[R]) -> Vec<R> {
        rows.iter().filter(|row| self.matches(*row)).cloned().collect()
    }
}

/// Distinct sorted values of a column, skipping blanks and `-`
pub fn unique_values<R: Filterable>(rows: &[R], column: R::Column) -> Vec<String> {
    rows.iter()
        .map(|row| row.column_value(column))
        .filter(|value| !value.is_empty() && *value != "-")
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn or_dash(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderColumn {
    Party,
    Gender,
    Situation,
}

impl LeaderColumn {
    pub const ALL: [LeaderColumn; 3] = [LeaderColumn::Party, LeaderColumn::Gender, LeaderColumn::Situation];

    pub fn label(&self) -> &'static str {
        match self {
            LeaderColumn::Party => "Partido",
            LeaderColumn::Gender => "Gênero",
            LeaderColumn::Situation => "Situação",
        }
    }
}

/// Non-elected state representative as shown in the leaders table
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderRow {
    pub id: i64,
    pub name: String,
    pub party: String,
    pub votes: String,
    pub fund: String,
    pub gender: String,
    pub situation: String,
}

impl From<StateLeaderRecord> for LeaderRow {
    fn from(record: StateLeaderRecord) -> Self {
        Self {
            id: record.id,
            name: or_dash(record.name),
            party: or_dash(record.party),
            votes: format_number(record.votes),
            fund: format_currency(record.fund.map(|f| f as f64)),
            gender: or_dash(record.gender),
            situation: or_dash(record.situation),
        }
    }
}

impl Filterable for LeaderRow {
    type Column = LeaderColumn;

    fn column_value(&self, column: LeaderColumn) -> &str {
        match column {
            LeaderColumn::Party => &self.party,
            LeaderColumn::Gender => &self.gender,
            LeaderColumn::Situation => &self.situation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FederalColumn {
    Party,
    Gender,
    Race,
    Year,
    Office,
    Outcome,
}

impl FederalColumn {
    pub const ALL: [FederalColumn; 6] = [
        FederalColumn::Party,
        FederalColumn::Gender,
        FederalColumn::Race,
        FederalColumn::Year,
        FederalColumn::Office,
        FederalColumn::Outcome,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FederalColumn::Party => "Partido",
            FederalColumn::Gender => "Gênero",
            FederalColumn::Race => "Raça",
            FederalColumn::Year => "Ano",
            FederalColumn::Office => "Cargo",
            FederalColumn::Outcome => "Resultado",
        }
    }
}

/// SP candidate result as shown in the 2022/2024 table
#[derive(Debug, Clone, PartialEq)]
pub struct FederalRow {
    pub id: i64,
    pub full_name: String,
    pub ballot_name: String,
    pub party: String,
    pub votes: String,
    pub total_fund: String,
    pub office: String,
    pub gender: String,
    pub race: String,
    pub year: String,
    pub outcome: String,
}

impl From<FederalHistoryRecord> for FederalRow {
    fn from(record: FederalHistoryRecord) -> Self {
        let ballot_name = record
            .ballot_name
            .filter(|v| !v.trim().is_empty())
            .or_else(|| record.full_name.clone());
        Self {
            id: record.id,
            full_name: or_dash(record.full_name),
            ballot_name: or_dash(ballot_name),
            party: or_dash(record.party),
            votes: format_number(record.votes),
            total_fund: format_currency(record.total_fund),
            office: or_dash(record.office),
            gender: or_dash(record.gender),
            race: or_dash(record.race),
            year: or_dash(record.year.map(|y| y.to_string())),
            outcome: or_dash(record.outcome),
        }
    }
}

impl Filterable for FederalRow {
    type Column = FederalColumn;

    fn column_value(&self, column: FederalColumn) -> &str {
        match column {
            FederalColumn::Party => &self.party,
            FederalColumn::Gender => &self.gender,
            FederalColumn::Race => &self.race,
            FederalColumn::Year => &self.year,
            FederalColumn::Office => &self.office,
            FederalColumn::Outcome => &self.outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leader(id: i64, party: &str, gender: &str, situation: Option<&str>) -> LeaderRow {
        LeaderRow::from(StateLeaderRecord {
            id,
            name: Some(format!("Candidato {id}")),
            party: Some(party.to_string()),
            gender: Some(gender.to_string()),
            situation: situation.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_leader_row_formats_missing_and_numbers() {
        let row = LeaderRow::from(StateLeaderRecord {
            id: 1,
            name: Some("Ana".into()),
            votes: Some(48213),
            fund: Some(1250000),
            party: Some("  ".into()),
            ..Default::default()
        });

        assert_eq!(row.votes, "48.213");
        assert_eq!(row.fund, "R$ 1.250.000");
        assert_eq!(row.party, "-");
        assert_eq!(row.situation, "-");
    }

    #[test]
    fn test_federal_row_year_and_fund() {
        let row = FederalRow::from(FederalHistoryRecord {
            id: 3,
            year: Some(2024),
            total_fund: Some(35000.6),
            ..Default::default()
        });

        assert_eq!(row.year, "2024");
        assert_eq!(row.total_fund, "R$ 35.001");
        assert_eq!(row.votes, "-");
        assert_eq!(row.column_value(FederalColumn::Year), "2024");
    }

    #[test]
    fn test_federal_ballot_name_falls_back_to_full_name() {
        let row = FederalRow::from(FederalHistoryRecord {
            id: 4,
            full_name: Some("Maria da Silva".into()),
            ballot_name: Some(" ".into()),
            ..Default::default()
        });
        assert_eq!(row.ballot_name, "Maria da Silva");

        let row = FederalRow::from(FederalHistoryRecord {
            id: 5,
            full_name: Some("Maria da Silva".into()),
            ballot_name: Some("Maria".into()),
            ..Default::default()
        });
        assert_eq!(row.ballot_name, "Maria");

        let row = FederalRow::from(FederalHistoryRecord { id: 6, ..Default::default() });
        assert_eq!(row.ballot_name, "-");
    }

    #[test]
    fn test_unique_values_sorted_without_blanks() {
        let rows = vec![
            leader(1, "PT", "Masculino", Some("SUPLENTE")),
            leader(2, "PL", "Feminino", None),
            leader(3, "PT", "Feminino", Some("NÃO ELEITO")),
        ];

        assert_eq!(unique_values(&rows, LeaderColumn::Party), vec!["PL", "PT"]);
        assert_eq!(unique_values(&rows, LeaderColumn::Situation), vec!["NÃO ELEITO", "SUPLENTE"]);
    }

    #[test]
    fn test_all_active_filters_must_match() {
        let rows = vec![
            leader(1, "PT", "Masculino", Some("SUPLENTE")),
            leader(2, "PT", "Feminino", Some("SUPLENTE")),
            leader(3, "PL", "Feminino", Some("SUPLENTE")),
        ];
        let mut filters = ColumnFilters::default();
        assert_eq!(filters.apply(&rows).len(), 3);

        filters.set(LeaderColumn::Party, "PT");
        filters.set(LeaderColumn::Gender, "Feminino");

        let ids: Vec<i64> = filters.apply(&rows).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(filters.get(LeaderColumn::Party), "PT");
        assert_eq!(filters.get(LeaderColumn::Situation), "");
    }

    #[test]
    fn test_empty_selection_clears_one_filter() {
        let mut filters = ColumnFilters::default();
        filters.set(FederalColumn::Race, "Parda");
        assert!(filters.has_active());

        filters.set(FederalColumn::Race, "");
        assert!(!filters.has_active());

        filters.set(FederalColumn::Party, "PODE");
        filters.set(FederalColumn::Year, "2022");
        filters.clear();
        assert!(!filters.has_active());
    }
}
