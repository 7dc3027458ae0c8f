//! UI Components
//!
//! Leptos components for the dashboard.

mod sidebar;
mod metrics_cards;
mod candidates_table;
mod candidate_row;
mod draft_inputs;
mod delete_confirm_button;
mod filter_select;
mod leaders_table;

pub use sidebar::{Header, Sidebar};
pub use metrics_cards::{MetricsCards, ProjectionCards};
pub use candidates_table::CandidatesTable;
pub use candidate_row::CandidateRow;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_select::FilterSelect;
pub use leaders_table::{FederalHistoryTable, LeadersTable};
