//! Dashboard Metrics Store
//!
//! Roster counts lifted out of the candidates table for the summary cards.
//! Uses Leptos reactive_stores so each card field re-renders on its own.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::aggregate::CandidateCounts;

/// Counts published by the candidates table
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardMetrics {
    /// Women whose status is "Filiado"
    pub female_affiliated: usize,
    pub confirmed: usize,
    pub negotiation: usize,
    pub ppi: usize,
}

/// Type alias for the store
pub type MetricsStore = Store<DashboardMetrics>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_female_affiliated(store: &MetricsStore, count: usize) {
    *store.female_affiliated().write() = count;
}

pub fn store_set_confirmed(store: &MetricsStore, count: usize) {
    *store.confirmed().write() = count;
}

pub fn store_set_negotiation(store: &MetricsStore, count: usize) {
    *store.negotiation().write() = count;
}

pub fn store_set_ppi(store: &MetricsStore, count: usize) {
    *store.ppi().write() = count;
}

/// Current counts; tracked when read inside a reactive scope
pub fn store_counts(store: &MetricsStore) -> CandidateCounts {
    CandidateCounts {
        female_affiliated: store.female_affiliated().get(),
        confirmed: store.confirmed().get(),
        negotiation: store.negotiation().get(),
        ppi: store.ppi().get(),
    }
}
