//! # Reporting
//!
//! Aggregation over the finished-trip log: which trips completed, and what
//! they earned. A plain fold over prices — no pricing logic of its own.

use std::sync::Arc;

use tracing::debug;

use fleet_core::error::CoreResult;
use fleet_core::money::{Currency, Money};
use fleet_core::types::Trip;
use fleet_store::TripLog;

/// Read-only reporting over the trip history.
#[derive(Debug, Clone)]
pub struct ReportingService {
    log: Arc<TripLog>,
}

impl ReportingService {
    /// Creates a reporting service over the given trip log.
    pub fn new(log: Arc<TripLog>) -> Self {
        ReportingService { log }
    }

    /// All trips that finished normally, oldest first.
    pub fn completed_trips(&self) -> Vec<Trip> {
        self.log.completed()
    }

    /// Total revenue across completed trips.
    ///
    /// Seeded with `Money::zero(currency)` and summed with `Money::add`, so
    /// a history that somehow mixes currencies surfaces a
    /// `CurrencyMismatch` instead of silently converting. Canceled trips
    /// contribute nothing.
    pub fn total_revenue(&self, currency: Currency) -> CoreResult<Money> {
        let completed = self.log.completed();
        let mut total = Money::zero(currency);
        for trip in &completed {
            total = total.add(trip.price)?;
        }

        debug!(trips = completed.len(), revenue = %total, "Computed total revenue");
        Ok(total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
