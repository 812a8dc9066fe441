//! # fleet-store: In-Memory Stores for FleetShare
//!
//! This crate provides the canonical storage for shared entities: the fleet,
//! the registered riders, and the finished-trip history.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       FleetShare Data Flow                              │
//! │                                                                         │
//! │  TripCoordinator (fleet-service)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   fleet-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────┐    │   │
//! │  │   │ VehicleStore  │   │   UserStore   │   │   TripLog    │    │   │
//! │  │   │               │   │               │   │              │    │   │
//! │  │   │ save/get      │   │ save/get      │   │ record/get   │    │   │
//! │  │   │ set_state     │   │ list          │   │ completed    │    │   │
//! │  │   └───────────────┘   └───────────────┘   └──────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   RwLock<HashMap> / RwLock<Vec> — no durability (out of scope) │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Store error types
//! - [`repository`] - Store implementations (vehicle, user, trip log)
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use fleet_store::{TripLog, UserStore, VehicleStore};
//!
//! // Constructor-injected everywhere — no process-wide statics.
//! let vehicles = Arc::new(VehicleStore::new());
//! let users = Arc::new(UserStore::new());
//! let log = Arc::new(TripLog::new());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};

// Store re-exports for convenience
pub use repository::trip::TripLog;
pub use repository::user::UserStore;
pub use repository::vehicle::VehicleStore;
