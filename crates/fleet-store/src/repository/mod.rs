//! # Repository Module
//!
//! In-memory repository implementations for FleetShare.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Each store abstracts entity storage behind a narrow API.               │
//! │                                                                         │
//! │  TripCoordinator / console                                             │
//! │       │                                                                 │
//! │       │  vehicles.get("car-7")                                         │
//! │       ▼                                                                 │
//! │  VehicleStore                                                          │
//! │  ├── save(&self, vehicle)                                              │
//! │  ├── get(&self, id) -> Option                                          │
//! │  ├── list_available(&self)                                             │
//! │  └── set_state(&self, id, state)                                       │
//! │       │                                                                 │
//! │       │  RwLock<HashMap>                                                │
//! │       ▼                                                                 │
//! │  Process memory (no durability — out of scope)                         │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • One canonical, thread-safe copy of each entity                      │
//! │  • Constructor-injected, no process-wide statics                       │
//! │  • Easy to test                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`VehicleStore`] - the fleet
//! - [`UserStore`] - registered riders
//! - [`TripLog`] - append-only finished-trip history
//!
//! [`VehicleStore`]: vehicle::VehicleStore
//! [`UserStore`]: user::UserStore
//! [`TripLog`]: trip::TripLog

pub mod trip;
pub mod user;
pub mod vehicle;
