//! # fleet-service: Trip Lifecycle Coordination for FleetShare
//!
//! The orchestration layer between the pure domain (fleet-core) and the
//! stores (fleet-store).
//!
//! ## Module Organization
//! ```text
//! fleet_service/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── coordinator.rs  ◄─── TripCoordinator: start / end / cancel,
//! │                        active-trip index, pricing invocation
//! └── reports.rs      ◄─── ReportingService: completed trips, revenue fold
//! ```
//!
//! ## Responsibility Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Who Owns What                                       │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │ TripCoordinator  │ │ ReportingService │ │    fleet-store       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │ • active index   │ │ • completed list │ │ • canonical entities │   │
//! │  │ • state machine  │ │ • revenue fold   │ │ • trip history       │   │
//! │  │ • clock capture  │ │   (read-only)    │ │                      │   │
//! │  │ • pricing calls  │ │                  │ │                      │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  The coordinator is the ONLY writer of vehicle state and the only      │
//! │  component that moves trips between the active index and the log.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod coordinator;
pub mod reports;

pub use coordinator::TripCoordinator;
pub use reports::ReportingService;
