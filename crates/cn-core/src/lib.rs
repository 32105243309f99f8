//! `cn-core`: foundational types for the `contact_net` transmission kernel.
//!
//! This crate is a dependency of every other `cn-*` crate.  It has no `cn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `NetworkId`, `DiseaseId`, `GroupId`            |
//! | [`geo`]     | `GeoPoint` (reporting anchor only)                        |
//! | [`time`]    | `Day`, `RunConfig`                                        |
//! | [`rng`]     | `ContactRng` (one per network-day-disease evaluation)     |
//! | [`error`]   | `CnError`, `CnResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CnError, CnResult};
pub use geo::GeoPoint;
pub use ids::{AgentId, DiseaseId, GroupId, NetworkId};
pub use rng::ContactRng;
pub use time::{Day, RunConfig};
