//! `dn-core` — foundational types for the distribution network optimizer.
//!
//! Every other `dn-*` crate depends on this one.  It has no `dn-*`
//! dependencies and minimal external ones (`thiserror`, plus optional
//! `serde` / `serde_json`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `EdgeId`                                    |
//! | [`geo`]    | `GeoPoint`, haversine and degree-space distances      |
//! | [`config`] | `PlannerConfig` (region, tolerances)                  |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types and     |
//! |         | enables `PlannerConfig::from_json_*`.                      |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
