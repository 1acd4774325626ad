//! `dn-registry` — the mutable set of supply and demand points of a planning
//! session.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`point`]    | `Point` (tagged `Supply` / `Demand`), `Role`           |
//! | [`registry`] | `PointRegistry`: add, remove, lookup, role subsets     |
//! | [`pair`]     | `PairKey` for per-(supply, demand) results             |
//! | [`loader`]   | `load_points_csv`, `load_points_reader`                |
//! | [`error`]    | `RegistryError`, `RegistryResult<T>`                   |

pub mod error;
pub mod loader;
pub mod pair;
pub mod point;
pub mod registry;


pub use error::{RegistryError, RegistryResult};
pub use loader::{load_points_csv, load_points_reader};
pub use pair::PairKey;
pub use point::{DemandPoint, Point, Role, SupplyPoint};
pub use registry::PointRegistry;
