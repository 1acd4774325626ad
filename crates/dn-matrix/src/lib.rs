//! `dn-matrix` — distance and route for every (supply, demand) pair.
//!
//! Each pair is routed over the road network; any routing failure degrades
//! that pair to a straight-line estimate instead of failing the whole
//! matrix.  The result therefore always holds exactly
//! `|supplies| × |demands|` entries.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`entry`]   | `DistanceEntry`, straight-line fallback                    |
//! | [`matrix`]  | `DistanceMatrix`                                           |
//! | [`builder`] | `DistanceMatrixBuilder`, `build_distance_matrix`           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Route pairs on the Rayon thread pool.               |

pub mod builder;
pub mod entry;
pub mod matrix;

#[cfg(test)]
mod tests;

pub use builder::{build_distance_matrix, DistanceMatrixBuilder};
pub use entry::DistanceEntry;
pub use matrix::DistanceMatrix;
