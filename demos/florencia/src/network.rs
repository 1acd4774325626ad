//! 9×9 synthetic road grid over central Florencia, Caquetá.
//!
//! Node layout (81 nodes, row=south→north, col=west→east), spacing 0.004°
//! (~445 m) in both directions, centered on the region center
//! (1.6145, -75.6062).  Every block is a two-way street.

use dn_core::{GeoPoint, NodeId};
use dn_spatial::{RoadNetwork, RoadNetworkBuilder};

pub const ROWS: usize = 9;
pub const COLS: usize = 9;

const LAT_MIN:  f64 = 1.5985;
const LON_MIN:  f64 = -75.6222;
const STEP_DEG: f64 = 0.004;

/// Build the grid.  Edge lengths are great-circle distances between nodes.
pub fn build_network() -> RoadNetwork {
    let mut bldr = RoadNetworkBuilder::with_capacity(ROWS * COLS, 4 * ROWS * COLS);
    let mut nodes = vec![NodeId::INVALID; ROWS * COLS];

    for row in 0..ROWS {
        for col in 0..COLS {
            let lat = LAT_MIN + row as f64 * STEP_DEG;
            let lon = LON_MIN + col as f64 * STEP_DEG;
            nodes[row * COLS + col] = bldr.add_node(GeoPoint::new(lat, lon));
        }
    }

    // East-west streets.
    for row in 0..ROWS {
        for col in 0..COLS - 1 {
            bldr.add_measured_road(nodes[row * COLS + col], nodes[row * COLS + col + 1]);
        }
    }

    // North-south avenues.
    for row in 0..ROWS - 1 {
        for col in 0..COLS {
            bldr.add_measured_road(nodes[row * COLS + col], nodes[(row + 1) * COLS + col]);
        }
    }

    bldr.build()
}
