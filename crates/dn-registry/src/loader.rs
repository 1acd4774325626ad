//! CSV point loader.
//!
//! # CSV format
//!
//! One row per point.  `amount` is the capacity of a supply or the
//! requirement of a demand; `unit_cost` may be left empty (treated as 0).
//!
//! ```csv
//! name,role,lat,lon,amount,unit_cost
//! Lacteos Amazonia,supply,1.6200,-75.6200,1000,1500
//! Almacen Centro,demand,1.6145,-75.6062,300,200
//! Bodega Norte,demand,1.6220,-75.6140,400,
//! ```
//!
//! | `role`   | Variant          |
//! |----------|------------------|
//! | `supply` | `Point::Supply`  |
//! | `demand` | `Point::Demand`  |

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use dn_core::GeoPoint;

use crate::point::Point;
use crate::registry::PointRegistry;
use crate::{RegistryError, RegistryResult};

#[derive(Deserialize)]
struct PointRecord {
    name:      String,
    role:      String,
    lat:       f64,
    lon:       f64,
    amount:    f64,
    unit_cost: Option<f64>,
}

/// Load a [`PointRegistry`] from a CSV file.
pub fn load_points_csv(path: &Path) -> RegistryResult<PointRegistry> {
    let file = std::fs::File::open(path)?;
    load_points_reader(file)
}

/// Like [`load_points_csv`] but accepts any `Read` source.
pub fn load_points_reader<R: Read>(reader: R) -> RegistryResult<PointRegistry> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut registry = PointRegistry::new();

    for (line, result) in csv_reader.deserialize::<PointRecord>().enumerate() {
        let row = result.map_err(|e| RegistryError::Parse(e.to_string()))?;
        let coordinates = GeoPoint::new(row.lat, row.lon);
        let unit_cost = row.unit_cost.unwrap_or(0.0);

        let point = match row.role.to_ascii_lowercase().as_str() {
            "supply" => Point::supply(row.name, coordinates, row.amount, unit_cost),
            "demand" => Point::demand(row.name, coordinates, row.amount, unit_cost),
            other => {
                return Err(RegistryError::Parse(format!(
                    "record {}: invalid role {other:?}: expected \"supply\" or \"demand\"",
                    line + 1
                )));
            }
        };
        registry.add(point)?;
    }

    Ok(registry)
}
