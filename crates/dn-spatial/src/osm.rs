//! OSM PBF loader, enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use dn_spatial::{PbfSource, RegionDescriptor, RoadNetworkProvider};
//!
//! let source = PbfSource::new("colombia-latest.osm.pbf")
//!     .with_place("Florencia, Caquetá, Colombia", "florencia.osm.pbf");
//! let provider = RoadNetworkProvider::new(region, source);
//! ```
//!
//! # What is loaded
//!
//! Only car-drivable `highway=*` ways are kept (see [`is_drivable`]).
//! One-way roads add a single directed edge (`oneway=-1` runs against the
//! node order); two-way roads add both.
//! Edge length is the great-circle distance between consecutive way nodes.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use osmpbf::{Element, ElementReader};

use dn_core::{GeoPoint, NodeId};

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::provider::NetworkSource;
use crate::{SpatialError, SpatialResult};

// ── Public entry points ───────────────────────────────────────────────────────

/// Load every drivable road of a PBF extract.
///
/// # Errors
///
/// [`SpatialError::Osm`] on parse errors, [`SpatialError::Io`] on file errors.
pub fn load_from_pbf(path: &Path) -> SpatialResult<RoadNetwork> {
    load_filtered(path, |_| true)
}

/// Load the drivable roads of a PBF extract whose nodes lie within
/// `radius_m` metres of `center`.  Way segments leaving the disc are cut.
pub fn load_from_pbf_within(path: &Path, center: GeoPoint, radius_m: f64) -> SpatialResult<RoadNetwork> {
    load_filtered(path, |pos| center.distance_m(pos) <= radius_m)
}

// ── PbfSource ─────────────────────────────────────────────────────────────────

/// [`NetworkSource`] backed by local PBF extracts.
///
/// Place names map to per-place extracts; the point fallback clips a wider
/// extract to the requested disc.
#[derive(Debug, Clone)]
pub struct PbfSource {
    places:  HashMap<String, PathBuf>,
    extract: PathBuf,
}

impl PbfSource {
    /// `extract` is the wide-area file used by the point fallback.
    pub fn new(extract: impl Into<PathBuf>) -> Self {
        Self { places: HashMap::new(), extract: extract.into() }
    }

    /// Register the extract that covers `place`.
    pub fn with_place(mut self, place: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.places.insert(place.into(), path.into());
        self
    }
}

impl NetworkSource for PbfSource {
    fn from_place(&self, place: &str) -> SpatialResult<RoadNetwork> {
        let path = self
            .places
            .get(place)
            .ok_or_else(|| SpatialError::UnknownPlace(place.to_string()))?;
        load_from_pbf(path)
    }

    fn from_point(&self, center: GeoPoint, radius_m: f64) -> SpatialResult<RoadNetwork> {
        load_from_pbf_within(&self.extract, center, radius_m)
    }
}

// ── Loader internals ──────────────────────────────────────────────────────────

struct OsmWay {
    refs:      Vec<i64>,
    direction: WayDirection,
}

/// Permitted travel along a way relative to its node order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WayDirection {
    Both,
    Forward,
    Backward,
}

fn load_filtered(path: &Path, keep: impl Fn(GeoPoint) -> bool) -> SpatialResult<RoadNetwork> {
    // ── Phase 1: collect nodes + drivable ways in one sequential pass ─────
    let reader = ElementReader::from_path(path).map_err(|e| SpatialError::Osm(e.to_string()))?;

    let mut all_nodes: HashMap<i64, GeoPoint> = HashMap::new();
    let mut road_ways: Vec<OsmWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::DenseNode(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::Way(w) => {
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let highway = tags.iter().find(|(k, _)| *k == "highway").map(|(_, v)| *v);

                if let Some(highway) = highway.filter(|h| is_drivable(h)) {
                    let direction = way_direction(highway, &tags);
                    road_ways.push(OsmWay { refs: w.refs().collect(), direction });
                }
            }
            _ => {}
        })
        .map_err(|e| SpatialError::Osm(e.to_string()))?;

    // ── Phase 2: road-referenced nodes, in OSM id order ───────────────────
    let road_node_ids: BTreeSet<i64> = road_ways
        .iter()
        .flat_map(|w| w.refs.iter().copied())
        .collect();

    // ── Phase 3: build network ────────────────────────────────────────────
    let mut builder = RoadNetworkBuilder::with_capacity(road_node_ids.len(), road_node_ids.len() * 2);
    let mut osm_to_dn: HashMap<i64, NodeId> = HashMap::with_capacity(road_node_ids.len());

    for osm_id in &road_node_ids {
        if let Some(&pos) = all_nodes.get(osm_id).filter(|&&pos| keep(pos)) {
            osm_to_dn.insert(*osm_id, builder.add_node(pos));
        }
    }

    drop(all_nodes);

    for way in &road_ways {
        for window in way.refs.windows(2) {
            if let (Some(&from), Some(&to)) = (osm_to_dn.get(&window[0]), osm_to_dn.get(&window[1])) {
                add_segment(&mut builder, from, to, way.direction);
            }
        }
    }

    Ok(builder.build())
}

// ── Tag helpers ───────────────────────────────────────────────────────────────

/// `true` if a `highway` value is drivable by car.  Unknown classes are kept.
pub fn is_drivable(highway: &str) -> bool {
    !matches!(
        highway,
        "footway" | "path" | "cycleway" | "pedestrian" | "steps" | "track" | "bridleway" | "corridor"
    )
}

/// Direction from the `oneway` tag.  Motorways are implicitly one-way in OSM
/// convention; an explicit `oneway=no` overrides that.
pub(crate) fn way_direction(highway: &str, tags: &[(&str, &str)]) -> WayDirection {
    let oneway = tags.iter().find(|(k, _)| *k == "oneway").map(|(_, v)| *v);
    match oneway {
        Some("yes" | "1" | "true") => WayDirection::Forward,
        Some("-1" | "reverse") => WayDirection::Backward,
        Some("no" | "0" | "false") => WayDirection::Both,
        _ if matches!(highway, "motorway" | "motorway_link") => WayDirection::Forward,
        _ => WayDirection::Both,
    }
}

/// Add the edges one way segment contributes.
pub(crate) fn add_segment(builder: &mut RoadNetworkBuilder, from: NodeId, to: NodeId, direction: WayDirection) {
    let len_m = builder.node_pos(from).distance_m(builder.node_pos(to));
    match direction {
        WayDirection::Both => builder.add_road(from, to, len_m),
        WayDirection::Forward => builder.add_directed_edge(from, to, len_m),
        WayDirection::Backward => builder.add_directed_edge(to, from, len_m),
    }
}
