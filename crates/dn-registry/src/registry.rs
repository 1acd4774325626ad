//! The owned point collection threaded through every planning call.
//!
//! Points are keyed by name and iterated in name order.  Because the order
//! depends only on the current contents, removing a point and adding it back
//! unchanged leaves every derived result exactly as it was.
//!
//! Nothing is recomputed on mutation: callers re-run the matrix builder and
//! the solver when they need fresh results.

use std::collections::BTreeMap;

use crate::point::{DemandPoint, Point, SupplyPoint};
use crate::{RegistryError, RegistryResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointRegistry {
    points: BTreeMap<String, Point>,
}

impl PointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `points`, failing on the first invalid or
    /// duplicate entry.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> RegistryResult<Self> {
        let mut registry = Self::new();
        for point in points {
            registry.add(point)?;
        }
        Ok(registry)
    }

    /// Insert a new point.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateName`] if the name is taken,
    /// [`RegistryError::InvalidPoint`] if validation fails.
    pub fn add(&mut self, point: Point) -> RegistryResult<()> {
        point.validate()?;
        if self.points.contains_key(point.name()) {
            return Err(RegistryError::DuplicateName(point.name().to_string()));
        }
        self.points.insert(point.name().to_string(), point);
        Ok(())
    }

    /// Insert or replace.  Returns the replaced point, if any.
    pub fn upsert(&mut self, point: Point) -> RegistryResult<Option<Point>> {
        point.validate()?;
        Ok(self.points.insert(point.name().to_string(), point))
    }

    /// Remove and return the point called `name`.
    pub fn remove(&mut self, name: &str) -> RegistryResult<Point> {
        self.points
            .remove(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Point> {
        self.points.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.points.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// All points in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.values()
    }

    /// Supply subset, in name order.
    pub fn supplies(&self) -> Vec<&SupplyPoint> {
        self.points
            .values()
            .filter_map(|p| match p {
                Point::Supply(s) => Some(s),
                Point::Demand(_) => None,
            })
            .collect()
    }

    /// Demand subset, in name order.
    pub fn demands(&self) -> Vec<&DemandPoint> {
        self.points
            .values()
            .filter_map(|p| match p {
                Point::Demand(d) => Some(d),
                Point::Supply(_) => None,
            })
            .collect()
    }

    pub fn supply(&self, name: &str) -> Option<&SupplyPoint> {
        match self.points.get(name) {
            Some(Point::Supply(s)) => Some(s),
            _ => None,
        }
    }

    pub fn demand(&self, name: &str) -> Option<&DemandPoint> {
        match self.points.get(name) {
            Some(Point::Demand(d)) => Some(d),
            _ => None,
        }
    }

    pub fn total_capacity(&self) -> f64 {
        self.supplies().iter().map(|s| s.capacity).sum()
    }

    pub fn total_demand(&self) -> f64 {
        self.demands().iter().map(|d| d.demand).sum()
    }
}

impl<'a> IntoIterator for &'a PointRegistry {
    type Item = &'a Point;
    type IntoIter = std::collections::btree_map::Values<'a, String, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.values()
    }
}
