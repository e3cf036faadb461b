//! Spatial-key vertex deduplication.

use std::collections::HashMap;

use nalgebra::Point3;

use crate::error::{GeometryError, Result};

/// Default welding tolerance.
///
/// Positions whose coordinates each quantize to the same multiple of this
/// epsilon resolve to the same vertex ID. The value is part of the
/// mesh-welding contract: it must sit far above f64 rounding noise from
/// recomputing the same midpoint through different faces (~1e-15) and far
/// below the smallest vertex separation the builders produce (the icosphere
/// at the deepest 16-bit-indexable depth has edges no shorter than ~0.017).
pub const WELD_EPSILON: f64 = 1e-6;

/// Assigns stable integer IDs to vertex positions, merging positions that
/// fall within the welding tolerance of each other.
///
/// Each coordinate is divided by the epsilon and rounded to the nearest
/// integer; the resulting `(i64, i64, i64)` triple is the exact lookup key.
/// The first position inserted for a key wins: later inserts of the same key
/// return the existing ID and leave the stored coordinates untouched, so a
/// midpoint recomputed from an adjacent face cannot overwrite the vertex it
/// welds to.
///
/// # Example
///
/// ```
/// use spherule::mesh::VertexWelder;
/// use nalgebra::Point3;
///
/// let mut welder = VertexWelder::new();
/// let a = welder.insert_or_get(Point3::new(0.5, 0.5, 0.0));
/// let b = welder.insert_or_get(Point3::new(0.5 + 1e-9, 0.5, 0.0));
/// assert_eq!(a, b); // welded
/// ```
#[derive(Debug, Clone)]
pub struct VertexWelder {
    inv_epsilon: f64,
    index: HashMap<(i64, i64, i64), usize>,
    positions: Vec<Point3<f64>>,
}

impl Default for VertexWelder {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexWelder {
    /// Create a welder with the default tolerance [`WELD_EPSILON`].
    pub fn new() -> Self {
        Self {
            inv_epsilon: 1.0 / WELD_EPSILON,
            index: HashMap::new(),
            positions: Vec::new(),
        }
    }

    /// Create a welder with a custom tolerance.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidParameter`] if `epsilon` is not finite and
    /// positive.
    pub fn with_epsilon(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(GeometryError::invalid_param(
                "epsilon",
                epsilon,
                "must be finite and positive",
            ));
        }
        Ok(Self {
            inv_epsilon: 1.0 / epsilon,
            index: HashMap::new(),
            positions: Vec::new(),
        })
    }

    /// Look up the ID for a position, inserting it if no position within
    /// tolerance has been seen before.
    ///
    /// IDs are assigned densely in insertion order, starting at 0.
    pub fn insert_or_get(&mut self, position: Point3<f64>) -> usize {
        let key = self.key(&position);
        let next_id = self.positions.len();
        let id = *self.index.entry(key).or_insert(next_id);
        if id == next_id {
            self.positions.push(position);
        }
        id
    }

    /// Look up the ID for a position without inserting.
    pub fn get(&self, position: &Point3<f64>) -> Option<usize> {
        self.index.get(&self.key(position)).copied()
    }

    /// Get the stored position for an ID.
    #[inline]
    pub fn position(&self, id: usize) -> &Point3<f64> {
        &self.positions[id]
    }

    /// Number of distinct vertices inserted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no vertex has been inserted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Consume the welder, returning the positions in ID order.
    pub fn into_positions(self) -> Vec<Point3<f64>> {
        self.positions
    }

    fn key(&self, p: &Point3<f64>) -> (i64, i64, i64) {
        (
            (p.x * self.inv_epsilon).round() as i64,
            (p.y * self.inv_epsilon).round() as i64,
            (p.z * self.inv_epsilon).round() as i64,
        )
    }
}
