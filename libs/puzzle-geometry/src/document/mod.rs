//! # Puzzle Document
//!
//! The complete geometric description handed to the serializer: every color
//! layer plus the global print parameters.

use serde::{Deserialize, Serialize};

use crate::layer::Layer;

/// Layers of one puzzle with its physical parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Colors the MMU multiplexes per printed layer.
    pub mmu_colors: usize,
    /// Physical size as `[width, height]` in millimeters.
    pub dimensions: [f64; 2],
    /// Layers in palette order.
    pub layers: Vec<Layer>,
}

impl Document {
    /// Creates a document.
    pub fn new(mmu_colors: usize, dimensions: [f64; 2], layers: Vec<Layer>) -> Self {
        Self {
            mmu_colors,
            dimensions,
            layers,
        }
    }

    /// Polygons over all layers.
    pub fn polygon_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.polygons.len()).sum()
    }

    /// Points over all layers.
    pub fn point_count(&self) -> usize {
        self.layers.iter().map(Layer::point_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use crate::trace::Point;

    fn layer(points: usize, z: usize) -> Layer {
        Layer {
            polygons: vec![Polygon {
                points: vec![Point::ZERO; points],
                contours: vec![(0..points).chain([0]).collect()],
            }],
            color: "#000000".to_string(),
            z,
        }
    }

    #[test]
    fn test_counts() {
        let doc = Document::new(1, [10.0, 20.0], vec![layer(3, 0), layer(5, 1)]);
        assert_eq!(doc.polygon_count(), 2);
        assert_eq!(doc.point_count(), 8);
    }

    #[test]
    fn test_serializes_to_json() {
        let doc = Document::new(2, [10.0, 20.0], vec![layer(3, 0)]);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["mmu_colors"], 2);
        assert_eq!(json["layers"][0]["polygons"][0]["contours"][0], serde_json::json!([0, 1, 2, 0]));
    }
}
