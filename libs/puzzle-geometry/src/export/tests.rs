use super::*;
use crate::layer::Layer;

fn triangle(offset: f64) -> Polygon {
    Polygon {
        points: vec![
            Point::new(offset, 0.0),
            Point::new(offset + 1.5, -2.0),
            Point::new(offset, -2.0),
        ],
        contours: vec![vec![0, 1, 2, 0]],
    }
}

fn layer(polygons: Vec<Polygon>, color: &str, z: usize) -> Layer {
    Layer {
        polygons,
        color: color.to_string(),
        z,
    }
}

#[test]
fn test_single_polygon_layout() {
    let doc = Document::new(1, [10.0, 20.25], vec![layer(vec![triangle(0.0)], "#ff8000", 0)]);
    let expected = "\
puzzle_mmu_colors = 1;
puzzle_dim = [10, 20.25];
layers = [
  [  // layer #0
    [
      [
        [ [0, 0], [1.5, -2], [0, -2]],
        [ [ 0, 1, 2, 0]]
      ]
    ], \"#ff8000\", 0
  ]
];
";
    assert_eq!(to_scad_string(&doc).unwrap(), expected);
}

#[test]
fn test_no_trailing_commas() {
    let doc = Document::new(
        2,
        [1.0, 1.0],
        vec![
            layer(vec![triangle(0.0), triangle(5.0)], "#ffffff", 0),
            layer(vec![triangle(9.0)], "#000000", 1),
        ],
    );
    let text = to_scad_string(&doc).unwrap();
    assert!(!text.contains(",\n]"));
    assert!(!text.contains(", ]"));
    assert!(text.contains("      ],\n      [\n"));
    assert!(text.contains("  ],\n  [  // layer #1\n"));
    assert!(text.ends_with("    ], \"#000000\", 1\n  ]\n];\n"));
}

#[test]
fn test_holes_are_listed_after_outer() {
    let polygon = Polygon {
        points: vec![Point::ZERO; 6],
        contours: vec![vec![0, 1, 2, 0], vec![3, 4, 5, 3]],
    };
    let doc = Document::new(1, [1.0, 1.0], vec![layer(vec![polygon], "#ffffff", 0)]);
    let text = to_scad_string(&doc).unwrap();
    assert!(text.contains("        [ [ 0, 1, 2, 0], [ 3, 4, 5, 3]]\n"));
}

#[test]
fn test_empty_layer() {
    let doc = Document::new(1, [1.0, 1.0], vec![layer(Vec::new(), "#00ffff", 0)]);
    let text = to_scad_string(&doc).unwrap();
    assert!(text.contains("  [  // layer #0\n    [\n    ], \"#00ffff\", 0\n  ]\n"));
}

#[test]
fn test_coordinates_keep_full_precision() {
    let polygon = Polygon {
        points: vec![Point::new(0.1 + 0.2, 1.0 / 3.0)],
        contours: vec![vec![0, 0]],
    };
    let doc = Document::new(1, [1.0, 1.0], vec![layer(vec![polygon], "#ffffff", 0)]);
    let text = to_scad_string(&doc).unwrap();
    assert!(text.contains("[0.30000000000000004, 0.3333333333333333]"));
}

#[test]
fn test_output_is_deterministic() {
    let doc = Document::new(1, [3.0, 4.0], vec![layer(vec![triangle(0.25)], "#ff00ff", 2)]);
    assert_eq!(to_scad_string(&doc).unwrap(), to_scad_string(&doc).unwrap());
}

#[test]
fn test_write_scad_file() {
    let path = std::env::temp_dir().join(format!("puzzle-geometry-{}.scad", std::process::id()));
    let doc = Document::new(1, [3.0, 4.0], vec![layer(vec![triangle(0.0)], "#ffffff", 0)]);
    write_scad_file(&path, &doc).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, to_scad_string(&doc).unwrap());
}

#[test]
fn test_failing_sink_reports_io_error() {
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let doc = Document::new(1, [1.0, 1.0], Vec::new());
    let err = write_scad(&mut Broken, &doc).unwrap_err();
    assert!(matches!(err, crate::error::GeometryError::Io(_)));
}
