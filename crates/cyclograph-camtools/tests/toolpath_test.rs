use cyclograph_camtools::toolpath::{
    encode, Handedness, OriginCorner, ToolpathEncoder, ToolpathOptions,
};
use cyclograph_core::{generate_pattern, CyclographError, Design, Pattern, Point, Shape};
use proptest::prelude::*;

fn pattern_from(points: Vec<Point>) -> Pattern {
    let design = Design::new(
        Shape::polygon(3, 10.0).unwrap(),
        Shape::polygon(3, 5.0).unwrap(),
    );
    Pattern { points, design }
}

fn plotter_options() -> ToolpathOptions {
    ToolpathOptions {
        start_block: "G21\nG90".to_string(),
        end_block: "M2".to_string(),
        pen_down_command: "M3".to_string(),
        pen_up_command: "M5".to_string(),
        target_width: 200.0,
        target_height: 200.0,
        move_feed_rate: 3000.0,
        draw_feed_rate: 800.0,
        origin_corner: OriginCorner::BottomLeft,
        handedness: Handedness::Right,
    }
}

/// Parse `X.. Y..` from every motion line.
fn coordinates(gcode: &str) -> Vec<(f64, f64)> {
    gcode
        .lines()
        .filter(|l| l.starts_with("G0 X") || l.starts_with("G1 X"))
        .map(|l| {
            let mut words = l.split_whitespace().skip(1);
            let x = words.next().unwrap()[1..].parse().unwrap();
            let y = words.next().unwrap()[1..].parse().unwrap();
            (x, y)
        })
        .collect()
}

#[test]
fn test_command_order() {
    let pattern = pattern_from(vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 50.0),
    ]);
    let gcode = encode(&pattern, &plotter_options()).unwrap();
    let lines: Vec<&str> = gcode.lines().collect();

    assert_eq!(
        lines,
        vec![
            "G21",
            "G90",
            "F3000.0 ; Travel feed rate",
            "G0 X0.000 Y0.000 ; Move to start position",
            "M3",
            "F800.0 ; Draw feed rate",
            "G1 X200.000 Y0.000",
            "G1 X200.000 Y100.000",
            "M5",
            "F3000.0 ; Restore travel feed rate",
            "M2",
        ]
    );
}

#[test]
fn test_default_blocks() {
    let pattern = pattern_from(vec![Point::new(-5.0, -5.0), Point::new(5.0, 5.0)]);
    let gcode = ToolpathEncoder::default().encode(&pattern).unwrap();
    assert!(gcode.starts_with("G21 ; Set units to millimeters"));
    assert!(gcode.contains("G0 Z0 ; Lower pen"));
    assert!(gcode.ends_with("G0 X0 Y0 ; Return to origin"));
    assert!(!gcode.contains("\n\n"));
}

#[test]
fn test_flat_pattern_rejected() {
    let pattern = pattern_from(vec![Point::new(1.0, 0.0), Point::new(1.0, 9.0)]);
    let err = encode(&pattern, &plotter_options()).unwrap_err();
    assert!(matches!(err, CyclographError::DegenerateBoundingBox { .. }));
}

#[test]
fn test_generated_pattern_fits_box() {
    let design = Design::new(
        Shape::polygon(5, 100.0).unwrap(),
        Shape::polygon(3, 30.0).unwrap(),
    )
    .with_pen(20.0, 0.3);
    let pattern = generate_pattern(&design).unwrap();
    let gcode = encode(&pattern, &plotter_options()).unwrap();

    let coords = coordinates(&gcode);
    assert_eq!(coords.len(), pattern.points.len());
    for (x, y) in coords {
        assert!((-1e-3..=200.001).contains(&x), "x out of box: {}", x);
        assert!((-1e-3..=200.001).contains(&y), "y out of box: {}", y);
    }
}

proptest! {
    #[test]
    fn prop_output_inside_box(
        raw in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 2..60),
        width in 10.0f64..400.0,
        height in 10.0f64..400.0,
        left in any::<bool>(),
    ) {
        let points: Vec<Point> = raw.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        let options = ToolpathOptions {
            target_width: width,
            target_height: height,
            handedness: if left { Handedness::Left } else { Handedness::Right },
            ..plotter_options()
        };
        let encoder = ToolpathEncoder::new(options);
        match encoder.transform_points(&points) {
            Ok(machine) => {
                for p in machine {
                    prop_assert!(p.x >= -1e-6 && p.x <= width + 1e-6);
                    prop_assert!(p.y >= -1e-6 && p.y <= height + 1e-6);
                }
            }
            Err(err) => {
                let is_degenerate = matches!(err, CyclographError::DegenerateBoundingBox { .. });
                prop_assert!(is_degenerate);
            }
        }
    }
}
