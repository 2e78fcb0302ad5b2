use cyclograph_core::{
    generate_pattern, polygon_vertex, rolling_state, CyclographError, Design, PatternGenerator,
    Point, Shape, ShapeKind, TracingMode,
};
use proptest::prelude::*;

fn triangle_design() -> Design {
    Design::new(
        Shape::polygon(3, 100.0).unwrap(),
        Shape::polygon(3, 30.0).unwrap(),
    )
    .with_pen(20.0, 0.0)
    .with_tracing_mode(TracingMode::Outside)
    .with_sample_count(500)
}

#[test]
fn test_triangle_scenario() {
    let design = triangle_design();
    let pattern = generate_pattern(&design).unwrap();

    assert_eq!(pattern.points.len(), 500);

    let fixed = design.fixed_shape.sample_point(0.0);
    let moving = design.moving_shape.sample_point(0.0);
    let expected = fixed - moving + Point::new(20.0, 0.0);
    assert!(pattern.points[0].distance_to(&expected) < 1e-9);
    assert_eq!(pattern.design, design);
}

#[test]
fn test_zero_length_moving_segment() {
    let design = Design::new(Shape::polygon(3, 100.0).unwrap(), Shape::segment(0.0));
    let err = generate_pattern(&design).unwrap_err();
    assert!(matches!(err, CyclographError::DivisionByZero(_)));
}

#[test]
fn test_zero_sided_fixed_polygon_is_an_error() {
    let fixed = Shape {
        kind: ShapeKind::Polygon {
            sides: 0,
            radius: 10.0,
        },
        start_angle: 0.0,
    };
    let design = Design::new(fixed, Shape::polygon(3, 5.0).unwrap());
    assert!(matches!(
        generate_pattern(&design),
        Err(CyclographError::InvalidShapeKind(_))
    ));
}

#[test]
fn test_invalid_design_rejected_before_generation() {
    let design = triangle_design().with_sample_count(0);
    assert!(matches!(
        generate_pattern(&design),
        Err(CyclographError::InvalidInput(_))
    ));
}

#[test]
fn test_single_sided_moving_polygon_rejected() {
    assert!(matches!(
        Shape::polygon(1, 30.0),
        Err(CyclographError::InvalidShapeKind(_))
    ));
}

#[test]
fn test_large_sample_count_is_honored() {
    let design = triangle_design().with_sample_count(1500);
    let pattern = generate_pattern(&design).unwrap();
    assert_eq!(pattern.points.len(), 1500);
}

#[test]
fn test_explicit_mode_overrides_design_mode() {
    let design = triangle_design();
    let outside = PatternGenerator::new(&design).generate().unwrap();
    let inside = PatternGenerator::new(&design)
        .generate_with_mode(TracingMode::Inside)
        .unwrap();
    assert_eq!(outside.points.len(), inside.points.len());
    // start: (100,0) -/+ (30,0) then +20 pen
    assert!(outside.points[0].distance_to(&Point::new(90.0, 0.0)) < 1e-9);
    assert!(inside.points[0].distance_to(&Point::new(150.0, 0.0)) < 1e-9);
}

#[test]
fn test_sweep_is_half_open() {
    // Pen at the center makes each point equal to the rolling center, so the
    // last sample must stop short of returning to the first vertex.
    let design = Design::new(
        Shape::polygon(4, 10.0).unwrap(),
        Shape::polygon(4, 1.0).unwrap(),
    );
    let pattern = generate_pattern(&design).unwrap();
    let last_t = 499.0 / 500.0;
    let expected = design.fixed_shape.sample_point(last_t) - Point::new(1.0, 0.0);
    let last = pattern.points.last().unwrap();
    assert!(last.distance_to(&expected) < 1e-9);
    assert!(last.distance_to(&pattern.points[0]) > 1e-3);
}

proptest! {
    #[test]
    fn prop_vertices_are_exact(sides in 3u32..24, radius in 0.5f64..500.0) {
        let shape = Shape::polygon(sides, radius).unwrap();
        for k in 0..sides {
            let t = k as f64 / sides as f64;
            let p = shape.sample_point(t);
            let v = polygon_vertex(sides, radius, k);
            prop_assert!(p.distance_to(&v) < 1e-9 * radius.max(1.0));
        }
    }

    #[test]
    fn prop_point_count(sample_count in 1u32..2000) {
        let design = triangle_design().with_sample_count(sample_count);
        let pattern = generate_pattern(&design).unwrap();
        prop_assert_eq!(pattern.points.len(), sample_count.max(500) as usize);
    }

    #[test]
    fn prop_rotation_linear_in_t(
        fixed_sides in 3u32..12,
        moving_sides in 3u32..12,
        t in 0.0f64..1.0,
    ) {
        let design = Design::new(
            Shape::polygon(fixed_sides, 80.0).unwrap(),
            Shape::polygon(moving_sides, 15.0).unwrap(),
        );
        let at_t = rolling_state(&design, t, TracingMode::Outside).unwrap();
        let at_one = rolling_state(&design, 1.0, TracingMode::Outside).unwrap();
        prop_assert!((at_t.rotation - t * at_one.rotation).abs() < 1e-6);
    }

    #[test]
    fn prop_mode_flip(t in 0.0f64..1.0, sides in 3u32..10) {
        let design = Design::new(
            Shape::polygon(sides, 60.0).unwrap(),
            Shape::polygon(5, 12.0).unwrap(),
        );
        let outside = rolling_state(&design, t, TracingMode::Outside).unwrap();
        let inside = rolling_state(&design, t, TracingMode::Inside).unwrap();
        prop_assert_eq!(inside.rotation, -outside.rotation);

        let offset = design.moving_shape.sample_point(0.0);
        let gap = inside.center - outside.center;
        prop_assert!(gap.distance_to(&(offset * 2.0)) < 1e-9);
    }
}
