use toolpathkit_core::{GcodePath, Segment, SegmentType};
use toolpathkit_settings::Settings;
use toolpathkit_toolpaths::{
    drill_center, ConfigurationError, DrillCenter, DrillCenterToolpath, Rectangle, ToolpathError,
    ToolpathRequest, ToolpathStrategy,
};

fn assert_z_move(segment: &Segment, z: f64) {
    assert_eq!(segment.segment_type(), SegmentType::Move);
    let point = segment.point().expect("move has a point");
    assert!(!point.has_x());
    assert!(!point.has_y());
    assert!((point.z.expect("move has Z") - z).abs() < 0.01);
}

fn assert_plunge(segment: &Segment, z: f64) {
    assert_eq!(segment.segment_type(), SegmentType::Point);
    let point = segment.point().expect("plunge has a point");
    assert!(!point.has_x());
    assert!(!point.has_y());
    assert!((point.z.expect("plunge has Z") - z).abs() < 0.01);
}

fn square() -> Rectangle {
    Rectangle::new(10.0, 10.0, 15.0, 15.0)
}

#[test]
fn test_drill_center_in_center_of_shape() {
    let shape = square();
    let settings = Settings::new(11.0, 5.0, 1000.0);
    let path = drill_center(&ToolpathRequest::new(&shape, &settings, 10.0)).unwrap();
    let segments = path.segments();

    assert_eq!(segments.len(), 9);

    // Move to safe height
    assert_z_move(&segments[0], 11.0);

    // Move in XY-plane
    assert_eq!(segments[1].segment_type(), SegmentType::Move);
    let xy = segments[1].point().unwrap();
    assert!((xy.x.unwrap() - 17.5).abs() < 0.01);
    assert!((xy.y.unwrap() - 17.5).abs() < 0.01);
    assert!(!xy.has_z());

    // Safe height again at the new XY
    assert_z_move(&segments[2], 11.0);

    assert_plunge(&segments[3], 0.0);
    assert_plunge(&segments[4], -5.0);
    // Clear material
    assert_z_move(&segments[5], 0.0);
    assert_plunge(&segments[6], -10.0);
    // Clear material
    assert_z_move(&segments[7], 0.0);
    // Retreat
    assert_z_move(&segments[8], 11.0);

    assert_eq!(path.count_of(SegmentType::Seam), 0);
}

#[test]
fn test_drill_center_with_spindle_speed_turns_on_spindle() {
    let shape = square().with_spindle_speed(100.0);
    let settings = Settings::new(11.0, 10.0, 1000.0);
    let path = drill_center(&ToolpathRequest::new(&shape, &settings, 10.0)).unwrap();
    let segments = path.segments();

    assert_z_move(&segments[0], 11.0);
    assert_eq!(segments[1].point().unwrap().x, Some(17.5));
    assert_z_move(&segments[2], 11.0);

    // Turn on spindle
    assert_eq!(segments[3].segment_type(), SegmentType::Seam);
    assert!(segments[3].point().is_none());
    assert!((segments[3].spindle_speed().unwrap() - 1000.0).abs() < 0.1);

    // First depth pass
    assert_plunge(&segments[4], 0.0);
    assert_plunge(&segments[5], -10.0);
    assert_z_move(&segments[6], 0.0);
    assert_z_move(&segments[7], 11.0);
    assert_eq!(segments.len(), 8);
}

#[test]
fn test_target_depth_equal_to_depth_per_pass() {
    let shape = square();
    let settings = Settings::new(11.0, 10.0, 1000.0);
    let path = drill_center(&ToolpathRequest::new(&shape, &settings, 10.0)).unwrap();

    let cuts: Vec<f64> = path
        .iter()
        .filter(|s| s.segment_type() == SegmentType::Point)
        .filter_map(Segment::z)
        .collect();
    assert_eq!(cuts, vec![0.0, -10.0]);

    // Only the final retract sits between the last cut and the retreat.
    let segments = path.segments();
    assert_eq!(segments.len(), 7);
    assert_z_move(&segments[5], 0.0);
    assert_z_move(&segments[6], 11.0);
}

#[test]
fn test_target_depth_less_than_depth_per_pass() {
    let shape = square();
    let settings = Settings::new(5.0, 3.0, 1000.0);
    let path = drill_center(&ToolpathRequest::new(&shape, &settings, 1.5)).unwrap();
    let segments = path.segments();

    assert_plunge(&segments[3], 0.0);
    assert_plunge(&segments[4], -1.5);
    assert_z_move(&segments[5], 0.0);
    assert_z_move(&segments[6], 5.0);
}

#[test]
fn test_four_pass_sequence_retracts_after_every_real_pass() {
    let shape = square();
    let settings = Settings::new(11.0, 5.0, 1000.0);
    let path = drill_center(&ToolpathRequest::new(&shape, &settings, 14.0)).unwrap();

    let tail: Vec<String> = path.iter().skip(3).map(|s| s.to_string()).collect();
    assert_eq!(
        tail,
        vec![
            "POINT Z0.000",
            "POINT Z-5.000",
            "MOVE Z0.000",
            "POINT Z-10.000",
            "MOVE Z0.000",
            "POINT Z-14.000",
            "MOVE Z0.000",
            "MOVE Z11.000",
        ]
    );
}

#[test]
fn test_non_positive_depth_per_pass_is_configuration_error() {
    let shape = square();
    for depth_per_pass in [0.0, -5.0] {
        let settings = Settings::new(11.0, depth_per_pass, 1000.0);
        let err = drill_center(&ToolpathRequest::new(&shape, &settings, 10.0)).unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(
            err,
            ToolpathError::Configuration(ConfigurationError::InvalidDepthPerPass(_))
        ));
    }
}

#[test]
fn test_non_positive_target_depth_is_configuration_error() {
    let shape = square();
    let settings = Settings::new(11.0, 5.0, 1000.0);
    for target in [0.0, -10.0, f64::NAN] {
        let err = drill_center(&ToolpathRequest::new(&shape, &settings, target)).unwrap_err();
        assert!(matches!(
            err,
            ToolpathError::Configuration(ConfigurationError::InvalidTargetDepth(_))
        ));
    }
}

#[test]
fn test_unresolvable_center_is_configuration_error() {
    let settings = Settings::new(11.0, 5.0, 1000.0);

    let shape = Rectangle::new(f64::NAN, 0.0, 10.0, 10.0);
    let err = drill_center(&ToolpathRequest::new(&shape, &settings, 10.0)).unwrap_err();
    assert!(matches!(
        err,
        ToolpathError::Configuration(ConfigurationError::UnresolvableCenter(_))
    ));

    let shape = Rectangle::new(0.0, 0.0, -1.0, 10.0);
    let err = drill_center(&ToolpathRequest::new(&shape, &settings, 10.0)).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_invalid_settings_rejected_before_emission() {
    let shape = square();
    let settings = Settings::new(f64::INFINITY, 5.0, 1000.0);
    let err = drill_center(&ToolpathRequest::new(&shape, &settings, 10.0)).unwrap_err();
    assert!(matches!(err, ToolpathError::Settings(_)));
}

#[test]
fn test_zero_extent_shape_drills_at_position() {
    let shape = Rectangle::new(3.0, 4.0, 0.0, 0.0);
    let settings = Settings::new(11.0, 5.0, 1000.0);
    let path = drill_center(&ToolpathRequest::new(&shape, &settings, 5.0)).unwrap();
    let xy = path.segments()[1].point().unwrap();
    assert_eq!((xy.x, xy.y), (Some(3.0), Some(4.0)));
}

#[test]
fn test_bound_generator_and_strategy_match_free_function() {
    let shape = square().with_spindle_speed(50.0);
    let settings = Settings::new(11.0, 5.0, 1000.0);
    let request = ToolpathRequest::new(&shape, &settings, 10.0);

    let expected: GcodePath = drill_center(&request).unwrap();
    let bound = DrillCenterToolpath::new(&settings, &shape).generate_to(10.0).unwrap();
    let strategy = DrillCenter.generate(&request).unwrap();

    assert_eq!(bound, expected);
    assert_eq!(strategy, expected);
    assert_eq!(DrillCenter.name(), "Drill Center");
    assert_eq!(expected.segments()[3].spindle_speed(), Some(500.0));
}

#[test]
fn test_inputs_are_not_mutated() {
    let shape = square().with_spindle_speed(100.0);
    let settings = Settings::new(11.0, 5.0, 1000.0);
    let (shape_before, settings_before) = (shape.clone(), settings.clone());

    drill_center(&ToolpathRequest::new(&shape, &settings, 10.0)).unwrap();

    assert_eq!(shape, shape_before);
    assert_eq!(settings, settings_before);
}
