use toolpathkit_settings::Settings;
use toolpathkit_toolpaths::{spindle_on_speed, ConfigurationError, ToolpathError};

#[test]
fn test_absent_or_zero_speed_skips_spindle() {
    let settings = Settings::new(11.0, 5.0, 1000.0);
    assert_eq!(spindle_on_speed(None, &settings).unwrap(), None);
    assert_eq!(spindle_on_speed(Some(0.0), &settings).unwrap(), None);
}

#[test]
fn test_speed_maps_onto_machine_range() {
    let settings = Settings::new(11.0, 5.0, 1000.0);
    assert_eq!(spindle_on_speed(Some(100.0), &settings).unwrap(), Some(1000.0));
    assert_eq!(spindle_on_speed(Some(25.0), &settings).unwrap(), Some(250.0));
    assert_eq!(spindle_on_speed(Some(400.0), &settings).unwrap(), Some(1000.0));
}

#[test]
fn test_invalid_speed_rejected() {
    let settings = Settings::default();
    for speed in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            spindle_on_speed(Some(speed), &settings),
            Err(ToolpathError::Configuration(ConfigurationError::InvalidSpindleSpeed(_)))
        ));
    }
}
