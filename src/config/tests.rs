//! Configuration tests

use super::*;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.theme, "Verde Dark");
    assert!(!config.demo_mode);
    assert_eq!(config.restaurant.name, "Bistro Verde");
    assert_eq!(config.restaurant.phone, "(555) 123-4567");
    assert_eq!(config.booking.advance_months, 3);
    assert_eq!(config.booking.submit_latency_ms, 1500);
    assert_eq!(config.booking.max_party, 10);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_default_template_parses_back() {
    // The to_toml template must stay deserializable, otherwise the file
    // we write on first run would kill the next startup.
    let toml_str = Config::default().to_toml();
    let file: FileConfig = toml::from_str(&toml_str).expect("default template should parse");

    assert_eq!(file.theme.as_deref(), Some("Verde Dark"));
    let booking = BookingConfig::from_file(file.booking);
    assert_eq!(booking.advance_months, 3);
    assert_eq!(booking.submit_latency_ms, 1500);
    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.file_prefix, "reserva");
    assert_eq!(logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_log_rotation_from_str() {
    assert_eq!(LogRotation::from_str("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_str("daily"), LogRotation::Daily);
    assert_eq!(LogRotation::from_str("never"), LogRotation::Never);
    assert_eq!(LogRotation::from_str("DAILY"), LogRotation::Daily);
    // Unknown values fall back to daily
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::from_str(""), LogRotation::Daily);
}

#[test]
fn test_partial_file_keeps_defaults() {
    // A file that only sets one key leaves everything else at defaults
    let toml_str = r#"
        [booking]
        max_party = 16
    "#;
    let file: FileConfig = toml::from_str(toml_str).unwrap();

    let booking = BookingConfig::from_file(file.booking);
    assert_eq!(booking.max_party, 16);
    assert_eq!(booking.advance_months, 3);
    assert_eq!(booking.submit_latency_ms, 1500);

    let restaurant = RestaurantConfig::from_file(file.restaurant);
    assert_eq!(restaurant.name, "Bistro Verde");
}

#[test]
fn test_sections_override_defaults() {
    let toml_str = r#"
        theme = "Terminal"

        [restaurant]
        name = "Chez Nous"
        phone = "(212) 555-0100"

        [booking]
        advance_months = 6
        submit_latency_ms = 250

        [logging]
        level = "debug"
        file_enabled = true
        file_rotation = "hourly"
    "#;
    let file: FileConfig = toml::from_str(toml_str).unwrap();

    assert_eq!(file.theme.as_deref(), Some("Terminal"));

    let restaurant = RestaurantConfig::from_file(file.restaurant);
    assert_eq!(restaurant.name, "Chez Nous");
    assert_eq!(restaurant.phone, "(212) 555-0100");

    let booking = BookingConfig::from_file(file.booking);
    assert_eq!(booking.advance_months, 6);
    assert_eq!(booking.submit_latency_ms, 250);

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);
    assert_eq!(logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_max_party_floor() {
    let toml_str = r#"
        [booking]
        max_party = 0
    "#;
    let file: FileConfig = toml::from_str(toml_str).unwrap();
    let booking = BookingConfig::from_file(file.booking);
    assert_eq!(booking.max_party, 1);
}

#[test]
fn test_empty_file_is_valid() {
    let file: FileConfig = toml::from_str("").unwrap();
    assert!(file.theme.is_none());
    assert!(file.restaurant.is_none());
    assert!(file.booking.is_none());
    assert!(file.logging.is_none());
}
