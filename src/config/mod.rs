//! Configuration for the reservation desk
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/reserva/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

mod serialization;

#[cfg(test)]
mod tests;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Verde Dark", "Verde Light", "Terminal"
    pub theme: String,

    /// Demo mode: pre-fill the form with a sample party
    pub demo_mode: bool,

    /// Restaurant identity shown in the title bar and confirmation footer
    pub restaurant: RestaurantConfig,

    /// Booking window and submission behavior
    pub booking: BookingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Verde Dark".to_string(),
            demo_mode: false,
            restaurant: RestaurantConfig::default(),
            booking: BookingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Restaurant identity
#[derive(Debug, Clone)]
pub struct RestaurantConfig {
    /// Name in the title bar
    pub name: String,
    /// Phone number quoted in the confirmation footer
    pub phone: String,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: "Bistro Verde".to_string(),
            phone: "(555) 123-4567".to_string(),
        }
    }
}

/// Restaurant settings as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileRestaurant {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl RestaurantConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileRestaurant>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            name: file.name.unwrap_or(defaults.name),
            phone: file.phone.unwrap_or(defaults.phone),
        }
    }
}

/// Booking window and submission behavior
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// How many calendar months ahead reservations open
    pub advance_months: u32,
    /// Simulated processing delay before a booking confirms (ms)
    pub submit_latency_ms: u64,
    /// Largest party the guests control offers (1..=max_party)
    pub max_party: u8,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            advance_months: 3,
            submit_latency_ms: 1500,
            max_party: 10,
        }
    }
}

/// Booking settings as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileBooking {
    pub advance_months: Option<u32>,
    pub submit_latency_ms: Option<u64>,
    pub max_party: Option<u8>,
}

impl BookingConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileBooking>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            advance_months: file.advance_months.unwrap_or(defaults.advance_months),
            submit_latency_ms: file.submit_latency_ms.unwrap_or(defaults.submit_latency_ms),
            // A zero-seat party makes the guests control unusable
            max_party: file.max_party.unwrap_or(defaults.max_party).max(1),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Log file rotation strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogRotation {
    /// Rotate log files hourly
    Hourly,
    /// Rotate log files daily (default)
    #[default]
    Daily,
    /// Never rotate - single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "daily" => Self::Daily,
            "never" => Self::Never,
            _ => Self::Daily, // Default to daily for unknown values
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable file logging (in addition to the TUI buffer)
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file rotation strategy
    pub file_rotation: LogRotation,
    /// Prefix for log file names (e.g. "reserva" -> "reserva.2024-06-14.log")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "reserva".to_string(),
        }
    }
}

/// Logging settings as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .map(|s| LogRotation::from_str(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [restaurant] section
    pub restaurant: Option<FileRestaurant>,

    /// Optional [booking] section
    pub booking: Option<FileBooking>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/reserva/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("reserva").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// If config file exists but cannot be parsed. This is intentional -
    /// a broken config should fail fast with a clear error, not silently
    /// fall back to defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    // Fatal error - config exists but is invalid
                    eprintln!(
                        "\n╔══════════════════════════════════════════════════════════════╗"
                    );
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!(
                        "╚══════════════════════════════════════════════════════════════╝\n"
                    );
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run: reserva config --reset\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Config file doesn't exist - use defaults
                FileConfig::default()
            }
            Err(e) => {
                // File exists but can't be read (permissions, etc.)
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Theme: env > file > default
        let theme = std::env::var("RESERVA_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "Verde Dark".to_string());

        // Demo mode: env only (runtime flag)
        let demo_mode = std::env::var("RESERVA_DEMO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let restaurant = RestaurantConfig::from_file(file.restaurant);
        let booking = BookingConfig::from_file(file.booking);
        let mut logging = LoggingConfig::from_file(file.logging);

        // Log directory: env override on top of the [logging] section
        if let Ok(dir) = std::env::var("RESERVA_LOG_DIR") {
            logging.file_dir = PathBuf::from(dir);
        }

        Self {
            theme,
            demo_mode,
            restaurant,
            booking,
            logging,
        }
    }
}
