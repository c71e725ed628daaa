//! Config file serialization
//!
//! The TOML template here is the single source of truth for the config
//! file format. `ensure_config_exists` writes it on first run, and
//! `config --reset` writes it again over a broken file.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# Reserva configuration
# Location: ~/.config/reserva/config.toml
# Environment variables override these values (RESERVA_THEME, RESERVA_DEMO, RESERVA_LOG_DIR)

# Theme: "Verde Dark" (default), "Verde Light", "Terminal"
theme = "{theme}"

[restaurant]
# Name shown in the title bar
name = "{restaurant_name}"
# Phone number quoted in the confirmation footer
phone = "{restaurant_phone}"

[booking]
# How many calendar months ahead reservations open
advance_months = {advance_months}
# Simulated processing delay before a booking confirms (milliseconds)
submit_latency_ms = {submit_latency_ms}
# Largest party the guests control offers
max_party = {max_party}

[logging]
# Log level: trace, debug, info, warn, error
level = "{log_level}"
# Write JSON log files in addition to the in-app logs view (F2)
file_enabled = {file_enabled}
# Directory for log files
file_dir = "{file_dir}"
# Rotation: "hourly", "daily", "never"
file_rotation = "{file_rotation}"
# Log file name prefix
file_prefix = "{file_prefix}"
"#,
            theme = self.theme,
            restaurant_name = self.restaurant.name,
            restaurant_phone = self.restaurant.phone,
            advance_months = self.booking.advance_months,
            submit_latency_ms = self.booking.submit_latency_ms,
            max_party = self.booking.max_party,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }

    /// Write the config back to ~/.config/reserva/config.toml
    pub fn save(&self) -> Result<(), String> {
        let Some(path) = Self::config_path() else {
            return Err("Could not determine config path".to_string());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        std::fs::write(&path, self.to_toml())
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}
