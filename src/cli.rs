//! Command-line interface

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "reserva",
    about = "Restaurant reservation desk for the terminal",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show the resolved configuration (env + file + defaults)
        #[arg(long)]
        show: bool,

        /// Reset the config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open the config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Print the config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI subcommands. Returns true if a command ran and the
/// process should exit instead of starting the TUI.
pub fn handle_command(cli: &Cli) -> bool {
    let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = &cli.command
    else {
        return false;
    };

    if *path {
        match Config::config_path() {
            Some(p) => println!("{}", p.display()),
            None => eprintln!("Could not determine config path"),
        }
        return true;
    }

    if *reset {
        match Config::default().save() {
            Ok(()) => {
                println!("Config reset to defaults");
                if let Some(p) = Config::config_path() {
                    println!("  {}", p.display());
                }
            }
            Err(e) => eprintln!("Failed to reset config: {}", e),
        }
        return true;
    }

    if *edit {
        Config::ensure_config_exists();
        let Some(p) = Config::config_path() else {
            eprintln!("Could not determine config path");
            return true;
        };
        let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
        let status = std::process::Command::new(&editor).arg(&p).status();
        match status {
            Ok(s) if s.success() => {}
            Ok(s) => eprintln!("{} exited with {}", editor, s),
            Err(e) => eprintln!("Failed to launch {}: {}", editor, e),
        }
        return true;
    }

    if *show {
        print!("{}", Config::from_env().to_toml());
        return true;
    }

    // Bare `reserva config` - point at the flags
    println!("Usage: reserva config --show | --reset | --edit | --path");
    true
}
