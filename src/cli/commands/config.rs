//! Config command handler

use crate::args::ConfigSubcommand;
use nissaga::config::Config;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => config
            .get(&key)
            .map(|value| println!("{value}"))
            .ok_or_else(|| format!("Unknown config key: '{key}'")),
        Some(ConfigSubcommand::Set { key, value }) => set_and_save(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_and_save(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset_with_confirmation(&mut io::stdin().lock()),
    };

    if let Err(e) = result {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn show_all(config: &Config) {
    println!("# {}", Config::get_config_file_path().display());
    print!("{config}");
}

fn set_and_save(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset_and_save(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!("✓ Reset {key} to default");
    Ok(())
}

/// Remove the config file after a y/yes answer read from `input`
fn reset_with_confirmation(input: &mut impl BufRead) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    if confirmed(input) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn confirmed(input: &mut impl BufRead) -> bool {
    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmed() {
        assert!(confirmed(&mut "y\n".as_bytes()));
        assert!(confirmed(&mut "YES\n".as_bytes()));
        assert!(!confirmed(&mut "n\n".as_bytes()));
        assert!(!confirmed(&mut "".as_bytes()));
    }
}
