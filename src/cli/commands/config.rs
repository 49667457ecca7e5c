use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time;
use std::fs;

/// View or check the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
                println!("{content}");
            } else {
                warning(format!("No configuration file at {:?}", path));
            }
        }

        if *check {
            if cfg.database.trim().is_empty() {
                return Err(AppError::Config("'database' is empty".to_string()));
            }
            if cfg.schedule_name.trim().is_empty() {
                return Err(AppError::Config("'schedule_name' is empty".to_string()));
            }
            if time::minutes_of(&cfg.default_slot_time).is_none() {
                return Err(AppError::Config(format!(
                    "'default_slot_time' is not a valid time label: {}",
                    cfg.default_slot_time
                )));
            }
            success("Configuration is valid");
        }
    }
    Ok(())
}
