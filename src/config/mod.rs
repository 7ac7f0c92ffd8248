mod gui;
mod paths;

use std::path::Path;

use tracing::{debug, warn};

use crate::error::Error;

use gui::GuiSection;

pub const APIKEY_ENV_VARS: [&str; 2] = ["SYNCSTAT_APIKEY", "APIKEY"];
pub const TARGET_ENV_VAR: &str = "SYNCSTAT_TARGET";

/// Resolved API credentials and target, built once per invocation and
/// immutable afterwards. Threaded explicitly into every remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub api_key: String,
    pub target: String,
}

/// Outcome of looking for the daemon's own config file. Not finding one is
/// routine; an unreadable or malformed file is remembered so it can be
/// reported if no other source supplies the missing value.
#[derive(Debug, PartialEq, Eq)]
enum FileLookup {
    Found(GuiSection),
    NotFound,
    Invalid(String),
}

/// Determine the effective API key and target URL. Precedence per value,
/// highest first: explicit flag, environment, daemon config file.
pub async fn resolve(
    flag_api_key: Option<&str>,
    flag_target: Option<&str>,
    home_dir: Option<&Path>,
) -> Result<EffectiveConfig, Error> {
    let file = read_daemon_config(home_dir).await;
    let env_api_key = first_non_empty_env(&APIKEY_ENV_VARS);
    let env_target = non_empty_env(TARGET_ENV_VAR);
    merge(flag_api_key, flag_target, env_api_key, env_target, file)
}

async fn read_daemon_config(home_dir: Option<&Path>) -> FileLookup {
    let Some(path) = paths::find_config_file(home_dir) else {
        debug!("no daemon config file found in any standard location");
        return FileLookup::NotFound;
    };

    let contents = match tokio::fs::read_to_string(&path).await {
        Ok(contents) => contents,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "daemon config unreadable");
            return FileLookup::Invalid(format!("could not read {}: {err}", path.display()));
        }
    };

    match gui::parse_gui_section(&contents) {
        Some(section) => FileLookup::Found(section),
        None => FileLookup::Invalid(format!("no <gui> section in {}", path.display())),
    }
}

fn merge(
    flag_api_key: Option<&str>,
    flag_target: Option<&str>,
    env_api_key: Option<String>,
    env_target: Option<String>,
    file: FileLookup,
) -> Result<EffectiveConfig, Error> {
    let (mut api_key, mut target) = match &file {
        FileLookup::Found(gui) => (gui.api_key.clone(), gui.target_url().unwrap_or_default()),
        _ => (String::new(), String::new()),
    };

    if let Some(value) = env_api_key {
        api_key = value;
    }
    if let Some(value) = env_target {
        target = value;
    }

    if let Some(value) = flag_api_key.filter(|v| !v.is_empty()) {
        api_key = value.to_string();
    }
    if let Some(value) = flag_target.filter(|v| !v.is_empty()) {
        target = value.to_string();
    }

    if api_key.is_empty() {
        return Err(missing_value_error("API key", "--api-key", &APIKEY_ENV_VARS.join(" or "), &file));
    }
    if target.is_empty() {
        return Err(missing_value_error("target URL", "--target", TARGET_ENV_VAR, &file));
    }

    Ok(EffectiveConfig { api_key, target })
}

fn missing_value_error(what: &str, flag: &str, env: &str, file: &FileLookup) -> Error {
    match file {
        FileLookup::Invalid(reason) => {
            Error::Config(format!("{what} not found and daemon config invalid: {reason}"))
        }
        _ => Error::Config(format!(
            "{what} not found; provide it via {flag}, the {env} environment variable, or the daemon's config.xml"
        )),
    }
}

fn first_non_empty_env(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| non_empty_env(name))
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
