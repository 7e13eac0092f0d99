// Author: Dustin Pilgrim
// License: MIT

use std::env;
use std::path::PathBuf;

use rune_cfg::RuneConfig;

use crate::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevelSetting {
    Debug,
    Info,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiveroptConfig {
    /// Overrides the default log file location.
    pub log_file: Option<PathBuf>,
    pub log_level: Option<LogLevelSetting>,
}

pub fn load() -> Result<RiveroptConfig, String> {
    let path = paths::default_config_path();

    if !path.exists() {
        return Ok(RiveroptConfig::default());
    }

    let rc = RuneConfig::from_file(&path).map_err(|e| format!("failed to read config: {e}"))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<RiveroptConfig, String> {
    let mut cfg = RiveroptConfig::default();

    if !rc.has("riveropt") {
        return Ok(cfg);
    }

    if let Some(file) = rc
        .get_optional::<String>("riveropt.log_file")
        .map_err(|e| format!("config error at riveropt.log_file: {e}"))?
    {
        cfg.log_file = Some(expand_env(&file));
    }

    if let Some(level) = rc
        .get_optional::<String>("riveropt.log_level")
        .map_err(|e| format!("config error at riveropt.log_level: {e}"))?
    {
        cfg.log_level = Some(
            parse_log_level(&level).map_err(|e| format!("config error at riveropt.log_level: {e}"))?,
        );
    }

    Ok(cfg)
}

fn parse_log_level(s: &str) -> Result<LogLevelSetting, String> {
    match s.trim().to_lowercase().as_str() {
        "debug" => Ok(LogLevelSetting::Debug),
        "info" => Ok(LogLevelSetting::Info),
        other => Err(format!("expected debug|info, got \"{other}\"")),
    }
}

fn expand_env(s: &str) -> PathBuf {
    let mut out = s.to_string();

    if out.contains("$env.HOME") {
        if let Ok(home) = env::var("HOME") {
            out = out.replace("$env.HOME", &home);
        }
    }

    PathBuf::from(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Ok(LogLevelSetting::Debug));
        assert_eq!(parse_log_level(" Info "), Ok(LogLevelSetting::Info));
        assert_eq!(
            parse_log_level("trace"),
            Err("expected debug|info, got \"trace\"".to_string())
        );
    }

    #[test]
    fn test_expand_env_leaves_plain_paths() {
        assert_eq!(
            expand_env("/var/log/riveropt.log"),
            PathBuf::from("/var/log/riveropt.log")
        );
    }

    #[test]
    fn test_expand_env_home() {
        let Ok(home) = env::var("HOME") else {
            return;
        };
        assert_eq!(
            expand_env("$env.HOME/logs/riveropt.log"),
            PathBuf::from(format!("{home}/logs/riveropt.log"))
        );
    }

    #[test]
    fn test_default_config_is_empty() {
        let cfg = RiveroptConfig::default();
        assert_eq!(cfg.log_file, None);
        assert_eq!(cfg.log_level, None);
    }
}
