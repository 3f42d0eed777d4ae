use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Get the default convey data directory: ~/.convey
pub fn get_convey_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".convey"))
}

/// Loads configuration from an explicit file path.
pub fn load_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    let mut cfg: AppConfig = toml::from_str(&s)?;
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.convey/config.toml (highest)
    let convey_dir = get_convey_data_dir()?;
    let convey_config = convey_dir.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg: AppConfig = if convey_config.exists() {
        let s = std::fs::read_to_string(&convey_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else if local_config.exists() {
        let s = std::fs::read_to_string(local_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else {
        AppConfig::default()
    };

    // Update logging directory to use convey data directory if not set
    if cfg.logging.file
        && cfg
            .logging
            .directory
            .as_ref()
            .map(|s| s.trim().is_empty())
            .unwrap_or(true)
    {
        let logs_dir = convey_dir.join("logs");
        std::fs::create_dir_all(&logs_dir)?;
        cfg.logging.directory = Some(logs_dir.to_string_lossy().to_string());
    }

    apply_env_overrides(&mut cfg);

    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut AppConfig) {
    if let Ok(v) = std::env::var("CONVEY_LOG") {
        if !v.trim().is_empty() {
            cfg.logging.level = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_path_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [sink]
            path = "out.txt"

            [stage]
            output_capacity = 2
            "#,
        )
        .unwrap();

        let cfg = load_path(&path).unwrap();
        assert_eq!(cfg.sink.path, "out.txt");
        assert_eq!(cfg.stage.output_capacity, 2);
        assert_eq!(cfg.stage.input_capacity, 256);
    }

    #[test]
    fn load_path_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml [").unwrap();

        assert!(load_path(&path).is_err());
    }
}
