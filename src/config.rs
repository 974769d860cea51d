use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TellerConfig {
    #[serde(default = "default_seed_file")]
    pub seed_file: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_seed_file() -> String {
    "seed.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TellerConfig {
    fn default() -> Self {
        Self {
            seed_file: default_seed_file(),
            log_level: default_log_level(),
        }
    }
}

impl TellerConfig {
    pub fn load_or_default(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            match std::fs::read_to_string(path) {
                Ok(s) => match toml::from_str(&s) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error parsing config: {}. Using defaults.", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    eprintln!("Error reading config: {}. Using defaults.", e);
                    Self::default()
                }
            }
        } else {
            let config = Self::default();
            if let Ok(s) = toml::to_string_pretty(&config) {
                let _ = std::fs::write(path, s);
            }
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TellerConfig::default();
        assert_eq!(config.seed_file, "seed.json");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_or_default_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teller.toml");
        let path = path.to_str().unwrap();

        let config = TellerConfig::load_or_default(path);
        assert_eq!(config.seed_file, "seed.json");
        assert!(std::path::Path::new(path).exists());
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teller.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        let config = TellerConfig::load_or_default(path.to_str().unwrap());
        assert_eq!(config.log_level, "info");
    }
}
