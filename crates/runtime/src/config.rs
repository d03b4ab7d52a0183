//! Process-level service configuration.
use std::env;
use std::path::PathBuf;

/// Where to load content from and which engine settings to override.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Content directory; the data bundled with `inventory-content` when unset.
    pub data_dir: Option<PathBuf>,
    /// Overrides `verify_invariants` from `config.toml` when set.
    pub verify_invariants: Option<bool>,
}

impl ServiceConfig {
    /// Construct configuration from process environment variables, loading a
    /// `.env` file first if one exists.
    ///
    /// Environment variables:
    /// - `INVENTORY_DATA_DIR` - Content directory (default: bundled data)
    /// - `INVENTORY_VERIFY_INVARIANTS` - Check invariants before every commit
    ///   (default: value from `config.toml`)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("INVENTORY_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(verify) = read_env_bool("INVENTORY_VERIFY_INVARIANTS") {
            config.verify_invariants = Some(verify);
        }

        config
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = Some(verify);
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_spellings() {
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn builders_override_defaults() {
        let config = ServiceConfig::default()
            .with_data_dir("/srv/inventory")
            .with_verify_invariants(false);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/inventory")));
        assert_eq!(config.verify_invariants, Some(false));
    }
}
