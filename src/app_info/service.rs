//! Application metadata derived from config and build information.

use serde::Serialize;

use crate::config::AppConfig;

/// Snapshot of what is running and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
    /// Minimum supported Rust version declared by the crate, not the
    /// toolchain that built it.
    pub min_rust_version: String,
    /// `os-arch`, e.g. `linux-x86_64`.
    pub platform: String,
    pub debug_mode: bool,
}

impl AppInfo {
    /// Labelled values in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("version", self.version.clone()),
            ("environment", self.environment.clone()),
            ("min_rust_version", self.min_rust_version.clone()),
            ("platform", self.platform.clone()),
            ("debug_mode", self.debug_mode.to_string()),
        ]
    }
}

/// Reports application information.
#[derive(Debug, Clone)]
pub struct AppInfoService {
    config: AppConfig,
}

impl AppInfoService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn get_app_info(&self) -> AppInfo {
        AppInfo {
            name: self.config.app_name.clone(),
            version: self.config.app_version.clone(),
            environment: self.config.environment.clone(),
            min_rust_version: min_rust_version().to_string(),
            platform: platform(),
            debug_mode: self.config.debug,
        }
    }
}

/// `rust-version` from the manifest.
pub fn min_rust_version() -> &'static str {
    match option_env!("CARGO_PKG_RUST_VERSION") {
        Some(v) if !v.is_empty() => v,
        _ => "unknown",
    }
}

pub fn platform() -> String {
    format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_info_from_config() {
        let config = AppConfig {
            app_name: "Info App".to_string(),
            app_version: "3.1".to_string(),
            environment: "staging".to_string(),
            debug: true,
            log_level: "INFO".to_string(),
        };
        let info = AppInfoService::new(&config).get_app_info();

        assert_eq!(info.name, "Info App");
        assert_eq!(info.version, "3.1");
        assert_eq!(info.environment, "staging");
        assert!(info.debug_mode);
        assert_eq!(info.min_rust_version, "1.80");
        assert!(info.platform.starts_with(std::env::consts::OS));
    }

    #[test]
    fn test_entries_order() {
        let info = AppInfoService::new(&AppConfig::default()).get_app_info();
        let labels: Vec<_> = info.entries().into_iter().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            ["name", "version", "environment", "min_rust_version", "platform", "debug_mode"]
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let info = AppInfoService::new(&AppConfig::default()).get_app_info();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["name"], "Project Template");
        assert_eq!(json["debug_mode"], false);
        assert_eq!(json["min_rust_version"], "1.80");
        assert!(json.get("rust_version").is_none());
    }
}
