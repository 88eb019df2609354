//! Application information reporting.

pub mod service;

pub use service::{AppInfo, AppInfoService};
