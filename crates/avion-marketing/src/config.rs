//! Server configuration

/// Filter used when `RUST_LOG` is unset. `tower_http` carries the request
/// failures reported by `TraceLayer`.
pub const DEFAULT_LOG_FILTER: &str = "avion_marketing=info,avion_core=info,tower_http=info";

/// Settings read from the environment at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `tracing` filter directives
    pub log_filter: String,
    /// Directory served under `/assets`
    pub assets_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            assets_dir: std::env::var("AVION_ASSETS_DIR")
                .unwrap_or_else(|_| "crates/avion-marketing/assets".to_string()),
        }
    }
}
