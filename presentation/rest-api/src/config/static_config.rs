use std::env;

/// Prebuilt UI bundle served next to the API.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticConfig {
    pub enabled: bool,
    pub dir: String,
}

impl StaticConfig {
    /// Environment variables:
    /// - SERVE_STATIC: "true" or "1" to serve the bundle (default: off)
    /// - STATIC_DIR: bundle directory (default: "frontend/dist")
    pub fn from_env() -> Self {
        Self::from_values(env::var("SERVE_STATIC").ok(), env::var("STATIC_DIR").ok())
    }

    fn from_values(serve_static: Option<String>, dir: Option<String>) -> Self {
        let enabled = serve_static
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false);

        Self {
            enabled,
            dir: dir.unwrap_or_else(|| "frontend/dist".to_string()),
        }
    }
}
