use std::env;

/// Location of the SQLite store, e.g. `sqlite://todos.db`
pub const DB_URL: &str = "DATABASE_URL";
/// Address the HTTP server binds to, e.g. `0.0.0.0:8080`
pub const LISTEN_ADDR: &str = "LISTEN_ADDR";
/// Log level configuration for the application. For formatting info, see [EnvFilter's documentation](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// OpenTelemetry span export URL, typically http://localhost:4317 when a collector sidecar
/// is running. Tracing export is only switched on when this and [OTEL_METRIC_EXPORT_URL] are set.
pub const OTEL_SPAN_EXPORT_URL: &str = "OTEL_SPAN_EXPORT_URL";
/// OpenTelemetry metrics export URL, typically http://localhost:4317 when a collector sidecar
/// is running.
pub const OTEL_METRIC_EXPORT_URL: &str = "OTEL_METRIC_EXPORT_URL";

const DEFAULT_DB_URL: &str = "sqlite://todos.db";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Endpoints to ship OpenTelemetry data to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtelEndpoints {
    pub spans: String,
    pub metrics: String,
}

/// Startup configuration gathered from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_url: String,
    pub listen_addr: String,
    pub otel: Option<OtelEndpoints>,
}

impl AppConfig {
    /// Reads the configuration from the process environment, falling back to defaults for
    /// anything that isn't set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let otel = match (lookup(OTEL_SPAN_EXPORT_URL), lookup(OTEL_METRIC_EXPORT_URL)) {
            (Some(spans), Some(metrics)) => Some(OtelEndpoints { spans, metrics }),
            _ => None,
        };

        AppConfig {
            db_url: lookup(DB_URL).unwrap_or_else(|| DEFAULT_DB_URL.to_owned()),
            listen_addr: lookup(LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned()),
            otel,
        }
    }
}
