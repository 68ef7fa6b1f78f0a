/// Backend polling constraints: window width, top-N limit, refresh cadence.
pub struct BackendConfig {
    /// Base URL of the metrics backend. Overridable with `--base-url`.
    pub base_url: &'static str,
    /// Rolling window queried on every cycle, in inclusive calendar days.
    pub window_days: u32,
    /// `limit` sent to the top-products endpoint.
    pub top_products_limit: u32,
    /// Seconds between polling cycles.
    pub refresh_secs: u64,
    pub connect_timeout_ms: u64,
}

pub const BACKEND: BackendConfig = BackendConfig {
    base_url: "http://localhost:8000",
    window_days: 30,
    top_products_limit: 5,
    refresh_secs: 60,
    connect_timeout_ms: 5000,
};
