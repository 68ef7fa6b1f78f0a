mod metrics;
mod snapshot;
mod top_products;

pub use {
    metrics::{MetricKind, ScalarMetrics},
    snapshot::DashboardSnapshot,
    top_products::{FALLBACK_LABEL, ProductBar, product_bars},
};
