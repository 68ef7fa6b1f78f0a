mod aggregator;
mod fetcher;
mod provider;
mod scheduler;

#[cfg(test)]
pub(crate) mod test_backend;

pub use {
    aggregator::{ChannelFilter, TOP_PRODUCTS_PATH, load_snapshot},
    fetcher::FetchError,
    provider::{HttpBackend, MetricsBackend},
    scheduler::{CycleOutcome, Scheduler},
};
