use serde::{Deserialize, Serialize};

use crate::config::BACKEND;
use crate::data::fetcher::FetchError;
use crate::data::provider::MetricsBackend;
use crate::models::{DashboardSnapshot, MetricKind, ScalarMetrics, product_bars};
use crate::utils::DateRange;

pub const TOP_PRODUCTS_PATH: &str = "top-products";

/// Sales channel filter understood by every backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelFilter {
    #[default]
    All,
    DineIn,
    Delivery,
}

impl ChannelFilter {
    pub const ALL: [ChannelFilter; 3] = [Self::All, Self::DineIn, Self::Delivery];

    /// Backend code for the channel, or None for the unfiltered view.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::DineIn => Some("P"),
            Self::Delivery => Some("D"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All channels",
            Self::DineIn => "Dine-in",
            Self::Delivery => "Delivery",
        }
    }
}

/// One full batch fetch: five endpoints, one coherent window.
pub async fn load_snapshot(
    backend: &dyn MetricsBackend,
    channel: ChannelFilter,
) -> Result<DashboardSnapshot, FetchError> {
    let range = DateRange::last_n_days(BACKEND.window_days);
    load_snapshot_for(backend, channel, range).await
}

/// Same with an explicit window, so tests pin the dates.
async fn load_snapshot_for(
    backend: &dyn MetricsBackend,
    channel: ChannelFilter,
    range: DateRange,
) -> Result<DashboardSnapshot, FetchError> {
    let base = base_query(&range, channel);
    let mut top_query = base.clone();
    top_query.push(("limit", BACKEND.top_products_limit.to_string()));

    // The five requests race; the first failure fails the whole cycle so
    // the cards and chart never mix windows.
    let (revenue, ticket, orders, rating, top) = tokio::try_join!(
        backend.get_json(MetricKind::Revenue.endpoint(), &base),
        backend.get_json(MetricKind::AverageTicket.endpoint(), &base),
        backend.get_json(MetricKind::Orders.endpoint(), &base),
        backend.get_json(MetricKind::Rating.endpoint(), &base),
        backend.get_json(TOP_PRODUCTS_PATH, &top_query),
    )?;

    Ok(DashboardSnapshot {
        metrics: ScalarMetrics::from_bodies(&revenue, &ticket, &orders, &rating),
        products: product_bars(&top),
        range,
    })
}

fn base_query(range: &DateRange, channel: ChannelFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("date_from", range.date_from()),
        ("date_to", range.date_to()),
    ];
    if let Some(code) = channel.query_value() {
        query.push(("channel", code.to_string()));
    }
    query
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::data::test_backend::CannedBackend;

    fn window() -> DateRange {
        DateRange::ending(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(), 30)
    }

    fn healthy_backend() -> CannedBackend {
        CannedBackend::default()
            .with(MetricKind::Revenue.endpoint(), json!({"total": 500}))
            .with(
                MetricKind::AverageTicket.endpoint(),
                json!({"avg_ticket": 38.2}),
            )
            .with(MetricKind::Orders.endpoint(), json!({"total_orders": 17}))
            .with(MetricKind::Rating.endpoint(), json!({"average_rating": 4.4}))
            .with(
                TOP_PRODUCTS_PATH,
                json!({"data": [{"product_name": "Feijoada", "total_revenue": 1800.0}]}),
            )
    }

    #[tokio::test]
    async fn snapshot_normalizes_all_five_endpoints() {
        let backend = healthy_backend();
        let snapshot = load_snapshot_for(&backend, ChannelFilter::All, window())
            .await
            .unwrap();

        assert_eq!(snapshot.metrics.revenue, 500.0);
        assert_eq!(snapshot.metrics.avg_ticket, 38.2);
        assert_eq!(snapshot.metrics.orders, 17.0);
        assert_eq!(snapshot.metrics.rating, 4.4);
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].label, "Feijoada");
        assert_eq!(backend.calls.load(Ordering::Relaxed), 5);
    }

    #[tokio::test]
    async fn any_single_failure_fails_the_batch() {
        let backend = healthy_backend().failing(MetricKind::Rating.endpoint());
        let result = load_snapshot_for(&backend, ChannelFilter::All, window()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn queries_carry_the_window_and_channel() {
        let backend = healthy_backend();
        load_snapshot_for(&backend, ChannelFilter::DineIn, window())
            .await
            .unwrap();

        let seen = backend.queries.lock().unwrap();
        let revenue_query = seen
            .iter()
            .find(|(path, _)| path == MetricKind::Revenue.endpoint())
            .map(|(_, q)| q.clone())
            .unwrap();
        assert!(revenue_query.contains(&("date_from".to_string(), "2025-03-02".to_string())));
        assert!(revenue_query.contains(&("date_to".to_string(), "2025-03-31".to_string())));
        assert!(revenue_query.contains(&("channel".to_string(), "P".to_string())));

        let top_query = seen
            .iter()
            .find(|(path, _)| path == TOP_PRODUCTS_PATH)
            .map(|(_, q)| q.clone())
            .unwrap();
        assert!(top_query.contains(&("limit".to_string(), "5".to_string())));
    }
}
