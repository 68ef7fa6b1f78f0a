use serde_json::Value;

use crate::config::DF;

/// The four scalar metrics shown on the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Revenue,
    AverageTicket,
    Orders,
    Rating,
}

impl MetricKind {
    /// Endpoint path under `/metrics/`.
    pub const fn endpoint(self) -> &'static str {
        match self {
            MetricKind::Revenue => "total-revenue",
            MetricKind::AverageTicket => "average-ticket",
            MetricKind::Orders => "total-orders",
            MetricKind::Rating => "average-rating",
        }
    }

    /// Accepted field spellings, primary first. The backend has shipped
    /// responses under both at different times, so both stay accepted.
    pub const fn aliases(self) -> [&'static str; 2] {
        match self {
            MetricKind::Revenue => ["total_revenue", "total"],
            MetricKind::AverageTicket => ["average_ticket", "avg_ticket"],
            MetricKind::Orders => ["total_orders", "qty"],
            MetricKind::Rating => ["average_rating", "avg_rating"],
        }
    }

    /// First-match-wins lookup over the alias table. Only finite numbers
    /// count; anything else reads as missing.
    pub fn resolve(self, body: &Value) -> Option<f64> {
        for key in self.aliases() {
            if let Some(v) = body.get(key).and_then(Value::as_f64) {
                if v.is_finite() {
                    if DF.log_alias_resolution {
                        log::debug!("{} resolved via '{}' = {}", self.endpoint(), key, v);
                    }
                    return Some(v);
                }
            }
        }
        None
    }
}

/// Normalized card values for one polling cycle. Missing or malformed
/// fields become 0; the display layer decides what 0 means per card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScalarMetrics {
    pub revenue: f64,
    pub avg_ticket: f64,
    pub orders: f64,
    pub rating: f64,
}

impl ScalarMetrics {
    pub fn from_bodies(revenue: &Value, ticket: &Value, orders: &Value, rating: &Value) -> Self {
        Self {
            revenue: MetricKind::Revenue.resolve(revenue).unwrap_or(0.0),
            avg_ticket: MetricKind::AverageTicket.resolve(ticket).unwrap_or(0.0),
            orders: MetricKind::Orders.resolve(orders).unwrap_or(0.0),
            rating: MetricKind::Rating.resolve(rating).unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primary_key_wins_over_fallback() {
        let body = json!({"total_revenue": 900.0, "total": 500.0});
        assert_eq!(MetricKind::Revenue.resolve(&body), Some(900.0));
    }

    #[test]
    fn fallback_key_resolves_for_every_kind() {
        assert_eq!(
            MetricKind::Revenue.resolve(&json!({"total": 500})),
            Some(500.0)
        );
        assert_eq!(
            MetricKind::AverageTicket.resolve(&json!({"avg_ticket": 38.2})),
            Some(38.2)
        );
        assert_eq!(MetricKind::Orders.resolve(&json!({"qty": 17})), Some(17.0));
        assert_eq!(
            MetricKind::Rating.resolve(&json!({"avg_rating": 4.5})),
            Some(4.5)
        );
    }

    #[test]
    fn missing_and_non_numeric_fields_read_as_absent() {
        assert_eq!(MetricKind::Orders.resolve(&json!({})), None);
        assert_eq!(MetricKind::Orders.resolve(&json!({"qty": "17"})), None);
        assert_eq!(MetricKind::Orders.resolve(&json!({"qty": null})), None);
    }

    #[test]
    fn bodies_normalize_with_zero_defaults() {
        let metrics = ScalarMetrics::from_bodies(
            &json!({"total": 500}),
            &json!({"average_ticket": 38.2}),
            &json!({}),
            &json!({"average_rating": 0}),
        );
        assert_eq!(metrics.revenue, 500.0);
        assert_eq!(metrics.avg_ticket, 38.2);
        assert_eq!(metrics.orders, 0.0);
        assert_eq!(metrics.rating, 0.0);
    }
}
