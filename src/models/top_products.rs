use serde_json::Value;

/// Label shown when a product row arrives without a name.
pub const FALLBACK_LABEL: &str = "Item";

/// One bar of the top-products chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBar {
    pub label: String,
    pub value: f64,
}

/// Extract (label, value) pairs from the top-products payload.
///
/// `data` missing or not an array yields an empty list. Per row: revenue
/// beats units sold, and either missing leaves 0, so one sparse row never
/// sinks the whole chart.
pub fn product_bars(body: &Value) -> Vec<ProductBar> {
    let Some(rows) = body.get("data").and_then(Value::as_array) else {
        return Vec::new();
    };

    rows.iter()
        .map(|row| ProductBar {
            label: row
                .get("product_name")
                .and_then(Value::as_str)
                .unwrap_or(FALLBACK_LABEL)
                .to_owned(),
            value: numeric(row, "total_revenue")
                .or_else(|| numeric(row, "total_sold"))
                .unwrap_or(0.0),
        })
        .collect()
}

fn numeric(row: &Value, key: &str) -> Option<f64> {
    row.get(key).and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn revenue_preferred_then_units_then_zero() {
        let body = json!({"data": [
            {"product_name": "Feijoada", "total_sold": 40, "total_revenue": 1800.0},
            {"product_name": "Caipirinha", "total_sold": 120},
            {"product_name": "Pudim"},
        ]});
        let bars = product_bars(&body);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].value, 1800.0);
        assert_eq!(bars[1].value, 120.0);
        assert_eq!(bars[2].value, 0.0);
    }

    #[test]
    fn nameless_rows_get_the_fallback_label() {
        let bars = product_bars(&json!({"data": [{"total_sold": 3}]}));
        assert_eq!(bars[0].label, FALLBACK_LABEL);
    }

    #[test]
    fn invalid_shapes_become_empty() {
        assert!(product_bars(&json!({})).is_empty());
        assert!(product_bars(&json!({"data": "oops"})).is_empty());
        assert!(product_bars(&json!({"data": []})).is_empty());
        assert!(product_bars(&json!(null)).is_empty());
    }

    #[test]
    fn backend_order_is_preserved() {
        let body = json!({"data": [
            {"product_name": "B", "total_revenue": 1.0},
            {"product_name": "A", "total_revenue": 9.0},
        ]});
        let labels: Vec<_> = product_bars(&body).into_iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["B", "A"]);
    }
}
