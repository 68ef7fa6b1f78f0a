use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // --- Cards ---
    pub revenue_card: String,
    pub orders_card: String,
    pub rating_card: String,
    pub avg_ticket_prefix: String,
    /// The "no data" glyph shown when a card value is missing or invalid.
    pub placeholder: String,

    // --- Chart ---
    pub chart_label: String,
    pub chart_empty: String,

    // --- Top panel ---
    pub label_channel: String,
    pub label_refresh: String,
    pub label_last_sync: String,

    // --- ERRORS ---
    pub error_backend: String,
    pub waiting_first_sync: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Resto Dash".to_string(),

    revenue_card: "Revenue (30 days)".to_string(),
    orders_card: "Orders".to_string(),
    rating_card: "Average rating".to_string(),
    avg_ticket_prefix: "avg ticket:".to_string(),
    placeholder: "\u{2014}".to_string(),

    chart_label: "Top products (last 30 days)".to_string(),
    chart_empty: "No product sales in this window.".to_string(),

    label_channel: "Channel".to_string(),
    label_refresh: "Refresh now".to_string(),
    label_last_sync: "Last sync".to_string(),

    error_backend: "Metrics unavailable - check backend connectivity.".to_string(),
    waiting_first_sync: "Contacting metrics backend...".to_string(),
});
