use crate::models::{ProductBar, ScalarMetrics};
use crate::utils::DateRange;

/// One coherent fetch of everything the dashboard shows. Built whole or
/// not at all, so the cards and chart always describe the same window.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub metrics: ScalarMetrics,
    pub products: Vec<ProductBar>,
    pub range: DateRange,
}
