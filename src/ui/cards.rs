use eframe::egui::{RichText, Ui};

use crate::models::ScalarMetrics;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::format_brl;

/// Display strings for the three cards, derived once per snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardViews {
    pub revenue: String,
    pub orders: String,
    pub rating: String,
}

impl CardViews {
    pub fn from_metrics(metrics: &ScalarMetrics) -> Self {
        Self {
            revenue: format!(
                "{} ({} {})",
                format_brl(metrics.revenue),
                UI_TEXT.avg_ticket_prefix,
                format_brl(metrics.avg_ticket)
            ),
            orders: if metrics.orders.is_finite() {
                format!("{}", metrics.orders.round() as i64)
            } else {
                UI_TEXT.placeholder.clone()
            },
            // A zero rating deliberately reads as "no data", same as a
            // missing field.
            rating: if metrics.rating.is_finite() && metrics.rating > 0.0 {
                format!("{:.2}", metrics.rating)
            } else {
                UI_TEXT.placeholder.clone()
            },
        }
    }
}

pub fn render_cards(ui: &mut Ui, views: &CardViews) {
    ui.horizontal(|ui| {
        card(ui, &UI_TEXT.revenue_card, &views.revenue);
        card(ui, &UI_TEXT.orders_card, &views.orders);
        card(ui, &UI_TEXT.rating_card, &views.rating);
    });
}

fn card(ui: &mut Ui, title: &str, value: &str) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).color(UI_CONFIG.colors.label).small());
            ui.add_space(4.0);
            ui.label(
                RichText::new(value)
                    .color(UI_CONFIG.colors.card_value)
                    .size(22.0)
                    .strong(),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_card_combines_total_and_ticket() {
        let views = CardViews::from_metrics(&ScalarMetrics {
            revenue: 500.0,
            avg_ticket: 38.2,
            orders: 17.0,
            rating: 4.4,
        });
        assert_eq!(views.revenue, "R$ 500,00 (avg ticket: R$ 38,20)");
        assert_eq!(views.orders, "17");
        assert_eq!(views.rating, "4.40");
    }

    #[test]
    fn zero_rating_shows_the_placeholder_glyph() {
        let views = CardViews::from_metrics(&ScalarMetrics {
            rating: 0.0,
            ..Default::default()
        });
        assert_eq!(views.rating, UI_TEXT.placeholder);
        assert_ne!(views.rating, "0.00");
    }

    #[test]
    fn defaulted_metrics_still_render() {
        let views = CardViews::from_metrics(&ScalarMetrics::default());
        assert_eq!(views.revenue, "R$ 0,00 (avg ticket: R$ 0,00)");
        assert_eq!(views.orders, "0");
        assert_eq!(views.rating, UI_TEXT.placeholder);
    }

    #[test]
    fn same_metrics_render_identically() {
        let metrics = ScalarMetrics {
            revenue: 1234.5,
            avg_ticket: 61.7,
            orders: 20.0,
            rating: 4.8,
        };
        assert_eq!(
            CardViews::from_metrics(&metrics),
            CardViews::from_metrics(&metrics)
        );
    }
}
