use eframe::egui::{Stroke, Ui};
use egui_plot::{AxisHints, Bar, BarChart, Legend, Plot};

use crate::models::ProductBar;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;

/// Owned chart state for the current snapshot. The app holds at most one;
/// each successful cycle builds a fresh instance that replaces the last.
pub struct TopProductsChart {
    labels: Vec<String>,
    bars: Vec<Bar>,
}

impl TopProductsChart {
    pub fn new(products: &[ProductBar]) -> Self {
        let labels: Vec<String> = products.iter().map(|p| p.label.clone()).collect();
        let bars = products
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Bar::new(i as f64, p.value)
                    .name(&p.label)
                    .width(0.6)
                    .fill(UI_CONFIG.colors.bar_fill)
                    .stroke(Stroke::new(1.5, UI_CONFIG.colors.bar_stroke))
            })
            .collect();

        Self { labels, bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn show(&self, ui: &mut Ui) {
        let labels = self.labels.clone();
        let x_axis = AxisHints::new_x().formatter(move |mark, _range| {
            // Product names sit on integer positions; hide everything else.
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 0.05 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        });

        Plot::new("top_products_chart")
            .legend(Legend::default())
            .custom_x_axes(vec![x_axis])
            .include_y(0.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .height(280.0)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(UI_TEXT.chart_label.clone(), self.bars.clone()));
            });
    }
}
