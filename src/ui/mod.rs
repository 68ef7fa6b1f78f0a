mod cards;
mod chart;
mod ui_config;
mod ui_text;

pub(crate) use cards::{CardViews, render_cards};
pub(crate) use chart::TopProductsChart;
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
