use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub card_value: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card_fill: Color32,
    pub error_banner: Color32,
    pub bar_fill: Color32,
    pub bar_stroke: Color32,
}

pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(56, 189, 248),
        card_value: Color32::WHITE,
        central_panel: Color32::from_rgb(15, 23, 42),
        side_panel: Color32::from_rgb(30, 41, 59),
        card_fill: Color32::from_rgb(30, 41, 59),
        error_banner: Color32::from_rgb(248, 113, 113),
        // rgba(56, 189, 248, 0.4), premultiplied
        bar_fill: Color32::from_rgba_premultiplied(22, 76, 99, 102),
        bar_stroke: Color32::from_rgb(56, 189, 248),
    },
};

impl UiConfig {
    /// Frame for the top toolbar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the bottom error banner (tighter vertical padding)
    pub fn banner_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for one summary card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card_fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
