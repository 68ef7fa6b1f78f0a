use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use chrono::{DateTime, Local};
use eframe::{
    Frame, Storage,
    egui::{Align, CentralPanel, ComboBox, Context, Layout, RichText, TopBottomPanel, Visuals},
};
use serde::{Deserialize, Serialize};

use crate::{
    Cli,
    config::BACKEND,
    data::{ChannelFilter, CycleOutcome, HttpBackend, MetricsBackend, Scheduler},
    models::DashboardSnapshot,
    ui::{CardViews, TopProductsChart, UI_CONFIG, UI_TEXT, render_cards},
};

#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    channel: ChannelFilter, // persists across sessions
    #[serde(skip)]
    backend: Option<Arc<dyn MetricsBackend>>,
    #[serde(skip)]
    scheduler: Option<Scheduler>,
    #[serde(skip)]
    outcome_rx: Option<Receiver<CycleOutcome>>,
    #[serde(skip)]
    snapshot: Option<DashboardSnapshot>,
    #[serde(skip)]
    cards: Option<CardViews>,
    #[serde(skip)]
    chart: Option<TopProductsChart>,
    #[serde(skip)]
    error: Option<String>,
    #[serde(skip)]
    last_sync: Option<DateTime<Local>>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        let base_url = args
            .base_url
            .unwrap_or_else(|| BACKEND.base_url.to_string());
        app.backend = Some(Arc::new(HttpBackend::new(base_url)));
        app.restart_scheduler();
        app
    }

    /// Replace the polling task. Covers startup, channel changes and the
    /// manual refresh button. The old loop exits once its receiver is
    /// gone, so there is never more than one live polling channel.
    fn restart_scheduler(&mut self) {
        if let Some(old) = self.scheduler.take() {
            old.stop();
        }
        if let Some(backend) = &self.backend {
            let (scheduler, rx) = Scheduler::start(backend.clone(), self.channel);
            self.scheduler = Some(scheduler);
            self.outcome_rx = Some(rx);
        }
    }

    fn drain_outcomes(&mut self) {
        let Some(rx) = &self.outcome_rx else { return };

        // Keep only the newest outcome if several queued up.
        let mut latest = None;
        while let Ok(outcome) = rx.try_recv() {
            latest = Some(outcome);
        }

        match latest {
            Some(Ok(snapshot)) => self.apply_snapshot(snapshot),
            Some(Err(err)) => {
                // Stale values stay on screen; only the banner changes.
                log::warn!("metrics refresh failed: {err}");
                self.error = Some(UI_TEXT.error_backend.clone());
            }
            None => {}
        }
    }

    fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.cards = Some(CardViews::from_metrics(&snapshot.metrics));
        // Replaces the previous chart instance outright.
        self.chart = Some(TopProductsChart::new(&snapshot.products));
        self.snapshot = Some(snapshot);
        self.error = None;
        self.last_sync = Some(Local::now());
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                    ui.separator();

                    ui.label(RichText::new(&UI_TEXT.label_channel).color(UI_CONFIG.colors.label));
                    let mut selected = self.channel;
                    ComboBox::from_id_salt("channel_filter")
                        .selected_text(selected.label())
                        .show_ui(ui, |ui| {
                            for option in ChannelFilter::ALL {
                                ui.selectable_value(&mut selected, option, option.label());
                            }
                        });
                    if selected != self.channel {
                        self.channel = selected;
                        self.restart_scheduler();
                    }

                    if ui.button(&UI_TEXT.label_refresh).clicked() {
                        self.restart_scheduler();
                    }

                    if let Some(t) = self.last_sync {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!(
                                    "{}: {}",
                                    UI_TEXT.label_last_sync,
                                    t.format("%H:%M:%S")
                                ))
                                .color(UI_CONFIG.colors.label),
                            );
                        });
                    }
                });
            });
    }

    fn render_error_banner(&self, ctx: &Context) {
        let Some(message) = &self.error else { return };
        TopBottomPanel::bottom("error_banner")
            .frame(UI_CONFIG.banner_frame())
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(message)
                        .color(UI_CONFIG.colors.error_banner)
                        .strong(),
                );
            });
    }

    fn render_central_panel(&self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| match (&self.cards, &self.chart) {
            (Some(cards), Some(chart)) => {
                ui.add_space(8.0);
                render_cards(ui, cards);
                if let Some(snapshot) = &self.snapshot {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!(
                            "Window: {} to {}",
                            snapshot.range.date_from(),
                            snapshot.range.date_to()
                        ))
                        .color(UI_CONFIG.colors.label)
                        .small(),
                    );
                }
                ui.add_space(16.0);
                chart.show(ui);
                if chart.is_empty() {
                    ui.label(RichText::new(&UI_TEXT.chart_empty).color(UI_CONFIG.colors.label));
                }
            }
            _ => {
                ui.centered_and_justified(|ui| {
                    ui.heading(&UI_TEXT.waiting_first_sync);
                });
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.drain_outcomes();
        self.render_top_panel(ctx);
        self.render_error_banner(ctx);
        self.render_central_panel(ctx);
        // Keep draining the outcome channel while the window sits idle.
        ctx.request_repaint_after(Duration::from_millis(500));
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    ctx.set_visuals(visuals);
}
