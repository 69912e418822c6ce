use crate::config::DockConfig;
use crate::consts::{CONFIG_FILE, GLOBAL_COUNTER};
use crate::ui::side_panel::SidePanel;
use eframe::{egui, NativeOptions};
use egui::{Color32, CornerRadius, Frame, Margin, RichText};
use egui_float::{Anchor, FloatOptions, FloatPanel, FloatPanelState, Snap};
use tracing::info;

#[derive(Debug, Clone)]
pub struct FloatDockOptions {
    pub panel: FloatOptions,
    pub label: String,
    pub side_panel: SidePanel,
}

impl From<DockConfig> for FloatDockOptions {
    fn from(config: DockConfig) -> Self {
        Self {
            panel: config.panel,
            label: config.label,
            side_panel: SidePanel::new(true),
        }
    }
}

pub struct FloatDock {
    pub opts: FloatDockOptions,
    /// Salt of the mounted panel; bumped to remount with fresh drag state.
    pub mount_id: u64,
    pub taps: Vec<f64>,
    pub last_snap: Option<Snap>,
}

impl FloatDock {
    pub fn new(config: DockConfig) -> Self {
        Self {
            opts: config.into(),
            mount_id: GLOBAL_COUNTER.next(),
            taps: vec![],
            last_snap: None,
        }
    }

    pub fn start(options: NativeOptions) -> eframe::Result<()> {
        let config = DockConfig::load_or_default(CONFIG_FILE);
        eframe::run_native(
            "FloatDock",
            options,
            Box::new(|_cc| Ok(Box::new(FloatDock::new(config)))),
        )
    }

    /// Drops the mounted panel and mounts a new one at `anchor`.
    pub fn remount(&mut self, ctx: &egui::Context, anchor: Anchor) {
        FloatPanelState::remove(ctx, self.panel().id());
        self.opts.panel.anchor = anchor;
        self.mount_id = GLOBAL_COUNTER.next();
        self.last_snap = None;
        info!("panel remounted at {}", anchor.class_name());
    }

    fn panel<'a>(&self) -> FloatPanel<'a> {
        FloatPanel::new(("floatdock", self.mount_id)).options(self.opts.panel.clone())
    }
}

impl eframe::App for FloatDock {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("main_top_panel").show(ctx, |ui| {
            self.menubar(ui);
        });
        if self.opts.side_panel.show_right_panel {
            egui::SidePanel::right("main_right_panel")
                .resizable(true)
                .default_width(SidePanel::DEFAULT_WIDTH)
                .width_range(SidePanel::MIN_WIDTH..=SidePanel::MAX_WIDTH)
                .show(ctx, |ui| {
                    self.side_panel(ui);
                });
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Drag the bubble, let go to dock it");
            ui.separator();
            ui.label(format!("taps: {}", self.taps.len()));
            if let Some(time) = self.taps.last() {
                ui.label(format!("last tap at {time:.2}s"));
            }
            if let Some(snap) = self.last_snap {
                ui.label(format!("docked: {snap:?}"));
            }
        });

        self.float_panel(ctx);
    }
}

impl FloatDock {
    fn float_panel(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let panel = self.panel();
        let taps = &mut self.taps;
        let label = &self.opts.label;
        let response = panel
            .on_click(|| {
                info!("bubble tapped");
                taps.push(now);
            })
            .show(ctx, |ui| {
                Frame::new()
                    .fill(Color32::from_rgb(0x40, 0x7a, 0xd6))
                    .corner_radius(CornerRadius::same(24))
                    .inner_margin(Margin::same(16))
                    .show(ui, |ui| {
                        ui.label(RichText::new(label).size(24.0).color(Color32::WHITE));
                    });
            });
        if let Some(snap) = response.snap {
            self.last_snap = Some(snap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remount_switches_anchor_and_salt() {
        let ctx = egui::Context::default();
        let mut app = FloatDock::new(DockConfig::default());
        let before = app.mount_id;
        assert_eq!(app.opts.panel.anchor, Anchor::BOTTOM_RIGHT);

        app.last_snap = Some(Snap::FarEdge);
        app.remount(&ctx, Anchor::TOP_LEFT);

        assert_eq!(app.opts.panel.anchor, Anchor::TOP_LEFT);
        assert_ne!(app.mount_id, before);
        assert_eq!(app.last_snap, None);
        assert_ne!(app.panel().id(), FloatPanel::new(("floatdock", before)).id());
    }
}
