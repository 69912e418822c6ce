use crate::app::FloatDock;
use egui_float::Anchor;

#[derive(Debug, Clone)]
pub struct SidePanel {
    pub show_right_panel: bool,
}

impl SidePanel {
    pub fn new(is_show: bool) -> Self {
        Self {
            show_right_panel: is_show,
        }
    }
}

impl SidePanel {
    pub const DEFAULT_WIDTH: f32 = 200.0;
    pub const MIN_WIDTH: f32 = 160.0;
    pub const MAX_WIDTH: f32 = 300.0;
}

impl FloatDock {
    pub fn side_panel(&mut self, ui: &mut egui::Ui) {
        ui.label("Anchor");
        ui.separator();

        let current = self.opts.panel.anchor;
        for anchor in Anchor::ALL {
            if ui
                .radio(current == anchor, anchor.class_name())
                .clicked()
                && anchor != current
            {
                self.remount(ui.ctx(), anchor);
            }
        }

        ui.add_space(8.0);
        ui.label("Tap threshold");
        let slider = egui::Slider::new(&mut self.opts.panel.click_threshold, 0.0..=40.0)
            .suffix(" px");
        // the tracker reads its threshold at mount time
        if ui.add(slider).changed() {
            self.remount(ui.ctx(), current);
        }
    }
}
