use crate::app::FloatDock;
use egui::{Button, Checkbox};

const BTN_WIDTH: f32 = 200.0;

impl FloatDock {
    pub fn menubar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            self.panel_menu(ui);
            self.window_menu(ui);
        });
    }

    fn panel_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Panel", |ui| {
            let reset_btn = Button::new("Reset Position").min_size((BTN_WIDTH, 0.).into());
            if ui.add(reset_btn).clicked() {
                let anchor = self.opts.panel.anchor;
                self.remount(ui.ctx(), anchor);
                ui.close();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn window_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Window", |ui| {
            ui.add(Checkbox::new(
                &mut self.opts.side_panel.show_right_panel,
                "Anchor Panel",
            ));
        });
    }
}
