use egui::{Color32, CornerRadius, Frame, Margin, RichText};
use egui_float::{Anchor, FloatPanel};

#[derive(Default)]
pub struct App {
    taps: usize,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Drag the bubble to either side of the window");
            ui.label(format!("tapped {} times", self.taps));
        });

        let taps = &mut self.taps;
        FloatPanel::new("bubble")
            .anchor(Anchor::BOTTOM_RIGHT)
            .on_click(|| *taps += 1)
            .show(ctx, |ui| {
                Frame::new()
                    .fill(Color32::from_rgb(0x40, 0x7a, 0xd6))
                    .corner_radius(CornerRadius::same(24))
                    .inner_margin(Margin::same(16))
                    .show(ui, |ui| {
                        ui.label(RichText::new("?").size(24.0).color(Color32::WHITE));
                    });
            });
    }
}

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 300.0])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "float_example",
        native_options,
        Box::new(|_cc| Ok(Box::<App>::default())),
    )
}
