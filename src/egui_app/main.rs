/**
 * egui Native Desktop App - Main Entry Point
 *
 * This is the main entry point for the egui native desktop application.
 * It implements eframe::App and drives the three form screens.
 */
use eframe::egui;
use formcraft::egui_app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Formcraft",
        options,
        Box::new(|_cc| Ok(Box::new(FormcraftApp::default()))),
    )
}

/// Main application state
struct FormcraftApp {
    state: AppState,
}

impl Default for FormcraftApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for FormcraftApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.state.poll_results();

        views::render_top_bar(ctx, &mut self.state, frame);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
