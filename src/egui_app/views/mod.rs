use eframe::egui;

use crate::egui_app::state::{AppState, AppView};
use crate::egui_app::theme::colors;

pub mod form_editor_view;
pub mod form_fill_view;
pub mod forms_list_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, frame: &mut eframe::Frame) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            let _frame = frame;

            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("📋 Formcraft").size(18.0).strong(),
                );

                if state.config.demo_mode() {
                    ui.colored_label(colors::REQUIRED, egui::RichText::new("demo").size(12.0));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if state.current_view != AppView::FormsList {
                        if ui.button("Home").clicked() {
                            state.open_list();
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::FormsList => forms_list_view::render(ui, state),
            AppView::FormEditor => form_editor_view::render(ui, state),
            AppView::FormFill => form_fill_view::render(ui, state),
        });
}
