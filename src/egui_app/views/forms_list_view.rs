//! Forms list screen
//!
//! Shows every stored form as a card: title (links to the fill-out screen),
//! creation date, truncated description, and Edit/Delete actions. Deleting
//! asks for inline confirmation; after a successful delete the list
//! re-fetches itself after a short delay.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// How many characters of the description the card shows
const DESCRIPTION_PREVIEW_CHARS: usize = 60;

enum ListAction {
    NewForm,
    OpenFill(String),
    Edit(String),
    AskDelete(String),
    CancelDelete,
    ConfirmDelete(String),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.list_state.loaded {
        state.request_list();
    }

    let mut action: Option<ListAction> = None;

    ui.horizontal(|ui| {
        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new("Your forms").size(24.0).strong(),
        );
        if state.list_state.loading {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ New form").clicked() {
                action = Some(ListAction::NewForm);
            }
        });
    });
    ui.add_space(12.0);

    if let Some(error) = &state.list_state.error {
        ui.colored_label(colors::ERROR, error);
        ui.add_space(8.0);
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for form in &state.list_state.forms {
            let card = egui::Frame::default()
                .fill(colors::CARD_BG)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::same(12));

            card.show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .link(
                            egui::RichText::new(&form.title)
                                .size(17.0)
                                .color(colors::ACCENT),
                        )
                        .clicked()
                    {
                        action = Some(ListAction::OpenFill(form.form_id.clone()));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let confirming = state.list_state.confirm_delete.as_deref()
                            == Some(form.form_id.as_str());
                        if confirming {
                            if ui.button("Cancel").clicked() {
                                action = Some(ListAction::CancelDelete);
                            }
                            if ui
                                .button(egui::RichText::new("Yes, delete").color(colors::ERROR))
                                .clicked()
                            {
                                action = Some(ListAction::ConfirmDelete(form.form_id.clone()));
                            }
                            ui.colored_label(colors::TEXT_SECONDARY, "Delete this form?");
                        } else {
                            if ui.button("🗑 Delete").clicked() {
                                action = Some(ListAction::AskDelete(form.form_id.clone()));
                            }
                            if ui.button("✏ Edit").clicked() {
                                action = Some(ListAction::Edit(form.form_id.clone()));
                            }
                        }
                    });
                });

                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    form.created_at.format("%b %e, %Y").to_string(),
                );
                if !form.description.is_empty() {
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        truncate_description(&form.description, DESCRIPTION_PREVIEW_CHARS),
                    );
                }

                if let Some((id, text, success)) = &state.list_state.card_message {
                    if id == &form.form_id {
                        let color = if *success { colors::SUCCESS } else { colors::ERROR };
                        ui.colored_label(color, text);
                    }
                }
            });
            ui.add_space(8.0);
        }

        if !state.list_state.loading
            && state.list_state.forms.is_empty()
            && state.list_state.error.is_none()
        {
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Nothing here yet. Create your first form!",
            );
        }
    });

    match action {
        Some(ListAction::NewForm) => state.open_editor(None),
        Some(ListAction::OpenFill(form_id)) => state.open_fill(form_id),
        Some(ListAction::Edit(form_id)) => state.open_editor(Some(form_id)),
        Some(ListAction::AskDelete(form_id)) => {
            state.list_state.confirm_delete = Some(form_id);
        }
        Some(ListAction::CancelDelete) => state.list_state.confirm_delete = None,
        Some(ListAction::ConfirmDelete(form_id)) => state.request_delete(form_id),
        None => {}
    }
}

/// Shorten a description to a fixed number of characters for the card.
fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
