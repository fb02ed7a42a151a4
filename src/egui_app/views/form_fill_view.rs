//! Form fill-out screen (respondent-facing)
//!
//! Renders one input per question, widget chosen by the question type.
//! Before submitting, every required question must have a non-empty answer;
//! the first missing one is highlighted and focused. On success the app
//! navigates home after a short delay. In demo mode submission is replaced
//! by a fixed warning.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::QuestionKind;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.fill_state.loaded {
        state.request_fill_load();
    }

    let Some(form) = state.fill_state.form.clone() else {
        if state.fill_state.loading {
            ui.spinner();
        }
        if let Some((_, text)) = &state.fill_state.status {
            ui.colored_label(colors::ERROR, text);
        }
        return;
    };

    ui.colored_label(
        colors::TEXT_LIGHT,
        egui::RichText::new(&form.title).size(24.0).strong(),
    );
    if !form.description.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, &form.description);
    }
    ui.add_space(16.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (index, question) in form.questions.iter().enumerate() {
            let missing = state.fill_state.missing_required == Some(index);

            ui.horizontal(|ui| {
                ui.colored_label(
                    if missing { colors::REQUIRED } else { colors::TEXT_LIGHT },
                    egui::RichText::new(&question.title).strong(),
                );
                if question.required {
                    ui.colored_label(colors::REQUIRED, "*");
                }
            });

            if let Some(answer) = state.fill_state.answers.get_mut(index) {
                let hint = if !question.placeholder.is_empty() {
                    question.placeholder.clone()
                } else {
                    match question.kind {
                        QuestionKind::Date => "YYYY-MM-DD".to_string(),
                        QuestionKind::Number => "0".to_string(),
                        QuestionKind::Email => "name@example.com".to_string(),
                        _ => String::new(),
                    }
                };

                let editor = egui::TextEdit::singleline(answer)
                    .hint_text(hint)
                    .password(question.kind == QuestionKind::Password)
                    .desired_width(360.0);
                let response = ui.add(editor);

                if missing && state.fill_state.focus_missing {
                    response.request_focus();
                    state.fill_state.focus_missing = false;
                }
            }
            if missing {
                ui.colored_label(colors::REQUIRED, "This field is required");
            }
            ui.add_space(10.0);
        }
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!state.fill_state.loading, egui::Button::new("Submit"))
            .clicked()
        {
            state.request_submit();
        }
        if state.fill_state.loading {
            ui.spinner();
        }
        if let Some((success, text)) = &state.fill_state.status {
            let color = if *success { colors::SUCCESS } else { colors::ERROR };
            ui.colored_label(color, text);
        }
    });
}
