//! Form editor screen
//!
//! Handles both create and edit mode. Edit mode loads the existing form on
//! first frame. Questions can be added (up to the per-form cap), relabeled
//! through a prompt dialog, given a placeholder and type, marked required,
//! and removed. Submitting validates locally and then saves; on success the
//! app navigates home after a short delay.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::{Question, QuestionKind, MAX_QUESTIONS_PER_FORM};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.editor_state.loaded {
        state.request_editor_load();
    }

    let edit_mode = state.editor_state.form_id.is_some();

    ui.horizontal(|ui| {
        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new(if edit_mode { "Edit form" } else { "Create form" })
                .size(24.0)
                .strong(),
        );
        if state.editor_state.loading {
            ui.spinner();
        }
    });
    ui.add_space(12.0);

    ui.colored_label(colors::TEXT_SECONDARY, "Title");
    ui.add(
        egui::TextEdit::singleline(&mut state.editor_state.title)
            .hint_text("My survey")
            .desired_width(360.0),
    );
    ui.add_space(8.0);

    ui.colored_label(colors::TEXT_SECONDARY, "Description");
    ui.add(
        egui::TextEdit::multiline(&mut state.editor_state.description)
            .hint_text("What is this form about?")
            .desired_rows(2)
            .desired_width(360.0),
    );
    ui.add_space(16.0);

    let mut remove_index: Option<usize> = None;
    let mut edit_label: Option<usize> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        let question_count = state.editor_state.questions.len();
        for index in 0..question_count {
            let card = egui::Frame::default()
                .fill(colors::CARD_BG)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::same(10));

            card.show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        egui::RichText::new(&state.editor_state.questions[index].title).strong(),
                    );
                    if ui.small_button("✏").on_hover_text("Edit label").clicked() {
                        edit_label = Some(index);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").on_hover_text("Remove question").clicked() {
                            remove_index = Some(index);
                        }
                    });
                });

                ui.horizontal(|ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Placeholder:");
                    ui.add(
                        egui::TextEdit::singleline(
                            &mut state.editor_state.questions[index].placeholder,
                        )
                        .desired_width(220.0),
                    );

                    let current_kind = state.editor_state.questions[index].kind;
                    egui::ComboBox::from_id_salt(("question-kind", index))
                        .selected_text(current_kind.as_str())
                        .show_ui(ui, |ui| {
                            for kind in QuestionKind::ALL {
                                ui.selectable_value(
                                    &mut state.editor_state.questions[index].kind,
                                    kind,
                                    kind.as_str(),
                                );
                            }
                        });

                    ui.checkbox(
                        &mut state.editor_state.questions[index].required,
                        "Required",
                    );
                });
            });
            ui.add_space(6.0);
        }

        let can_add = state.editor_state.questions.len() < MAX_QUESTIONS_PER_FORM;
        if ui
            .add_enabled(can_add, egui::Button::new("➕ Add question"))
            .clicked()
        {
            let order = state.editor_state.questions.len() as i32;
            let title = format!("Question {}", order + 1);
            state.editor_state.questions.push(Question::draft(title, order));
        }
        if !can_add {
            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!("A form can have at most {MAX_QUESTIONS_PER_FORM} questions."),
            );
        }
    });

    if let Some(index) = remove_index {
        state.editor_state.questions.remove(index);
    }
    if let Some(index) = edit_label {
        let current = state.editor_state.questions[index].title.clone();
        state.editor_state.label_prompt = Some((index, current));
    }

    render_label_prompt(ui, state);

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        let submit_text = if edit_mode { "Save changes" } else { "Create form" };
        if ui
            .add_enabled(!state.editor_state.loading, egui::Button::new(submit_text))
            .clicked()
        {
            state.request_save();
        }
        if let Some((success, text)) = &state.editor_state.status {
            let color = if *success { colors::SUCCESS } else { colors::ERROR };
            ui.colored_label(color, text);
        }
    });
}

/// Modal prompt for editing a question's label.
fn render_label_prompt(ui: &mut egui::Ui, state: &mut AppState) {
    let Some((index, mut text)) = state.editor_state.label_prompt.clone() else {
        return;
    };

    let mut keep_open = true;
    egui::Window::new("Edit question label")
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.text_edit_singleline(&mut text);
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    if let Some(question) = state.editor_state.questions.get_mut(index) {
                        question.title = text.clone();
                    }
                    keep_open = false;
                }
                if ui.button("Cancel").clicked() {
                    keep_open = false;
                }
            });
        });

    state.editor_state.label_prompt = if keep_open { Some((index, text)) } else { None };
}
