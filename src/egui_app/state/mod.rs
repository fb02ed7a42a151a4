use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

use crate::egui_app::config::Config;
use crate::egui_app::forms_api::FormsApiClient;
use crate::shared::envelope::ApiEnvelope;
use crate::shared::messages;
use crate::shared::requests::{SaveFormData, SaveFormRequest, SubmitAnswersRequest};
use crate::shared::{Form, Question};

/// Delay before the list re-fetches after a delete
const REFRESH_DELAY: Duration = Duration::from_millis(1500);

/// Delay before navigating home after a successful save/submit
const NAVIGATE_DELAY: Duration = Duration::from_millis(2000);

/// Shown when the editor is submitted with missing fields
const EDITOR_INCOMPLETE: &str = "Title, description and at least one question are required!";

/// Shown when a required question has no answer
const REQUIRED_MISSING: &str = "Please fill out all required fields!";

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    FormsList,
    FormEditor,
    FormFill,
}

/// State of the forms list screen
pub struct FormsListState {
    pub forms: Vec<Form>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    /// Inline message on one form's card: (form id, text, success styling)
    pub card_message: Option<(String, String, bool)>,
    /// Form id awaiting delete confirmation
    pub confirm_delete: Option<String>,
    pub refresh_at: Option<Instant>,
}

impl FormsListState {
    fn new() -> Self {
        Self {
            forms: Vec::new(),
            loading: false,
            loaded: false,
            error: None,
            card_message: None,
            confirm_delete: None,
            refresh_at: None,
        }
    }
}

/// State of the form editor screen (create and edit modes)
pub struct EditorState {
    /// Some(id) in edit mode, None in create mode
    pub form_id: Option<String>,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub loading: bool,
    pub loaded: bool,
    /// (success styling, text)
    pub status: Option<(bool, String)>,
    pub navigate_home_at: Option<Instant>,
    /// Open label-edit prompt: (question index, text being edited)
    pub label_prompt: Option<(usize, String)>,
}

impl EditorState {
    fn new(form_id: Option<String>) -> Self {
        Self {
            form_id,
            title: String::new(),
            description: String::new(),
            questions: Vec::new(),
            loading: false,
            loaded: false,
            status: None,
            navigate_home_at: None,
            label_prompt: None,
        }
    }
}

/// State of the respondent-facing fill screen
pub struct FillState {
    pub form_id: String,
    pub form: Option<Form>,
    /// One answer slot per question, by position
    pub answers: Vec<String>,
    /// Index of the first required question without an answer
    pub missing_required: Option<usize>,
    /// One-shot flag: focus the missing field on the next frame
    pub focus_missing: bool,
    pub loading: bool,
    pub loaded: bool,
    pub status: Option<(bool, String)>,
    pub navigate_home_at: Option<Instant>,
}

impl FillState {
    fn new(form_id: String) -> Self {
        Self {
            form_id,
            form: None,
            answers: Vec::new(),
            missing_required: None,
            focus_missing: false,
            loading: false,
            loaded: false,
            status: None,
            navigate_home_at: None,
        }
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub api: FormsApiClient,
    pub current_view: AppView,
    pub list_state: FormsListState,
    pub editor_state: EditorState,
    pub fill_state: FillState,

    list_result: Option<Receiver<Result<ApiEnvelope<Vec<Form>>, String>>>,
    editor_fetch_result: Option<Receiver<Result<ApiEnvelope<Form>, String>>>,
    fill_fetch_result: Option<Receiver<Result<ApiEnvelope<Form>, String>>>,
    save_result: Option<Receiver<Result<ApiEnvelope<SaveFormData>, String>>>,
    submit_result: Option<Receiver<Result<ApiEnvelope<()>, String>>>,
    delete_result: Option<Receiver<(String, Result<ApiEnvelope<()>, String>)>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        let api = FormsApiClient::new(config.clone());
        Self {
            config,
            api,
            current_view: AppView::FormsList,
            list_state: FormsListState::new(),
            editor_state: EditorState::new(None),
            fill_state: FillState::new(String::new()),
            list_result: None,
            editor_fetch_result: None,
            fill_fetch_result: None,
            save_result: None,
            submit_result: None,
            delete_result: None,
        }
    }

    // ----- navigation -----

    pub fn open_list(&mut self) {
        self.current_view = AppView::FormsList;
        self.list_state = FormsListState::new();
    }

    /// Open the editor; `form_id` selects edit mode
    pub fn open_editor(&mut self, form_id: Option<String>) {
        self.editor_state = EditorState::new(form_id);
        self.current_view = AppView::FormEditor;
    }

    pub fn open_fill(&mut self, form_id: String) {
        self.fill_state = FillState::new(form_id);
        self.current_view = AppView::FormFill;
    }

    // ----- requests -----

    pub fn request_list(&mut self) {
        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.list_forms());
        });
        self.list_result = Some(rx);
        self.list_state.loading = true;
        self.list_state.loaded = true;
    }

    pub fn request_editor_load(&mut self) {
        let Some(form_id) = self.editor_state.form_id.clone() else {
            self.editor_state.loaded = true;
            return;
        };
        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.fetch_form(&form_id));
        });
        self.editor_fetch_result = Some(rx);
        self.editor_state.loading = true;
        self.editor_state.loaded = true;
    }

    pub fn request_fill_load(&mut self) {
        let form_id = self.fill_state.form_id.clone();
        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.fetch_form(&form_id));
        });
        self.fill_fetch_result = Some(rx);
        self.fill_state.loading = true;
        self.fill_state.loaded = true;
    }

    pub fn request_save(&mut self) {
        if self.editor_state.title.trim().is_empty()
            || self.editor_state.description.trim().is_empty()
            || self.editor_state.questions.is_empty()
        {
            self.editor_state.status = Some((false, EDITOR_INCOMPLETE.to_string()));
            return;
        }

        let mut questions = self.editor_state.questions.clone();
        for (position, question) in questions.iter_mut().enumerate() {
            question.order = position as i32;
        }
        let request = SaveFormRequest {
            form_id: self.editor_state.form_id.clone(),
            title: self.editor_state.title.clone(),
            description: self.editor_state.description.clone(),
            questions,
            update_only: self.editor_state.form_id.is_some(),
        };

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.save_form(&request));
        });
        self.save_result = Some(rx);
        self.editor_state.loading = true;
        self.editor_state.status = None;
    }

    pub fn request_submit(&mut self) {
        if self.config.demo_mode() {
            self.fill_state.status = Some((false, messages::DEMO_MODE_WARNING.to_string()));
            return;
        }
        let Some(form) = self.fill_state.form.clone() else {
            return;
        };

        let missing = form.questions.iter().enumerate().find(|(index, question)| {
            question.required
                && !Question::answer_is_taken(
                    self.fill_state.answers.get(*index).map(|a| a.as_str()),
                )
        });
        if let Some((index, _)) = missing {
            self.fill_state.missing_required = Some(index);
            self.fill_state.focus_missing = true;
            self.fill_state.status = Some((false, REQUIRED_MISSING.to_string()));
            return;
        }
        self.fill_state.missing_required = None;

        let mut questions = form.questions;
        for (index, question) in questions.iter_mut().enumerate() {
            question.answer = self.fill_state.answers.get(index).cloned();
        }
        let request = SubmitAnswersRequest {
            form_id: self.fill_state.form_id.clone(),
            questions,
        };

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.submit_answers(&request));
        });
        self.submit_result = Some(rx);
        self.fill_state.loading = true;
        self.fill_state.status = None;
    }

    pub fn request_delete(&mut self, form_id: String) {
        self.list_state.confirm_delete = None;
        if self.config.demo_mode() {
            self.list_state.card_message =
                Some((form_id, messages::DEMO_MODE_WARNING.to_string(), false));
            return;
        }
        let api = self.api.clone();
        let (tx, rx) = channel();
        let id_for_thread = form_id.clone();
        std::thread::spawn(move || {
            let result = api.delete_form(&id_for_thread);
            let _ = tx.send((id_for_thread, result));
        });
        self.delete_result = Some(rx);
        self.list_state.loading = true;
    }

    // ----- polling -----

    /// Drain finished API calls and fire due timers. Called every frame.
    pub fn poll_results(&mut self) {
        self.poll_list();
        self.poll_editor_fetch();
        self.poll_fill_fetch();
        self.poll_save();
        self.poll_submit();
        self.poll_delete();
        self.fire_timers();
    }

    fn poll_list(&mut self) {
        let Some(rx) = &self.list_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.list_result = None;
        self.list_state.loading = false;
        match result {
            Ok(envelope) => {
                self.list_state.forms = envelope.data.unwrap_or_default();
                self.list_state.error = if envelope.success {
                    None
                } else {
                    Some(envelope.message)
                };
            }
            Err(e) => self.list_state.error = Some(e),
        }
    }

    fn poll_editor_fetch(&mut self) {
        let Some(rx) = &self.editor_fetch_result else {
            return;
        };
        let Ok(result) = rx.try_recv() else { return };
        self.editor_fetch_result = None;
        self.editor_state.loading = false;
        match result {
            Ok(envelope) if envelope.success => {
                if let Some(form) = envelope.data {
                    self.editor_state.title = form.title;
                    self.editor_state.description = form.description;
                    self.editor_state.questions = form.questions;
                }
            }
            Ok(envelope) => self.editor_state.status = Some((false, envelope.message)),
            Err(e) => self.editor_state.status = Some((false, e)),
        }
    }

    fn poll_fill_fetch(&mut self) {
        let Some(rx) = &self.fill_fetch_result else {
            return;
        };
        let Ok(result) = rx.try_recv() else { return };
        self.fill_fetch_result = None;
        self.fill_state.loading = false;
        match result {
            Ok(envelope) if envelope.success => {
                if let Some(form) = envelope.data {
                    self.fill_state.answers = form
                        .questions
                        .iter()
                        .map(|q| q.answer.clone().unwrap_or_default())
                        .collect();
                    self.fill_state.form = Some(form);
                }
            }
            Ok(envelope) => self.fill_state.status = Some((false, envelope.message)),
            Err(e) => self.fill_state.status = Some((false, e)),
        }
    }

    fn poll_save(&mut self) {
        let Some(rx) = &self.save_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.save_result = None;
        self.editor_state.loading = false;
        match result {
            Ok(envelope) if envelope.success => {
                self.editor_state.status = Some((true, envelope.message));
                self.editor_state.navigate_home_at = Some(Instant::now() + NAVIGATE_DELAY);
            }
            Ok(envelope) => self.editor_state.status = Some((false, envelope.message)),
            Err(e) => self.editor_state.status = Some((false, e)),
        }
    }

    fn poll_submit(&mut self) {
        let Some(rx) = &self.submit_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.submit_result = None;
        self.fill_state.loading = false;
        match result {
            Ok(envelope) if envelope.success => {
                self.fill_state.status = Some((true, envelope.message));
                self.fill_state.navigate_home_at = Some(Instant::now() + NAVIGATE_DELAY);
            }
            Ok(envelope) => self.fill_state.status = Some((false, envelope.message)),
            Err(e) => self.fill_state.status = Some((false, e)),
        }
    }

    fn poll_delete(&mut self) {
        let Some(rx) = &self.delete_result else { return };
        let Ok((form_id, result)) = rx.try_recv() else {
            return;
        };
        self.delete_result = None;
        self.list_state.loading = false;
        match result {
            Ok(envelope) if envelope.success => {
                self.list_state.card_message = Some((form_id, envelope.message, true));
                self.list_state.refresh_at = Some(Instant::now() + REFRESH_DELAY);
            }
            Ok(envelope) => {
                self.list_state.card_message = Some((form_id, envelope.message, false));
            }
            Err(e) => self.list_state.card_message = Some((form_id, e, false)),
        }
    }

    fn fire_timers(&mut self) {
        let now = Instant::now();
        if self.list_state.refresh_at.is_some_and(|at| now >= at) {
            self.list_state.refresh_at = None;
            self.list_state.card_message = None;
            self.request_list();
        }
        if self.editor_state.navigate_home_at.is_some_and(|at| now >= at) {
            self.editor_state.navigate_home_at = None;
            self.open_list();
        }
        if self.fill_state.navigate_home_at.is_some_and(|at| now >= at) {
            self.fill_state.navigate_home_at = None;
            self.open_list();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
