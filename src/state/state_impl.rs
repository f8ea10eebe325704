use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::nexum::{Candidate, CandidateStatus, CandidateUpdate, NewCandidate};
use crate::session::Session;
use crate::ui::SPINNER_FRAME_COUNT;
use crate::utils::input::{digits_only, money_only};
use log::*;
use tui_textarea::TextArea;

use super::form::{
    nivel_estudio_next, nivel_estudio_prev, ApplicationDraft, ApplyField, CandidateDraft,
    EditField, Violation,
};
use super::navigation::{LoginField, View};

/// Literal confirmation shown after a successful application submission.
///
pub const SUBMIT_CONFIRMATION: &str = "✅ Registro enviado. Revisa tu correo para confirmación.";

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    spinner_index: usize,
    view_stack: Vec<View>,
    debug_mode: bool,
    log_buffer: LogBuffer,
    // Session
    session: Option<Session>,
    session_error: Option<String>,
    // Login form
    login_email: String,
    login_password: String,
    login_field: LoginField,
    logging_in: bool,
    login_error: Option<String>,
    // Board
    candidates: Vec<Candidate>,
    board_loading: bool,
    board_error: Option<String>,
    board_column_index: usize,
    board_row_index: usize,
    // Application form
    apply_slug: String,
    apply_draft: ApplicationDraft,
    apply_field: ApplyField,
    resumen_textarea: TextArea<'static>,
    submitting: bool,
    apply_message: Option<String>,
    // Candidate edit
    candidate_id: Option<u64>,
    candidate: Option<Candidate>,
    edit_draft: Option<CandidateDraft>,
    edit_field: EditField,
    notes_textarea: TextArea<'static>,
    detail_loading: bool,
    saving: bool,
    detail_error: Option<String>,
    detail_success: Option<String>,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            spinner_index: 0,
            view_stack: vec![View::Login],
            debug_mode: false,
            log_buffer: LogBuffer::default(),
            session: None,
            session_error: None,
            login_email: String::new(),
            login_password: String::new(),
            login_field: LoginField::Email,
            logging_in: false,
            login_error: None,
            candidates: vec![],
            board_loading: false,
            board_error: None,
            board_column_index: 0,
            board_row_index: 0,
            apply_slug: String::new(),
            apply_draft: ApplicationDraft::default(),
            apply_field: ApplyField::Nombres,
            resumen_textarea: TextArea::default(),
            submitting: false,
            apply_message: None,
            candidate_id: None,
            candidate: None,
            edit_draft: None,
            edit_field: EditField::Nombres,
            notes_textarea: TextArea::default(),
            detail_loading: false,
            saving: false,
            detail_error: None,
            detail_success: None,
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, log_buffer: LogBuffer) -> Self {
        State {
            net_sender: Some(net_sender),
            log_buffer,
            ..State::default()
        }
    }

    /// Queue a network event for the networking thread.
    ///
    pub fn send_network_event(&self, event: NetworkEvent) {
        if let Some(sender) = &self.net_sender {
            if let Err(e) = sender.send(event) {
                error!("Failed to queue network event: {}", e);
            }
        }
    }

    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Returns the currently presented view.
    ///
    pub fn get_current_view(&self) -> View {
        *self.view_stack.last().unwrap_or(&View::Login)
    }

    pub fn push_view(&mut self, view: View) -> &mut Self {
        self.view_stack.push(view);
        self
    }

    /// Return to the previous view, keeping at least one on the stack.
    ///
    pub fn pop_view(&mut self) -> &mut Self {
        if self.view_stack.len() > 1 {
            self.view_stack.pop();
        }
        self
    }

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn toggle_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = !self.debug_mode;
        self
    }

    /// Snapshot of the captured log entries for the debug overlay.
    ///
    pub fn get_debug_entries(&self) -> Vec<String> {
        self.log_buffer.entries()
    }

    //
    // Session
    //

    pub fn get_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn set_session(&mut self, session: Option<Session>) -> &mut Self {
        self.session = session;
        self
    }

    /// Scoping key for candidate visibility, when a session holds one.
    ///
    pub fn session_slug(&self) -> Option<String> {
        self.session
            .as_ref()
            .and_then(|s| s.slug())
            .map(|s| s.to_string())
    }

    /// Display label for the logged-in company.
    ///
    pub fn company_name(&self) -> String {
        self.session
            .as_ref()
            .and_then(|s| s.company_name())
            .unwrap_or("Empresa")
            .to_string()
    }

    pub fn get_session_error(&self) -> Option<&str> {
        self.session_error.as_deref()
    }

    pub fn set_session_error(&mut self, error: Option<String>) -> &mut Self {
        self.session_error = error;
        self
    }

    /// Drop the session and return to the login view with a clean slate.
    ///
    pub fn logout(&mut self) -> &mut Self {
        info!("Clearing session and returning to login...");
        self.session = None;
        self.session_error = None;
        self.candidates.clear();
        self.board_error = None;
        self.login_email.clear();
        self.login_password.clear();
        self.login_field = LoginField::Email;
        self.login_error = None;
        self.view_stack = vec![View::Login];
        self
    }

    //
    // Login form
    //

    pub fn get_login_email(&self) -> &str {
        &self.login_email
    }

    pub fn get_login_password(&self) -> &str {
        &self.login_password
    }

    pub fn get_login_field(&self) -> LoginField {
        self.login_field
    }

    pub fn toggle_login_field(&mut self) -> &mut Self {
        self.login_field = self.login_field.toggled();
        self
    }

    pub fn is_logging_in(&self) -> bool {
        self.logging_in
    }

    pub fn get_login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn login_insert_char(&mut self, c: char) -> &mut Self {
        match self.login_field {
            LoginField::Email => self.login_email.push(c),
            LoginField::Password => self.login_password.push(c),
        }
        self
    }

    pub fn login_delete_char(&mut self) -> &mut Self {
        match self.login_field {
            LoginField::Email => self.login_email.pop(),
            LoginField::Password => self.login_password.pop(),
        };
        self
    }

    /// Gate and start a login attempt. Returns the credentials to send, or
    /// `None` when an attempt is already in flight or a field is empty.
    ///
    pub fn begin_login(&mut self) -> Option<(String, String)> {
        if self.logging_in {
            return None;
        }
        if self.login_email.trim().is_empty() || self.login_password.is_empty() {
            return None;
        }
        self.logging_in = true;
        self.login_error = None;
        Some((self.login_email.trim().to_string(), self.login_password.clone()))
    }

    pub fn finish_login_success(&mut self, session: Session) -> &mut Self {
        self.logging_in = false;
        self.login_password.clear();
        self.session_error = None;
        self.session = Some(session);
        self.view_stack = vec![View::Board];
        self
    }

    pub fn finish_login_failure(&mut self, message: String) -> &mut Self {
        self.logging_in = false;
        self.login_error = Some(message);
        self
    }

    //
    // Board
    //

    pub fn is_board_loading(&self) -> bool {
        self.board_loading
    }

    pub fn get_board_error(&self) -> Option<&str> {
        self.board_error.as_deref()
    }

    pub fn begin_board_load(&mut self) -> &mut Self {
        self.board_loading = true;
        self.board_error = None;
        self
    }

    pub fn finish_board_load(&mut self, candidates: Vec<Candidate>) -> &mut Self {
        self.board_loading = false;
        self.candidates = candidates;
        self.clamp_board_row();
        self
    }

    pub fn fail_board_load(&mut self, message: String) -> &mut Self {
        self.board_loading = false;
        self.board_error = Some(message);
        self
    }

    /// The status column currently highlighted on the board.
    ///
    pub fn get_active_status(&self) -> CandidateStatus {
        CandidateStatus::ALL[self.board_column_index % CandidateStatus::ALL.len()]
    }

    pub fn get_board_column_index(&self) -> usize {
        self.board_column_index
    }

    pub fn get_board_row_index(&self) -> usize {
        self.board_row_index
    }

    /// Candidates in the given status column, in server order.
    ///
    pub fn candidates_with_status(&self, status: CandidateStatus) -> Vec<&Candidate> {
        self.candidates
            .iter()
            .filter(|c| c.status == status)
            .collect()
    }

    pub fn board_next_column(&mut self) -> &mut Self {
        self.board_column_index = (self.board_column_index + 1) % CandidateStatus::ALL.len();
        self.board_row_index = 0;
        self
    }

    pub fn board_prev_column(&mut self) -> &mut Self {
        self.board_column_index = (self.board_column_index + CandidateStatus::ALL.len() - 1)
            % CandidateStatus::ALL.len();
        self.board_row_index = 0;
        self
    }

    pub fn board_next_row(&mut self) -> &mut Self {
        let count = self.candidates_with_status(self.get_active_status()).len();
        if count > 0 && self.board_row_index + 1 < count {
            self.board_row_index += 1;
        }
        self
    }

    pub fn board_prev_row(&mut self) -> &mut Self {
        if self.board_row_index > 0 {
            self.board_row_index -= 1;
        }
        self
    }

    fn clamp_board_row(&mut self) {
        let count = self.candidates_with_status(self.get_active_status()).len();
        if count == 0 {
            self.board_row_index = 0;
        } else if self.board_row_index >= count {
            self.board_row_index = count - 1;
        }
    }

    /// The candidate currently highlighted on the board.
    ///
    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.candidates_with_status(self.get_active_status())
            .get(self.board_row_index)
            .copied()
    }

    //
    // Application form
    //

    /// Enter the public application form scoped to the given company slug.
    ///
    pub fn open_apply(&mut self, slug: String) -> &mut Self {
        self.apply_slug = slug;
        self.apply_draft.reset();
        self.resumen_textarea = TextArea::default();
        self.apply_field = ApplyField::Nombres;
        self.apply_message = None;
        self.submitting = false;
        self.push_view(View::Apply);
        self
    }

    pub fn get_apply_slug(&self) -> &str {
        &self.apply_slug
    }

    pub fn get_apply_draft(&self) -> &ApplicationDraft {
        &self.apply_draft
    }

    pub fn get_apply_field(&self) -> ApplyField {
        self.apply_field
    }

    pub fn apply_next_field(&mut self) -> &mut Self {
        self.apply_field = self.apply_field.next();
        self
    }

    pub fn apply_prev_field(&mut self) -> &mut Self {
        self.apply_field = self.apply_field.prev();
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn get_apply_message(&self) -> Option<&str> {
        self.apply_message.as_deref()
    }

    /// The next unmet requirement of the application draft, recomputed by
    /// the render loop on every frame.
    ///
    pub fn apply_violation(&self) -> Option<Violation> {
        self.apply_draft.first_violation()
    }

    /// Feed a typed character into the focused field, applying the
    /// field-specific coercion before it lands in the draft.
    ///
    pub fn apply_insert_char(&mut self, c: char) -> &mut Self {
        let field = self.apply_field;
        match field {
            ApplyField::Telefono | ApplyField::AniosExperiencia => {
                let raw = format!("{}{}", self.apply_draft.field_text(field), c);
                self.apply_draft.set_field(field, digits_only(&raw));
            }
            ApplyField::PretensionSalarial => {
                let raw = format!("{}{}", self.apply_draft.field_text(field), c);
                self.apply_draft.set_field(field, money_only(&raw));
            }
            ApplyField::NivelEstudio | ApplyField::Resumen => {}
            _ => {
                let mut value = self.apply_draft.field_text(field).to_string();
                value.push(c);
                self.apply_draft.set_field(field, value);
            }
        }
        self
    }

    pub fn apply_delete_char(&mut self) -> &mut Self {
        let field = self.apply_field;
        if matches!(field, ApplyField::NivelEstudio | ApplyField::Resumen) {
            return self;
        }
        let mut value = self.apply_draft.field_text(field).to_string();
        value.pop();
        self.apply_draft.set_field(field, value);
        self
    }

    /// Step the education-level selection forwards or backwards.
    ///
    pub fn apply_cycle_nivel(&mut self, forward: bool) -> &mut Self {
        let current = self.apply_draft.field_text(ApplyField::NivelEstudio);
        let next = if forward {
            nivel_estudio_next(current)
        } else {
            nivel_estudio_prev(current)
        };
        self.apply_draft
            .set_field(ApplyField::NivelEstudio, next.to_string());
        self
    }

    /// Forward a key event to the summary textarea and mirror its content
    /// into the draft.
    ///
    pub fn apply_textarea_input(&mut self, key: crossterm::event::KeyEvent) -> &mut Self {
        self.resumen_textarea.input(key);
        self.apply_draft
            .set_field(ApplyField::Resumen, self.resumen_textarea.lines().join("\n"));
        self
    }

    pub fn resumen_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.resumen_textarea
    }

    /// Gate and start a submission. The gate runs synchronously under the
    /// state lock, before any network work is queued: a second submit while
    /// one is in flight is ignored, an empty slug or a validation violation
    /// refuses with a message and no network I/O.
    ///
    pub fn begin_submit(&mut self) -> Option<(String, NewCandidate)> {
        if self.submitting {
            return None;
        }
        self.apply_message = None;

        if self.apply_slug.trim().is_empty() {
            self.apply_message = Some("Empresa no encontrada (slug vacío).".to_string());
            return None;
        }
        if let Some(violation) = self.apply_draft.first_violation() {
            self.apply_message = Some(format!("Falta completar: {}", violation.label()));
            return None;
        }
        match self.apply_draft.to_new_candidate() {
            Some(payload) => {
                self.submitting = true;
                Some((self.apply_slug.clone(), payload))
            }
            None => {
                self.apply_message = Some("Error inesperado guardando candidato.".to_string());
                None
            }
        }
    }

    pub fn finish_submit_success(&mut self) -> &mut Self {
        self.submitting = false;
        self.apply_draft.reset();
        self.resumen_textarea = TextArea::default();
        self.apply_field = ApplyField::Nombres;
        self.apply_message = Some(SUBMIT_CONFIRMATION.to_string());
        self
    }

    /// A failed submission keeps the draft so nothing the applicant typed
    /// is lost.
    ///
    pub fn finish_submit_failure(&mut self, message: String) -> &mut Self {
        self.submitting = false;
        self.apply_message = Some(message);
        self
    }

    //
    // Candidate edit
    //

    /// Enter the detail view for one candidate and start loading it.
    ///
    pub fn open_candidate(&mut self, id: u64) -> &mut Self {
        self.candidate_id = Some(id);
        self.candidate = None;
        self.edit_draft = None;
        self.edit_field = EditField::Nombres;
        self.notes_textarea = TextArea::default();
        self.detail_loading = true;
        self.saving = false;
        self.detail_error = None;
        self.detail_success = None;
        self.push_view(View::CandidateDetail);
        self
    }

    pub fn get_candidate_id(&self) -> Option<u64> {
        self.candidate_id
    }

    pub fn get_candidate(&self) -> Option<&Candidate> {
        self.candidate.as_ref()
    }

    pub fn get_edit_draft(&self) -> Option<&CandidateDraft> {
        self.edit_draft.as_ref()
    }

    pub fn get_edit_field(&self) -> EditField {
        self.edit_field
    }

    pub fn edit_next_field(&mut self) -> &mut Self {
        self.edit_field = self.edit_field.next();
        self
    }

    pub fn edit_prev_field(&mut self) -> &mut Self {
        self.edit_field = self.edit_field.prev();
        self
    }

    pub fn is_detail_loading(&self) -> bool {
        self.detail_loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn get_detail_error(&self) -> Option<&str> {
        self.detail_error.as_deref()
    }

    pub fn get_detail_success(&self) -> Option<&str> {
        self.detail_success.as_deref()
    }

    pub fn fail_candidate_load(&mut self, message: String) -> &mut Self {
        self.detail_loading = false;
        self.detail_error = Some(message);
        self
    }

    pub fn finish_candidate_load(&mut self, candidate: Candidate) -> &mut Self {
        let draft = CandidateDraft::from_candidate(&candidate);
        self.notes_textarea = textarea_from_text(&draft.notes);
        self.edit_draft = Some(draft);
        self.candidate = Some(candidate);
        self.detail_loading = false;
        self.detail_error = None;
        self
    }

    /// Feed a typed character into the focused edit field. The edit form is
    /// deliberately permissive: no coercion, no client-side validation; the
    /// backend is the judge.
    ///
    pub fn edit_insert_char(&mut self, c: char) -> &mut Self {
        let field = self.edit_field;
        if field == EditField::Notes {
            return self;
        }
        if let Some(draft) = self.edit_draft.as_mut() {
            let mut value = draft.field_text(field).to_string();
            value.push(c);
            draft.set_field(field, value);
            self.detail_success = None;
        }
        self
    }

    pub fn edit_delete_char(&mut self) -> &mut Self {
        let field = self.edit_field;
        if field == EditField::Notes {
            return self;
        }
        if let Some(draft) = self.edit_draft.as_mut() {
            let mut value = draft.field_text(field).to_string();
            value.pop();
            draft.set_field(field, value);
            self.detail_success = None;
        }
        self
    }

    /// Forward a key event to the notes textarea and mirror its content
    /// into the draft.
    ///
    pub fn edit_textarea_input(&mut self, key: crossterm::event::KeyEvent) -> &mut Self {
        self.notes_textarea.input(key);
        if let Some(draft) = self.edit_draft.as_mut() {
            draft.set_field(EditField::Notes, self.notes_textarea.lines().join("\n"));
            self.detail_success = None;
        }
        self
    }

    pub fn notes_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.notes_textarea
    }

    /// Gate and start a save. Returns the identifier and payload to send,
    /// or `None` when nothing is loaded or a save is already in flight.
    ///
    pub fn begin_save(&mut self) -> Option<(u64, CandidateUpdate)> {
        if self.saving || self.detail_loading {
            return None;
        }
        let id = self.candidate_id?;
        let draft = self.edit_draft.as_ref()?;
        self.saving = true;
        self.detail_error = None;
        self.detail_success = None;
        Some((id, draft.to_update()))
    }

    /// Replace both the authoritative record and the draft from the
    /// server's response, so backend normalization is visible immediately.
    ///
    pub fn finish_save_success(&mut self, candidate: Candidate) -> &mut Self {
        let draft = CandidateDraft::from_candidate(&candidate);
        self.notes_textarea = textarea_from_text(&draft.notes);
        self.edit_draft = Some(draft);
        self.candidate = Some(candidate);
        self.saving = false;
        self.detail_success = Some("Cambios guardados ✅".to_string());
        self
    }

    /// A failed save keeps the draft untouched so the user can retry.
    ///
    pub fn finish_save_failure(&mut self, message: String) -> &mut Self {
        self.saving = false;
        self.detail_error = Some(message);
        self
    }
}

fn textarea_from_text(text: &str) -> TextArea<'static> {
    if text.is_empty() {
        TextArea::default()
    } else {
        TextArea::from(text.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nexum::Company;

    fn filled_apply_state() -> State {
        let mut state = State::default();
        state.open_apply("acme".to_string());
        let values = [
            (ApplyField::Nombres, "Ana"),
            (ApplyField::Apellidos, "López"),
            (ApplyField::Telefono, "55551234"),
            (ApplyField::Correo, "ana@example.com"),
            (ApplyField::PuestoAplica, "Cajera"),
            (ApplyField::AniosExperiencia, "3"),
            (ApplyField::PretensionSalarial, "4500.50"),
            (ApplyField::NivelEstudio, "Técnico"),
            (ApplyField::Municipio, "Guatemala"),
            (ApplyField::Direccion, "Zona 1"),
            (ApplyField::Resumen, "Atención al cliente."),
        ];
        for (field, value) in values {
            state.apply_draft.set_field(field, value.to_string());
        }
        state
    }

    #[test]
    fn test_begin_submit_refuses_empty_slug() {
        let mut state = filled_apply_state();
        state.apply_slug = String::new();
        assert!(state.begin_submit().is_none());
        assert_eq!(
            state.get_apply_message(),
            Some("Empresa no encontrada (slug vacío).")
        );
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_begin_submit_refuses_violation_with_label() {
        let mut state = filled_apply_state();
        state.apply_draft.set_field(ApplyField::Telefono, "5555".to_string());
        assert!(state.begin_submit().is_none());
        assert_eq!(
            state.get_apply_message(),
            Some("Falta completar: Teléfono (mínimo 8 dígitos)")
        );
    }

    #[test]
    fn test_begin_submit_gates_double_submission() {
        let mut state = filled_apply_state();
        let first = state.begin_submit();
        assert!(first.is_some());
        assert!(state.is_submitting());
        // Second submit while in flight is ignored outright.
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn test_finish_submit_success_resets_draft() {
        let mut state = filled_apply_state();
        state.begin_submit().unwrap();
        state.finish_submit_success();
        for field in ApplyField::ALL {
            assert_eq!(state.get_apply_draft().field_text(field), "");
        }
        assert_eq!(state.get_apply_message(), Some(SUBMIT_CONFIRMATION));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_finish_submit_failure_preserves_draft() {
        let mut state = filled_apply_state();
        state.begin_submit().unwrap();
        state.finish_submit_failure("Error guardando candidato (422)".to_string());
        assert_eq!(state.get_apply_draft().nombres, "Ana");
        assert_eq!(
            state.get_apply_message(),
            Some("Error guardando candidato (422)")
        );
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_apply_insert_char_coerces_numeric_fields() {
        let mut state = State::default();
        state.open_apply("acme".to_string());
        while state.get_apply_field() != ApplyField::Telefono {
            state.apply_next_field();
        }
        for c in "50-12".chars() {
            state.apply_insert_char(c);
        }
        assert_eq!(state.get_apply_draft().telefono, "5012");
    }

    #[test]
    fn test_begin_save_requires_loaded_draft() {
        let mut state = State::default();
        state.open_candidate(7);
        // Still loading, nothing fetched yet.
        assert!(state.begin_save().is_none());
    }

    #[test]
    fn test_begin_save_gates_double_save() {
        let mut state = State::default();
        state.open_candidate(7);
        state.finish_candidate_load(sample_candidate());
        assert!(state.begin_save().is_some());
        assert!(state.is_saving());
        assert!(state.begin_save().is_none());
    }

    #[test]
    fn test_finish_save_failure_preserves_draft() {
        let mut state = State::default();
        state.open_candidate(7);
        state.finish_candidate_load(sample_candidate());
        state.edit_insert_char('!');
        let edited = state.get_edit_draft().unwrap().clone();
        state.begin_save().unwrap();
        state.finish_save_failure("No se pudo guardar (revisa backend/puerto)".to_string());
        assert_eq!(state.get_edit_draft(), Some(&edited));
        assert!(state.get_detail_error().is_some());
    }

    #[test]
    fn test_finish_save_success_replaces_draft_from_server() {
        let mut state = State::default();
        state.open_candidate(7);
        state.finish_candidate_load(sample_candidate());
        state.edit_insert_char('x');
        let mut normalized = sample_candidate();
        normalized.nombres = "Ana María".to_string();
        state.begin_save().unwrap();
        state.finish_save_success(normalized);
        assert_eq!(state.get_edit_draft().unwrap().nombres, "Ana María");
        assert_eq!(state.get_detail_success(), Some("Cambios guardados ✅"));
    }

    #[test]
    fn test_board_navigation() {
        let mut state = State::default();
        let mut available = sample_candidate();
        available.status = crate::nexum::CandidateStatus::Disponible;
        let mut dropped = sample_candidate();
        dropped.id = 8;
        dropped.status = crate::nexum::CandidateStatus::DeBaja;
        state.finish_board_load(vec![available, dropped]);

        assert_eq!(
            state.get_active_status(),
            crate::nexum::CandidateStatus::Disponible
        );
        assert_eq!(state.selected_candidate().unwrap().id, 7);

        state.board_prev_column();
        assert_eq!(
            state.get_active_status(),
            crate::nexum::CandidateStatus::DeBaja
        );
        assert_eq!(state.selected_candidate().unwrap().id, 8);

        // Row movement is bounded by the column's size.
        state.board_next_row();
        assert_eq!(state.get_board_row_index(), 0);
    }

    #[test]
    fn test_logout_clears_session_and_returns_to_login() {
        let mut state = State::default();
        state.set_session(Some(Session {
            token: Some("tok".to_string()),
            company: Some(Company {
                slug: "acme".to_string(),
                name: "Acme S.A.".to_string(),
            }),
        }));
        state.push_view(View::Board);
        state.logout();
        assert!(state.get_session().is_none());
        assert_eq!(state.get_current_view(), View::Login);
    }

    fn sample_candidate() -> Candidate {
        Candidate {
            id: 7,
            nombres: "Ana".to_string(),
            apellidos: "López".to_string(),
            telefono: Some("55551234".to_string()),
            correo: Some("ana@example.com".to_string()),
            municipio: None,
            direccion: None,
            puesto_aplica: Some("Cajera".to_string()),
            anios_experiencia: Some(3.0),
            pretension_salarial: None,
            nivel_estudio: None,
            resumen: None,
            cv_url: None,
            status: crate::nexum::CandidateStatus::Seguimiento,
            notes: None,
            created_at: None,
        }
    }
}
