use crate::nexum::{CandidateUpdate, NewCandidate, Nexum, NexumError};
use crate::session::{Session, SessionStore};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
/// The payloads are built synchronously under the state lock before the
/// event is queued (see `State::begin_submit` / `State::begin_save`), so a
/// submission in flight always reflects exactly what was validated.
#[derive(Debug, Clone)]
pub enum Event {
    Login {
        email: String,
        password: String,
    },
    LoadCandidates,
    LoadCandidate {
        id: u64,
    },
    SubmitApplication {
        slug: String,
        payload: NewCandidate,
    },
    SaveCandidate {
        id: u64,
        payload: CandidateUpdate,
    },
    Logout,
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    nexum: &'a mut Nexum,
    sessions: &'a dyn SessionStore,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(
        state: &'a Arc<Mutex<State>>,
        nexum: &'a mut Nexum,
        sessions: &'a dyn SessionStore,
    ) -> Self {
        Handler {
            state,
            nexum,
            sessions,
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Login { email, password } => self.login(email, password).await?,
            Event::LoadCandidates => self.load_candidates().await?,
            Event::LoadCandidate { id } => self.load_candidate(id).await?,
            Event::SubmitApplication { slug, payload } => {
                self.submit_application(slug, payload).await?
            }
            Event::SaveCandidate { id, payload } => self.save_candidate(id, payload).await?,
            Event::Logout => self.logout().await?,
        }
        Ok(())
    }

    /// Authenticate the company, persist the returned identity, and load
    /// the board.
    ///
    async fn login(&mut self, email: String, password: String) -> Result<()> {
        info!("Logging in as {}...", email);
        match self.nexum.login(&email, &password).await {
            Ok(outcome) => {
                let session = Session {
                    token: outcome.token,
                    company: outcome.company,
                };
                self.nexum.set_token(session.token.clone());
                if let Err(e) = self.sessions.save(&session) {
                    warn!("Failed to persist session: {}", e);
                }
                {
                    let mut state = self.state.lock().await;
                    state.finish_login_success(session);
                }
                info!("Login succeeded.");
                self.load_candidates().await?;
            }
            Err(e) => {
                error!("Login failed: {}", e);
                let message = match e {
                    NexumError::Api {
                        message: Some(detail),
                        ..
                    } => detail,
                    NexumError::Api { message: None, .. } => "Credenciales inválidas".to_string(),
                    _ => "No se pudo conectar al backend.".to_string(),
                };
                self.state.lock().await.finish_login_failure(message);
            }
        }
        Ok(())
    }

    /// Update state with the company's candidates. The session is checked
    /// before any network contact; a missing identity is a terminal state
    /// for the board view, not a request.
    ///
    async fn load_candidates(&mut self) -> Result<()> {
        let slug = {
            let mut state = self.state.lock().await;
            match session_guard(&state) {
                Err(message) => {
                    warn!("Skipping candidates request: {}", message);
                    state.fail_board_load(message.to_string());
                    return Ok(());
                }
                Ok(slug) => {
                    state.begin_board_load();
                    slug
                }
            }
        };
        info!("Fetching candidates for company '{}'...", slug);
        match self.nexum.candidates(&slug).await {
            Ok(candidates) => {
                info!("Received {} candidates.", candidates.len());
                self.state.lock().await.finish_board_load(candidates);
            }
            Err(e) => {
                error!("Failed to fetch candidates: {}", e);
                self.state
                    .lock()
                    .await
                    .fail_board_load("No se pudo conectar al backend".to_string());
            }
        }
        Ok(())
    }

    /// Update state with one candidate and derive its edit draft.
    ///
    async fn load_candidate(&mut self, id: u64) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            if let Err(message) = session_guard(&state) {
                warn!("Skipping candidate request: {}", message);
                state.fail_candidate_load(message.to_string());
                return Ok(());
            }
        }
        info!("Fetching candidate {}...", id);
        match self.nexum.candidate(id).await {
            Ok(candidate) => {
                let mut state = self.state.lock().await;
                state.finish_candidate_load(candidate);
            }
            Err(e) => {
                error!("Failed to fetch candidate {}: {}", id, e);
                self.state
                    .lock()
                    .await
                    .fail_candidate_load("No se pudo conectar al backend".to_string());
            }
        }
        Ok(())
    }

    /// Send a validated application. Success resets the draft; failure
    /// surfaces the backend's detail and keeps everything the applicant
    /// typed.
    ///
    async fn submit_application(&mut self, slug: String, payload: NewCandidate) -> Result<()> {
        info!("Submitting application for company '{}'...", slug);
        match self.nexum.create_candidate(&slug, &payload).await {
            Ok(candidate) => {
                info!("Application registered with id {}.", candidate.id);
                self.state.lock().await.finish_submit_success();
            }
            Err(e) => {
                error!("Failed to register application: {}", e);
                self.state
                    .lock()
                    .await
                    .finish_submit_failure(create_error_message(&e));
            }
        }
        Ok(())
    }

    /// Apply a partial update to a candidate. Success replaces the record
    /// and the draft from the server's response; failure keeps the draft
    /// untouched for retry.
    ///
    async fn save_candidate(&mut self, id: u64, payload: CandidateUpdate) -> Result<()> {
        info!("Saving candidate {}...", id);
        match self.nexum.update_candidate(id, &payload).await {
            Ok(candidate) => {
                info!("Candidate {} saved.", id);
                self.state.lock().await.finish_save_success(candidate);
            }
            Err(e) => {
                error!("Failed to save candidate {}: {}", id, e);
                self.state
                    .lock()
                    .await
                    .finish_save_failure("No se pudo guardar (revisa backend/puerto)".to_string());
            }
        }
        Ok(())
    }

    /// Drop the persisted session. The in-memory state was already cleared
    /// by the terminal handler.
    ///
    async fn logout(&mut self) -> Result<()> {
        info!("Clearing persisted session...");
        self.nexum.set_token(None);
        if let Err(e) = self.sessions.clear() {
            warn!("Failed to clear persisted session: {}", e);
        }
        Ok(())
    }
}

/// Check the session before a scoped request: absent identity or a blank
/// scoping key refuses with the message shown in place of the data.
///
fn session_guard(state: &State) -> Result<String, &'static str> {
    match state.get_session() {
        None => Err("No hay empresa en sesión"),
        Some(session) => match &session.company {
            None => Err("No hay empresa en sesión"),
            Some(company) if company.slug.trim().is_empty() => Err("Empresa sin slug"),
            Some(company) => Ok(company.slug.clone()),
        },
    }
}

/// Error string shown under the application form for a failed create.
///
fn create_error_message(error: &NexumError) -> String {
    match error {
        NexumError::Api {
            status,
            message: Some(detail),
        } => format!("Error guardando candidato ({}) - {}", status, detail),
        NexumError::Api {
            status,
            message: None,
        } => format!("Error guardando candidato ({})", status),
        _ => "Error inesperado guardando candidato.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nexum::{Candidate, CandidateStatus, Company};
    use crate::session::testing::MemorySessionStore;
    use crate::state::ApplyField;
    use httpmock::MockServer;
    use serde_json::json;

    fn new_candidate_payload() -> NewCandidate {
        NewCandidate {
            nombres: "Ana".to_string(),
            apellidos: "López".to_string(),
            telefono: "55551234".to_string(),
            correo: "ana@example.com".to_string(),
            municipio: "Guatemala".to_string(),
            direccion: "Zona 1".to_string(),
            puesto_aplica: "Cajera".to_string(),
            anios_experiencia: 3.0,
            pretension_salarial: 4500.0,
            nivel_estudio: "Técnico".to_string(),
            resumen: "Atención al cliente.".to_string(),
            cv_url: "".to_string(),
        }
    }

    fn candidate_body(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "nombres": "Ana",
            "apellidos": "López",
            "status": "disponible",
        })
    }

    fn company_session() -> Session {
        Session {
            token: None,
            company: Some(Company {
                slug: "acme".to_string(),
                name: "Acme S.A.".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn submit_application_success_sets_confirmation() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/companies/acme/candidates");
                then.status(201).json_body(candidate_body(11));
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        let mut nexum = Nexum::new(&server.base_url());
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        handler
            .handle(Event::SubmitApplication {
                slug: "acme".to_string(),
                payload: new_candidate_payload(),
            })
            .await
            .unwrap();

        let state = state.lock().await;
        assert_eq!(
            state.get_apply_message(),
            Some("✅ Registro enviado. Revisa tu correo para confirmación.")
        );
        assert!(!state.is_submitting());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn submit_application_surfaces_validation_detail() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/companies/acme/candidates");
                then.status(422)
                    .json_body(json!({ "message": ["telefono must be longer than 8"] }));
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        let mut nexum = Nexum::new(&server.base_url());
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        handler
            .handle(Event::SubmitApplication {
                slug: "acme".to_string(),
                payload: new_candidate_payload(),
            })
            .await
            .unwrap();

        let state = state.lock().await;
        assert_eq!(
            state.get_apply_message(),
            Some("Error guardando candidato (422) - telefono must be longer than 8")
        );
    }

    #[tokio::test]
    async fn submit_application_failure_preserves_draft() {
        let state = Arc::new(Mutex::new(State::default()));
        {
            let mut state = state.lock().await;
            state.open_apply("acme".to_string());
            // Focused field is Nombres; type something to lose.
            state.apply_insert_char('A');
            assert_eq!(state.get_apply_draft().field_text(ApplyField::Nombres), "A");
        }

        // Nothing is listening on the discard port.
        let mut nexum = Nexum::new("http://127.0.0.1:9");
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        handler
            .handle(Event::SubmitApplication {
                slug: "acme".to_string(),
                payload: new_candidate_payload(),
            })
            .await
            .unwrap();

        let state = state.lock().await;
        assert_eq!(
            state.get_apply_message(),
            Some("Error inesperado guardando candidato.")
        );
        assert_eq!(state.get_apply_draft().field_text(ApplyField::Nombres), "A");
    }

    #[tokio::test]
    async fn load_candidates_without_session_is_local_error() {
        let state = Arc::new(Mutex::new(State::default()));
        // Closed port: the guard must refuse before any request is made.
        let mut nexum = Nexum::new("http://127.0.0.1:9");
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        handler.handle(Event::LoadCandidates).await.unwrap();

        let state = state.lock().await;
        assert_eq!(state.get_board_error(), Some("No hay empresa en sesión"));
    }

    #[tokio::test]
    async fn load_candidates_without_slug_is_local_error() {
        let state = Arc::new(Mutex::new(State::default()));
        {
            let mut state = state.lock().await;
            state.set_session(Some(Session {
                token: Some("tok".to_string()),
                company: Some(Company {
                    slug: "  ".to_string(),
                    name: "Acme S.A.".to_string(),
                }),
            }));
        }
        let mut nexum = Nexum::new("http://127.0.0.1:9");
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        handler.handle(Event::LoadCandidates).await.unwrap();

        let state = state.lock().await;
        assert_eq!(state.get_board_error(), Some("Empresa sin slug"));
    }

    #[tokio::test]
    async fn load_candidates_success_populates_board() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/companies/acme/candidates");
                then.status(200)
                    .json_body(json!([candidate_body(1), candidate_body(2)]));
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        state.lock().await.set_session(Some(company_session()));
        let mut nexum = Nexum::new(&server.base_url());
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        handler.handle(Event::LoadCandidates).await.unwrap();

        let state = state.lock().await;
        assert_eq!(
            state
                .candidates_with_status(CandidateStatus::Disponible)
                .len(),
            2
        );
        assert!(!state.is_board_loading());
        assert_eq!(state.get_board_error(), None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn load_candidate_failure_is_generic_connectivity_error() {
        let state = Arc::new(Mutex::new(State::default()));
        {
            let mut state = state.lock().await;
            state.set_session(Some(company_session()));
            state.open_candidate(7);
        }
        let mut nexum = Nexum::new("http://127.0.0.1:9");
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        handler.handle(Event::LoadCandidate { id: 7 }).await.unwrap();

        let state = state.lock().await;
        assert_eq!(
            state.get_detail_error(),
            Some("No se pudo conectar al backend")
        );
        assert!(!state.is_detail_loading());
    }

    #[tokio::test]
    async fn save_candidate_success_resyncs_draft_from_server() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("PATCH").path("/candidates/7");
                then.status(200).json_body(json!({
                    "id": 7,
                    "nombres": "Ana María",
                    "apellidos": "López",
                    "status": "seguimiento",
                }));
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        {
            let mut state = state.lock().await;
            state.set_session(Some(company_session()));
            state.open_candidate(7);
            state.finish_candidate_load(
                serde_json::from_value(candidate_body(7)).unwrap(),
            );
        }
        let mut nexum = Nexum::new(&server.base_url());
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        let payload = state.lock().await.begin_save().unwrap();
        handler
            .handle(Event::SaveCandidate {
                id: payload.0,
                payload: payload.1,
            })
            .await
            .unwrap();

        let state = state.lock().await;
        // The draft reflects the server's normalization, not local text.
        assert_eq!(state.get_edit_draft().unwrap().nombres, "Ana María");
        assert_eq!(state.get_edit_draft().unwrap().status, "seguimiento");
        assert_eq!(state.get_detail_success(), Some("Cambios guardados ✅"));
        assert!(!state.is_saving());
    }

    #[tokio::test]
    async fn save_candidate_failure_keeps_draft_untouched() {
        let state = Arc::new(Mutex::new(State::default()));
        {
            let mut state = state.lock().await;
            state.set_session(Some(company_session()));
            state.open_candidate(7);
            state.finish_candidate_load(
                serde_json::from_value(candidate_body(7)).unwrap(),
            );
            state.edit_insert_char('!');
        }
        let edited = state.lock().await.get_edit_draft().unwrap().clone();

        let mut nexum = Nexum::new("http://127.0.0.1:9");
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        let (id, payload) = state.lock().await.begin_save().unwrap();
        handler
            .handle(Event::SaveCandidate { id, payload })
            .await
            .unwrap();

        let state = state.lock().await;
        assert_eq!(
            state.get_detail_error(),
            Some("No se pudo guardar (revisa backend/puerto)")
        );
        assert_eq!(state.get_edit_draft(), Some(&edited));
    }

    #[tokio::test]
    async fn login_success_persists_session_and_loads_board() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/auth/login");
                then.status(200).json_body(json!({
                    "token": "tok-123",
                    "company": { "slug": "acme", "name": "Acme S.A." },
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/companies/acme/candidates");
                then.status(200).json_body(json!([]));
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        let mut nexum = Nexum::new(&server.base_url());
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        handler
            .handle(Event::Login {
                email: "empresa@correo.com".to_string(),
                password: "secreto".to_string(),
            })
            .await
            .unwrap();

        let persisted = sessions.load().unwrap().unwrap();
        assert_eq!(persisted.token.as_deref(), Some("tok-123"));
        assert_eq!(persisted.slug(), Some("acme"));

        let state = state.lock().await;
        assert_eq!(state.get_current_view(), crate::state::View::Board);
        assert!(!state.is_logging_in());
        assert_eq!(state.get_board_error(), None);
    }

    #[tokio::test]
    async fn login_failure_shows_server_message() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/auth/login");
                then.status(401)
                    .json_body(json!({ "message": "Credenciales inválidas" }));
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        let mut nexum = Nexum::new(&server.base_url());
        let sessions = MemorySessionStore::new(None);
        let mut handler = Handler::new(&state, &mut nexum, &sessions);
        handler
            .handle(Event::Login {
                email: "empresa@correo.com".to_string(),
                password: "mala".to_string(),
            })
            .await
            .unwrap();

        let state = state.lock().await;
        assert_eq!(state.get_login_error(), Some("Credenciales inválidas"));
        assert!(!state.is_logging_in());
        assert_eq!(state.get_current_view(), crate::state::View::Login);
    }

    #[test]
    fn test_create_error_message_formats() {
        let error = NexumError::Api {
            status: 422,
            message: Some("telefono must be longer than 8".to_string()),
        };
        assert_eq!(
            create_error_message(&error),
            "Error guardando candidato (422) - telefono must be longer than 8"
        );

        let error = NexumError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(create_error_message(&error), "Error guardando candidato (500)");
    }

    #[test]
    fn test_session_guard_states() {
        let mut state = State::default();
        assert_eq!(session_guard(&state), Err("No hay empresa en sesión"));

        state.set_session(Some(Session {
            token: Some("tok".to_string()),
            company: None,
        }));
        assert_eq!(session_guard(&state), Err("No hay empresa en sesión"));

        state.set_session(Some(company_session()));
        assert_eq!(session_guard(&state), Ok("acme".to_string()));
    }

    #[test]
    fn test_candidate_body_parses() {
        let candidate: Candidate = serde_json::from_value(candidate_body(3)).unwrap();
        assert_eq!(candidate.id, 3);
        assert_eq!(candidate.status, CandidateStatus::Disponible);
    }
}
