mod client;
mod error;
mod resource;

pub use error::NexumError;
pub use resource::*;

use client::Client;
use log::*;
use reqwest::Method;

/// Responsible for asynchronous interaction with the Nexum backend,
/// including transformation of response data into explicitly-defined types.
///
pub struct Nexum {
    client: Client,
}

impl Nexum {
    /// Returns a new instance for the given API base URL.
    ///
    pub fn new(base_url: &str) -> Nexum {
        debug!("Initializing Nexum client for {}...", base_url);
        Nexum {
            client: Client::new(base_url),
        }
    }

    /// Set or clear the bearer token attached to subsequent requests.
    ///
    pub fn set_token(&mut self, token: Option<String>) {
        self.client.set_token(token);
    }

    /// Authenticate a company by email and password. The backend returns a
    /// token and the company identity on success, either of which may be
    /// absent depending on configuration.
    ///
    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginOutcome, NexumError> {
        debug!("Requesting company login for {}...", email);
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });
        let outcome: LoginOutcome = self
            .client
            .request(Method::POST, "/auth/login", Some(body))
            .await?;
        info!(
            "Company login succeeded (token: {}, company: {})",
            outcome.token.is_some(),
            outcome
                .company
                .as_ref()
                .map(|c| c.slug.as_str())
                .unwrap_or("<none>")
        );
        Ok(outcome)
    }

    /// Returns every candidate belonging to the company identified by slug,
    /// including their board status.
    ///
    pub async fn candidates(&mut self, slug: &str) -> Result<Vec<Candidate>, NexumError> {
        debug!("Requesting candidates for company '{}'...", slug);
        let candidates: Vec<Candidate> = self
            .client
            .request(
                Method::GET,
                &format!("/companies/{}/candidates", slug),
                None,
            )
            .await?;
        debug!(
            "Retrieved {} candidates for company '{}'.",
            candidates.len(),
            slug
        );
        Ok(candidates)
    }

    /// Returns a single candidate by identifier.
    ///
    pub async fn candidate(&mut self, id: u64) -> Result<Candidate, NexumError> {
        debug!("Requesting candidate {}...", id);
        self.client
            .request(Method::GET, &format!("/candidates/{}", id), None)
            .await
    }

    /// Create a new applicant record for the company identified by slug.
    /// Returns the created record.
    ///
    pub async fn create_candidate(
        &mut self,
        slug: &str,
        new_candidate: &NewCandidate,
    ) -> Result<Candidate, NexumError> {
        debug!(
            "Creating candidate '{} {}' for company '{}'...",
            new_candidate.nombres, new_candidate.apellidos, slug
        );
        let body = serde_json::to_value(new_candidate)?;
        self.client
            .request(
                Method::POST,
                &format!("/companies/{}/candidates", slug),
                Some(body),
            )
            .await
    }

    /// Apply a partial update to an existing candidate. Returns the updated
    /// record as normalized by the backend.
    ///
    pub async fn update_candidate(
        &mut self,
        id: u64,
        update: &CandidateUpdate,
    ) -> Result<Candidate, NexumError> {
        debug!("Updating candidate {}...", id);
        let body = serde_json::to_value(update)?;
        self.client
            .request(Method::PATCH, &format!("/candidates/{}", id), Some(body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;

    fn candidate_body(id: u64, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "nombres": "Ana",
            "apellidos": "López",
            "telefono": "55551234",
            "correo": "ana@example.com",
            "municipio": "Guatemala",
            "direccion": "Zona 1",
            "puesto_aplica": "Cajera",
            "anios_experiencia": 3,
            "pretension_salarial": 4500.0,
            "nivel_estudio": "Técnico",
            "resumen": "Atención al cliente y cierre de caja.",
            "cv_url": "https://cv.example.com/ana",
            "status": status,
            "notes": null,
            "created_at": "2024-05-01T12:00:00Z",
        })
    }

    #[tokio::test]
    async fn login_success() -> Result<(), NexumError> {
        let company: Company = Faker.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/auth/login").json_body(json!({
                    "email": "empresa@correo.com",
                    "password": "secreto",
                }));
                then.status(200).json_body(json!({
                    "token": "tok-123",
                    "company": { "slug": company.slug, "name": company.name },
                }));
            })
            .await;

        let mut nexum = Nexum::new(&server.base_url());
        let outcome = nexum.login("empresa@correo.com", "secreto").await?;
        assert_eq!(outcome.token.as_deref(), Some("tok-123"));
        assert_eq!(outcome.company, Some(company));
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn login_invalid_credentials() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/auth/login");
                then.status(401)
                    .json_body(json!({ "message": "Credenciales inválidas" }));
            })
            .await;

        let mut nexum = Nexum::new(&server.base_url());
        let error = nexum.login("a@b.c", "nope").await.unwrap_err();
        match error {
            NexumError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message.as_deref(), Some("Credenciales inválidas"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn candidates_success() -> Result<(), NexumError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/companies/acme/candidates")
                    .header("Authorization", "Bearer tok-123");
                then.status(200).json_body(json!([
                    candidate_body(1, "disponible"),
                    candidate_body(2, "de_baja"),
                ]));
            })
            .await;

        let mut nexum = Nexum::new(&server.base_url());
        nexum.set_token(Some("tok-123".to_string()));
        let candidates = nexum.candidates("acme").await?;
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].status, CandidateStatus::Disponible);
        assert_eq!(candidates[1].status, CandidateStatus::DeBaja);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn candidate_success() -> Result<(), NexumError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/candidates/7");
                then.status(200).json_body(candidate_body(7, "seguimiento"));
            })
            .await;

        let mut nexum = Nexum::new(&server.base_url());
        let candidate = nexum.candidate(7).await?;
        assert_eq!(candidate.id, 7);
        assert_eq!(candidate.status, CandidateStatus::Seguimiento);
        assert_eq!(candidate.anios_experiencia, Some(3.0));
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn candidate_connection_refused() {
        // Port 9 is discard; nothing is listening there.
        let mut nexum = Nexum::new("http://127.0.0.1:9");
        let error = nexum.candidate(7).await.unwrap_err();
        assert!(matches!(error, NexumError::HttpRequest(_)));
    }

    #[tokio::test]
    async fn create_candidate_success() -> Result<(), NexumError> {
        let new_candidate = NewCandidate {
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
            resumen: "Atención al cliente y cierre de caja.".to_string(),
            cv_url: "https://cv.example.com/ana".to_string(),
        };

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/companies/acme/candidates")
                    .json_body(serde_json::to_value(&new_candidate).unwrap());
                then.status(201).json_body(candidate_body(11, "disponible"));
            })
            .await;

        let mut nexum = Nexum::new(&server.base_url());
        let created = nexum.create_candidate("acme", &new_candidate).await?;
        assert_eq!(created.id, 11);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn create_candidate_validation_error() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/companies/acme/candidates");
                then.status(422)
                    .json_body(json!({ "message": ["telefono must be longer than 8"] }));
            })
            .await;

        let new_candidate = NewCandidate {
            nombres: "Ana".to_string(),
            apellidos: "López".to_string(),
            telefono: "5555".to_string(),
            correo: "ana@example.com".to_string(),
            municipio: "Guatemala".to_string(),
            direccion: "Zona 1".to_string(),
            puesto_aplica: "Cajera".to_string(),
            anios_experiencia: 3.0,
            pretension_salarial: 4500.0,
            nivel_estudio: "Técnico".to_string(),
            resumen: "Atención al cliente.".to_string(),
            cv_url: "".to_string(),
        };

        let mut nexum = Nexum::new(&server.base_url());
        let error = nexum
            .create_candidate("acme", &new_candidate)
            .await
            .unwrap_err();
        match error {
            NexumError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message.as_deref(), Some("telefono must be longer than 8"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_candidate_blank_fields() -> Result<(), NexumError> {
        let update = CandidateUpdate {
            nombres: "Ana".to_string(),
            apellidos: "López".to_string(),
            puesto_aplica: "Cajera".to_string(),
            telefono: "55551234".to_string(),
            correo: "ana@example.com".to_string(),
            municipio: "Guatemala".to_string(),
            direccion: "Zona 1".to_string(),
            status: "actualizar".to_string(),
            notes: None,
            cv_url: "".to_string(),
            anios_experiencia: None,
            pretension_salarial: None,
        };

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                // Exact body match: notes must be an explicit null and the
                // two numeric fields must be absent.
                when.method("PATCH").path("/candidates/7").json_body(json!({
                    "nombres": "Ana",
                    "apellidos": "López",
                    "puesto_aplica": "Cajera",
                    "telefono": "55551234",
                    "correo": "ana@example.com",
                    "municipio": "Guatemala",
                    "direccion": "Zona 1",
                    "status": "actualizar",
                    "notes": null,
                    "cv_url": "",
                }));
                then.status(200).json_body(candidate_body(7, "actualizar"));
            })
            .await;

        let mut nexum = Nexum::new(&server.base_url());
        let updated = nexum.update_candidate(7, &update).await?;
        assert_eq!(updated.status, CandidateStatus::Actualizar);
        mock.assert_async().await;
        Ok(())
    }
}
