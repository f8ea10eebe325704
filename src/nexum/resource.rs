use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines company data structure, as returned by the login endpoint and
/// persisted with the session.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub slug: String,
    pub name: String,
}

/// Defines the closed set of workflow states a candidate moves through on
/// the board.
///
#[derive(Clone, Copy, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    #[default]
    Disponible,
    Seguimiento,
    Actualizar,
    DeBaja,
}

impl CandidateStatus {
    /// Board column order.
    ///
    pub const ALL: [CandidateStatus; 4] = [
        CandidateStatus::Disponible,
        CandidateStatus::Seguimiento,
        CandidateStatus::Actualizar,
        CandidateStatus::DeBaja,
    ];

    /// Display label shown on the board tabs and column headers.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            CandidateStatus::Disponible => "Disponible",
            CandidateStatus::Seguimiento => "En Proceso",
            CandidateStatus::Actualizar => "Aceptado",
            CandidateStatus::DeBaja => "Descartado",
        }
    }

    /// Wire value used by the backend.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Disponible => "disponible",
            CandidateStatus::Seguimiento => "seguimiento",
            CandidateStatus::Actualizar => "actualizar",
            CandidateStatus::DeBaja => "de_baja",
        }
    }
}

/// Defines candidate data structure, the server's authoritative
/// representation of one applicant.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u64,
    pub nombres: String,
    pub apellidos: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub correo: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub puesto_aplica: Option<String>,
    #[serde(default)]
    pub anios_experiencia: Option<f64>,
    #[serde(default)]
    pub pretension_salarial: Option<f64>,
    #[serde(default)]
    pub nivel_estudio: Option<String>,
    #[serde(default)]
    pub resumen: Option<String>,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default)]
    pub status: CandidateStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Defines the create-request body for a new applicant. All fields are
/// required by the application form, so none are optional here.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCandidate {
    pub nombres: String,
    pub apellidos: String,
    pub telefono: String,
    pub correo: String,
    pub municipio: String,
    pub direccion: String,
    pub puesto_aplica: String,
    pub anios_experiencia: f64,
    pub pretension_salarial: f64,
    pub nivel_estudio: String,
    pub resumen: String,
    pub cv_url: String,
}

/// Defines the partial-update body for an existing candidate.
///
/// `notes` is always present in the payload and serializes to an explicit
/// `null` when cleared, which the backend treats differently from an empty
/// string. The two numeric fields are omitted entirely when unset, never
/// sent as zero.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CandidateUpdate {
    pub nombres: String,
    pub apellidos: String,
    pub puesto_aplica: String,
    pub telefono: String,
    pub correo: String,
    pub municipio: String,
    pub direccion: String,
    pub status: String,
    pub notes: Option<String>,
    pub cv_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anios_experiencia: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretension_salarial: Option<f64>,
}

/// Defines the login response shape. Either field may be absent depending on
/// backend configuration.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Deserialize)]
pub struct LoginOutcome {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
}
