//! Form drafts and validation.
//!
//! This module contains the client-held drafts behind the two forms: the
//! public application form (strictly validated before submission) and the
//! candidate edit form (permissive, validated by the backend). Coercion of
//! keystrokes happens in the callers via `utils::input`; the drafts store
//! exactly what they are given.

use crate::nexum::{Candidate, CandidateUpdate, NewCandidate};
use regex::Regex;

/// Education levels offered by the application form, selected from a fixed
/// list rather than free-typed.
///
pub const NIVEL_ESTUDIO: [&str; 7] = [
    "Primaria",
    "Básico",
    "Bachiller / Diversificado",
    "Técnico",
    "Universitario (en curso)",
    "Universitario (completo)",
    "Postgrado",
];

const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";
const MIN_PHONE_DIGITS: usize = 8;

/// Fields of the public application form, in display order.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyField {
    Nombres,
    Apellidos,
    Telefono,
    Correo,
    PuestoAplica,
    AniosExperiencia,
    PretensionSalarial,
    NivelEstudio,
    Municipio,
    Direccion,
    Resumen,
    CvUrl,
}

impl ApplyField {
    /// Display order of the form.
    ///
    pub const ALL: [ApplyField; 12] = [
        ApplyField::Nombres,
        ApplyField::Apellidos,
        ApplyField::Telefono,
        ApplyField::Correo,
        ApplyField::PuestoAplica,
        ApplyField::AniosExperiencia,
        ApplyField::PretensionSalarial,
        ApplyField::NivelEstudio,
        ApplyField::Municipio,
        ApplyField::Direccion,
        ApplyField::Resumen,
        ApplyField::CvUrl,
    ];

    /// Required fields, in the order violations are reported. The CV link
    /// is the one optional field.
    ///
    pub const REQUIRED: [ApplyField; 11] = [
        ApplyField::Nombres,
        ApplyField::Apellidos,
        ApplyField::Telefono,
        ApplyField::Correo,
        ApplyField::PuestoAplica,
        ApplyField::AniosExperiencia,
        ApplyField::PretensionSalarial,
        ApplyField::NivelEstudio,
        ApplyField::Municipio,
        ApplyField::Direccion,
        ApplyField::Resumen,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApplyField::Nombres => "Nombres",
            ApplyField::Apellidos => "Apellidos",
            ApplyField::Telefono => "Teléfono",
            ApplyField::Correo => "Correo electrónico",
            ApplyField::PuestoAplica => "Puesto al que aplica",
            ApplyField::AniosExperiencia => "Años de experiencia",
            ApplyField::PretensionSalarial => "Pretensión salarial (Q)",
            ApplyField::NivelEstudio => "Nivel de estudio",
            ApplyField::Municipio => "Municipio",
            ApplyField::Direccion => "Dirección",
            ApplyField::Resumen => "Resumen de experiencia",
            ApplyField::CvUrl => "CV (URL)",
        }
    }

    pub fn next(self) -> ApplyField {
        let index = ApplyField::ALL.iter().position(|f| *f == self).unwrap_or(0);
        ApplyField::ALL[(index + 1) % ApplyField::ALL.len()]
    }

    pub fn prev(self) -> ApplyField {
        let index = ApplyField::ALL.iter().position(|f| *f == self).unwrap_or(0);
        ApplyField::ALL[(index + ApplyField::ALL.len() - 1) % ApplyField::ALL.len()]
    }
}

/// The single field/rule currently failing validation, in priority order.
/// The form reports one problem at a time rather than all problems at once.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    Missing(ApplyField),
    PhoneTooShort,
    EmailInvalid,
    ExperienceNotNumeric,
    SalaryNotNumeric,
}

impl Violation {
    /// The label shown to the user under the form.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Violation::Missing(field) => field.label(),
            Violation::PhoneTooShort => "Teléfono (mínimo 8 dígitos)",
            Violation::EmailInvalid => "Correo electrónico válido",
            Violation::ExperienceNotNumeric => "Años de experiencia (solo números)",
            Violation::SalaryNotNumeric => "Pretensión salarial (solo números)",
        }
    }
}

/// Client-held draft of a new application, edited field-by-field before
/// submission. All fields are text while editing; the numeric ones are
/// converted at submission time.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub nombres: String,
    pub apellidos: String,
    pub telefono: String,
    pub correo: String,
    pub puesto_aplica: String,
    pub anios_experiencia: String,
    pub pretension_salarial: String,
    pub nivel_estudio: String,
    pub municipio: String,
    pub direccion: String,
    pub resumen: String,
    pub cv_url: String,
}

impl ApplicationDraft {
    pub fn field_text(&self, field: ApplyField) -> &str {
        match field {
            ApplyField::Nombres => &self.nombres,
            ApplyField::Apellidos => &self.apellidos,
            ApplyField::Telefono => &self.telefono,
            ApplyField::Correo => &self.correo,
            ApplyField::PuestoAplica => &self.puesto_aplica,
            ApplyField::AniosExperiencia => &self.anios_experiencia,
            ApplyField::PretensionSalarial => &self.pretension_salarial,
            ApplyField::NivelEstudio => &self.nivel_estudio,
            ApplyField::Municipio => &self.municipio,
            ApplyField::Direccion => &self.direccion,
            ApplyField::Resumen => &self.resumen,
            ApplyField::CvUrl => &self.cv_url,
        }
    }

    /// Replace only the named field, leaving all others untouched.
    ///
    pub fn set_field(&mut self, field: ApplyField, value: String) {
        match field {
            ApplyField::Nombres => self.nombres = value,
            ApplyField::Apellidos => self.apellidos = value,
            ApplyField::Telefono => self.telefono = value,
            ApplyField::Correo => self.correo = value,
            ApplyField::PuestoAplica => self.puesto_aplica = value,
            ApplyField::AniosExperiencia => self.anios_experiencia = value,
            ApplyField::PretensionSalarial => self.pretension_salarial = value,
            ApplyField::NivelEstudio => self.nivel_estudio = value,
            ApplyField::Municipio => self.municipio = value,
            ApplyField::Direccion => self.direccion = value,
            ApplyField::Resumen => self.resumen = value,
            ApplyField::CvUrl => self.cv_url = value,
        }
    }

    /// Return every field to empty, after a successful submission.
    ///
    pub fn reset(&mut self) {
        *self = ApplicationDraft::default();
    }

    /// Compute the first unmet requirement, or `None` when the draft is
    /// submittable. Pure; the render loop re-evaluates it on every frame so
    /// the user sees the next thing to fix live.
    ///
    pub fn first_violation(&self) -> Option<Violation> {
        for field in ApplyField::REQUIRED {
            if self.field_text(field).trim().is_empty() {
                return Some(Violation::Missing(field));
            }
        }

        if self.telefono.trim().len() < MIN_PHONE_DIGITS {
            return Some(Violation::PhoneTooShort);
        }

        let email_re = Regex::new(EMAIL_PATTERN).expect("static email pattern is valid");
        if !email_re.is_match(self.correo.trim()) {
            return Some(Violation::EmailInvalid);
        }

        if self.anios_experiencia.trim().parse::<f64>().is_err() {
            return Some(Violation::ExperienceNotNumeric);
        }

        if self.pretension_salarial.trim().parse::<f64>().is_err() {
            return Some(Violation::SalaryNotNumeric);
        }

        None
    }

    /// Build the create-request body: text fields trimmed, numeric fields
    /// parsed. Returns `None` when a numeric field does not parse, which a
    /// prior `first_violation` check rules out.
    ///
    pub fn to_new_candidate(&self) -> Option<NewCandidate> {
        let anios_experiencia = self.anios_experiencia.trim().parse::<f64>().ok()?;
        let pretension_salarial = self.pretension_salarial.trim().parse::<f64>().ok()?;
        Some(NewCandidate {
            nombres: self.nombres.trim().to_string(),
            apellidos: self.apellidos.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            correo: self.correo.trim().to_string(),
            municipio: self.municipio.trim().to_string(),
            direccion: self.direccion.trim().to_string(),
            puesto_aplica: self.puesto_aplica.trim().to_string(),
            anios_experiencia,
            pretension_salarial,
            nivel_estudio: self.nivel_estudio.trim().to_string(),
            resumen: self.resumen.trim().to_string(),
            cv_url: self.cv_url.trim().to_string(),
        })
    }
}

/// Advance the education-level selection: empty → first option → ... →
/// last option → empty again.
///
pub fn nivel_estudio_next(current: &str) -> &'static str {
    match NIVEL_ESTUDIO.iter().position(|o| *o == current) {
        Some(index) if index + 1 < NIVEL_ESTUDIO.len() => NIVEL_ESTUDIO[index + 1],
        Some(_) => "",
        None => NIVEL_ESTUDIO[0],
    }
}

/// Step the education-level selection backwards.
///
pub fn nivel_estudio_prev(current: &str) -> &'static str {
    match NIVEL_ESTUDIO.iter().position(|o| *o == current) {
        Some(0) => "",
        Some(index) => NIVEL_ESTUDIO[index - 1],
        None => NIVEL_ESTUDIO[NIVEL_ESTUDIO.len() - 1],
    }
}

/// Fields of the candidate edit form, in display order.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditField {
    Nombres,
    Apellidos,
    PuestoAplica,
    Telefono,
    Correo,
    Municipio,
    Direccion,
    AniosExperiencia,
    PretensionSalarial,
    Status,
    Notes,
    CvUrl,
}

impl EditField {
    pub const ALL: [EditField; 12] = [
        EditField::Nombres,
        EditField::Apellidos,
        EditField::PuestoAplica,
        EditField::Telefono,
        EditField::Correo,
        EditField::Municipio,
        EditField::Direccion,
        EditField::AniosExperiencia,
        EditField::PretensionSalarial,
        EditField::Status,
        EditField::Notes,
        EditField::CvUrl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditField::Nombres => "Nombres",
            EditField::Apellidos => "Apellidos",
            EditField::PuestoAplica => "Puesto",
            EditField::Telefono => "Teléfono",
            EditField::Correo => "Correo",
            EditField::Municipio => "Municipio",
            EditField::Direccion => "Dirección",
            EditField::AniosExperiencia => "Años experiencia",
            EditField::PretensionSalarial => "Pretensión salarial",
            EditField::Status => "Status",
            EditField::Notes => "Notas",
            EditField::CvUrl => "CV URL",
        }
    }

    pub fn next(self) -> EditField {
        let index = EditField::ALL.iter().position(|f| *f == self).unwrap_or(0);
        EditField::ALL[(index + 1) % EditField::ALL.len()]
    }

    pub fn prev(self) -> EditField {
        let index = EditField::ALL.iter().position(|f| *f == self).unwrap_or(0);
        EditField::ALL[(index + EditField::ALL.len() - 1) % EditField::ALL.len()]
    }
}

/// Text-shaped mirror of a server-held candidate, created on fetch,
/// overwritten field-by-field by user input, and rebuilt wholesale from the
/// server's response after a successful save so that any backend
/// normalization becomes visible immediately.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateDraft {
    pub nombres: String,
    pub apellidos: String,
    pub puesto_aplica: String,
    pub telefono: String,
    pub correo: String,
    pub municipio: String,
    pub direccion: String,
    pub anios_experiencia: String,
    pub pretension_salarial: String,
    pub status: String,
    pub notes: String,
    pub cv_url: String,
}

impl CandidateDraft {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        CandidateDraft {
            nombres: candidate.nombres.clone(),
            apellidos: candidate.apellidos.clone(),
            puesto_aplica: candidate.puesto_aplica.clone().unwrap_or_default(),
            telefono: candidate.telefono.clone().unwrap_or_default(),
            correo: candidate.correo.clone().unwrap_or_default(),
            municipio: candidate.municipio.clone().unwrap_or_default(),
            direccion: candidate.direccion.clone().unwrap_or_default(),
            anios_experiencia: candidate
                .anios_experiencia
                .map(number_to_field_text)
                .unwrap_or_default(),
            pretension_salarial: candidate
                .pretension_salarial
                .map(number_to_field_text)
                .unwrap_or_default(),
            status: candidate.status.as_str().to_string(),
            notes: candidate.notes.clone().unwrap_or_default(),
            cv_url: candidate.cv_url.clone().unwrap_or_default(),
        }
    }

    pub fn field_text(&self, field: EditField) -> &str {
        match field {
            EditField::Nombres => &self.nombres,
            EditField::Apellidos => &self.apellidos,
            EditField::PuestoAplica => &self.puesto_aplica,
            EditField::Telefono => &self.telefono,
            EditField::Correo => &self.correo,
            EditField::Municipio => &self.municipio,
            EditField::Direccion => &self.direccion,
            EditField::AniosExperiencia => &self.anios_experiencia,
            EditField::PretensionSalarial => &self.pretension_salarial,
            EditField::Status => &self.status,
            EditField::Notes => &self.notes,
            EditField::CvUrl => &self.cv_url,
        }
    }

    /// Replace only the named field, leaving all others untouched.
    ///
    pub fn set_field(&mut self, field: EditField, value: String) {
        match field {
            EditField::Nombres => self.nombres = value,
            EditField::Apellidos => self.apellidos = value,
            EditField::PuestoAplica => self.puesto_aplica = value,
            EditField::Telefono => self.telefono = value,
            EditField::Correo => self.correo = value,
            EditField::Municipio => self.municipio = value,
            EditField::Direccion => self.direccion = value,
            EditField::AniosExperiencia => self.anios_experiencia = value,
            EditField::PretensionSalarial => self.pretension_salarial = value,
            EditField::Status => self.status = value,
            EditField::Notes => self.notes = value,
            EditField::CvUrl => self.cv_url = value,
        }
    }

    /// Build the partial-update body. Text fields are trimmed. Cleared
    /// notes become an explicit null (present in the payload) rather than
    /// an empty string or an omitted field; otherwise the notes text is
    /// sent as typed. Blank or unparseable numeric fields are omitted from
    /// the payload entirely, never sent as zero.
    ///
    pub fn to_update(&self) -> CandidateUpdate {
        CandidateUpdate {
            nombres: self.nombres.trim().to_string(),
            apellidos: self.apellidos.trim().to_string(),
            puesto_aplica: self.puesto_aplica.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            correo: self.correo.trim().to_string(),
            municipio: self.municipio.trim().to_string(),
            direccion: self.direccion.trim().to_string(),
            status: self.status.trim().to_string(),
            notes: if self.notes.trim().is_empty() {
                None
            } else {
                Some(self.notes.clone())
            },
            cv_url: self.cv_url.trim().to_string(),
            anios_experiencia: parse_optional_number(&self.anios_experiencia),
            pretension_salarial: parse_optional_number(&self.pretension_salarial),
        }
    }
}

/// Render a server-held number back to field text: integral values lose the
/// trailing `.0` so the user sees `"3"`, not `"3.0"`.
///
pub fn number_to_field_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn parse_optional_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
