//! User domain models.
//!
//! The `User` returned by the identity endpoint and the profile payload
//! submitted during onboarding. Wire field names are the service's Spanish
//! names; the Rust structs keep English identifiers via serde renames.

use serde::{Deserialize, Serialize};

/// The access role assigned to a user by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user: chat and history access.
    User,
    /// Administrator: additionally sees the usage statistics screens.
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// The authenticated identity as returned by `GET /auth/users/me`.
///
/// The client holds a read-only cached copy of this object; it is only
/// replaced by a fresh fetch (login, bootstrap) or by the updated user
/// returned from the onboarding endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub has_completed_onboarding: bool,
    #[serde(rename = "nombre", default)]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", default)]
    pub last_name: Option<String>,
    #[serde(rename = "pais", default)]
    pub country: Option<String>,
    #[serde(rename = "provincia", default)]
    pub province: Option<String>,
    #[serde(rename = "localidad", default)]
    pub locality: Option<String>,
    #[serde(rename = "edad", default)]
    pub age: Option<u32>,
    #[serde(rename = "profesion", default)]
    pub occupation: Option<String>,
}

impl User {
    /// True when this user may access the admin-only screens.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Profile fields submitted to `POST /auth/onboarding`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingProfile {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "localidad")]
    pub locality: String,
    #[serde(rename = "edad")]
    pub age: Option<u32>,
    #[serde(rename = "profesion")]
    pub occupation: String,
}

impl OnboardingProfile {
    /// An empty profile with the suggested default country filled in.
    pub fn new() -> Self {
        Self {
            country: "Argentina".to_string(),
            ..Self::default()
        }
    }
}

/// Provinces offered by the onboarding form, in display order.
pub const PROVINCES: &[&str] = &[
    "Buenos Aires",
    "CABA",
    "Catamarca",
    "Chaco",
    "Chubut",
    "Córdoba",
    "Corrientes",
    "Entre Ríos",
    "Formosa",
    "Jujuy",
    "La Pampa",
    "La Rioja",
    "Mendoza",
    "Misiones",
    "Neuquén",
    "Río Negro",
    "Salta",
    "San Juan",
    "San Luis",
    "Santa Cruz",
    "Santa Fe",
    "Santiago del Estero",
    "Tierra del Fuego",
    "Tucumán",
];

/// Common occupations offered by the onboarding form. The last entry
/// ("Otro") switches the form to free-text input.
pub const OCCUPATIONS: &[&str] = &[
    "Desarrollador/a",
    "Diseñador/a",
    "Estudiante",
    "Docente",
    "Médico/a",
    "Abogado/a",
    "Contador/a",
    "Ingeniero/a",
    "Comerciante",
    "Administrativo/a",
    "Otro",
];
