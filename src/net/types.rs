//! Wire types for the fleet API.
//!
//! Field names follow the backend's JSON verbatim (the API speaks French
//! for domain fields), so nothing here needs `serde` renames beyond the
//! role tags. List endpoints wrap their page in `{ data, meta }`; single
//! entities come back as `{ data }`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Coarse authorization tag. No hierarchy: checks are strict equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    /// French display label, as shown in the users table.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "Utilisateur",
            Role::Manager => "Gestionnaire",
            Role::Admin => "Administrateur",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "manager" => Some(Role::Manager),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Read-only snapshot of an account, cached client-side after login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResetPasswordInput {
    pub email: String,
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// `{ data }` wrapper around a single entity.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// One page of a list endpoint. `meta` is the authoritative pagination
/// source; the client never counts pages itself.
#[derive(Clone, Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
}

/// Validation failure body: field name → messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub marque: String,
    pub modele: String,
    pub immatriculation: String,
    #[serde(default)]
    pub niv: Option<String>,
    #[serde(default)]
    pub couleur: Option<String>,
    #[serde(default)]
    pub type_vehicule: Option<String>,
    #[serde(default)]
    pub type_carburant: Option<String>,
    #[serde(default)]
    pub type_transmission: Option<String>,
    #[serde(default)]
    pub type_boite: Option<String>,
    #[serde(default)]
    pub ptac: Option<String>,
    #[serde(default)]
    pub poids: Option<f64>,
    #[serde(default)]
    pub longueur: Option<f64>,
    #[serde(default)]
    pub largeur: Option<f64>,
    #[serde(default)]
    pub hauteur: Option<f64>,
    #[serde(default)]
    pub odometre: Option<i64>,
    #[serde(default)]
    pub date_mise_circulation: Option<String>,
    #[serde(default)]
    pub numero_flotte: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Vehicle form payload. Everything is submitted as the raw form string;
/// the backend casts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VehicleInput {
    pub marque: String,
    pub modele: String,
    pub immatriculation: String,
    pub niv: String,
    pub couleur: String,
    pub type_vehicule: String,
    pub type_carburant: String,
    pub type_transmission: String,
    pub type_boite: String,
    pub ptac: String,
    pub poids: String,
    pub longueur: String,
    pub largeur: String,
    pub hauteur: String,
    pub odometre: String,
    pub date_mise_circulation: String,
    pub numero_flotte: String,
}

impl VehicleInput {
    /// Form defaults match the backend's enumerated values.
    pub fn new() -> Self {
        Self {
            type_carburant: "essence".to_owned(),
            type_transmission: "traction".to_owned(),
            type_boite: "manuelle".to_owned(),
            ptac: "leger".to_owned(),
            type_vehicule: "berline".to_owned(),
            ..Self::default()
        }
    }

    pub fn from_vehicle(v: &Vehicle) -> Self {
        fn opt(value: &Option<String>) -> String {
            value.clone().unwrap_or_default()
        }
        fn num<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        }
        Self {
            marque: v.marque.clone(),
            modele: v.modele.clone(),
            immatriculation: v.immatriculation.clone(),
            niv: opt(&v.niv),
            couleur: opt(&v.couleur),
            type_vehicule: opt(&v.type_vehicule),
            type_carburant: opt(&v.type_carburant),
            type_transmission: opt(&v.type_transmission),
            type_boite: opt(&v.type_boite),
            ptac: opt(&v.ptac),
            poids: num(&v.poids),
            longueur: num(&v.longueur),
            largeur: num(&v.largeur),
            hauteur: num(&v.hauteur),
            odometre: num(&v.odometre),
            date_mise_circulation: opt(&v.date_mise_circulation),
            numero_flotte: opt(&v.numero_flotte),
        }
    }
}

/// Vehicle summary nested inside an intervention for display.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VehicleSummary {
    pub marque: String,
    pub modele: String,
    pub immatriculation: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Intervention {
    pub id: i64,
    #[serde(default)]
    pub vehicule_id: Option<i64>,
    #[serde(default)]
    pub nature_intervention: Option<String>,
    #[serde(default)]
    pub fait_generateur: Option<String>,
    #[serde(default)]
    pub date_intervention: Option<String>,
    #[serde(default)]
    pub statut: Option<String>,
    #[serde(default)]
    pub cout: Option<f64>,
    #[serde(default)]
    pub vehicule: Option<VehicleSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InterventionInput {
    pub vehicule_id: String,
    pub nature_intervention: String,
    pub fait_generateur: String,
    pub date_intervention: String,
    pub statut: String,
    pub cout: String,
}

/// User create/update payload. The password pair is omitted entirely when
/// left blank so an edit does not reset it.
#[derive(Clone, Debug, Serialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}
