use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// A community garden (`hortas`). Keyed by a server-assigned UUID string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garden {
    #[serde(rename = "id_horta")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "localizacao")]
    pub location: String,
    #[serde(rename = "data_criacao")]
    pub created_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GardenCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "localizacao")]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GardenUpdate {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "localizacao", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Resource for Garden {
    const PATH: &'static str = "hortas";
    const PROTECTED: bool = true;
    const ADMIN_MANAGED: bool = true;
    const EMPTY_MESSAGE: &'static str = "Nenhuma horta cadastrada.";

    type Key = String;
    type Create = GardenCreate;
    type Update = GardenUpdate;
}
