use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resource::Resource;

/// A cultivable plot of land (`parcelas`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    #[serde(rename = "id_parcela")]
    pub id: i64,
    /// Size in square meters.
    #[serde(rename = "tamanho")]
    pub size_m2: f64,
    #[serde(rename = "localizacao")]
    pub location: String,
    #[serde(default)]
    pub status: Option<PlotStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotStatus {
    #[serde(rename = "Livre")]
    Free,
    #[serde(rename = "Cultivando")]
    Cultivating,
    #[serde(rename = "Em Repouso")]
    Resting,
}

impl PlotStatus {
    pub fn as_wire(&self) -> &'static str {
        match self {
            PlotStatus::Free => "Livre",
            PlotStatus::Cultivating => "Cultivando",
            PlotStatus::Resting => "Em Repouso",
        }
    }
}

impl fmt::Display for PlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for PlotStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "livre" => Ok(PlotStatus::Free),
            "cultivando" => Ok(PlotStatus::Cultivating),
            "em repouso" => Ok(PlotStatus::Resting),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotCreate {
    #[serde(rename = "tamanho")]
    pub size_m2: f64,
    #[serde(rename = "localizacao")]
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlotStatus>,
}

/// Partial update; `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlotUpdate {
    #[serde(rename = "tamanho", skip_serializing_if = "Option::is_none")]
    pub size_m2: Option<f64>,
    #[serde(rename = "localizacao", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlotStatus>,
}

impl Resource for Plot {
    const PATH: &'static str = "parcelas";
    const EMPTY_MESSAGE: &'static str = "Nenhuma parcela cadastrada.";

    type Key = i64;
    type Create = PlotCreate;
    type Update = PlotUpdate;
}
