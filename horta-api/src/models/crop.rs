use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resource::{Resource, ResourceKey};

/// A planting of a product on a plot (`cultivos`). Identified by the
/// composite (product, plot, planting date) key rather than a surrogate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    #[serde(rename = "id_produto")]
    pub product_id: i64,
    #[serde(rename = "id_parcela")]
    pub plot_id: i64,
    #[serde(rename = "data_plantio")]
    pub planted_on: NaiveDate,
    #[serde(rename = "status_cultivo")]
    pub status: CropStatus,
}

impl Crop {
    pub fn key(&self) -> CropKey {
        CropKey {
            product_id: self.product_id,
            plot_id: self.plot_id,
            planted_on: self.planted_on,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropStatus {
    #[serde(rename = "Plantado")]
    Planted,
    #[serde(rename = "Crescendo")]
    Growing,
    #[serde(rename = "ProntoParaColheita")]
    ReadyToHarvest,
    #[serde(rename = "Colhido")]
    Harvested,
}

impl CropStatus {
    pub fn as_wire(&self) -> &'static str {
        match self {
            CropStatus::Planted => "Plantado",
            CropStatus::Growing => "Crescendo",
            CropStatus::ReadyToHarvest => "ProntoParaColheita",
            CropStatus::Harvested => "Colhido",
        }
    }
}

impl fmt::Display for CropStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for CropStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plantado" => Ok(CropStatus::Planted),
            "crescendo" => Ok(CropStatus::Growing),
            "prontoparacolheita" => Ok(CropStatus::ReadyToHarvest),
            "colhido" => Ok(CropStatus::Harvested),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropCreate {
    #[serde(rename = "id_produto")]
    pub product_id: i64,
    #[serde(rename = "id_parcela")]
    pub plot_id: i64,
    #[serde(rename = "data_plantio")]
    pub planted_on: NaiveDate,
    #[serde(rename = "status_cultivo")]
    pub status: CropStatus,
}

/// Only the status can change after planting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CropUpdate {
    #[serde(rename = "status_cultivo", skip_serializing_if = "Option::is_none")]
    pub status: Option<CropStatus>,
}

/// Composite key, rendered as
/// `cultivos/{id_produto}/{id_parcela}/{data_plantio}` in route order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropKey {
    pub product_id: i64,
    pub plot_id: i64,
    pub planted_on: NaiveDate,
}

impl ResourceKey for CropKey {
    fn as_path(&self) -> String {
        format!("{}/{}/{}", self.product_id, self.plot_id, self.planted_on)
    }
}

impl Resource for Crop {
    const PATH: &'static str = "cultivos";
    const EMPTY_MESSAGE: &'static str = "Nenhum cultivo registrado.";

    type Key = CropKey;
    type Create = CropCreate;
    type Update = CropUpdate;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_key_renders_product_plot_date() {
        let key = CropKey {
            product_id: 2,
            plot_id: 7,
            planted_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(key.as_path(), "2/7/2024-05-01");
    }

    #[test]
    fn status_round_trips_backend_spelling() {
        let json = serde_json::to_string(&CropStatus::ReadyToHarvest).unwrap();
        assert_eq!(json, "\"ProntoParaColheita\"");
        let parsed: CropStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, CropStatus::ReadyToHarvest);
    }
}
