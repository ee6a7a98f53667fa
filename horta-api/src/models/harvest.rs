use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// A recorded harvest (`colheitas`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harvest {
    #[serde(rename = "id_colheita")]
    pub id: i64,
    #[serde(rename = "id_parcela")]
    pub plot_id: i64,
    #[serde(rename = "id_produto")]
    pub product_id: i64,
    #[serde(rename = "data_colheita")]
    pub harvested_on: NaiveDate,
    #[serde(rename = "quantidade_kg")]
    pub quantity_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarvestCreate {
    #[serde(rename = "id_parcela")]
    pub plot_id: i64,
    #[serde(rename = "id_produto")]
    pub product_id: i64,
    #[serde(rename = "data_colheita")]
    pub harvested_on: NaiveDate,
    #[serde(rename = "quantidade_kg")]
    pub quantity_kg: f64,
}

impl Resource for Harvest {
    const PATH: &'static str = "colheitas";
    const EMPTY_MESSAGE: &'static str = "Nenhuma colheita registrada.";

    type Key = i64;
    type Create = HarvestCreate;
    // The backend PUT takes the full create payload.
    type Update = HarvestCreate;
}
