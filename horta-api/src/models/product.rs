use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resource::Resource;

/// A crop product grown in the gardens (`produtos`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "id_produto")]
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: ProductKind,
    #[serde(rename = "epoca_plantio", default)]
    pub planting_season: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductKind {
    #[serde(rename = "Verdura")]
    Greens,
    #[serde(rename = "Legume")]
    Legume,
    #[serde(rename = "Fruta")]
    Fruit,
    #[serde(rename = "Hortaliça")]
    Vegetable,
}

impl ProductKind {
    pub fn as_wire(&self) -> &'static str {
        match self {
            ProductKind::Greens => "Verdura",
            ProductKind::Legume => "Legume",
            ProductKind::Fruit => "Fruta",
            ProductKind::Vegetable => "Hortaliça",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for ProductKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verdura" => Ok(ProductKind::Greens),
            "legume" => Ok(ProductKind::Legume),
            "fruta" => Ok(ProductKind::Fruit),
            "hortaliça" => Ok(ProductKind::Vegetable),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: ProductKind,
    #[serde(rename = "epoca_plantio", skip_serializing_if = "Option::is_none")]
    pub planting_season: Option<String>,
}

impl Resource for Product {
    const PATH: &'static str = "produtos";
    const EMPTY_MESSAGE: &'static str = "Nenhum produto cadastrado.";

    type Key = i64;
    type Create = ProductCreate;
    // The backend PUT takes the full create payload, not a partial patch.
    type Update = ProductCreate;
}
