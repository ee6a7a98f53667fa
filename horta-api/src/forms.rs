//! Form-state objects: raw text collected from the user, validated once on
//! submit into a typed payload. Field names in errors are the wire names the
//! user typed against.

use std::str::FromStr;

use thiserror::Error;

use crate::models::{
    CropCreate, CropUpdate, EventCreate, EventUpdate, GardenCreate, GardenUpdate, HarvestCreate,
    ParticipationCreate, PlotCreate, PlotUpdate, ProductCreate, UserCreate, UserGroupCreate,
    UserUpdate,
};

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

fn required(field: &'static str, value: String) -> Result<String, FormError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// Empty or whitespace-only input counts as "not provided".
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_required<T: FromStr>(field: &'static str, value: String) -> Result<T, FormError> {
    let value = required(field, value)?;
    value.parse().map_err(|_| FormError::InvalidField {
        field,
        value: value.clone(),
    })
}

fn parse_optional<T: FromStr>(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<T>, FormError> {
    match optional(value) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| FormError::InvalidField { field, value: raw }),
    }
}

#[derive(Debug, Default, Clone)]
pub struct PlotForm {
    pub location: String,
    pub size_m2: String,
    pub status: Option<String>,
}

impl PlotForm {
    pub fn submit(self) -> Result<PlotCreate, FormError> {
        Ok(PlotCreate {
            location: required("localizacao", self.location)?,
            size_m2: parse_required("tamanho", self.size_m2)?,
            status: parse_optional("status", self.status)?,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct PlotUpdateForm {
    pub location: Option<String>,
    pub size_m2: Option<String>,
    pub status: Option<String>,
}

impl PlotUpdateForm {
    pub fn submit(self) -> Result<PlotUpdate, FormError> {
        Ok(PlotUpdate {
            location: optional(self.location),
            size_m2: parse_optional("tamanho", self.size_m2)?,
            status: parse_optional("status", self.status)?,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct GardenForm {
    pub name: String,
    pub location: String,
}

impl GardenForm {
    pub fn submit(self) -> Result<GardenCreate, FormError> {
        Ok(GardenCreate {
            name: required("nome", self.name)?,
            location: required("localizacao", self.location)?,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct GardenUpdateForm {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl GardenUpdateForm {
    pub fn submit(self) -> Result<GardenUpdate, FormError> {
        Ok(GardenUpdate {
            name: optional(self.name),
            location: optional(self.location),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct ProductForm {
    pub name: String,
    pub kind: String,
    pub planting_season: Option<String>,
}

impl ProductForm {
    pub fn submit(self) -> Result<ProductCreate, FormError> {
        Ok(ProductCreate {
            name: required("nome", self.name)?,
            kind: parse_required("tipo", self.kind)?,
            planting_season: optional(self.planting_season),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub description: Option<String>,
    pub venue: Option<String>,
}

impl EventForm {
    pub fn submit(self) -> Result<EventCreate, FormError> {
        Ok(EventCreate {
            name: required("nome", self.name)?,
            date: parse_required("data_evento", self.date)?,
            description: optional(self.description),
            venue: optional(self.venue),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct EventUpdateForm {
    pub name: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
}

impl EventUpdateForm {
    pub fn submit(self) -> Result<EventUpdate, FormError> {
        Ok(EventUpdate {
            name: optional(self.name),
            date: parse_optional("data_evento", self.date)?,
            description: optional(self.description),
            venue: optional(self.venue),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub group_id: String,
    pub password: String,
}

impl UserForm {
    pub fn submit(self) -> Result<UserCreate, FormError> {
        Ok(UserCreate {
            name: required("nome", self.name)?,
            email: required("email", self.email)?,
            phone: optional(self.phone),
            group_id: parse_required("id_grupo", self.group_id)?,
            password: required("senha", self.password)?,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct UserUpdateForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub group_id: Option<String>,
    pub password: Option<String>,
}

impl UserUpdateForm {
    pub fn submit(self) -> Result<UserUpdate, FormError> {
        Ok(UserUpdate {
            name: optional(self.name),
            email: optional(self.email),
            phone: optional(self.phone),
            group_id: parse_optional("id_grupo", self.group_id)?,
            password: optional(self.password),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct UserGroupForm {
    pub name: String,
    pub description: Option<String>,
}

impl UserGroupForm {
    pub fn submit(self) -> Result<UserGroupCreate, FormError> {
        Ok(UserGroupCreate {
            name: required("nome_grupo", self.name)?,
            description: optional(self.description),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct CropForm {
    pub product_id: String,
    pub plot_id: String,
    pub planted_on: String,
    pub status: String,
}

impl CropForm {
    pub fn submit(self) -> Result<CropCreate, FormError> {
        Ok(CropCreate {
            product_id: parse_required("id_produto", self.product_id)?,
            plot_id: parse_required("id_parcela", self.plot_id)?,
            planted_on: parse_required("data_plantio", self.planted_on)?,
            status: parse_required("status_cultivo", self.status)?,
        })
    }
}

/// The only mutable field of a crop after planting.
#[derive(Debug, Default, Clone)]
pub struct CropStatusForm {
    pub status: String,
}

impl CropStatusForm {
    pub fn submit(self) -> Result<CropUpdate, FormError> {
        Ok(CropUpdate {
            status: Some(parse_required("status_cultivo", self.status)?),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct HarvestForm {
    pub plot_id: String,
    pub product_id: String,
    pub harvested_on: String,
    pub quantity_kg: String,
}

impl HarvestForm {
    pub fn submit(self) -> Result<HarvestCreate, FormError> {
        Ok(HarvestCreate {
            plot_id: parse_required("id_parcela", self.plot_id)?,
            product_id: parse_required("id_produto", self.product_id)?,
            harvested_on: parse_required("data_colheita", self.harvested_on)?,
            quantity_kg: parse_required("quantidade_kg", self.quantity_kg)?,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct ParticipationForm {
    pub user_id: String,
    pub event_id: String,
    pub role: String,
}

impl ParticipationForm {
    pub fn submit(self) -> Result<ParticipationCreate, FormError> {
        Ok(ParticipationCreate {
            user_id: required("id_usuario", self.user_id)?,
            event_id: parse_required("id_evento", self.event_id)?,
            role: parse_required("papel", self.role)?,
        })
    }
}
