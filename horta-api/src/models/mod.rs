//! One module per backend entity. Each `Out` model implements [`Resource`]
//! and carries its `Create`/`Update` payload types next to it.
//!
//! [`Resource`]: crate::resource::Resource

mod crop;
mod event;
mod garden;
mod harvest;
mod plot;
mod product;
mod user;

pub use crop::{Crop, CropCreate, CropKey, CropStatus, CropUpdate};
pub use event::{
    Event, EventCreate, EventParticipation, EventUpdate, ParticipationCreate, ParticipationKey,
    ParticipationRole,
};
pub use garden::{Garden, GardenCreate, GardenUpdate};
pub use harvest::{Harvest, HarvestCreate};
pub use plot::{Plot, PlotCreate, PlotStatus, PlotUpdate};
pub use product::{Product, ProductCreate, ProductKind};
pub use user::{User, UserCreate, UserGroup, UserGroupCreate, UserUpdate};
