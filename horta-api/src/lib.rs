// horta-api: typed schemas for the Horta Comunitária REST API.
//
// The backend owns every record; this crate only describes the wire
// contract. Field names on the wire are the backend's Portuguese column
// names, models use English identifiers with serde renames.

pub mod forms;
pub mod models;
pub mod resource;

pub use resource::{Resource, ResourceKey};
