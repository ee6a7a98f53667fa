use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resource::{NoUpdate, Resource, ResourceKey};

/// A community event (`eventos`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "id_evento")]
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "data_evento")]
    pub date: NaiveDate,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "local_evento", default)]
    pub venue: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "data_evento")]
    pub date: NaiveDate,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "local_evento", skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventUpdate {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "data_evento", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "local_evento", skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl Resource for Event {
    const PATH: &'static str = "eventos";
    const PROTECTED: bool = true;
    const EMPTY_MESSAGE: &'static str = "Nenhum evento cadastrado.";

    type Key = i64;
    type Create = EventCreate;
    type Update = EventUpdate;
}

/// A user's enrollment in an event (`participacoes`), keyed by the
/// (user, event) pair. The backend only creates and deletes these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventParticipation {
    #[serde(rename = "id_usuario")]
    pub user_id: String,
    #[serde(rename = "id_evento")]
    pub event_id: i64,
    #[serde(rename = "papel")]
    pub role: ParticipationRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipationRole {
    #[serde(rename = "Participante")]
    Attendee,
    #[serde(rename = "Organizador")]
    Organizer,
    #[serde(rename = "Palestrante")]
    Speaker,
}

impl ParticipationRole {
    pub fn as_wire(&self) -> &'static str {
        match self {
            ParticipationRole::Attendee => "Participante",
            ParticipationRole::Organizer => "Organizador",
            ParticipationRole::Speaker => "Palestrante",
        }
    }
}

impl fmt::Display for ParticipationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for ParticipationRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "participante" => Ok(ParticipationRole::Attendee),
            "organizador" => Ok(ParticipationRole::Organizer),
            "palestrante" => Ok(ParticipationRole::Speaker),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipationCreate {
    #[serde(rename = "id_usuario")]
    pub user_id: String,
    #[serde(rename = "id_evento")]
    pub event_id: i64,
    #[serde(rename = "papel")]
    pub role: ParticipationRole,
}

/// Composite key, rendered as `participacoes/{id_usuario}/{id_evento}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipationKey {
    pub user_id: String,
    pub event_id: i64,
}

impl ResourceKey for ParticipationKey {
    fn as_path(&self) -> String {
        format!("{}/{}", self.user_id, self.event_id)
    }
}

impl Resource for EventParticipation {
    const PATH: &'static str = "participacoes";
    const EMPTY_MESSAGE: &'static str = "Nenhuma participação registrada.";

    type Key = ParticipationKey;
    type Create = ParticipationCreate;
    type Update = NoUpdate;
}
