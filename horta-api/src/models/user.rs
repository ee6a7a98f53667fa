use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// A registered user (`usuarios`). Keyed by a server-assigned UUID string.
/// The password is write-only: it appears in payloads, never in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "id_usuario")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "id_grupo")]
    pub group_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCreate {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "id_grupo")]
    pub group_id: i64,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "id_grupo", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(rename = "senha", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Resource for User {
    const PATH: &'static str = "usuarios";
    const EMPTY_MESSAGE: &'static str = "Nenhum usuário cadastrado.";

    type Key = String;
    type Create = UserCreate;
    type Update = UserUpdate;
}

/// An authorization group (`grupos`), e.g. ADMIN. The group name returned
/// at login gates mutating controls on admin-managed screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    #[serde(rename = "id_grupo")]
    pub id: i64,
    #[serde(rename = "nome_grupo")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserGroupCreate {
    #[serde(rename = "nome_grupo")]
    pub name: String,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for UserGroup {
    const PATH: &'static str = "grupos";
    const ADMIN_MANAGED: bool = true;
    const EMPTY_MESSAGE: &'static str = "Nenhum grupo cadastrado.";

    type Key = i64;
    type Create = UserGroupCreate;
    // PUT /grupos/{id} replaces both fields.
    type Update = UserGroupCreate;
}
