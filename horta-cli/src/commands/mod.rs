//! One module per screen of the original frontend, plus the shared
//! refresh-after-mutation helpers. Every successful create/update/delete
//! re-lists the collection so the display matches the server.

pub mod auth;
pub mod crops;
pub mod events;
pub mod gardens;
pub mod groups;
pub mod harvests;
pub mod participations;
pub mod plots;
pub mod products;
pub mod users;

use thiserror::Error;

use crate::render::{self, Card};
use horta_api::Resource;
use horta_api::forms::FormError;
use horta_client::{ApiClient, ApiError, Session, SessionError, SessionStore};

pub struct Context {
    pub client: ApiClient,
    pub store: SessionStore,
    pub session: Option<Session>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Apenas administradores podem alterar {0}!")]
    AdminOnly(&'static str),
}

/// Local gate for admin-managed screens. The server stays authoritative;
/// this just refuses the obviously forbidden call up front.
pub fn ensure_can_mutate<R: Resource>(ctx: &Context) -> Result<(), CliError> {
    if R::ADMIN_MANAGED && !ctx.session.as_ref().is_some_and(Session::is_admin) {
        return Err(CliError::AdminOnly(R::PATH));
    }
    Ok(())
}

pub async fn list_all<R: Resource + Card>(ctx: &Context) -> Result<(), CliError> {
    let records: Vec<R> = ctx.client.list(ctx.session.as_ref()).await?;
    println!("{}", render::collection(&records));
    Ok(())
}

pub async fn show_one<R: Resource + Card>(ctx: &Context, key: &R::Key) -> Result<(), CliError> {
    let record: R = ctx.client.get(ctx.session.as_ref(), key).await?;
    println!("{}", render::card(&record));
    Ok(())
}

pub async fn create_then_refresh<R: Resource + Card>(
    ctx: &Context,
    payload: R::Create,
) -> Result<(), CliError> {
    ensure_can_mutate::<R>(ctx)?;
    let _: R = ctx.client.create(ctx.session.as_ref(), &payload).await?;
    println!("Criado com sucesso!");
    list_all::<R>(ctx).await
}

pub async fn update_then_refresh<R: Resource + Card>(
    ctx: &Context,
    key: &R::Key,
    payload: R::Update,
) -> Result<(), CliError> {
    ensure_can_mutate::<R>(ctx)?;
    let _: R = ctx
        .client
        .update(ctx.session.as_ref(), key, &payload)
        .await?;
    println!("Atualizado com sucesso!");
    list_all::<R>(ctx).await
}

pub async fn delete_then_refresh<R: Resource + Card>(
    ctx: &Context,
    key: &R::Key,
) -> Result<(), CliError> {
    ensure_can_mutate::<R>(ctx)?;
    ctx.client.remove::<R>(ctx.session.as_ref(), key).await?;
    println!("Removido com sucesso!");
    list_all::<R>(ctx).await
}
