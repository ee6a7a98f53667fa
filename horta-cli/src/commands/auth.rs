use super::{CliError, Context};
use crate::render;
use horta_client::ApiError;

/// Exchanges credentials for a bearer token and persists the session.
/// Nothing is stored when the backend rejects the credentials.
pub async fn login(ctx: &Context, username: &str, password: &str) -> Result<(), CliError> {
    let session = ctx.client.login(username, password).await?;
    ctx.store.save(&session)?;
    match session.group.as_deref() {
        Some(group) => println!("Login efetuado com sucesso! Grupo: {group}"),
        None => println!("Login efetuado com sucesso!"),
    }
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<(), CliError> {
    ctx.store.clear()?;
    println!("Sessão encerrada.");
    Ok(())
}

pub async fn me(ctx: &Context) -> Result<(), CliError> {
    let session = ctx
        .session
        .as_ref()
        .ok_or(CliError::Api(ApiError::AuthRequired))?;
    let profile = ctx.client.me(session).await?;
    println!("{}", render::card(&profile));
    Ok(())
}
