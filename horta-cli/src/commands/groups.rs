use clap::Subcommand;

use super::{CliError, Context, create_then_refresh, delete_then_refresh, list_all, update_then_refresh};
use horta_api::forms::UserGroupForm;
use horta_api::models::UserGroup;

#[derive(Debug, Subcommand)]
pub enum GroupCommand {
    /// Lista os grupos
    List,
    /// Cadastra um grupo (somente ADMIN)
    Create {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        descricao: Option<String>,
    },
    /// Substitui os dados de um grupo (somente ADMIN)
    Update {
        id: i64,
        #[arg(long)]
        nome: String,
        #[arg(long)]
        descricao: Option<String>,
    },
    /// Remove um grupo (somente ADMIN)
    Delete { id: i64 },
}

pub async fn run(ctx: &Context, command: GroupCommand) -> Result<(), CliError> {
    match command {
        GroupCommand::List => list_all::<UserGroup>(ctx).await,
        GroupCommand::Create { nome, descricao } => {
            let payload = UserGroupForm {
                name: nome,
                description: descricao,
            }
            .submit()?;
            create_then_refresh::<UserGroup>(ctx, payload).await
        }
        GroupCommand::Update {
            id,
            nome,
            descricao,
        } => {
            let payload = UserGroupForm {
                name: nome,
                description: descricao,
            }
            .submit()?;
            update_then_refresh::<UserGroup>(ctx, &id, payload).await
        }
        GroupCommand::Delete { id } => delete_then_refresh::<UserGroup>(ctx, &id).await,
    }
}
