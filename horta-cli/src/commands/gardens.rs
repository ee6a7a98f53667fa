use clap::Subcommand;

use super::{CliError, Context, create_then_refresh, delete_then_refresh, list_all, update_then_refresh};
use horta_api::forms::{GardenForm, GardenUpdateForm};
use horta_api::models::Garden;

#[derive(Debug, Subcommand)]
pub enum GardenCommand {
    /// Lista as hortas
    List,
    /// Cadastra uma horta (somente ADMIN)
    Create {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        localizacao: String,
    },
    /// Atualiza uma horta (somente ADMIN)
    Update {
        id: String,
        #[arg(long)]
        nome: Option<String>,
        #[arg(long)]
        localizacao: Option<String>,
    },
    /// Remove uma horta (somente ADMIN)
    Delete { id: String },
}

pub async fn run(ctx: &Context, command: GardenCommand) -> Result<(), CliError> {
    match command {
        GardenCommand::List => list_all::<Garden>(ctx).await,
        GardenCommand::Create { nome, localizacao } => {
            let payload = GardenForm {
                name: nome,
                location: localizacao,
            }
            .submit()?;
            create_then_refresh::<Garden>(ctx, payload).await
        }
        GardenCommand::Update {
            id,
            nome,
            localizacao,
        } => {
            let payload = GardenUpdateForm {
                name: nome,
                location: localizacao,
            }
            .submit()?;
            update_then_refresh::<Garden>(ctx, &id, payload).await
        }
        GardenCommand::Delete { id } => delete_then_refresh::<Garden>(ctx, &id).await,
    }
}
