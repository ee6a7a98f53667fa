use clap::Subcommand;

use super::{CliError, Context, create_then_refresh, delete_then_refresh, list_all, update_then_refresh};
use horta_api::forms::{PlotForm, PlotUpdateForm};
use horta_api::models::Plot;

#[derive(Debug, Subcommand)]
pub enum PlotCommand {
    /// Lista as parcelas
    List,
    /// Cadastra uma parcela
    Create {
        #[arg(long)]
        localizacao: String,
        /// Tamanho em m²
        #[arg(long)]
        tamanho: String,
        /// Livre, Cultivando ou Em Repouso
        #[arg(long)]
        status: Option<String>,
    },
    /// Atualiza uma parcela
    Update {
        id: i64,
        #[arg(long)]
        localizacao: Option<String>,
        #[arg(long)]
        tamanho: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Remove uma parcela
    Delete { id: i64 },
}

pub async fn run(ctx: &Context, command: PlotCommand) -> Result<(), CliError> {
    match command {
        PlotCommand::List => list_all::<Plot>(ctx).await,
        PlotCommand::Create {
            localizacao,
            tamanho,
            status,
        } => {
            let payload = PlotForm {
                location: localizacao,
                size_m2: tamanho,
                status,
            }
            .submit()?;
            create_then_refresh::<Plot>(ctx, payload).await
        }
        PlotCommand::Update {
            id,
            localizacao,
            tamanho,
            status,
        } => {
            let payload = PlotUpdateForm {
                location: localizacao,
                size_m2: tamanho,
                status,
            }
            .submit()?;
            update_then_refresh::<Plot>(ctx, &id, payload).await
        }
        PlotCommand::Delete { id } => delete_then_refresh::<Plot>(ctx, &id).await,
    }
}
