use clap::Subcommand;

use super::{
    CliError, Context, create_then_refresh, delete_then_refresh, list_all, show_one,
    update_then_refresh,
};
use horta_api::forms::HarvestForm;
use horta_api::models::Harvest;

#[derive(Debug, Subcommand)]
pub enum HarvestCommand {
    /// Lista as colheitas
    List,
    /// Mostra uma colheita
    Get { id: i64 },
    /// Registra uma colheita
    Create {
        #[arg(long)]
        id_parcela: String,
        #[arg(long)]
        id_produto: String,
        /// Data no formato AAAA-MM-DD
        #[arg(long)]
        data_colheita: String,
        #[arg(long)]
        quantidade_kg: String,
    },
    /// Substitui os dados de uma colheita
    Update {
        id: i64,
        #[arg(long)]
        id_parcela: String,
        #[arg(long)]
        id_produto: String,
        #[arg(long)]
        data_colheita: String,
        #[arg(long)]
        quantidade_kg: String,
    },
    /// Remove uma colheita
    Delete { id: i64 },
}

pub async fn run(ctx: &Context, command: HarvestCommand) -> Result<(), CliError> {
    match command {
        HarvestCommand::List => list_all::<Harvest>(ctx).await,
        HarvestCommand::Get { id } => show_one::<Harvest>(ctx, &id).await,
        HarvestCommand::Create {
            id_parcela,
            id_produto,
            data_colheita,
            quantidade_kg,
        } => {
            let payload = HarvestForm {
                plot_id: id_parcela,
                product_id: id_produto,
                harvested_on: data_colheita,
                quantity_kg: quantidade_kg,
            }
            .submit()?;
            create_then_refresh::<Harvest>(ctx, payload).await
        }
        HarvestCommand::Update {
            id,
            id_parcela,
            id_produto,
            data_colheita,
            quantidade_kg,
        } => {
            let payload = HarvestForm {
                plot_id: id_parcela,
                product_id: id_produto,
                harvested_on: data_colheita,
                quantity_kg: quantidade_kg,
            }
            .submit()?;
            update_then_refresh::<Harvest>(ctx, &id, payload).await
        }
        HarvestCommand::Delete { id } => delete_then_refresh::<Harvest>(ctx, &id).await,
    }
}
