use chrono::NaiveDate;
use clap::Subcommand;

use super::{CliError, Context, create_then_refresh, delete_then_refresh, list_all, update_then_refresh};
use horta_api::forms::{CropForm, CropStatusForm};
use horta_api::models::{Crop, CropKey};

#[derive(Debug, Subcommand)]
pub enum CropCommand {
    /// Lista os cultivos
    List,
    /// Registra um cultivo
    Create {
        #[arg(long)]
        id_produto: String,
        #[arg(long)]
        id_parcela: String,
        /// Data no formato AAAA-MM-DD
        #[arg(long)]
        data_plantio: String,
        /// Plantado, Crescendo, ProntoParaColheita ou Colhido
        #[arg(long)]
        status: String,
    },
    /// Atualiza o status de um cultivo
    Update {
        id_produto: i64,
        id_parcela: i64,
        data_plantio: NaiveDate,
        #[arg(long)]
        status: String,
    },
    /// Remove um cultivo
    Delete {
        id_produto: i64,
        id_parcela: i64,
        data_plantio: NaiveDate,
    },
}

pub async fn run(ctx: &Context, command: CropCommand) -> Result<(), CliError> {
    match command {
        CropCommand::List => list_all::<Crop>(ctx).await,
        CropCommand::Create {
            id_produto,
            id_parcela,
            data_plantio,
            status,
        } => {
            let payload = CropForm {
                product_id: id_produto,
                plot_id: id_parcela,
                planted_on: data_plantio,
                status,
            }
            .submit()?;
            create_then_refresh::<Crop>(ctx, payload).await
        }
        CropCommand::Update {
            id_produto,
            id_parcela,
            data_plantio,
            status,
        } => {
            let key = CropKey {
                product_id: id_produto,
                plot_id: id_parcela,
                planted_on: data_plantio,
            };
            let payload = CropStatusForm { status }.submit()?;
            update_then_refresh::<Crop>(ctx, &key, payload).await
        }
        CropCommand::Delete {
            id_produto,
            id_parcela,
            data_plantio,
        } => {
            let key = CropKey {
                product_id: id_produto,
                plot_id: id_parcela,
                planted_on: data_plantio,
            };
            delete_then_refresh::<Crop>(ctx, &key).await
        }
    }
}
