use clap::Subcommand;

use super::{CliError, Context, create_then_refresh, delete_then_refresh, list_all, update_then_refresh};
use horta_api::forms::ProductForm;
use horta_api::models::Product;

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// Lista os produtos
    List,
    /// Cadastra um produto
    Create {
        #[arg(long)]
        nome: String,
        /// Verdura, Legume, Fruta ou Hortaliça
        #[arg(long)]
        tipo: String,
        #[arg(long)]
        epoca_plantio: Option<String>,
    },
    /// Substitui os dados de um produto (o backend não faz patch parcial)
    Update {
        id: i64,
        #[arg(long)]
        nome: String,
        #[arg(long)]
        tipo: String,
        #[arg(long)]
        epoca_plantio: Option<String>,
    },
    /// Remove um produto
    Delete { id: i64 },
}

pub async fn run(ctx: &Context, command: ProductCommand) -> Result<(), CliError> {
    match command {
        ProductCommand::List => list_all::<Product>(ctx).await,
        ProductCommand::Create {
            nome,
            tipo,
            epoca_plantio,
        } => {
            let payload = ProductForm {
                name: nome,
                kind: tipo,
                planting_season: epoca_plantio,
            }
            .submit()?;
            create_then_refresh::<Product>(ctx, payload).await
        }
        ProductCommand::Update {
            id,
            nome,
            tipo,
            epoca_plantio,
        } => {
            let payload = ProductForm {
                name: nome,
                kind: tipo,
                planting_season: epoca_plantio,
            }
            .submit()?;
            update_then_refresh::<Product>(ctx, &id, payload).await
        }
        ProductCommand::Delete { id } => delete_then_refresh::<Product>(ctx, &id).await,
    }
}
