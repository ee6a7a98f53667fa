use clap::Subcommand;

use super::{CliError, Context, create_then_refresh, delete_then_refresh, list_all, update_then_refresh};
use horta_api::forms::{EventForm, EventUpdateForm};
use horta_api::models::Event;

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// Lista os eventos
    List,
    /// Cadastra um evento
    Create {
        #[arg(long)]
        nome: String,
        /// Data no formato AAAA-MM-DD
        #[arg(long)]
        data: String,
        #[arg(long)]
        descricao: Option<String>,
        #[arg(long)]
        local: Option<String>,
    },
    /// Atualiza um evento
    Update {
        id: i64,
        #[arg(long)]
        nome: Option<String>,
        #[arg(long)]
        data: Option<String>,
        #[arg(long)]
        descricao: Option<String>,
        #[arg(long)]
        local: Option<String>,
    },
    /// Remove um evento
    Delete { id: i64 },
}

pub async fn run(ctx: &Context, command: EventCommand) -> Result<(), CliError> {
    match command {
        EventCommand::List => list_all::<Event>(ctx).await,
        EventCommand::Create {
            nome,
            data,
            descricao,
            local,
        } => {
            let payload = EventForm {
                name: nome,
                date: data,
                description: descricao,
                venue: local,
            }
            .submit()?;
            create_then_refresh::<Event>(ctx, payload).await
        }
        EventCommand::Update {
            id,
            nome,
            data,
            descricao,
            local,
        } => {
            let payload = EventUpdateForm {
                name: nome,
                date: data,
                description: descricao,
                venue: local,
            }
            .submit()?;
            update_then_refresh::<Event>(ctx, &id, payload).await
        }
        EventCommand::Delete { id } => delete_then_refresh::<Event>(ctx, &id).await,
    }
}
