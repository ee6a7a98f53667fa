use clap::Subcommand;

use super::{CliError, Context};
use horta_api::forms::ParticipationForm;
use horta_api::models::{EventParticipation, ParticipationKey};

// The backend only creates and deletes participações; there is no listing
// to refresh afterwards.
#[derive(Debug, Subcommand)]
pub enum ParticipationCommand {
    /// Inscreve um usuário em um evento
    Create {
        #[arg(long)]
        id_usuario: String,
        #[arg(long)]
        id_evento: String,
        /// Participante, Organizador ou Palestrante
        #[arg(long)]
        papel: String,
    },
    /// Cancela uma inscrição
    Delete { id_usuario: String, id_evento: i64 },
}

pub async fn run(ctx: &Context, command: ParticipationCommand) -> Result<(), CliError> {
    match command {
        ParticipationCommand::Create {
            id_usuario,
            id_evento,
            papel,
        } => {
            let payload = ParticipationForm {
                user_id: id_usuario,
                event_id: id_evento,
                role: papel,
            }
            .submit()?;
            let created: EventParticipation =
                ctx.client.create(ctx.session.as_ref(), &payload).await?;
            println!(
                "Inscrição registrada: usuário {} no evento {} como {}.",
                created.user_id, created.event_id, created.role
            );
            Ok(())
        }
        ParticipationCommand::Delete {
            id_usuario,
            id_evento,
        } => {
            let key = ParticipationKey {
                user_id: id_usuario,
                event_id: id_evento,
            };
            ctx.client
                .remove::<EventParticipation>(ctx.session.as_ref(), &key)
                .await?;
            println!("Inscrição cancelada.");
            Ok(())
        }
    }
}
