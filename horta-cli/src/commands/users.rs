use clap::Subcommand;

use super::{CliError, Context, create_then_refresh, delete_then_refresh, list_all, update_then_refresh};
use horta_api::forms::{UserForm, UserUpdateForm};
use horta_api::models::User;

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Lista os usuários
    List,
    /// Cadastra um usuário
    Create {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        telefone: Option<String>,
        #[arg(long)]
        id_grupo: String,
        #[arg(long)]
        senha: String,
    },
    /// Atualiza um usuário
    Update {
        id: String,
        #[arg(long)]
        nome: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        telefone: Option<String>,
        #[arg(long)]
        id_grupo: Option<String>,
        #[arg(long)]
        senha: Option<String>,
    },
    /// Remove um usuário
    Delete { id: String },
}

pub async fn run(ctx: &Context, command: UserCommand) -> Result<(), CliError> {
    match command {
        UserCommand::List => list_all::<User>(ctx).await,
        UserCommand::Create {
            nome,
            email,
            telefone,
            id_grupo,
            senha,
        } => {
            let payload = UserForm {
                name: nome,
                email,
                phone: telefone,
                group_id: id_grupo,
                password: senha,
            }
            .submit()?;
            create_then_refresh::<User>(ctx, payload).await
        }
        UserCommand::Update {
            id,
            nome,
            email,
            telefone,
            id_grupo,
            senha,
        } => {
            let payload = UserUpdateForm {
                name: nome,
                email,
                phone: telefone,
                group_id: id_grupo,
                password: senha,
            }
            .submit()?;
            update_then_refresh::<User>(ctx, &id, payload).await
        }
        UserCommand::Delete { id } => delete_then_refresh::<User>(ctx, &id).await,
    }
}
