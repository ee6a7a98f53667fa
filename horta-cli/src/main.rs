mod commands;
mod render;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{CliError, Context};
use horta_client::{ApiClient, ApiError, Config, SessionStore};

#[derive(Parser)]
#[command(
    name = "horta",
    version,
    about = "Cliente de linha de comando para a Horta Comunitária"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Autentica com email e senha e guarda a sessão
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Encerra a sessão local
    Logout,
    /// Mostra o perfil do usuário logado
    Me,
    /// Hortas comunitárias
    #[command(subcommand)]
    Hortas(commands::gardens::GardenCommand),
    /// Parcelas de cultivo
    #[command(subcommand)]
    Parcelas(commands::plots::PlotCommand),
    /// Produtos cultiváveis
    #[command(subcommand)]
    Produtos(commands::products::ProductCommand),
    /// Eventos comunitários
    #[command(subcommand)]
    Eventos(commands::events::EventCommand),
    /// Usuários cadastrados
    #[command(subcommand)]
    Usuarios(commands::users::UserCommand),
    /// Grupos de usuários
    #[command(subcommand)]
    Grupos(commands::groups::GroupCommand),
    /// Cultivos em andamento
    #[command(subcommand)]
    Cultivos(commands::crops::CropCommand),
    /// Colheitas registradas
    #[command(subcommand)]
    Colheitas(commands::harvests::HarvestCommand),
    /// Participações em eventos
    #[command(subcommand)]
    Participacoes(commands::participations::ParticipationCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    let cli = Cli::parse();
    let config = Config::from_env();
    let store = SessionStore::new(&config.session_file);

    // A corrupt session file should not brick the CLI; treat it as logged out.
    let session = match store.load() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Aviso: sessão local ignorada ({err})");
            None
        }
    };

    let ctx = Context {
        client: ApiClient::new(&config),
        store,
        session,
    };

    if let Err(err) = run(cli.command, &ctx).await {
        match &err {
            CliError::Api(ApiError::AuthRequired) => {
                eprintln!("Você precisa estar logado! Use `horta login <email> --password <senha>`.");
            }
            _ => eprintln!("Erro: {err}"),
        }
        std::process::exit(1);
    }
}

async fn run(command: Command, ctx: &Context) -> Result<(), CliError> {
    match command {
        Command::Login { username, password } => {
            commands::auth::login(ctx, &username, &password).await
        }
        Command::Logout => commands::auth::logout(ctx),
        Command::Me => commands::auth::me(ctx).await,
        Command::Hortas(cmd) => commands::gardens::run(ctx, cmd).await,
        Command::Parcelas(cmd) => commands::plots::run(ctx, cmd).await,
        Command::Produtos(cmd) => commands::products::run(ctx, cmd).await,
        Command::Eventos(cmd) => commands::events::run(ctx, cmd).await,
        Command::Usuarios(cmd) => commands::users::run(ctx, cmd).await,
        Command::Grupos(cmd) => commands::groups::run(ctx, cmd).await,
        Command::Cultivos(cmd) => commands::crops::run(ctx, cmd).await,
        Command::Colheitas(cmd) => commands::harvests::run(ctx, cmd).await,
        Command::Participacoes(cmd) => commands::participations::run(ctx, cmd).await,
    }
}
