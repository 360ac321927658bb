use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod app;
mod commands;

#[derive(Parser)]
#[command(name = "legisbot")]
#[command(about = "LegisBot - consultá los documentos indexados desde la terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Iniciar sesión
    Login,
    /// Crear una cuenta nueva
    Register,
    /// Completar el perfil (onboarding)
    Onboarding,
    /// Cerrar la sesión actual
    Logout,
    /// Mostrar el usuario actual
    Whoami,
    /// Chat interactivo contra los documentos indexados
    Chat,
    /// Historial de consultas
    History,
    /// Estadísticas de uso (solo administradores)
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with screen output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = app::App::new()?;

    match cli.command {
        Commands::Login => commands::auth::login(&app).await,
        Commands::Register => commands::auth::register(&app).await,
        Commands::Onboarding => commands::auth::onboarding(&app).await,
        Commands::Logout => commands::auth::logout(&app).await,
        Commands::Whoami => commands::auth::whoami(&app).await,
        Commands::Chat => commands::chat::run(&app).await,
        Commands::History => commands::history::run(&app).await,
        Commands::Stats => commands::stats::run(&app).await,
    }
}
