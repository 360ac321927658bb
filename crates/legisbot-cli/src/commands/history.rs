//! History screen: one fetch, rendered top to bottom.

use anyhow::Result;
use colored::Colorize;

use legisbot_application::HistoryUseCase;
use legisbot_application::history_usecase::{EMPTY_HISTORY_MESSAGE, format_session_timestamp};
use legisbot_core::history::Sender;

use crate::app::App;

pub async fn run(app: &App) -> Result<()> {
    app.require_access(false).await?;

    println!("{}", "=== Historial de chat ===".bright_magenta().bold());

    let history = HistoryUseCase::new(app.api.clone()).fetch().await;
    if history.is_empty() {
        println!("{}", EMPTY_HISTORY_MESSAGE.bright_black());
        return Ok(());
    }

    for session in &history {
        println!();
        println!(
            "{} {}",
            "Sesión:".bold(),
            format_session_timestamp(&session.created_at)
        );

        for message in &session.messages {
            match message.sender {
                Sender::User => {
                    println!("{}", format!("👤 Usuario: {}", message.content).blue());
                }
                Sender::Bot => {
                    println!("{}", format!("🤖 Bot: {}", message.content).green());
                    if !message.sources.is_empty() {
                        println!("{}", "   Fuentes:".bright_black());
                        for source in &message.sources {
                            println!(
                                "{}",
                                format!("   📄 {} (pág. {})", source.source, source.page)
                                    .bright_black()
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
