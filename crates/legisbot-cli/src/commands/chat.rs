//! Interactive chat screen.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use legisbot_application::ChatUseCase;
use legisbot_application::chat_usecase::PENDING_MESSAGE;
use legisbot_core::transcript::Turn;

use crate::app::App;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct ChatHelper {
    commands: Vec<String>,
}

impl ChatHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/contextos".to_string(),
                "/contexto".to_string(),
                "/salir".to_string(),
            ],
        }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ChatHelper {}

fn print_answer(turn: &Turn) {
    for line in turn.text.lines() {
        println!("{}", line.bright_blue());
    }
    if !turn.sources.is_empty() {
        println!("{}", "Fuentes:".bright_black());
        for source in &turn.sources {
            println!(
                "{}",
                format!("  📄 {} (pág. {})", source.source, source.page).bright_black()
            );
        }
    }
}

fn print_contexts(chat: &ChatUseCase) {
    if chat.contexts().is_empty() {
        println!("{}", "No hay contextos disponibles.".bright_black());
        return;
    }
    for context in chat.contexts() {
        let marker = if chat
            .selected_context()
            .is_some_and(|selected| selected.id == context.id)
        {
            "*"
        } else {
            " "
        };
        println!(" {} {} ({})", marker, context.label(), context.id);
    }
}

pub async fn run(app: &App) -> Result<()> {
    app.require_access(false).await?;

    let mut chat = ChatUseCase::new(app.api.clone());
    chat.load_contexts().await;

    let helper = ChatHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Chat (Consulta documentos) ===".bright_magenta().bold());
    if let Some(context) = chat.selected_context() {
        println!(
            "{}",
            format!("Contexto: {}", context.label()).bright_black()
        );
    }
    println!(
        "{}",
        "Hacé una pregunta sobre los documentos, o '/salir' para terminar.".bright_black()
    );
    println!();

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if trimmed == "/salir" {
                    println!("{}", "Hasta luego!".bright_green());
                    break;
                }
                if trimmed == "/contextos" {
                    print_contexts(&chat);
                    continue;
                }
                if let Some(id) = trimmed.strip_prefix("/contexto ") {
                    if chat.select_context(id.trim()) {
                        println!("{}", format!("Contexto seleccionado: {id}").green());
                    } else {
                        println!("{}", "Contexto desconocido.".red());
                    }
                    continue;
                }
                if trimmed.starts_with('/') {
                    println!("{}", "Comando desconocido".bright_black());
                    continue;
                }

                // The placeholder turn, rendered while the query runs.
                println!("{}", PENDING_MESSAGE.yellow().italic());

                if chat.submit(trimmed).await {
                    if let Some(turn) = chat.transcript().turns().last() {
                        print_answer(turn);
                    }
                    println!();
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detectado. Usá '/salir' para terminar.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "Hasta luego!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
