//! Authentication commands: login, register, onboarding, logout, whoami.

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;

use legisbot_application::session_usecase::REGISTER_REDIRECT_DELAY;
use legisbot_application::NavTarget;
use legisbot_core::LegisError;
use legisbot_core::user::{OCCUPATIONS, OnboardingProfile, PROVINCES, User};

use crate::app::App;
use crate::commands::prompt;

/// Inline form error: the server-provided message, or the generic
/// fallback when there is none (e.g. network failures).
fn form_error(err: &LegisError, fallback: &str) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

fn print_destination(user: &User) {
    match NavTarget::for_user(user) {
        NavTarget::Onboarding => {
            println!(
                "{}",
                "Completá tu perfil con `legisbot onboarding`.".yellow()
            );
        }
        NavTarget::Home => {
            println!(
                "{}",
                "Ya podés consultar los documentos con `legisbot chat`.".bright_black()
            );
        }
    }
}

pub async fn login(app: &App) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let email = prompt::line(&mut rl, "Email")?;
    let password = prompt::line(&mut rl, "Contraseña")?;

    match app.session.login(&email, &password).await {
        Ok(user) => {
            println!("{}", format!("Sesión iniciada como {}", user.email).green());
            print_destination(&user);
        }
        Err(err) => {
            tracing::debug!("login rejected: {err}");
            println!("{}", form_error(&err, "Error al iniciar sesión").red());
        }
    }
    Ok(())
}

pub async fn register(app: &App) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let email = prompt::line(&mut rl, "Email")?;
    let password = prompt::line(&mut rl, "Contraseña")?;

    match app.session.register(&email, &password).await {
        Ok(user) => {
            println!("{}", "✅ Registro exitoso! Redirigiendo...".green());
            // Keep the confirmation visible before moving on.
            tokio::time::sleep(REGISTER_REDIRECT_DELAY).await;
            print_destination(&user);
        }
        Err(err) => {
            tracing::debug!("register rejected: {err}");
            println!("{}", form_error(&err, "Error al registrar").red());
        }
    }
    Ok(())
}

pub async fn onboarding(app: &App) -> Result<()> {
    app.require_access(false).await?;

    let mut rl = DefaultEditor::new()?;
    println!("{}", "Completar onboarding".bold());

    let mut profile = OnboardingProfile::new();
    profile.first_name = prompt::line(&mut rl, "Nombre")?;
    profile.last_name = prompt::line(&mut rl, "Apellido")?;
    profile.country = prompt::line_with_default(&mut rl, "País", &profile.country)?;
    profile.province = prompt::select(&mut rl, "Seleccione una provincia", PROVINCES)?
        .unwrap_or_default();
    profile.locality = prompt::line(&mut rl, "Localidad")?;
    profile.age = prompt::line(&mut rl, "Edad")?.parse().ok();

    let occupation = prompt::select(&mut rl, "Seleccione su profesión", OCCUPATIONS)?;
    profile.occupation = match occupation.as_deref() {
        Some("Otro") => prompt::line(&mut rl, "Especifique su profesión")?,
        Some(choice) => choice.to_string(),
        None => String::new(),
    };

    match app.session.complete_onboarding(&profile).await {
        Ok(_) => {
            println!("{}", "Perfil guardado.".green());
            println!(
                "{}",
                "Ya podés consultar los documentos con `legisbot chat`.".bright_black()
            );
        }
        Err(err) => {
            tracing::debug!("onboarding rejected: {err}");
            println!("{}", form_error(&err, "Error en onboarding").red());
        }
    }
    Ok(())
}

pub async fn logout(app: &App) -> Result<()> {
    app.session.logout().await;
    println!("{}", "Sesión cerrada.".green());
    Ok(())
}

pub async fn whoami(app: &App) -> Result<()> {
    let user = app.require_access(false).await?;
    println!("{} {}", "Email:".bold(), user.email);
    println!("{} {:?}", "Rol:".bold(), user.role);
    if let (Some(first), Some(last)) = (&user.first_name, &user.last_name) {
        println!("{} {} {}", "Nombre:".bold(), first, last);
    }
    if !user.has_completed_onboarding {
        println!("{}", "Onboarding pendiente.".yellow());
    }
    Ok(())
}
