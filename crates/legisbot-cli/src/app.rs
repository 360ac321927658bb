//! Application assembly.
//!
//! Wires configuration, the HTTP client, credential storage, and the
//! session use case together, and gates protected commands behind the
//! route guard.

use std::sync::Arc;

use anyhow::{Result, bail};
use colored::Colorize;

use legisbot_api::ApiClient;
use legisbot_application::SessionUseCase;
use legisbot_core::api::LegisApi;
use legisbot_core::guard::RouteDecision;
use legisbot_core::user::User;
use legisbot_infrastructure::{ConfigService, TokenStorage};

pub struct App {
    pub api: Arc<dyn LegisApi>,
    pub session: SessionUseCase,
}

impl App {
    /// Builds the client from `config.toml` and the persisted credential.
    pub fn new() -> Result<Self> {
        let config = ConfigService::new()?.get_config();
        let api: Arc<dyn LegisApi> = Arc::new(ApiClient::new(config.base_url_trimmed()));
        let credentials = Arc::new(TokenStorage::new()?);
        let session = SessionUseCase::new(api.clone(), credentials);
        Ok(Self { api, session })
    }

    /// Bootstraps the session and evaluates the route guard for a
    /// protected command. Returns the authenticated user when the command
    /// may proceed.
    pub async fn require_access(&self, admin_only: bool) -> Result<User> {
        println!("{}", "Cargando...".bright_black());
        let state = self.session.bootstrap().await;

        match legisbot_core::guard::evaluate(&state, admin_only) {
            RouteDecision::Render => Ok(state
                .user()
                .cloned()
                // Safe: the guard only renders for authenticated sessions
                .expect("guard rendered without identity")),
            RouteDecision::RedirectToLogin => {
                bail!("No hay una sesión activa. Ejecutá `legisbot login`.")
            }
            RouteDecision::RedirectHome => {
                bail!("Esta pantalla es solo para administradores.")
            }
            // Bootstrap completed above, so the state can no longer be
            // Initializing.
            RouteDecision::ShowLoading => bail!("La sesión todavía se está inicializando."),
        }
    }
}
