use std::io::{self, IsTerminal, Write};

use crate::auth::AuthService;
use crate::cli::AuthCommand;
use crate::config::{self, Settings};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

pub async fn run(ctx: &AppContext, command: AuthCommand) -> AppResult<()> {
    match command {
        AuthCommand::Login => {
            let settings = ensure_login_settings(ctx)?;
            let result = AuthService::login(&ctx.profile, &settings, &ctx.token_store).await?;

            let text = if let Some(email) = result.email.as_ref() {
                format!("{}: logged in as {}", result.profile, email)
            } else {
                format!("{}: {}", result.profile, result.note)
            };
            ctx.output.emit(&text, &result)
        }
        AuthCommand::Status => {
            let status = AuthService::status(&ctx.profile, &ctx.token_store).await?;
            let text = if status.logged_in {
                format!(
                    "{}: logged in{}",
                    status.profile,
                    status
                        .email
                        .as_ref()
                        .map(|email| format!(" as {email}"))
                        .unwrap_or_default(),
                )
            } else {
                format!("{}: logged out", status.profile)
            };

            ctx.output.emit(&text, &status)
        }
        AuthCommand::Logout => {
            let status = AuthService::logout(&ctx.profile, &ctx.token_store).await?;
            let text = format!("{}: logged out", status.profile);
            ctx.output.emit(&text, &status)
        }
    }
}

fn ensure_login_settings(ctx: &AppContext) -> AppResult<Settings> {
    let mut settings = ctx.settings.clone();
    let missing_client_id = settings
        .client_id
        .as_deref()
        .map(str::trim)
        .is_none_or(str::is_empty);
    let missing_client_secret = settings
        .client_secret
        .as_deref()
        .map(str::trim)
        .is_none_or(str::is_empty);

    if !missing_client_id && !missing_client_secret {
        return Ok(settings);
    }

    let settings_path = ctx.paths.settings_file(&ctx.profile);
    if !io::stdin().is_terminal() {
        return Err(AppError::Config(format!(
            "missing oauth client config in {}. run `gmail-digest auth login` in an interactive terminal to be prompted, or add client_id/client_secret manually",
            settings_path.display(),
        )));
    }

    println!(
        "OAuth client config is missing for profile `{}`.",
        ctx.profile
    );
    println!("Settings will be saved to {}.", settings_path.display());

    if missing_client_id {
        settings.client_id = Some(prompt_required("OAuth client_id: ")?);
    }

    if missing_client_secret {
        settings.client_secret = Some(prompt_required("OAuth client_secret: ")?);
    }

    config::save_settings(&ctx.paths, &ctx.profile, &settings)?;
    println!("Saved profile settings to {}.", settings_path.display());

    Ok(settings)
}

fn prompt_required(prompt: &str) -> AppResult<String> {
    loop {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut value = String::new();
        io::stdin().read_line(&mut value)?;
        let value = value.trim().to_string();
        if !value.is_empty() {
            return Ok(value);
        }
        eprintln!("value is required");
    }
}
