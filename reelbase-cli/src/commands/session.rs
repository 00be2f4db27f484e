use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelbase_catalog::types::Role;

use crate::CliError;

use super::{App, password_or_prompt, read_line};

pub(crate) fn run_login(
    app: &mut App,
    username: &str,
    password: Option<String>,
) -> Result<(), CliError> {
    let password = password_or_prompt(password)?;
    let user = app.session.login(&mut app.catalog, username, &password)?;
    log::info!(
        "Signed in as {} ({})",
        user.username.if_supports_color(Stdout, |t| t.bold()),
        user.role,
    );
    Ok(())
}

pub(crate) fn run_signup(
    app: &mut App,
    username: &str,
    password: Option<String>,
) -> Result<(), CliError> {
    let password = match password {
        Some(password) => password,
        None => {
            let first = read_line("Password")?;
            let second = read_line("Confirm password")?;
            if first != second {
                return Err(CliError::input("Passwords do not match."));
            }
            first
        }
    };

    let user = app
        .session
        .register(&mut app.catalog, username, &password, Role::User)?;
    log::info!(
        "Created account {} and signed in",
        user.username.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

pub(crate) fn run_logout(app: &mut App) -> Result<(), CliError> {
    match app.session.user().map(|u| u.username.clone()) {
        Some(name) => {
            app.session.logout(&mut app.catalog)?;
            log::info!("Signed out {}", name);
        }
        None => log::info!("Not signed in."),
    }
    Ok(())
}

pub(crate) fn run_whoami(app: &App) -> Result<(), CliError> {
    match app.session.user() {
        Some(user) => log::info!(
            "{} ({})",
            user.username.if_supports_color(Stdout, |t| t.bold()),
            user.role,
        ),
        None => log::info!("Not signed in. Run 'reelbase login <username>'."),
    }
    Ok(())
}
