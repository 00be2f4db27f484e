use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelbase_catalog::types::Role;
use reelbase_db::CatalogError;

use crate::CliError;

use super::App;

pub(crate) fn run_users_list(app: &App) -> Result<(), CliError> {
    let me = app.session.require_admin("list users")?;

    log::info!(
        "{}",
        format!("{:<24} {}", "Username", "Role").if_supports_color(Stdout, |t| t.bold()),
    );
    for user in app.catalog.list_users() {
        let marker = if user.username == me.username { " (you)" } else { "" };
        let role = match user.role {
            Role::Admin => format!("{}", user.role.if_supports_color(Stdout, |t| t.yellow())),
            Role::User => user.role.to_string(),
        };
        log::info!("{:<24} {}{}", user.username, role, marker);
    }
    Ok(())
}

pub(crate) fn run_users_delete(app: &mut App, username: &str) -> Result<(), CliError> {
    app.session.require_admin("delete users")?;
    app.session.ensure_not_self(username, "delete")?;

    app.catalog.delete_user(username)?;
    log::info!(
        "{} user {}",
        "Deleted".if_supports_color(Stdout, |t| t.red()),
        username,
    );
    Ok(())
}

pub(crate) fn run_users_role(app: &mut App, username: &str, role: Role) -> Result<(), CliError> {
    app.session.require_admin("change roles")?;
    app.session.ensure_not_self(username, "change the role of")?;

    app.catalog.set_role(username, role)?;
    log::info!("{} is now {}", username, role);
    Ok(())
}

pub(crate) fn run_users_toggle(app: &mut App, username: &str) -> Result<(), CliError> {
    app.session.require_admin("change roles")?;
    app.session.ensure_not_self(username, "change the role of")?;

    let current = app
        .catalog
        .user(username)
        .ok_or_else(|| CatalogError::not_found("User", username))?;
    let role = current.role.toggled();

    app.catalog.set_role(username, role)?;
    log::info!("{} is now {}", username, role);
    Ok(())
}
