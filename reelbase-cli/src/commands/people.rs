//! Cast and crew commands.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelbase_catalog::types::{ActorId, CastMember, CrewId, CrewMember, EpisodeNumber};
use reelbase_db::CatalogError;

use crate::CliError;

use super::{App, or_dash};

// ── Cast ────────────────────────────────────────────────────────────────────

pub(crate) fn run_cast_list(app: &App) -> Result<(), CliError> {
    app.session.require_user()?;

    let cast = app.catalog.cast();
    if cast.is_empty() {
        log::info!("No cast members.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!("{:>4}  {}", "ID", "Name").if_supports_color(Stdout, |t| t.bold()),
    );
    for actor in cast {
        log::info!("{:>4}  {}", actor.actor_id, actor.full_name());
    }
    Ok(())
}

pub(crate) fn run_cast_add(
    app: &mut App,
    first_name: String,
    last_name: String,
    id: Option<ActorId>,
) -> Result<(), CliError> {
    app.session.require_admin("add cast members")?;

    let actor = CastMember {
        actor_id: id.unwrap_or_else(|| app.catalog.next_actor_id()),
        first_name,
        last_name,
    };
    let (id, name) = (actor.actor_id, actor.full_name());

    app.catalog.add_cast(actor)?;
    log::info!(
        "{} {} (id {})",
        "Added".if_supports_color(Stdout, |t| t.green()),
        name,
        id,
    );
    Ok(())
}

pub(crate) fn run_cast_update(
    app: &mut App,
    id: ActorId,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<(), CliError> {
    app.session.require_admin("edit cast members")?;
    if first_name.is_none() && last_name.is_none() {
        return Err(CliError::input("nothing to change"));
    }

    let mut actor = app
        .catalog
        .actor(id)
        .cloned()
        .ok_or_else(|| CatalogError::not_found("Actor", id))?;
    if let Some(first) = first_name {
        actor.first_name = first;
    }
    if let Some(last) = last_name {
        actor.last_name = last;
    }

    app.catalog.update_cast(actor)?;
    log::info!("Updated actor {}", id);
    Ok(())
}

pub(crate) fn run_cast_delete(app: &mut App, id: ActorId) -> Result<(), CliError> {
    app.session.require_admin("delete cast members")?;
    app.catalog.delete_cast(id)?;
    log::info!(
        "{} actor {}",
        "Deleted".if_supports_color(Stdout, |t| t.red()),
        id,
    );
    Ok(())
}

// ── Crew ────────────────────────────────────────────────────────────────────

pub(crate) fn run_crew_list(app: &App) -> Result<(), CliError> {
    app.session.require_user()?;

    let crew = app.catalog.crew();
    if crew.is_empty() {
        log::info!("No crew members.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!("{:>4}  {:<28} {}", "ID", "Name", "Role").if_supports_color(Stdout, |t| t.bold()),
    );
    for member in crew {
        log::info!(
            "{:>4}  {:<28} {}",
            member.crew_id,
            member.full_name(),
            or_dash(&member.role_definition),
        );
    }
    Ok(())
}

pub(crate) fn run_crew_add(
    app: &mut App,
    first_name: String,
    last_name: String,
    role: String,
    id: Option<CrewId>,
) -> Result<(), CliError> {
    app.session.require_admin("add crew members")?;

    let member = CrewMember {
        crew_id: id.unwrap_or_else(|| app.catalog.next_crew_id()),
        first_name,
        last_name,
        role_definition: role,
    };
    let (id, name) = (member.crew_id, member.full_name());

    app.catalog.add_crew(member)?;
    log::info!(
        "{} {} (id {})",
        "Added".if_supports_color(Stdout, |t| t.green()),
        name,
        id,
    );
    Ok(())
}

pub(crate) fn run_crew_update(
    app: &mut App,
    id: CrewId,
    first_name: Option<String>,
    last_name: Option<String>,
    role: Option<String>,
) -> Result<(), CliError> {
    app.session.require_admin("edit crew members")?;
    if first_name.is_none() && last_name.is_none() && role.is_none() {
        return Err(CliError::input("nothing to change"));
    }

    let mut member = app
        .catalog
        .crew_member(id)
        .cloned()
        .ok_or_else(|| CatalogError::not_found("Crew member", id))?;
    if let Some(first) = first_name {
        member.first_name = first;
    }
    if let Some(last) = last_name {
        member.last_name = last;
    }
    if let Some(role) = role {
        member.role_definition = role;
    }

    app.catalog.update_crew(member)?;
    log::info!("Updated crew member {}", id);
    Ok(())
}

pub(crate) fn run_crew_delete(app: &mut App, id: CrewId) -> Result<(), CliError> {
    app.session.require_admin("delete crew members")?;
    app.catalog.delete_crew(id)?;
    log::info!(
        "{} crew member {}",
        "Deleted".if_supports_color(Stdout, |t| t.red()),
        id,
    );
    Ok(())
}

pub(crate) fn run_crew_assign(
    app: &mut App,
    id: CrewId,
    episode: EpisodeNumber,
) -> Result<(), CliError> {
    app.session.require_admin("assign crew")?;
    app.catalog.assign_crew(id, episode)?;
    log::info!("Assigned crew member {} to episode {}", id, episode);
    Ok(())
}

pub(crate) fn run_crew_unassign(
    app: &mut App,
    id: CrewId,
    episode: EpisodeNumber,
) -> Result<(), CliError> {
    app.session.require_admin("unassign crew")?;
    app.catalog.unassign_crew(id, episode)?;
    log::info!("Removed crew member {} from episode {}", id, episode);
    Ok(())
}
