use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{App, truncate_str};

pub(crate) fn run_dashboard(app: &App) -> Result<(), CliError> {
    let user = app.session.require_user()?;
    let dash = app.catalog.dashboard();

    log::info!(
        "{}",
        format!("Welcome back, {}", user.username).if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    log::info!("  Shows:     {:>6}", dash.shows);
    log::info!("  Episodes:  {:>6}", dash.episodes);
    log::info!("  Cast:      {:>6}", dash.cast);
    log::info!("  Crew:      {:>6}", dash.crew);

    crate::log_blank();
    log::info!("{}", "Recently added shows".if_supports_color(Stdout, |t| t.bold()));
    if dash.recent_shows.is_empty() {
        log::info!("  {}", "none".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for show in &dash.recent_shows {
        log::info!("  {}", truncate_str(&show.title, 60));
    }

    crate::log_blank();
    log::info!("{}", "Top rated episodes".if_supports_color(Stdout, |t| t.bold()));
    if dash.top_episodes.is_empty() {
        log::info!("  {}", "none".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for episode in &dash.top_episodes {
        log::info!(
            "  {:>5}/10  {}",
            episode.rating,
            truncate_str(&episode.title, 50),
        );
    }
    Ok(())
}
