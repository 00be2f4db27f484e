//! reelbase CLI
//!
//! Command-line interface for a TV catalog: shows, seasons, episodes, cast,
//! crew and screentime, with accounts and role-gated editing.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{
    CastAction, Cli, Commands, ConfigAction, CrewAction, EpisodeAction, ScreentimeAction,
    SeasonAction, ShowAction, UsersAction,
};
use commands::App;
pub(crate) use error::CliError;

/// Crates whose log output is shown at the selected level.
const LOG_TARGETS: [&str; 4] = ["reelbase", "reelbase_catalog", "reelbase_db", "reelbase_describe"];

/// Print an empty line through the logger so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Warn)
        .target(env_logger::Target::Stdout);
    for target in LOG_TARGETS {
        builder.filter_module(target, level);
    }

    if !verbose {
        builder.format(|buf, record| match record.level() {
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        });
    } else {
        builder.format_timestamp_millis();
    }

    builder.parse_default_env().init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Configuration commands work without opening the database.
    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => commands::config::run_config_show(cli.db.clone()),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        };
    }

    let (db_path, _) = settings::resolve_db_path(cli.db);
    let mut app = App::open(db_path)?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::session::run_login(&mut app, &username, password)
        }
        Commands::Signup { username, password } => {
            commands::session::run_signup(&mut app, &username, password)
        }
        Commands::Logout => commands::session::run_logout(&mut app),
        Commands::Whoami => commands::session::run_whoami(&app),

        Commands::Show { action } => match action {
            ShowAction::List { search } => commands::shows::run_show_list(&app, search.as_deref()),
            ShowAction::Add {
                title,
                description,
                generate,
            } => commands::shows::run_show_add(&mut app, title, description, generate),
            ShowAction::Update {
                title,
                description,
                generate,
            } => commands::shows::run_show_update(&mut app, title, description, generate),
            ShowAction::Delete { title } => commands::shows::run_show_delete(&mut app, &title),
        },

        Commands::Season { action } => match action {
            SeasonAction::List { show } => {
                commands::seasons::run_season_list(&app, show.as_deref())
            }
            SeasonAction::Add {
                show,
                number,
                id,
                description,
                started,
                ended,
            } => commands::seasons::run_season_add(
                &mut app,
                commands::seasons::NewSeason {
                    show,
                    number,
                    id,
                    description,
                    started,
                    ended,
                },
            ),
            SeasonAction::Update {
                id,
                show,
                number,
                description,
                started,
                ended,
            } => commands::seasons::run_season_update(
                &mut app,
                id,
                commands::seasons::SeasonChanges {
                    show,
                    number,
                    description,
                    started,
                    ended,
                },
            ),
            SeasonAction::Delete { id } => commands::seasons::run_season_delete(&mut app, id),
        },

        Commands::Episode { action } => match action {
            EpisodeAction::List { season } => commands::episodes::run_episode_list(&app, season),
            EpisodeAction::Add {
                season,
                title,
                number,
                description,
                generate,
                rating,
                published,
            } => commands::episodes::run_episode_add(
                &mut app,
                commands::episodes::NewEpisode {
                    season,
                    title,
                    number,
                    description,
                    generate,
                    rating,
                    published,
                },
            ),
            EpisodeAction::Update {
                number,
                title,
                description,
                rating,
                published,
                season,
            } => commands::episodes::run_episode_update(
                &mut app,
                number,
                commands::episodes::EpisodeChanges {
                    title,
                    description,
                    rating,
                    published,
                    season,
                },
            ),
            EpisodeAction::Delete { number } => {
                commands::episodes::run_episode_delete(&mut app, number)
            }
            EpisodeAction::Detail { number, json } => {
                commands::episodes::run_episode_detail(&app, number, json)
            }
        },

        Commands::Cast { action } => match action {
            CastAction::List => commands::people::run_cast_list(&app),
            CastAction::Add {
                first_name,
                last_name,
                id,
            } => commands::people::run_cast_add(&mut app, first_name, last_name, id),
            CastAction::Update {
                id,
                first_name,
                last_name,
            } => commands::people::run_cast_update(&mut app, id, first_name, last_name),
            CastAction::Delete { id } => commands::people::run_cast_delete(&mut app, id),
        },

        Commands::Crew { action } => match action {
            CrewAction::List => commands::people::run_crew_list(&app),
            CrewAction::Add {
                first_name,
                last_name,
                role,
                id,
            } => commands::people::run_crew_add(&mut app, first_name, last_name, role, id),
            CrewAction::Update {
                id,
                first_name,
                last_name,
                role,
            } => commands::people::run_crew_update(&mut app, id, first_name, last_name, role),
            CrewAction::Delete { id } => commands::people::run_crew_delete(&mut app, id),
            CrewAction::Assign { id, episode } => {
                commands::people::run_crew_assign(&mut app, id, episode)
            }
            CrewAction::Unassign { id, episode } => {
                commands::people::run_crew_unassign(&mut app, id, episode)
            }
        },

        Commands::Screentime { action } => match action {
            ScreentimeAction::Add {
                episode,
                start,
                end,
                role_name,
                role_type,
                actors,
                id,
            } => commands::screentime::run_screentime_add(
                &mut app,
                commands::screentime::NewScreenTime {
                    episode,
                    start,
                    end,
                    role_name,
                    role_type,
                    actors,
                    id,
                },
            ),
            ScreentimeAction::Delete { id } => {
                commands::screentime::run_screentime_delete(&mut app, id)
            }
        },

        Commands::Import { path } => commands::import::run_import(&mut app, &path),

        Commands::Users { action } => match action {
            UsersAction::List => commands::users::run_users_list(&app),
            UsersAction::Delete { username } => {
                commands::users::run_users_delete(&mut app, &username)
            }
            UsersAction::Role { username, role } => {
                commands::users::run_users_role(&mut app, &username, role)
            }
            UsersAction::Toggle { username } => {
                commands::users::run_users_toggle(&mut app, &username)
            }
        },

        Commands::Dashboard => commands::dashboard::run_dashboard(&app),

        Commands::Describe { title, kind } => {
            app.session.require_user()?;
            let text = commands::describe::generate_description(&title, kind.into())?;
            log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
            log::info!("  {}", text);
            Ok(())
        }

        Commands::Config { .. } => Ok(()),
    }
}
