//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use reelbase_catalog::types::{ActorId, CrewId, EntityKind, EpisodeNumber, Role, ScreenTimeId, SeasonId};

#[derive(Parser)]
#[command(name = "reelbase")]
#[command(about = "Manage a catalog of TV shows, seasons, episodes and their people", long_about = None)]
pub(crate) struct Cli {
    /// Database file (overrides REELBASE_DB and settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in
    Login {
        username: String,

        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create a USER account and sign in as it
    Signup {
        username: String,

        /// Password (prompted twice if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Browse and edit shows
    Show {
        #[command(subcommand)]
        action: ShowAction,
    },

    /// Browse and edit seasons
    Season {
        #[command(subcommand)]
        action: SeasonAction,
    },

    /// Browse and edit episodes
    Episode {
        #[command(subcommand)]
        action: EpisodeAction,
    },

    /// Browse and edit the cast
    Cast {
        #[command(subcommand)]
        action: CastAction,
    },

    /// Browse and edit the crew and their episode assignments
    Crew {
        #[command(subcommand)]
        action: CrewAction,
    },

    /// Record or remove actor appearances
    Screentime {
        #[command(subcommand)]
        action: ScreentimeAction,
    },

    /// Import shows, seasons, episodes, cast and crew from a YAML file
    Import {
        /// Seed file to import
        path: PathBuf,
    },

    /// Administer accounts (ADMIN only)
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Show catalog totals, recent shows and top-rated episodes
    Dashboard,

    /// Generate a short description with the configured AI model
    Describe {
        /// Show or episode title
        title: String,

        /// What the title names
        #[arg(long, value_enum, default_value = "show")]
        kind: KindArg,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ShowAction {
    /// List shows
    List {
        /// Only titles containing this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a show
    Add {
        title: String,

        #[arg(long, conflicts_with = "generate")]
        description: Option<String>,

        /// Generate the description with the AI model
        #[arg(long)]
        generate: bool,
    },

    /// Change a show's description
    Update {
        title: String,

        #[arg(long, conflicts_with = "generate")]
        description: Option<String>,

        /// Generate the description with the AI model
        #[arg(long)]
        generate: bool,
    },

    /// Delete a show (must have no seasons)
    Delete { title: String },
}

#[derive(Subcommand)]
pub(crate) enum SeasonAction {
    /// List seasons
    List {
        /// Only seasons of this show
        #[arg(long)]
        show: Option<String>,
    },

    /// Add a season to a show
    Add {
        /// Owning show title
        #[arg(long)]
        show: String,

        /// Season number within the show
        #[arg(long)]
        number: i64,

        /// Season id (next free id if omitted)
        #[arg(long)]
        id: Option<SeasonId>,

        #[arg(long, default_value = "")]
        description: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        started: String,

        /// End date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        ended: String,
    },

    /// Change fields of a season
    Update {
        id: SeasonId,

        #[arg(long)]
        show: Option<String>,

        #[arg(long)]
        number: Option<i64>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        started: Option<String>,

        #[arg(long)]
        ended: Option<String>,
    },

    /// Delete a season (must have no episodes)
    Delete { id: SeasonId },
}

#[derive(Subcommand)]
pub(crate) enum EpisodeAction {
    /// List episodes
    List {
        /// Only episodes of this season id
        #[arg(long)]
        season: Option<SeasonId>,
    },

    /// Add an episode to a season
    Add {
        /// Owning season id
        #[arg(long)]
        season: SeasonId,

        #[arg(long)]
        title: String,

        /// Episode number (next free number if omitted)
        #[arg(long)]
        number: Option<EpisodeNumber>,

        #[arg(long, conflicts_with = "generate")]
        description: Option<String>,

        /// Generate the description with the AI model
        #[arg(long)]
        generate: bool,

        /// Rating from 1 to 10
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i64).range(1..=10))]
        rating: i64,

        /// Publication date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        published: String,
    },

    /// Change fields of an episode
    Update {
        number: EpisodeNumber,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=10))]
        rating: Option<i64>,

        #[arg(long)]
        published: Option<String>,

        /// Move to another season
        #[arg(long)]
        season: Option<SeasonId>,
    },

    /// Delete an episode (must have no screentime or crew)
    Delete { number: EpisodeNumber },

    /// Show an episode with its screentimes, actors and crew
    Detail {
        number: EpisodeNumber,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum CastAction {
    /// List actors
    List,

    /// Add an actor
    Add {
        first_name: String,
        last_name: String,

        /// Actor id (next free id if omitted)
        #[arg(long)]
        id: Option<ActorId>,
    },

    /// Rename an actor
    Update {
        id: ActorId,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,
    },

    /// Delete an actor (must have no screentime)
    Delete { id: ActorId },
}

#[derive(Subcommand)]
pub(crate) enum CrewAction {
    /// List crew members
    List,

    /// Add a crew member
    Add {
        first_name: String,
        last_name: String,

        /// Role, e.g. Director or Writer
        #[arg(long, default_value = "")]
        role: String,

        /// Crew id (next free id if omitted)
        #[arg(long)]
        id: Option<CrewId>,
    },

    /// Change fields of a crew member
    Update {
        id: CrewId,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        role: Option<String>,
    },

    /// Delete a crew member (must have no assignments)
    Delete { id: CrewId },

    /// Assign a crew member to an episode
    Assign { id: CrewId, episode: EpisodeNumber },

    /// Remove a crew member from an episode
    Unassign { id: CrewId, episode: EpisodeNumber },
}

#[derive(Subcommand)]
pub(crate) enum ScreentimeAction {
    /// Record an appearance in an episode
    Add {
        #[arg(long)]
        episode: EpisodeNumber,

        /// Start time, e.g. 2023-01-01T10:00
        #[arg(long)]
        start: String,

        /// End time, after the start
        #[arg(long)]
        end: String,

        #[arg(long, default_value = "")]
        role_name: String,

        #[arg(long, default_value = "")]
        role_type: String,

        /// Actor ids appearing (e.g., 1,2)
        #[arg(long, value_delimiter = ',')]
        actors: Vec<ActorId>,

        /// Screentime id (next free id if omitted)
        #[arg(long)]
        id: Option<ScreenTimeId>,
    },

    /// Delete a screentime and its links
    Delete { id: ScreenTimeId },
}

#[derive(Subcommand)]
pub(crate) enum UsersAction {
    /// List accounts
    List,

    /// Delete an account
    Delete { username: String },

    /// Set an account's role
    Role { username: String, role: Role },

    /// Flip an account between ADMIN and USER
    Toggle { username: String },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and their sources
    Show,

    /// Print the settings file path
    Path,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum KindArg {
    Show,
    Episode,
}

impl From<KindArg> for EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Show => EntityKind::Show,
            KindArg::Episode => EntityKind::Episode,
        }
    }
}
