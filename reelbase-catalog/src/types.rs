//! Data model types for the TV catalog.
//!
//! Field names on the wire follow the stored JSON layout (`SeasonID`,
//! `Episodetitle`, `PersonDefination`, ...) so existing dumps load unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type SeasonId = i64;
pub type EpisodeNumber = i64;
pub type ActorId = i64;
pub type CrewId = i64;
pub type ScreenTimeId = i64;

// ── Show ────────────────────────────────────────────────────────────────────

/// A TV show, keyed by its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Show {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

// ── Season ──────────────────────────────────────────────────────────────────

/// A season of a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    #[serde(rename = "SeasonID")]
    pub season_id: SeasonId,
    #[serde(rename = "SeasonNumber")]
    pub season_number: i64,
    #[serde(rename = "SeasonDescription", default)]
    pub description: String,
    /// ISO `YYYY-MM-DD`, may be empty.
    #[serde(rename = "DateStarted", default)]
    pub date_started: String,
    #[serde(rename = "DateEnded", default)]
    pub date_ended: String,
    /// References [`Show::title`].
    #[serde(rename = "Title")]
    pub show_title: String,
}

// ── Episode ─────────────────────────────────────────────────────────────────

/// An episode. The episode number is unique across the whole catalog, not per season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(rename = "EpisodeNumber")]
    pub episode_number: EpisodeNumber,
    #[serde(rename = "Episodetitle")]
    pub title: String,
    #[serde(rename = "EpisodeDescription", default)]
    pub description: String,
    #[serde(rename = "Rating", default)]
    pub rating: i64,
    #[serde(rename = "DatePublished", default)]
    pub date_published: String,
    /// References [`Season::season_id`].
    #[serde(rename = "SeasonID")]
    pub season_id: SeasonId,
}

// ── People ──────────────────────────────────────────────────────────────────

/// An actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    #[serde(rename = "ActorID")]
    pub actor_id: ActorId,
    #[serde(rename = "ActorsFirstName")]
    pub first_name: String,
    #[serde(rename = "ActorsLastName")]
    pub last_name: String,
}

impl CastMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A crew member (director, writer, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    #[serde(rename = "CrewID")]
    pub crew_id: CrewId,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "PersonDefination", default)]
    pub role_definition: String,
}

impl CrewMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ── ScreenTime ──────────────────────────────────────────────────────────────

/// A timed appearance within an episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenTime {
    #[serde(rename = "ScreenTimeID")]
    pub screen_time_id: ScreenTimeId,
    #[serde(rename = "StartTime", with = "crate::timestamp::serde_flexible")]
    pub start_time: NaiveDateTime,
    #[serde(rename = "EndTime", with = "crate::timestamp::serde_flexible")]
    pub end_time: NaiveDateTime,
    #[serde(rename = "RoleName", default)]
    pub role_name: String,
    #[serde(rename = "RoleType", default)]
    pub role_type: String,
}

// ── Junction rows ───────────────────────────────────────────────────────────

/// Links an actor to a screentime segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorScreenTime {
    #[serde(rename = "ActorID")]
    pub actor_id: ActorId,
    #[serde(rename = "ScreenTimeID")]
    pub screen_time_id: ScreenTimeId,
}

/// Links a screentime segment to the episode it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeScreenTime {
    #[serde(rename = "EpisodeNumber")]
    pub episode_number: EpisodeNumber,
    #[serde(rename = "ScreenTimeID")]
    pub screen_time_id: ScreenTimeId,
}

/// Links a crew member to an episode they worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrewEpisode {
    #[serde(rename = "CrewID")]
    pub crew_id: CrewId,
    #[serde(rename = "EpisodeNumber")]
    pub episode_number: EpisodeNumber,
}

// ── Users ───────────────────────────────────────────────────────────────────

/// Access level of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    /// The other role; used by the promote/demote toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Admin => Self::User,
            Self::User => Self::Admin,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            other => Err(format!("unknown role '{other}' (expected ADMIN or USER)")),
        }
    }
}

/// A stored account. Never leaves the storage layer; callers see [`PublicUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub role: Role,
}

impl UserRecord {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// The part of an account that is safe to show and to keep in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub username: String,
    #[serde(default)]
    pub role: Role,
}

impl PublicUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// ── Aggregates ──────────────────────────────────────────────────────────────

/// A screentime segment together with the actors linked to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenTimeDetail {
    #[serde(flatten)]
    pub screen_time: ScreenTime,
    pub actors: Vec<CastMember>,
}

/// Denormalized episode view: the episode, its screentimes with actors, and its crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedEpisode {
    #[serde(flatten)]
    pub episode: Episode,
    #[serde(rename = "screenTimes")]
    pub screen_times: Vec<ScreenTimeDetail>,
    pub crew: Vec<CrewMember>,
}

/// Kind of entity a generated description is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Show,
    Episode,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Show => "Show",
            Self::Episode => "Episode",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
