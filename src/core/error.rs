//! Engine error type.

use super::player::PlayerId;

/// Errors returned by the scoring engine and session layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WolfError {
    /// A game needs at least one player.
    EmptyRoster,
    /// More players than a `PlayerId` can address.
    TooManyPlayers(usize),
    /// The same name was entered twice.
    DuplicatePlayer(String),
    /// A name that is not on the roster.
    UnknownPlayer(String),
    /// A `PlayerId` outside the roster.
    UnknownPlayerId(PlayerId),
    /// A supplied rotation is not a permutation of the roster.
    InvalidRotation,
    /// Roster size outside the configured bounds.
    PlayerCount { count: usize, min: usize, max: usize },
    /// `record_hole` called with someone other than the current wolf.
    WrongWolf {
        hole: u32,
        expected: PlayerId,
        got: PlayerId,
    },
    /// The current hole already has a result.
    HoleAlreadyRecorded(u32),
    /// A decisive hole must credit at least one player.
    EmptyTeam,
    /// A player listed twice on the credited team.
    DuplicateTeamMember(PlayerId),
    /// The wolf can't pick themselves, or someone off the roster, as partner.
    InvalidPartner(PlayerId),
    /// A win type tag other than `team`, `solo_post` or `solo_pre`.
    UnknownWinType(String),
    /// The session has no game in progress.
    NoActiveGame,
    Io(String),
    Codec(String),
    Config(String),
    /// Snapshot written by an incompatible version.
    SnapshotVersion { found: u32, expected: u32 },
}

impl std::fmt::Display for WolfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRoster => write!(f, "a game needs at least one player"),
            Self::TooManyPlayers(n) => write!(f, "{n} players is more than the engine supports"),
            Self::DuplicatePlayer(name) => write!(f, "player name '{name}' is used twice"),
            Self::UnknownPlayer(name) => write!(f, "no player named '{name}'"),
            Self::UnknownPlayerId(id) => write!(f, "{id} is not in this game"),
            Self::InvalidRotation => write!(f, "rotation must list every player exactly once"),
            Self::PlayerCount { count, min, max } => {
                write!(f, "{count} players given, expected {min} to {max}")
            },
            Self::WrongWolf { hole, expected, got } => {
                write!(f, "hole {hole} belongs to {expected} as wolf, not {got}")
            },
            Self::HoleAlreadyRecorded(hole) => write!(f, "hole {hole} already has a result"),
            Self::EmptyTeam => write!(f, "a decided hole must credit at least one player"),
            Self::DuplicateTeamMember(id) => write!(f, "{id} is listed twice on the team"),
            Self::InvalidPartner(id) => write!(f, "{id} can't partner the wolf"),
            Self::UnknownWinType(tag) => write!(f, "unknown win type '{tag}'"),
            Self::NoActiveGame => write!(f, "no game in progress"),
            Self::Io(m) | Self::Codec(m) | Self::Config(m) => write!(f, "{m}"),
            Self::SnapshotVersion { found, expected } => {
                write!(f, "snapshot version {found} is not supported (expected {expected})")
            },
        }
    }
}

impl std::error::Error for WolfError {}

pub type Result<T> = std::result::Result<T, WolfError>;
