//! Player identification, per-player storage and the game roster.
//!
//! ## PlayerId
//!
//! Index of a player in the roster, in the order names were entered.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access by `PlayerId`.
//!
//! ## Roster
//!
//! The ordered list of unique player names for one game.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{Result, WolfError};

/// Largest roster a `PlayerId` can address.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Player identifier: 0-based index into the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use wolf_golf::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use wolf_golf::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<i64> = PlayerMap::with_default(3);
/// points[PlayerId::new(1)] += 2;
/// assert_eq!(points[PlayerId::new(1)], 2);
/// assert_eq!(points[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Ordered, duplicate-free list of player names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Build a roster from names in entry order.
    ///
    /// Fails on an empty list, a repeated name, or more than 255 names.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if out.contains(&name) {
                return Err(WolfError::DuplicatePlayer(name));
            }
            out.push(name);
        }

        if out.is_empty() {
            return Err(WolfError::EmptyRoster);
        }
        if out.len() > MAX_PLAYERS {
            return Err(WolfError::TooManyPlayers(out.len()));
        }

        Ok(Self { names: out })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed roster; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up a player by name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<PlayerId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| PlayerId(i as u8))
    }

    /// Name of a player, or `None` if the ID is outside the roster.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> Option<&str> {
        self.names.get(player.index()).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.names.len()
    }

    /// Iterate over all player IDs.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.names.len())
    }

    /// Iterate over (PlayerId, name) pairs in entry order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (PlayerId(i as u8), n.as_str()))
    }

    /// Resolve a list of names to IDs, failing on the first unknown name.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<PlayerId>> {
        names
            .iter()
            .map(|n| {
                let n = n.as_ref();
                self.id_of(n)
                    .ok_or_else(|| WolfError::UnknownPlayer(n.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_map_scores() {
        let mut map: PlayerMap<i64> = PlayerMap::with_default(4);

        map[PlayerId::new(0)] += 3;
        map[PlayerId::new(3)] += 1;

        let pairs: Vec<_> = map.iter().map(|(p, v)| (p.index(), *v)).collect();
        assert_eq!(pairs, vec![(0, 3), (1, 0), (2, 0), (3, 1)]);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i64> = PlayerMap::with_default(0);
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::new(["Ann", "Bob", "Cat"]).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.id_of("Bob"), Some(PlayerId(1)));
        assert_eq!(roster.id_of("Dan"), None);
        assert_eq!(roster.name(PlayerId(2)), Some("Cat"));
        assert_eq!(roster.name(PlayerId(3)), None);
        assert!(roster.contains(PlayerId(0)));
        assert!(!roster.contains(PlayerId(3)));
    }

    #[test]
    fn test_roster_rejects_duplicates() {
        let err = Roster::new(["Ann", "Bob", "Ann"]).unwrap_err();
        assert_eq!(err, WolfError::DuplicatePlayer("Ann".to_string()));
    }

    #[test]
    fn test_roster_rejects_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(Roster::new(empty).unwrap_err(), WolfError::EmptyRoster);
    }

    #[test]
    fn test_roster_resolve() {
        let roster = Roster::new(["Ann", "Bob", "Cat"]).unwrap();

        assert_eq!(
            roster.resolve(&["Cat", "Ann"]).unwrap(),
            vec![PlayerId(2), PlayerId(0)]
        );
        assert_eq!(
            roster.resolve(&["Cat", "Zed"]).unwrap_err(),
            WolfError::UnknownPlayer("Zed".to_string())
        );
    }

    #[test]
    fn test_roster_serialization() {
        let roster = Roster::new(["Ann", "Bob"]).unwrap();
        let json = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, back);
    }
}
