//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index for the 2-4 players of a match.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Display names by seat.
const SEAT_NAMES: [&str; 4] = ["One", "Two", "Three", "Four"];

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

    /// The seat after this one, wrapping back to player 0.
    ///
    /// ```
    /// use dominoes::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a match with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match SEAT_NAMES.get(self.index()) {
            Some(name) => write!(f, "Player {}", name),
            None => write!(f, "Player {}", self.0 + 1),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ## Example
///
/// ```
/// use dominoes::core::{PlayerId, PlayerMap};
///
/// let mut pips: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// pips[PlayerId::new(1)] = 12;
/// assert_eq!(pips[PlayerId::new(1)], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a PlayerMap from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
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

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Apply `f` to every entry, keeping seat order.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.data.iter().map(f).collect(),
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::new(0).to_string(), "Player One");
        assert_eq!(PlayerId::new(3).to_string(), "Player Four");
    }

    #[test]
    fn test_next_wraps_round_robin() {
        let order: Vec<_> = std::iter::successors(Some(PlayerId::new(0)), |p| Some(p.next(4)))
            .take(6)
            .map(PlayerId::index)
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_player_map_new_and_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32 * 10);
        assert_eq!(map[PlayerId::new(2)], 20);

        map[PlayerId::new(0)] = 7;
        assert_eq!(map[PlayerId::new(0)], 7);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_iter_and_map() {
        let map = PlayerMap::from_vec(vec![3u32, 1, 2]);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[1], (PlayerId::new(1), &1));

        let doubled = map.map(|v| v * 2);
        assert_eq!(doubled.values().copied().collect::<Vec<_>>(), vec![6, 2, 4]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(2, |p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u32> = PlayerMap::new(0, |_| 0);
    }
}
