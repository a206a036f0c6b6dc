//! Actor and player identification, and per-actor data storage.
//!
//! ## Actor
//!
//! One of the two competing principals, red or blue.
//!
//! ## Player
//!
//! Anyone who may submit a move: an actor, or the mediator acting on the
//! current actor's behalf after a delegation.
//!
//! ## ActorMap
//!
//! Per-actor data with one field per actor, indexable by `Actor`.
//! Serializes as `{"red": .., "blue": ..}`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing principals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Red,
    Blue,
}

impl Actor {
    /// Both actors, red first.
    pub const ALL: [Actor; 2] = [Actor::Red, Actor::Blue];

    /// The opposing actor.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Actor::Red => Actor::Blue,
            Actor::Blue => Actor::Red,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Red => write!(f, "red"),
            Actor::Blue => write!(f, "blue"),
        }
    }
}

/// An identity that may submit a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Blue,
    Mediator,
}

impl Player {
    /// The actor this player is, or `None` for the mediator.
    #[must_use]
    pub const fn actor(self) -> Option<Actor> {
        match self {
            Player::Red => Some(Actor::Red),
            Player::Blue => Some(Actor::Blue),
            Player::Mediator => None,
        }
    }
}

impl From<Actor> for Player {
    fn from(actor: Actor) -> Self {
        match actor {
            Actor::Red => Player::Red,
            Actor::Blue => Player::Blue,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "red"),
            Player::Blue => write!(f, "blue"),
            Player::Mediator => write!(f, "mediator"),
        }
    }
}

/// Per-actor data storage.
///
/// ## Example
///
/// ```
/// use hexclaim::core::{Actor, ActorMap};
///
/// let mut resources = ActorMap::with_value(20u32);
/// resources[Actor::Red] -= 1;
///
/// assert_eq!(resources[Actor::Red], 19);
/// assert_eq!(resources[Actor::Blue], 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorMap<T> {
    pub red: T,
    pub blue: T,
}

impl<T> ActorMap<T> {
    /// Create from explicit per-actor values.
    pub const fn new(red: T, blue: T) -> Self {
        Self { red, blue }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Actor) -> T) -> Self {
        Self {
            red: factory(Actor::Red),
            blue: factory(Actor::Blue),
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            red: value.clone(),
            blue: value,
        }
    }

    /// Get a reference to an actor's data.
    #[must_use]
    pub fn get(&self, actor: Actor) -> &T {
        match actor {
            Actor::Red => &self.red,
            Actor::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to an actor's data.
    pub fn get_mut(&mut self, actor: Actor) -> &mut T {
        match actor {
            Actor::Red => &mut self.red,
            Actor::Blue => &mut self.blue,
        }
    }

    /// Iterate over (Actor, &T) pairs, red first.
    pub fn iter(&self) -> impl Iterator<Item = (Actor, &T)> {
        [(Actor::Red, &self.red), (Actor::Blue, &self.blue)].into_iter()
    }

    /// Apply `f` to each entry.
    pub fn map<U>(self, mut f: impl FnMut(Actor, T) -> U) -> ActorMap<U> {
        ActorMap {
            red: f(Actor::Red, self.red),
            blue: f(Actor::Blue, self.blue),
        }
    }
}

impl<T> Index<Actor> for ActorMap<T> {
    type Output = T;

    fn index(&self, actor: Actor) -> &Self::Output {
        self.get(actor)
    }
}

impl<T> IndexMut<Actor> for ActorMap<T> {
    fn index_mut(&mut self, actor: Actor) -> &mut Self::Output {
        self.get_mut(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_actor() {
        assert_eq!(Actor::Red.other(), Actor::Blue);
        assert_eq!(Actor::Blue.other(), Actor::Red);
        assert_eq!(Actor::Red.other().other(), Actor::Red);
    }

    #[test]
    fn test_player_actor() {
        assert_eq!(Player::Red.actor(), Some(Actor::Red));
        assert_eq!(Player::Blue.actor(), Some(Actor::Blue));
        assert_eq!(Player::Mediator.actor(), None);
        assert_eq!(Player::from(Actor::Blue), Player::Blue);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Actor::Red), "red");
        assert_eq!(format!("{}", Player::Mediator), "mediator");
    }

    #[test]
    fn test_actor_map_index() {
        let mut map = ActorMap::new(1, 2);
        assert_eq!(map[Actor::Red], 1);
        assert_eq!(map[Actor::Blue], 2);

        map[Actor::Blue] = 7;
        assert_eq!(map.blue, 7);
    }

    #[test]
    fn test_actor_map_from_fn_and_map() {
        let map = ActorMap::from_fn(|a| if a == Actor::Red { 10 } else { 20 });
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled, ActorMap::new(20, 40));
    }

    #[test]
    fn test_actor_map_iter() {
        let map = ActorMap::new("r", "b");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Actor::Red, &"r"), (Actor::Blue, &"b")]);
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_string(&ActorMap::new(3, 4)).unwrap();
        assert_eq!(json, r#"{"red":3,"blue":4}"#);

        let player: Player = serde_json::from_str(r#""mediator""#).unwrap();
        assert_eq!(player, Player::Mediator);
        assert_eq!(serde_json::to_string(&Actor::Blue).unwrap(), r#""blue""#);
    }
}
