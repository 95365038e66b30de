//! Percentage-of-grid rankings
use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::actor::Actor;

/// One row of the scoreboard
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Standing {
    #[allow(missing_docs)]
    pub name: String,
    /// owned share of the interior, 0 to 100
    pub percentage: f64,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}%", self.name, self.percentage)
    }
}

/// The last computed ranking. It is only refreshed by [Scoreboard::update].
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    size: u16,
    standings: Vec<Standing>,
}

impl Scoreboard {
    /// an empty scoreboard for a grid with the given interior dimension
    pub fn new(size: u16) -> Self {
        Scoreboard {
            size,
            standings: vec![],
        }
    }

    /// recomputes every actor's share from its territory set and re-ranks. `actors`
    /// must be in registration order, which breaks exact ties
    pub fn update<'a>(&mut self, actors: impl IntoIterator<Item = &'a Actor>) {
        let area = self.size as f64 * self.size as f64;
        self.standings = actors
            .into_iter()
            .map(|actor| Standing {
                name: actor.name().to_string(),
                percentage: actor.territory().len() as f64 / area * 100.0,
            })
            .sorted_by(|a, b| {
                b.percentage
                    .partial_cmp(&a.percentage)
                    .unwrap_or(Ordering::Equal)
            })
            .collect();
    }

    /// the ranking from the last update, best first
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    /// leaderboard lines, `"1. name: 12.00%"`
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.standings
            .iter()
            .enumerate()
            .map(|(idx, standing)| format!("{}. {}", idx + 1, standing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn actor_with(name: &str, cells: i32) -> Actor {
        let mut actor = Actor::new(name);
        actor.reset(Position::new(1, 1));
        actor
            .territory
            .extend((1..=cells).map(|x| Position::new(x, 1)));
        actor
    }

    #[test]
    fn test_percentages_and_order() {
        let actors = vec![actor_with("a", 4), actor_with("b", 9), actor_with("c", 1)];
        let mut board = Scoreboard::new(10);
        assert!(board.standings().is_empty());
        board.update(&actors);
        let names = board
            .standings()
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!((board.standings()[0].percentage - 9.0).abs() < 1e-9);
        assert!((board.standings()[2].percentage - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let actors = vec![actor_with("first", 3), actor_with("second", 3)];
        let mut board = Scoreboard::new(5);
        board.update(&actors);
        assert_eq!(board.standings()[0].name, "first");
        assert_eq!(board.standings()[1].name, "second");
    }

    #[test]
    fn test_lines() {
        let actors = vec![actor_with("Player 1", 9)];
        let mut board = Scoreboard::new(10);
        board.update(&actors);
        assert_eq!(
            board.lines().collect::<Vec<_>>(),
            vec!["1. Player 1: 9.00%".to_string()]
        );
    }
}
