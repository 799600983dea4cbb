use serde::{Deserialize, Serialize};

/// Placeholder used when a player's name is missing from the fixture.
pub const UNNAMED_PLAYER: &str = "Player";

/// One of the two competing parties in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            other => Err(format!("unknown side: {other}")),
        }
    }
}

/// A player and their course handicap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub name: String,
    /// Course handicap. Plus handicaps are negative.
    pub handicap: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: UNNAMED_PLAYER.to_string(),
            handicap: 0,
        }
    }
}

impl Player {
    pub fn new(name: impl Into<String>, handicap: i32) -> Self {
        Self {
            name: name.into(),
            handicap,
        }
    }
}

/// The players making up one side. Singles sides hold one player; fourball
/// and foursomes sides hold two.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSide {
    /// Club or team the side plays for, used to combine results across matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub players: Vec<Player>,
}

impl MatchSide {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            team: None,
            players,
        }
    }

    pub fn single(player: Player) -> Self {
        Self::new(vec![player])
    }

    pub fn pair(first: Player, second: Player) -> Self {
        Self::new(vec![first, second])
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Team name, or the side letter when the fixture doesn't give one.
    pub fn team_name(&self, side: Side) -> String {
        match &self.team {
            Some(team) if !team.trim().is_empty() => team.trim().to_string(),
            _ => side.to_string(),
        }
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Handicap of the player in `index`, or 0 if that slot is empty.
    pub fn handicap(&self, index: usize) -> i32 {
        self.players.get(index).map_or(0, |p| p.handicap)
    }

    pub fn display_name(&self) -> String {
        if self.players.is_empty() {
            return UNNAMED_PLAYER.to_string();
        }
        self.players
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

/// Both sides of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSides {
    pub a: MatchSide,
    pub b: MatchSide,
}

impl MatchSides {
    pub fn new(a: MatchSide, b: MatchSide) -> Self {
        Self { a, b }
    }

    pub fn side(&self, side: Side) -> &MatchSide {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
    }

    #[test]
    fn missing_player_has_zero_handicap() {
        let side = MatchSide::single(Player::new("Ann", 12));
        assert_eq!(side.handicap(0), 12);
        assert_eq!(side.handicap(1), 0);
    }

    #[test]
    fn display_name_joins_pair() {
        let side = MatchSide::pair(Player::new("Ann", 12), Player::new("Bea", 20));
        assert_eq!(side.display_name(), "Ann & Bea");
        assert_eq!(MatchSide::default().display_name(), UNNAMED_PLAYER);
    }

    #[test]
    fn player_fields_default_when_missing() {
        let player: Player = toml::from_str("").unwrap();
        assert_eq!(player.name, UNNAMED_PLAYER);
        assert_eq!(player.handicap, 0);

        let player: Player = toml::from_str("name = \"Cal\"").unwrap();
        assert_eq!(player, Player::new("Cal", 0));
    }

    #[test]
    fn team_name_falls_back_to_side() {
        let side = MatchSide::single(Player::new("Ann", 12));
        assert_eq!(side.team_name(Side::B), "B");
        assert_eq!(side.clone().with_team(" Wheatley ").team_name(Side::B), "Wheatley");
        assert_eq!(side.with_team("").team_name(Side::A), "A");

        let parsed: MatchSide = toml::from_str("team = \"Doncaster\"").unwrap();
        assert_eq!(parsed.team.as_deref(), Some("Doncaster"));
        assert!(parsed.players.is_empty());
    }

    #[test]
    fn side_parses_either_case() {
        assert_eq!("a".parse::<Side>(), Ok(Side::A));
        assert_eq!("B".parse::<Side>(), Ok(Side::B));
        assert!("C".parse::<Side>().is_err());
    }
}
