use serde::{Deserialize, Serialize};

use crate::evaluate::{MatchReport, evaluate};
use crate::meta::MatchMeta;
use crate::player::MatchSides;
use crate::score::{Score, Scorecard};

/// Errors loading a match fixture.
#[derive(Debug)]
pub enum FixtureError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read fixture: {e}"),
            Self::Parse(e) => write!(f, "invalid fixture: {e}"),
        }
    }
}

impl std::error::Error for FixtureError {}

/// Per-player score rows for both sides, as they are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cards {
    pub a: Vec<Vec<Score>>,
    pub b: Vec<Vec<Score>>,
}

/// One match: configuration, players, and the scores entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub id: String,
    pub meta: MatchMeta,
    pub sides: MatchSides,
    pub cards: Cards,
}

impl Fixture {
    pub fn from_toml_str(content: &str) -> Result<Self, FixtureError> {
        toml::from_str(content).map_err(|e| FixtureError::Parse(e.to_string()))
    }

    pub fn load(path: &std::path::Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FixtureError::Io(format!("{}: {e}", path.display())))?;
        let fixture = Self::from_toml_str(&content)?;
        tracing::info!(
            id = %fixture.id,
            format = %fixture.meta.format,
            path = %path.display(),
            "Loaded match fixture"
        );
        Ok(fixture)
    }

    /// The entered scores, sized to the match length.
    pub fn scorecard(&self) -> Scorecard {
        Scorecard::from_cards(&self.cards.a, &self.cards.b, self.meta.total_holes())
    }

    pub fn evaluate(&self) -> MatchReport {
        evaluate(&self.meta, &self.sides, &self.scorecard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::MatchFormat;
    use crate::player::{Side, UNNAMED_PLAYER};
    use crate::score::CellRef;

    const SINGLES: &str = r#"
id = "men-g1"

[meta]
format = "singles"
holes = 18
si_set = "men"
handicap_mode = "nett"

[[sides.a.players]]
name = "Alan"
handicap = 10

[[sides.b.players]]
name = "Brian"
handicap = 4

[cards]
a = [[4, 5, 4, "", 5]]
b = [[4, 4, 4, 3, 4]]
"#;

    #[test]
    fn parse_singles_fixture() {
        let fixture = Fixture::from_toml_str(SINGLES).unwrap();
        assert_eq!(fixture.id, "men-g1");
        assert_eq!(fixture.meta.format, MatchFormat::Singles);
        assert_eq!(fixture.sides.a.players[0].name, "Alan");
        assert_eq!(fixture.sides.b.handicap(0), 4);

        let card = fixture.scorecard();
        assert_eq!(card.len(), 18);
        assert_eq!(card.get(CellRef::new(3, Side::A, 0)), Score::Absent);
        assert_eq!(card.get(CellRef::new(4, Side::A, 0)), Score::Strokes(5));
    }

    #[test]
    fn evaluate_singles_fixture() {
        let report = Fixture::from_toml_str(SINGLES).unwrap().evaluate();
        // Hole 2 (SI 5) halved with A's stroke, hole 4 not entered for A.
        assert_eq!(report.state.through, 3);
        assert_eq!(report.label, "AS");
    }

    #[test]
    fn missing_sections_default() {
        let fixture = Fixture::from_toml_str("id = \"empty\"").unwrap();
        assert_eq!(fixture.meta, MatchMeta::default());
        assert!(fixture.sides.a.players.is_empty());
        let report = fixture.evaluate();
        assert_eq!(report.label, "AS");
        assert_eq!(report.state.through, 0);
    }

    #[test]
    fn missing_player_fields_default() {
        let fixture = Fixture::from_toml_str(
            r#"
[[sides.a.players]]
handicap = 7

[[sides.b.players]]
name = "Bo"
"#,
        )
        .unwrap();
        assert_eq!(fixture.sides.a.players[0].name, UNNAMED_PLAYER);
        assert_eq!(fixture.sides.b.handicap(0), 0);
    }

    #[test]
    fn bad_toml_is_an_error() {
        let err = Fixture::from_toml_str("meta = [").unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
        assert!(err.to_string().starts_with("invalid fixture"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Fixture::load(std::path::Path::new("/nonexistent/match.toml")).unwrap_err();
        assert!(matches!(err, FixtureError::Io(_)));
    }

    #[test]
    fn extreme_handicap_evaluates() {
        let fixture = Fixture::from_toml_str(
            "[[sides.a.players]]\nhandicap = 2147483647\n[[sides.b.players]]\nhandicap = -5\n",
        )
        .unwrap();
        let report = fixture.evaluate();
        assert_eq!(report.allowance.allowance_for(Side::A, 0), i32::MAX);
        assert_eq!(report.label, "AS");
    }

    #[test]
    fn non_numeric_score_cells_load_as_absent() {
        let fixture = Fixture::from_toml_str(
            r#"
[cards]
a = [[4, true, { strokes = 5 }]]
b = [[4, 4, 4]]
"#,
        )
        .unwrap();
        let card = fixture.scorecard();
        assert_eq!(card.get(CellRef::new(0, Side::A, 0)), Score::Strokes(4));
        assert_eq!(card.get(CellRef::new(1, Side::A, 0)), Score::Absent);
        assert_eq!(card.get(CellRef::new(2, Side::A, 0)), Score::Absent);
        assert_eq!(fixture.evaluate().state.through, 1);
    }

    #[test]
    fn unsupported_match_length_plays_eighteen() {
        for holes in ["300", "-1"] {
            let fixture = Fixture::from_toml_str(&format!("[meta]\nholes = {holes}\n")).unwrap();
            assert_eq!(fixture.scorecard().len(), 18);
            assert_eq!(fixture.evaluate().state.total, 18);
        }
    }
}
