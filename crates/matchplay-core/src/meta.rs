use serde::{Deserialize, Serialize};

use crate::course::{HOLES_PER_ROUND, TeeSet};

/// Match-play format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchFormat {
    #[default]
    Singles,
    /// Better ball: each player plays their own ball, the side's best net counts.
    Fourball,
    /// Alternate shot: the pair shares one ball and one card.
    Foursomes,
}

impl std::fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Singles => write!(f, "singles"),
            Self::Fourball => write!(f, "fourball"),
            Self::Foursomes => write!(f, "foursomes"),
        }
    }
}

/// Whether a singles match is played off handicap. Ignored by the pairs formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandicapMode {
    Gross,
    #[default]
    Nett,
}

/// Static configuration of a match, entered by the organisers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchMeta {
    pub format: MatchFormat,
    /// 18 or 36. Any other integer is treated as 18.
    pub holes: i64,
    pub si_set: TeeSet,
    pub handicap_mode: HandicapMode,
}

impl Default for MatchMeta {
    fn default() -> Self {
        Self {
            format: MatchFormat::default(),
            holes: HOLES_PER_ROUND as i64,
            si_set: TeeSet::default(),
            handicap_mode: HandicapMode::default(),
        }
    }
}

impl MatchMeta {
    pub fn new(format: MatchFormat, holes: u32, si_set: TeeSet) -> Self {
        Self {
            format,
            holes: i64::from(holes),
            si_set,
            handicap_mode: HandicapMode::default(),
        }
    }

    /// Length of the match in holes, normalised to 18 or 36.
    pub fn total_holes(&self) -> usize {
        match self.holes {
            18 => 18,
            36 => 36,
            other => {
                tracing::warn!(holes = other, "Unsupported match length, playing 18 holes");
                HOLES_PER_ROUND
            },
        }
    }

    /// Number of individual score cards per side.
    pub fn players_per_card(&self) -> usize {
        match self.format {
            MatchFormat::Fourball => 2,
            MatchFormat::Singles | MatchFormat::Foursomes => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_eighteen_hole_nett_singles() {
        let meta = MatchMeta::default();
        assert_eq!(meta.format, MatchFormat::Singles);
        assert_eq!(meta.total_holes(), 18);
        assert_eq!(meta.si_set, TeeSet::Men);
        assert_eq!(meta.handicap_mode, HandicapMode::Nett);
    }

    #[test]
    fn odd_lengths_normalise_to_eighteen() {
        let meta = MatchMeta::new(MatchFormat::Singles, 9, TeeSet::Men);
        assert_eq!(meta.total_holes(), 18);
        let meta = MatchMeta::new(MatchFormat::Singles, 36, TeeSet::Men);
        assert_eq!(meta.total_holes(), 36);
    }

    #[test]
    fn cards_per_side() {
        assert_eq!(
            MatchMeta::new(MatchFormat::Fourball, 18, TeeSet::Men).players_per_card(),
            2
        );
        assert_eq!(
            MatchMeta::new(MatchFormat::Foursomes, 18, TeeSet::Men).players_per_card(),
            1
        );
    }

    #[test]
    fn parse_meta_toml() {
        let meta: MatchMeta = toml::from_str(
            r#"
format = "fourball"
holes = 36
si_set = "ladies"
"#,
        )
        .unwrap();
        assert_eq!(meta.format, MatchFormat::Fourball);
        assert_eq!(meta.holes, 36);
        assert_eq!(meta.si_set, TeeSet::Ladies);
        assert_eq!(meta.handicap_mode, HandicapMode::Nett);
    }

    #[test]
    fn out_of_range_lengths_still_load() {
        for holes in ["300", "-1", "0", "9223372036854775807"] {
            let meta: MatchMeta = toml::from_str(&format!("holes = {holes}")).unwrap();
            assert_eq!(meta.total_holes(), 18, "holes = {holes}");
        }
    }
}
