use crate::dimension::Dimension;
use crate::model::DimensionStat;

/// A flavor label derived from the user's dominant dimension. Derived, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerClass {
    /// Class name, e.g. "Mastermind".
    pub name: &'static str,
    /// One-line flavor text.
    pub flavor: &'static str,
}

/// Class for users with no dimension activity at all.
pub const NOVICE: PlayerClass = PlayerClass {
    name: "Novice",
    flavor: "A blank canvas with infinite potential.",
};

/// Defensive fallback for a dominant dimension outside the closed set.
pub const SEEKER: PlayerClass = PlayerClass {
    name: "Seeker",
    flavor: "Forging their own path.",
};

/// Derive a player class from per-dimension levels.
///
/// Scans the stats once tracking the maximum level; the strict `>` comparison
/// means the first dimension to reach the maximum wins ties. Empty input
/// yields [`NOVICE`]. Total, no side effects.
pub fn classify(stats: &[DimensionStat]) -> PlayerClass {
    let mut winner: Option<&DimensionStat> = None;

    for stat in stats {
        if winner.is_none_or(|best| stat.level > best.level) {
            winner = Some(stat);
        }
    }

    match winner {
        None => NOVICE,
        Some(stat) => Dimension::parse(&stat.dimension)
            .map(class_for)
            .unwrap_or(SEEKER),
    }
}

/// The fixed dimension-to-class table.
fn class_for(dimension: Dimension) -> PlayerClass {
    match dimension {
        Dimension::Physical => PlayerClass {
            name: "Juggernaut",
            flavor: "A relentless force of nature.",
        },
        Dimension::Intellectual => PlayerClass {
            name: "Mastermind",
            flavor: "Knowledge is the ultimate weapon.",
        },
        Dimension::Financial => PlayerClass {
            name: "Tycoon",
            flavor: "Resources are meant to be leveraged.",
        },
        Dimension::Vocational => PlayerClass {
            name: "Specialist",
            flavor: "Precision and expertise in every action.",
        },
        Dimension::Social => PlayerClass {
            name: "Emissary",
            flavor: "Words can open doors that keys cannot.",
        },
        Dimension::Emotional => PlayerClass {
            name: "Sentinel",
            flavor: "Unshakable resolve in the face of chaos.",
        },
        Dimension::Environmental => PlayerClass {
            name: "Warden",
            flavor: "Master of their domain and surroundings.",
        },
        Dimension::Spiritual => PlayerClass {
            name: "Ascendant",
            flavor: "Seeing beyond the veil of the mundane.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(dimension: &str, level: u32) -> DimensionStat {
        DimensionStat {
            dimension: dimension.to_string(),
            level,
        }
    }

    #[test]
    fn empty_stats_yield_novice() {
        let class = classify(&[]);
        assert_eq!(class.name, "Novice");
        assert_eq!(class.flavor, "A blank canvas with infinite potential.");
    }

    #[test]
    fn highest_level_wins() {
        let class = classify(&[stat("physical", 3), stat("intellectual", 5)]);
        assert_eq!(class.name, "Mastermind");
    }

    #[test]
    fn first_seen_wins_ties() {
        let class = classify(&[stat("physical", 5), stat("intellectual", 5)]);
        assert_eq!(class.name, "Juggernaut");

        let class = classify(&[stat("intellectual", 5), stat("physical", 5)]);
        assert_eq!(class.name, "Mastermind");
    }

    #[test]
    fn zero_level_single_stat_still_classifies() {
        let class = classify(&[stat("spiritual", 0)]);
        assert_eq!(class.name, "Ascendant");
    }

    #[test]
    fn unknown_dominant_dimension_is_seeker() {
        let class = classify(&[stat("arcane", 9), stat("physical", 2)]);
        assert_eq!(class.name, "Seeker");
    }

    #[test]
    fn every_dimension_maps_to_a_unique_class() {
        let mut names: Vec<&str> = Dimension::ALL
            .iter()
            .map(|d| class_for(*d).name)
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Dimension::ALL.len());
    }

    #[test]
    fn case_insensitive_dimension_tags() {
        let class = classify(&[stat("Financial", 4)]);
        assert_eq!(class.name, "Tycoon");
    }
}
