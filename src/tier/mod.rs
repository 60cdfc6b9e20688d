//! Tier engine - letter-grade buckets over numeric scores.
//!
//! Two fixed schemes exist because two displays bucket differently:
//!
//! - `SixBand`: S/A/B/C/D/F at boundaries 90/80/70/60/50 (no E band).
//! - `SevenBand`: S/A/B/C/D/E at boundaries 90/75/60/45/30, with the
//!   E band covering [0, 29].
//!
//! Both are closed-closed and exhaustive over [0, 100]; a missing
//! score maps to `Unscored`. `score_for_tier` returns the midpoint of
//! a tier's range - dropping a card onto a tier bucket sets its score
//! to that midpoint.

use serde::{Deserialize, Serialize};

/// Letter-grade tier label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
    /// No score assigned.
    Unscored,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
            Tier::E => "E",
            Tier::F => "F",
            Tier::Unscored => "Unscored",
        };
        f.write_str(label)
    }
}

/// Tier boundary scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierScheme {
    /// S=[90,100] A=[80,89] B=[70,79] C=[60,69] D=[50,59] F=[0,49].
    #[default]
    SixBand,
    /// S=[90,100] A=[75,89] B=[60,74] C=[45,59] D=[30,44] E=[0,29].
    SevenBand,
}

impl TierScheme {
    /// Map a score to its tier. `None` maps to `Unscored`; out-of-range
    /// scores are clamped into [0, 100] before bucketing.
    #[must_use]
    pub fn tier_of(self, score: Option<i64>) -> Tier {
        let Some(score) = score else {
            return Tier::Unscored;
        };
        let score = score.clamp(0, 100);
        match self {
            TierScheme::SixBand => match score {
                90..=100 => Tier::S,
                80..=89 => Tier::A,
                70..=79 => Tier::B,
                60..=69 => Tier::C,
                50..=59 => Tier::D,
                _ => Tier::F,
            },
            TierScheme::SevenBand => match score {
                90..=100 => Tier::S,
                75..=89 => Tier::A,
                60..=74 => Tier::B,
                45..=59 => Tier::C,
                30..=44 => Tier::D,
                _ => Tier::E,
            },
        }
    }

    /// Inclusive score range of a tier under this scheme, or `None`
    /// for `Unscored` and for bands the scheme lacks.
    #[must_use]
    pub fn range_of(self, tier: Tier) -> Option<(i64, i64)> {
        match self {
            TierScheme::SixBand => match tier {
                Tier::S => Some((90, 100)),
                Tier::A => Some((80, 89)),
                Tier::B => Some((70, 79)),
                Tier::C => Some((60, 69)),
                Tier::D => Some((50, 59)),
                Tier::F => Some((0, 49)),
                _ => None,
            },
            TierScheme::SevenBand => match tier {
                Tier::S => Some((90, 100)),
                Tier::A => Some((75, 89)),
                Tier::B => Some((60, 74)),
                Tier::C => Some((45, 59)),
                Tier::D => Some((30, 44)),
                Tier::E => Some((0, 29)),
                _ => None,
            },
        }
    }

    /// Midpoint score of a tier's range - the score assigned when a
    /// card is dropped onto that tier's bucket.
    #[must_use]
    pub fn score_for_tier(self, tier: Tier) -> Option<i64> {
        self.range_of(tier).map(|(lo, hi)| (lo + hi) / 2)
    }

    /// Tiers of this scheme in descending score order, ending with
    /// `Unscored`. Used to lay out tier buckets.
    #[must_use]
    pub fn tiers(self) -> &'static [Tier] {
        match self {
            TierScheme::SixBand => &[
                Tier::S,
                Tier::A,
                Tier::B,
                Tier::C,
                Tier::D,
                Tier::F,
                Tier::Unscored,
            ],
            TierScheme::SevenBand => &[
                Tier::S,
                Tier::A,
                Tier::B,
                Tier::C,
                Tier::D,
                Tier::E,
                Tier::Unscored,
            ],
        }
    }
}
