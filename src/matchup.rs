//! Single-matchup evaluation: dual-type combination, best-of attacking,
//! STAB, and the human-readable efficacy labels.

use crate::chart::TypeChart;
use crate::profile::TypeProfile;
use crate::types::Type;
use serde::Serialize;

/// Bonus applied to the displayed multiplier when a move shares a type with
/// its user. Display-only; never folded back into the chart.
pub const STAB_BONUS: f32 = 1.5;

/// Multiplier of one attacking type against a 1-2 type defender.
///
/// A straight product over the defending types, so two resistances compound
/// to 0.25 and any immunity zeroes the result regardless of the other type.
pub fn combine(chart: &TypeChart, attacking: Type, defending: &TypeProfile) -> f32 {
    defending
        .types()
        .fold(1.0, |mult, def| mult * chart.lookup(attacking, def))
}

/// Best multiplier any of `attacking` achieves against the defender.
///
/// An attacker with two types leads with the more effective one per
/// exchange; the types are never summed or averaged. Empty input yields 0.
pub fn best_of(chart: &TypeChart, attacking: &[Type], defending: &TypeProfile) -> f32 {
    attacking
        .iter()
        .map(|&atk| combine(chart, atk, defending))
        .fold(0.0, f32::max)
}

/// True when the move's type is one of the attacker's own types.
pub fn is_stab(move_type: Type, attacker: &TypeProfile) -> bool {
    attacker.contains(move_type)
}

/// Classification of a final multiplier, with the exact bucket boundaries
/// the companion UI displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Efficacy {
    NoEffect,
    DoublyResisted,
    NotVeryEffective,
    Normal,
    SuperEffective,
    DoublySuperEffective,
}

impl Efficacy {
    pub fn of(multiplier: f32) -> Efficacy {
        if multiplier == 0.0 {
            Efficacy::NoEffect
        } else if multiplier == 0.25 {
            Efficacy::DoublyResisted
        } else if multiplier < 1.0 {
            Efficacy::NotVeryEffective
        } else if multiplier == 1.0 {
            Efficacy::Normal
        } else if multiplier >= 4.0 {
            Efficacy::DoublySuperEffective
        } else {
            Efficacy::SuperEffective
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Efficacy::NoEffect => "No Effect",
            Efficacy::DoublyResisted => "Doubly Resisted",
            Efficacy::NotVeryEffective => "Not Very Effective",
            Efficacy::Normal => "Normal",
            Efficacy::SuperEffective => "Super Effective",
            Efficacy::DoublySuperEffective => "Doubly Super Effective",
        }
    }
}

/// Everything a matchup view needs to render one move against one defender.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MatchupResult {
    pub move_type: Type,
    pub defender: TypeProfile,
    pub multiplier: f32,
    pub efficacy: Efficacy,
    pub stab: bool,
    /// `multiplier` with the STAB bonus applied when `stab` holds.
    pub display_multiplier: f32,
}

/// Evaluate one move against a defender, with the attacker's own profile
/// supplied when STAB context is available.
pub fn evaluate(
    chart: &TypeChart,
    move_type: Type,
    defender: &TypeProfile,
    attacker: Option<&TypeProfile>,
) -> MatchupResult {
    let multiplier = combine(chart, move_type, defender);
    let stab = attacker.is_some_and(|profile| is_stab(move_type, profile));
    let display_multiplier = if stab {
        multiplier * STAB_BONUS
    } else {
        multiplier
    };
    MatchupResult {
        move_type,
        defender: *defender,
        multiplier,
        efficacy: Efficacy::of(multiplier),
        stab,
        display_multiplier,
    }
}
