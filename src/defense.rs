//! Team-wide defensive analysis: how every attacking type fares against
//! each roster member, and which types threaten or bounce off the team as
//! a whole.

use crate::chart::TypeChart;
use crate::matchup::combine;
use crate::profile::TypeProfile;
use crate::types::Type;
use serde::Serialize;

/// Members that must share a matchup before it counts for the whole team.
const TEAM_TREND_THRESHOLD: usize = 3;

/// One attacking type against every team member.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeMatchupRow {
    pub attacking: Type,
    /// Combined multiplier per member, in roster order.
    pub multipliers: Vec<f32>,
}

/// Attacking types that threaten or are walled by a meaningful share of the
/// roster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TeamDefenseReport {
    /// At least three members take 2x or worse from these.
    pub weaknesses: Vec<Type>,
    /// At least three members take less than 1x from these.
    pub resistances: Vec<Type>,
}

/// Per-attacking-type multiplier table for a roster, 18 rows in declaration
/// order.
pub fn defense_multipliers(chart: &TypeChart, team: &[TypeProfile]) -> Vec<TypeMatchupRow> {
    Type::ALL
        .iter()
        .map(|&attacking| TypeMatchupRow {
            attacking,
            multipliers: team
                .iter()
                .map(|profile| combine(chart, attacking, profile))
                .collect(),
        })
        .collect()
}

/// Shared weaknesses and resistances across a roster.
pub fn team_defense(chart: &TypeChart, team: &[TypeProfile]) -> TeamDefenseReport {
    let mut report = TeamDefenseReport::default();
    for &attacking in &Type::ALL {
        let mut weak = 0usize;
        let mut resist = 0usize;
        for profile in team {
            let mult = combine(chart, attacking, profile);
            if mult >= 2.0 {
                weak += 1;
            }
            if mult < 1.0 {
                resist += 1;
            }
        }
        if weak >= TEAM_TREND_THRESHOLD {
            report.weaknesses.push(attacking);
        }
        if resist >= TEAM_TREND_THRESHOLD {
            report.resistances.push(attacking);
        }
    }
    report
}
