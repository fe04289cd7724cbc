//! Offensive coverage analysis over a set of attacking types, and the
//! gap-filling suggestions built on top of it.

use crate::chart::TypeChart;
use crate::types::Type;
use serde::Serialize;
use std::cmp::Reverse;

/// How many suggestions [`suggest_coverage`] returns at most.
pub const MAX_SUGGESTIONS: usize = 3;

/// Partition of all 18 defending types by the best multiplier any attacking
/// type in the analyzed set achieves against them. The four buckets are
/// disjoint and their union is the full type set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Best multiplier >= 2.
    pub super_effective: Vec<Type>,
    /// Best multiplier == 1.
    pub neutral: Vec<Type>,
    /// Best multiplier in (0, 1).
    pub not_very_effective: Vec<Type>,
    /// Best multiplier == 0.
    pub immune: Vec<Type>,
}

impl CoverageReport {
    /// Defending types the attacking set does not handle: resisted plus
    /// immune.
    pub fn uncovered(&self) -> Vec<Type> {
        let mut gaps = self.not_very_effective.clone();
        gaps.extend_from_slice(&self.immune);
        gaps
    }
}

/// Bucket every defending type by the best single-type multiplier the
/// attacking set achieves against it.
///
/// The best over an empty attacking set is 0, so an empty input lands all
/// 18 types in `immune`: no coverage anywhere, not neutral.
pub fn attack_coverage(chart: &TypeChart, attacking: &[Type]) -> CoverageReport {
    let mut report = CoverageReport::default();
    for def in Type::ALL {
        let best = attacking
            .iter()
            .map(|&atk| chart.lookup(atk, def))
            .fold(0.0, f32::max);
        if best >= 2.0 {
            report.super_effective.push(def);
        } else if best == 1.0 {
            report.neutral.push(def);
        } else if best > 0.0 {
            report.not_very_effective.push(def);
        } else {
            report.immune.push(def);
        }
    }
    report
}

/// Recommend up to three attacking types that would flip the most currently
/// uncovered defenders to super effective.
///
/// Candidates are scanned and tie-broken in [`Type::ALL`] order, so the
/// output is deterministic. Full coverage yields an empty list.
pub fn suggest_coverage(chart: &TypeChart, current: &[Type]) -> Vec<Type> {
    let uncovered = attack_coverage(chart, current).uncovered();
    if uncovered.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(Type, usize)> = Vec::new();
    for candidate in Type::ALL {
        if current.contains(&candidate) {
            continue;
        }
        let hits = uncovered
            .iter()
            .filter(|&&def| chart.lookup(candidate, def) >= 2.0)
            .count();
        if hits > 0 {
            scored.push((candidate, hits));
        }
    }
    // Stable sort keeps declaration order among equal hit counts.
    scored.sort_by_key(|&(_, hits)| Reverse(hits));
    scored.truncate(MAX_SUGGESTIONS);
    scored.into_iter().map(|(ty, _)| ty).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::chart;

    fn assert_partitions(report: &CoverageReport) {
        let mut seen: Vec<Type> = report
            .super_effective
            .iter()
            .chain(&report.neutral)
            .chain(&report.not_very_effective)
            .chain(&report.immune)
            .copied()
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 18, "buckets must partition all 18 types");
    }

    #[test]
    fn empty_attacking_set_has_no_coverage_anywhere() {
        let report = attack_coverage(chart(), &[]);
        assert_eq!(report.immune, Type::ALL.to_vec());
        assert!(report.super_effective.is_empty());
        assert!(report.neutral.is_empty());
        assert!(report.not_very_effective.is_empty());
    }

    #[test]
    fn every_single_type_report_partitions_the_full_set() {
        for atk in Type::ALL {
            assert_partitions(&attack_coverage(chart(), &[atk]));
        }
    }

    #[test]
    fn fire_water_coverage_matches_the_chart() {
        let report = attack_coverage(chart(), &[Type::Fire, Type::Water]);
        for ty in [Type::Grass, Type::Ice, Type::Fire, Type::Ground, Type::Rock] {
            assert!(report.super_effective.contains(&ty), "{ty} should be covered");
        }
        // Water resists fire and water alike, and nothing is immune to either.
        assert!(report.not_very_effective.contains(&Type::Water));
        assert!(report.immune.is_empty());
        assert_partitions(&report);
    }

    #[test]
    fn duplicate_attackers_change_nothing() {
        let once = attack_coverage(chart(), &[Type::Ice]);
        let twice = attack_coverage(chart(), &[Type::Ice, Type::Ice]);
        assert_eq!(once, twice);
    }

    #[test]
    fn best_is_max_not_product() {
        // Electric alone: ground is immune. Adding ice covers it; electric's
        // zero must not drag the pair down.
        let report = attack_coverage(chart(), &[Type::Electric, Type::Ice]);
        assert!(report.super_effective.contains(&Type::Ground));
        assert!(report.immune.is_empty());
    }

    #[test]
    fn suggestions_for_rock_exploit_its_gaps() {
        // Rock's gaps are fighting, ground and steel; every candidate that
        // hits one of them scores 1, so declaration order decides.
        let suggestions = suggest_coverage(chart(), &[Type::Rock]);
        assert_eq!(suggestions, vec![Type::Fire, Type::Water, Type::Grass]);
        assert!(!suggestions.contains(&Type::Rock));

        let uncovered = attack_coverage(chart(), &[Type::Rock]).uncovered();
        for &ty in &suggestions {
            assert!(
                uncovered.iter().any(|&def| chart().lookup(ty, def) >= 2.0),
                "{ty} resolves no gap"
            );
        }
    }

    #[test]
    fn suggestions_are_ranked_by_hits_then_declaration_order() {
        let current = [Type::Rock];
        let uncovered = attack_coverage(chart(), &current).uncovered();
        let suggestions = suggest_coverage(chart(), &current);

        let hits = |candidate: Type| {
            uncovered
                .iter()
                .filter(|&&def| chart().lookup(candidate, def) >= 2.0)
                .count()
        };
        for pair in suggestions.windows(2) {
            let (first, second) = (hits(pair[0]), hits(pair[1]));
            assert!(first >= second);
            if first == second {
                assert!(pair[0].index() < pair[1].index());
            }
        }
    }

    #[test]
    fn full_type_set_needs_no_suggestions() {
        assert!(suggest_coverage(chart(), &Type::ALL).is_empty());
    }

    #[test]
    fn gapless_coverage_yields_no_suggestions() {
        // Find an attacking pair with no resisted or immune defenders and
        // check the engine stays quiet for it.
        let mut verified = false;
        for a in Type::ALL {
            for b in Type::ALL {
                let report = attack_coverage(chart(), &[a, b]);
                if report.uncovered().is_empty() {
                    assert!(suggest_coverage(chart(), &[a, b]).is_empty());
                    verified = true;
                }
            }
        }
        assert!(verified, "expected at least one gapless pair in the chart");
    }
}
