//! Type-effectiveness engine for a Kanto companion app.
//!
//! The authored Gen III chart lives in [`chart`]; [`matchup`] evaluates
//! single moves against 1-2 type defenders, [`coverage`] analyzes a whole
//! attacking set and suggests gap fillers, and [`defense`] reads a roster
//! from the other side of the table. [`dex`] carries the 151 Kanto species
//! profiles the app browses.
//!
//! Everything here is pure, synchronous computation over immutable data;
//! callers validate upstream strings once at the [`types`] boundary and the
//! engine never re-checks.

pub mod chart;
pub mod coverage;
pub mod defense;
pub mod dex;
pub mod matchup;
pub mod profile;
pub mod types;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::chart::{chart, TypeChart};
    pub use crate::coverage::{attack_coverage, suggest_coverage, CoverageReport};
    pub use crate::defense::{defense_multipliers, team_defense, TeamDefenseReport};
    pub use crate::dex::{species, species_by_id, Species};
    pub use crate::matchup::{best_of, combine, evaluate, is_stab, Efficacy, MatchupResult};
    pub use crate::profile::TypeProfile;
    pub use crate::types::Type;
}
