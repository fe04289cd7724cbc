//! The closed set of elemental types and the string boundary around it.
//!
//! Upstream data sources hand us type names as free-form strings; everything
//! past [`Type::from_name`] works with the enum only and never re-validates.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 18 elemental types. Declaration order is the canonical
/// iteration order for every deterministic listing in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    /// Every type, in declaration order.
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    /// Badge color the companion UI uses for this type.
    pub fn hex_color(self) -> &'static str {
        match self {
            Type::Normal => "#A8A878",
            Type::Fire => "#F08030",
            Type::Water => "#6890F0",
            Type::Electric => "#F8D030",
            Type::Grass => "#78C850",
            Type::Ice => "#98D8D8",
            Type::Fighting => "#C03028",
            Type::Poison => "#A040A0",
            Type::Ground => "#E0C068",
            Type::Flying => "#A890F0",
            Type::Psychic => "#F85888",
            Type::Bug => "#A8B820",
            Type::Rock => "#B8A038",
            Type::Ghost => "#705898",
            Type::Dragon => "#7038F8",
            Type::Dark => "#705848",
            Type::Steel => "#B8B8D0",
            Type::Fairy => "#EE99AC",
        }
    }

    /// Convert an upstream type name into the enum.
    ///
    /// Case-insensitive and whitespace-tolerant; anything outside the 18
    /// known names is rejected here so it can never reach the evaluator.
    pub fn from_name(name: &str) -> Result<Type> {
        match name.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Type::Normal),
            "fire" => Ok(Type::Fire),
            "water" => Ok(Type::Water),
            "electric" => Ok(Type::Electric),
            "grass" => Ok(Type::Grass),
            "ice" => Ok(Type::Ice),
            "fighting" => Ok(Type::Fighting),
            "poison" => Ok(Type::Poison),
            "ground" => Ok(Type::Ground),
            "flying" => Ok(Type::Flying),
            "psychic" => Ok(Type::Psychic),
            "bug" => Ok(Type::Bug),
            "rock" => Ok(Type::Rock),
            "ghost" => Ok(Type::Ghost),
            "dragon" => Ok(Type::Dragon),
            "dark" => Ok(Type::Dark),
            "steel" => Ok(Type::Steel),
            "fairy" => Ok(Type::Fairy),
            other => Err(anyhow!("Unknown type name '{}'", other)),
        }
    }
}

impl FromStr for Type {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Type::from_name(s)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_type_once() {
        assert_eq!(Type::ALL.len(), 18);
        for (idx, ty) in Type::ALL.iter().enumerate() {
            assert_eq!(ty.index(), idx);
        }
    }

    #[test]
    fn from_name_round_trips() {
        for ty in Type::ALL {
            assert_eq!(Type::from_name(ty.name()).unwrap(), ty);
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Type::from_name("FIRE").unwrap(), Type::Fire);
        assert_eq!(Type::from_name(" Dragon ").unwrap(), Type::Dragon);
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert!(Type::from_name("shadow").is_err());
        assert!(Type::from_name("").is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Type::Fairy).unwrap();
        assert_eq!(json, "\"fairy\"");
        let back: Type = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Type::Fairy);
    }
}
