//! Creature type profiles: one or two distinct types per species.

use crate::types::Type;
use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The 1-2 type tag set of a single creature. Ordered; never empty; the two
/// types of a dual profile are always distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TypeProfile {
    primary: Type,
    secondary: Option<Type>,
}

impl TypeProfile {
    pub fn mono(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn dual(primary: Type, secondary: Type) -> Result<Self> {
        if primary == secondary {
            bail!("Duplicate type '{}' in profile", primary);
        }
        Ok(Self {
            primary,
            secondary: Some(secondary),
        })
    }

    pub fn new(primary: Type, secondary: Option<Type>) -> Result<Self> {
        match secondary {
            Some(second) => Self::dual(primary, second),
            None => Ok(Self::mono(primary)),
        }
    }

    /// Trusted constructor for authored static data; the dex test suite
    /// checks the distinctness invariant over every entry.
    pub(crate) const fn from_dex(primary: Type, secondary: Option<Type>) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> Type {
        self.primary
    }

    pub fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    pub fn types(&self) -> impl Iterator<Item = Type> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn contains(&self, ty: Type) -> bool {
        self.primary == ty || self.secondary == Some(ty)
    }

    pub fn is_dual(&self) -> bool {
        self.secondary.is_some()
    }
}

impl fmt::Display for TypeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(second) => write!(f, "{}/{}", self.primary, second),
            None => write!(f, "{}", self.primary),
        }
    }
}

impl FromStr for TypeProfile {
    type Err = anyhow::Error;

    /// Parse `"water"` or `"ghost/poison"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('/').map(str::trim);
        let primary = match parts.next() {
            Some(name) if !name.is_empty() => Type::from_name(name)?,
            _ => bail!("Empty type profile '{}'", s),
        };
        let secondary = parts.next().map(Type::from_name).transpose()?;
        if parts.next().is_some() {
            bail!("A profile holds at most two types, got '{}'", s);
        }
        TypeProfile::new(primary, secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_rejects_duplicates() {
        assert!(TypeProfile::dual(Type::Fire, Type::Fire).is_err());
        assert!(TypeProfile::dual(Type::Fire, Type::Flying).is_ok());
    }

    #[test]
    fn types_iterates_in_order() {
        let profile = TypeProfile::dual(Type::Ghost, Type::Poison).unwrap();
        let types: Vec<Type> = profile.types().collect();
        assert_eq!(types, vec![Type::Ghost, Type::Poison]);

        let mono = TypeProfile::mono(Type::Water);
        assert_eq!(mono.types().count(), 1);
    }

    #[test]
    fn parse_mono_and_dual() {
        let mono: TypeProfile = "water".parse().unwrap();
        assert_eq!(mono, TypeProfile::mono(Type::Water));

        let dual: TypeProfile = "ghost/poison".parse().unwrap();
        assert_eq!(dual.primary(), Type::Ghost);
        assert_eq!(dual.secondary(), Some(Type::Poison));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("".parse::<TypeProfile>().is_err());
        assert!("water/water".parse::<TypeProfile>().is_err());
        assert!("water/ice/fire".parse::<TypeProfile>().is_err());
        assert!("plasma".parse::<TypeProfile>().is_err());
    }

    #[test]
    fn display_joins_with_slash() {
        let dual = TypeProfile::dual(Type::Rock, Type::Ground).unwrap();
        assert_eq!(dual.to_string(), "rock/ground");
        assert_eq!(TypeProfile::mono(Type::Ice).to_string(), "ice");
    }
}
