//! Static Kanto dex: the 151 species the companion app browses, with the
//! typings its data source reports today. That means the retconned entries
//! (Clefairy line and Jigglypuff line fairy, Mr. Mime fairy, Magnemite line
//! steel) keep their modern profiles on purpose.

use crate::profile::TypeProfile;
use crate::types::Type;
use phf::phf_map;

/// One dex entry.
#[derive(Clone, Copy, Debug)]
pub struct Species {
    pub id: u16,
    pub name: &'static str,
    primary: Type,
    secondary: Option<Type>,
}

impl Species {
    pub fn profile(&self) -> TypeProfile {
        TypeProfile::from_dex(self.primary, self.secondary)
    }
}

pub const KANTO_DEX_SIZE: usize = 151;

macro_rules! mono {
    ($id:expr, $name:expr, $ty:ident) => {
        Species {
            id: $id,
            name: $name,
            primary: Type::$ty,
            secondary: None,
        }
    };
}

macro_rules! dual {
    ($id:expr, $name:expr, $first:ident, $second:ident) => {
        Species {
            id: $id,
            name: $name,
            primary: Type::$first,
            secondary: Some(Type::$second),
        }
    };
}

static KANTO_DEX: phf::Map<&'static str, Species> = phf_map! {
    "bulbasaur" => dual!(1, "Bulbasaur", Grass, Poison),
    "ivysaur" => dual!(2, "Ivysaur", Grass, Poison),
    "venusaur" => dual!(3, "Venusaur", Grass, Poison),
    "charmander" => mono!(4, "Charmander", Fire),
    "charmeleon" => mono!(5, "Charmeleon", Fire),
    "charizard" => dual!(6, "Charizard", Fire, Flying),
    "squirtle" => mono!(7, "Squirtle", Water),
    "wartortle" => mono!(8, "Wartortle", Water),
    "blastoise" => mono!(9, "Blastoise", Water),
    "caterpie" => mono!(10, "Caterpie", Bug),
    "metapod" => mono!(11, "Metapod", Bug),
    "butterfree" => dual!(12, "Butterfree", Bug, Flying),
    "weedle" => dual!(13, "Weedle", Bug, Poison),
    "kakuna" => dual!(14, "Kakuna", Bug, Poison),
    "beedrill" => dual!(15, "Beedrill", Bug, Poison),
    "pidgey" => dual!(16, "Pidgey", Normal, Flying),
    "pidgeotto" => dual!(17, "Pidgeotto", Normal, Flying),
    "pidgeot" => dual!(18, "Pidgeot", Normal, Flying),
    "rattata" => mono!(19, "Rattata", Normal),
    "raticate" => mono!(20, "Raticate", Normal),
    "spearow" => dual!(21, "Spearow", Normal, Flying),
    "fearow" => dual!(22, "Fearow", Normal, Flying),
    "ekans" => mono!(23, "Ekans", Poison),
    "arbok" => mono!(24, "Arbok", Poison),
    "pikachu" => mono!(25, "Pikachu", Electric),
    "raichu" => mono!(26, "Raichu", Electric),
    "sandshrew" => mono!(27, "Sandshrew", Ground),
    "sandslash" => mono!(28, "Sandslash", Ground),
    "nidoranf" => mono!(29, "Nidoran-F", Poison),
    "nidorina" => mono!(30, "Nidorina", Poison),
    "nidoqueen" => dual!(31, "Nidoqueen", Poison, Ground),
    "nidoranm" => mono!(32, "Nidoran-M", Poison),
    "nidorino" => mono!(33, "Nidorino", Poison),
    "nidoking" => dual!(34, "Nidoking", Poison, Ground),
    "clefairy" => mono!(35, "Clefairy", Fairy),
    "clefable" => mono!(36, "Clefable", Fairy),
    "vulpix" => mono!(37, "Vulpix", Fire),
    "ninetales" => mono!(38, "Ninetales", Fire),
    "jigglypuff" => dual!(39, "Jigglypuff", Normal, Fairy),
    "wigglytuff" => dual!(40, "Wigglytuff", Normal, Fairy),
    "zubat" => dual!(41, "Zubat", Poison, Flying),
    "golbat" => dual!(42, "Golbat", Poison, Flying),
    "oddish" => dual!(43, "Oddish", Grass, Poison),
    "gloom" => dual!(44, "Gloom", Grass, Poison),
    "vileplume" => dual!(45, "Vileplume", Grass, Poison),
    "paras" => dual!(46, "Paras", Bug, Grass),
    "parasect" => dual!(47, "Parasect", Bug, Grass),
    "venonat" => dual!(48, "Venonat", Bug, Poison),
    "venomoth" => dual!(49, "Venomoth", Bug, Poison),
    "diglett" => mono!(50, "Diglett", Ground),
    "dugtrio" => mono!(51, "Dugtrio", Ground),
    "meowth" => mono!(52, "Meowth", Normal),
    "persian" => mono!(53, "Persian", Normal),
    "psyduck" => mono!(54, "Psyduck", Water),
    "golduck" => mono!(55, "Golduck", Water),
    "mankey" => mono!(56, "Mankey", Fighting),
    "primeape" => mono!(57, "Primeape", Fighting),
    "growlithe" => mono!(58, "Growlithe", Fire),
    "arcanine" => mono!(59, "Arcanine", Fire),
    "poliwag" => mono!(60, "Poliwag", Water),
    "poliwhirl" => mono!(61, "Poliwhirl", Water),
    "poliwrath" => dual!(62, "Poliwrath", Water, Fighting),
    "abra" => mono!(63, "Abra", Psychic),
    "kadabra" => mono!(64, "Kadabra", Psychic),
    "alakazam" => mono!(65, "Alakazam", Psychic),
    "machop" => mono!(66, "Machop", Fighting),
    "machoke" => mono!(67, "Machoke", Fighting),
    "machamp" => mono!(68, "Machamp", Fighting),
    "bellsprout" => dual!(69, "Bellsprout", Grass, Poison),
    "weepinbell" => dual!(70, "Weepinbell", Grass, Poison),
    "victreebel" => dual!(71, "Victreebel", Grass, Poison),
    "tentacool" => dual!(72, "Tentacool", Water, Poison),
    "tentacruel" => dual!(73, "Tentacruel", Water, Poison),
    "geodude" => dual!(74, "Geodude", Rock, Ground),
    "graveler" => dual!(75, "Graveler", Rock, Ground),
    "golem" => dual!(76, "Golem", Rock, Ground),
    "ponyta" => mono!(77, "Ponyta", Fire),
    "rapidash" => mono!(78, "Rapidash", Fire),
    "slowpoke" => dual!(79, "Slowpoke", Water, Psychic),
    "slowbro" => dual!(80, "Slowbro", Water, Psychic),
    "magnemite" => dual!(81, "Magnemite", Electric, Steel),
    "magneton" => dual!(82, "Magneton", Electric, Steel),
    "farfetchd" => dual!(83, "Farfetch'd", Normal, Flying),
    "doduo" => dual!(84, "Doduo", Normal, Flying),
    "dodrio" => dual!(85, "Dodrio", Normal, Flying),
    "seel" => mono!(86, "Seel", Water),
    "dewgong" => dual!(87, "Dewgong", Water, Ice),
    "grimer" => mono!(88, "Grimer", Poison),
    "muk" => mono!(89, "Muk", Poison),
    "shellder" => mono!(90, "Shellder", Water),
    "cloyster" => dual!(91, "Cloyster", Water, Ice),
    "gastly" => dual!(92, "Gastly", Ghost, Poison),
    "haunter" => dual!(93, "Haunter", Ghost, Poison),
    "gengar" => dual!(94, "Gengar", Ghost, Poison),
    "onix" => dual!(95, "Onix", Rock, Ground),
    "drowzee" => mono!(96, "Drowzee", Psychic),
    "hypno" => mono!(97, "Hypno", Psychic),
    "krabby" => mono!(98, "Krabby", Water),
    "kingler" => mono!(99, "Kingler", Water),
    "voltorb" => mono!(100, "Voltorb", Electric),
    "electrode" => mono!(101, "Electrode", Electric),
    "exeggcute" => dual!(102, "Exeggcute", Grass, Psychic),
    "exeggutor" => dual!(103, "Exeggutor", Grass, Psychic),
    "cubone" => mono!(104, "Cubone", Ground),
    "marowak" => mono!(105, "Marowak", Ground),
    "hitmonlee" => mono!(106, "Hitmonlee", Fighting),
    "hitmonchan" => mono!(107, "Hitmonchan", Fighting),
    "lickitung" => mono!(108, "Lickitung", Normal),
    "koffing" => mono!(109, "Koffing", Poison),
    "weezing" => mono!(110, "Weezing", Poison),
    "rhyhorn" => dual!(111, "Rhyhorn", Ground, Rock),
    "rhydon" => dual!(112, "Rhydon", Ground, Rock),
    "chansey" => mono!(113, "Chansey", Normal),
    "tangela" => mono!(114, "Tangela", Grass),
    "kangaskhan" => mono!(115, "Kangaskhan", Normal),
    "horsea" => mono!(116, "Horsea", Water),
    "seadra" => mono!(117, "Seadra", Water),
    "goldeen" => mono!(118, "Goldeen", Water),
    "seaking" => mono!(119, "Seaking", Water),
    "staryu" => mono!(120, "Staryu", Water),
    "starmie" => dual!(121, "Starmie", Water, Psychic),
    "mrmime" => dual!(122, "Mr. Mime", Psychic, Fairy),
    "scyther" => dual!(123, "Scyther", Bug, Flying),
    "jynx" => dual!(124, "Jynx", Ice, Psychic),
    "electabuzz" => mono!(125, "Electabuzz", Electric),
    "magmar" => mono!(126, "Magmar", Fire),
    "pinsir" => mono!(127, "Pinsir", Bug),
    "tauros" => mono!(128, "Tauros", Normal),
    "magikarp" => mono!(129, "Magikarp", Water),
    "gyarados" => dual!(130, "Gyarados", Water, Flying),
    "lapras" => dual!(131, "Lapras", Water, Ice),
    "ditto" => mono!(132, "Ditto", Normal),
    "eevee" => mono!(133, "Eevee", Normal),
    "vaporeon" => mono!(134, "Vaporeon", Water),
    "jolteon" => mono!(135, "Jolteon", Electric),
    "flareon" => mono!(136, "Flareon", Fire),
    "porygon" => mono!(137, "Porygon", Normal),
    "omanyte" => dual!(138, "Omanyte", Rock, Water),
    "omastar" => dual!(139, "Omastar", Rock, Water),
    "kabuto" => dual!(140, "Kabuto", Rock, Water),
    "kabutops" => dual!(141, "Kabutops", Rock, Water),
    "aerodactyl" => dual!(142, "Aerodactyl", Rock, Flying),
    "snorlax" => mono!(143, "Snorlax", Normal),
    "articuno" => dual!(144, "Articuno", Ice, Flying),
    "zapdos" => dual!(145, "Zapdos", Electric, Flying),
    "moltres" => dual!(146, "Moltres", Fire, Flying),
    "dratini" => mono!(147, "Dratini", Dragon),
    "dragonair" => mono!(148, "Dragonair", Dragon),
    "dragonite" => dual!(149, "Dragonite", Dragon, Flying),
    "mewtwo" => mono!(150, "Mewtwo", Psychic),
    "mew" => mono!(151, "Mew", Psychic),
};

fn normalize_name(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Look a species up by name. Tolerant of case and punctuation, so
/// "Mr. Mime", "mr-mime" and "mrmime" all resolve.
pub fn species(name: &str) -> Option<&'static Species> {
    KANTO_DEX.get(normalize_name(name).as_str())
}

/// Look a species up by national dex number (1-151).
pub fn species_by_id(id: u16) -> Option<&'static Species> {
    KANTO_DEX.values().find(|entry| entry.id == id)
}

/// All entries in dex order.
pub fn all_species() -> Vec<&'static Species> {
    let mut entries: Vec<&'static Species> = KANTO_DEX.values().collect();
    entries.sort_by_key(|entry| entry.id);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dex_holds_exactly_151_unique_ids() {
        let entries = all_species();
        assert_eq!(entries.len(), KANTO_DEX_SIZE);
        for (idx, entry) in entries.iter().enumerate() {
            assert_eq!(entry.id as usize, idx + 1, "gap at {}", entry.name);
        }
    }

    #[test]
    fn every_profile_respects_the_distinctness_invariant() {
        for entry in all_species() {
            let profile = entry.profile();
            if let Some(secondary) = profile.secondary() {
                assert_ne!(profile.primary(), secondary, "{}", entry.name);
            }
        }
    }

    #[test]
    fn lookups_tolerate_upstream_spellings() {
        assert_eq!(species("Mr. Mime").unwrap().id, 122);
        assert_eq!(species("mr-mime").unwrap().id, 122);
        assert_eq!(species("farfetchd").unwrap().id, 83);
        assert_eq!(species("Farfetch'd").unwrap().id, 83);
        assert_eq!(species("NIDORAN-F").unwrap().id, 29);
        assert!(species("missingno").is_none());
    }

    #[test]
    fn spot_check_profiles() {
        let charizard = species("charizard").unwrap().profile();
        assert_eq!(charizard.primary(), Type::Fire);
        assert_eq!(charizard.secondary(), Some(Type::Flying));

        let snorlax = species("snorlax").unwrap().profile();
        assert!(!snorlax.is_dual());
        assert_eq!(snorlax.primary(), Type::Normal);
    }

    #[test]
    fn retconned_typings_are_the_modern_ones() {
        assert_eq!(species("clefairy").unwrap().profile().primary(), Type::Fairy);
        assert_eq!(
            species("jigglypuff").unwrap().profile().secondary(),
            Some(Type::Fairy)
        );
        assert_eq!(
            species("mrmime").unwrap().profile().secondary(),
            Some(Type::Fairy)
        );
        assert_eq!(
            species("magneton").unwrap().profile().secondary(),
            Some(Type::Steel)
        );
    }

    #[test]
    fn id_lookup_agrees_with_name_lookup() {
        assert_eq!(species_by_id(1).unwrap().name, "Bulbasaur");
        assert_eq!(species_by_id(151).unwrap().name, "Mew");
        assert!(species_by_id(152).is_none());
        assert!(species_by_id(0).is_none());
    }
}
