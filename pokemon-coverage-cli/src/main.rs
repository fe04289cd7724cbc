use anyhow::{anyhow, bail, Context, Result};
use pokemon_coverage::chart::{chart, TypeChart};
use pokemon_coverage::coverage::{attack_coverage, suggest_coverage};
use pokemon_coverage::defense::{defense_multipliers, team_defense};
use pokemon_coverage::dex::{species, Species};
use pokemon_coverage::matchup::{combine, evaluate, Efficacy};
use pokemon_coverage::profile::TypeProfile;
use pokemon_coverage::types::Type;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let json_output = take_flag(&mut args, "--json");
    let mut args = args.into_iter();
    match args.next().as_deref() {
        Some("chart") => print_chart(chart()),
        Some("matchup") => {
            let move_type: Type = args
                .next()
                .ok_or_else(|| anyhow!("Usage: matchup <move-type> <defender> [attacker]"))?
                .parse()?;
            let defender = args
                .next()
                .ok_or_else(|| anyhow!("Usage: matchup <move-type> <defender> [attacker]"))?;
            let attacker = args.next();
            run_matchup(move_type, &defender, attacker.as_deref(), json_output)
        }
        Some("coverage") => {
            let attacking = parse_type_args(args)?;
            run_coverage(&attacking, json_output)
        }
        Some("suggest") => {
            let attacking = parse_type_args(args)?;
            run_suggest(&attacking, json_output)
        }
        Some("team") => {
            let roster: Vec<String> = args.collect();
            run_team(&roster, json_output)
        }
        Some("defense") => {
            let roster: Vec<String> = args.collect();
            run_defense(&roster, json_output)
        }
        Some("quiz") => {
            let mut seed: Option<u64> = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--seed" => {
                        let value = args.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                        seed = Some(value.parse().context("--seed must be an integer")?);
                    }
                    other => return Err(anyhow!("Unknown arg '{}' for quiz", other)),
                }
            }
            run_quiz(seed)
        }
        Some(cmd) => Err(anyhow!("Unknown command '{}'", cmd)),
        None => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("Commands:");
    println!("  chart                                  full 18x18 effectiveness table");
    println!("  matchup <move-type> <defender> [attacker]");
    println!("  coverage <type>... [--json]            offensive coverage buckets");
    println!("  suggest <type>... [--json]             up to 3 gap-filling types");
    println!("  team <species>... [--json]             roster coverage and defense");
    println!("  defense <species>... [--json]          per-type damage table for a roster");
    println!("  quiz [--seed N]                        random matchup question");
    println!();
    println!("Defenders and attackers are species names (\"gengar\") or type");
    println!("profiles (\"ghost/poison\").");
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    match args.iter().position(|arg| arg == flag) {
        Some(idx) => {
            args.remove(idx);
            true
        }
        None => false,
    }
}

fn parse_type_args(args: impl Iterator<Item = String>) -> Result<Vec<Type>> {
    let types: Vec<Type> = args
        .map(|arg| arg.parse())
        .collect::<Result<Vec<Type>>>()?;
    if types.is_empty() {
        bail!("Expected at least one type name");
    }
    Ok(types)
}

/// Resolve a CLI argument into a profile: dex species first, then a
/// slash-joined type list.
fn resolve_profile(arg: &str) -> Result<(String, TypeProfile)> {
    if let Some(entry) = species(arg) {
        return Ok((entry.name.to_string(), entry.profile()));
    }
    let profile: TypeProfile = arg
        .parse()
        .with_context(|| format!("'{}' is neither a Kanto species nor a type profile", arg))?;
    Ok((profile.to_string(), profile))
}

fn print_chart(chart: &TypeChart) -> Result<()> {
    let abbrev = |ty: Type| ty.name()[..3].to_uppercase();
    print!("    ");
    for def in Type::ALL {
        print!("{:>4}", abbrev(def));
    }
    println!();
    for atk in Type::ALL {
        print!("{:>4}", abbrev(atk));
        for def in Type::ALL {
            let cell = match chart.lookup(atk, def) {
                m if m == 0.0 => "0",
                m if m == 0.5 => ".5",
                m if m == 2.0 => "2",
                _ => ".",
            };
            print!("{cell:>4}");
        }
        println!();
    }
    Ok(())
}

fn run_matchup(
    move_type: Type,
    defender_arg: &str,
    attacker_arg: Option<&str>,
    json_output: bool,
) -> Result<()> {
    let (defender_label, defender) = resolve_profile(defender_arg)?;
    let attacker = attacker_arg.map(resolve_profile).transpose()?;
    let result = evaluate(
        chart(),
        move_type,
        &defender,
        attacker.as_ref().map(|(_, profile)| profile),
    );
    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    println!(
        "{} vs {} ({}): {}x -- {}",
        move_type,
        defender_label,
        defender,
        result.multiplier,
        result.efficacy.label()
    );
    if result.stab {
        println!("STAB applies: {}x on display", result.display_multiplier);
    }
    Ok(())
}

fn run_coverage(attacking: &[Type], json_output: bool) -> Result<()> {
    let report = attack_coverage(chart(), attacking);
    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("Coverage for {}:", join_types(attacking));
    print_bucket("super effective", &report.super_effective);
    print_bucket("neutral", &report.neutral);
    print_bucket("not very effective", &report.not_very_effective);
    print_bucket("immune", &report.immune);
    Ok(())
}

fn run_suggest(attacking: &[Type], json_output: bool) -> Result<()> {
    let suggestions = suggest_coverage(chart(), attacking);
    if json_output {
        println!("{}", serde_json::to_string_pretty(&json!({ "suggestions": suggestions }))?);
        return Ok(());
    }
    if suggestions.is_empty() {
        println!("No gaps to fill.");
    } else {
        println!("Add coverage: {}", join_types(&suggestions));
    }
    Ok(())
}

fn run_team(roster: &[String], json_output: bool) -> Result<()> {
    if roster.is_empty() {
        bail!("Usage: team <species>... (1-6 members)");
    }
    if roster.len() > 6 {
        bail!("A team holds at most 6 members, got {}", roster.len());
    }
    let members: Vec<&'static Species> = roster
        .iter()
        .map(|name| species(name).ok_or_else(|| anyhow!("Unknown species '{}'", name)))
        .collect::<Result<_>>()?;
    let profiles: Vec<TypeProfile> = members.iter().map(|entry| entry.profile()).collect();

    // The team's offensive set is the union of member STAB types.
    let mut attacking: Vec<Type> = Vec::new();
    for profile in &profiles {
        for ty in profile.types() {
            if !attacking.contains(&ty) {
                attacking.push(ty);
            }
        }
    }

    let report = attack_coverage(chart(), &attacking);
    let suggestions = suggest_coverage(chart(), &attacking);
    let defense = team_defense(chart(), &profiles);

    if json_output {
        let payload = json!({
            "members": members.iter().map(|entry| entry.name).collect::<Vec<_>>(),
            "stab_types": attacking,
            "coverage": report,
            "suggestions": suggestions,
            "defense": defense,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Team:");
    for (entry, profile) in members.iter().zip(&profiles) {
        println!("  #{:03} {} ({})", entry.id, entry.name, profile);
    }
    println!("STAB types: {}", join_types(&attacking));
    print_bucket("super effective", &report.super_effective);
    print_bucket("uncovered", &report.uncovered());
    if suggestions.is_empty() {
        println!("Suggestions: none needed");
    } else {
        println!("Suggestions: {}", join_types(&suggestions));
    }
    print_bucket("shared weaknesses", &defense.weaknesses);
    print_bucket("shared resistances", &defense.resistances);
    Ok(())
}

fn run_defense(roster: &[String], json_output: bool) -> Result<()> {
    if roster.is_empty() {
        bail!("Usage: defense <species>... (1-6 members)");
    }
    if roster.len() > 6 {
        bail!("A team holds at most 6 members, got {}", roster.len());
    }
    let members: Vec<&'static Species> = roster
        .iter()
        .map(|name| species(name).ok_or_else(|| anyhow!("Unknown species '{}'", name)))
        .collect::<Result<_>>()?;
    let profiles: Vec<TypeProfile> = members.iter().map(|entry| entry.profile()).collect();
    let rows = defense_multipliers(chart(), &profiles);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print!("{:>10}", "");
    for entry in &members {
        print!("{:>12}", entry.name);
    }
    println!();
    for row in rows {
        print!("{:>10}", row.attacking.name());
        for mult in row.multipliers {
            print!("{mult:>12}");
        }
        println!();
    }
    Ok(())
}

fn run_quiz(seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let ids: Vec<u16> = (1..=151).collect();
    let id = *ids.choose(&mut rng).expect("non-empty id range");
    let entry = pokemon_coverage::dex::species_by_id(id).expect("dex covers 1-151");
    let move_type = *Type::ALL.as_slice().choose(&mut rng).expect("non-empty");
    let answer = combine(chart(), move_type, &entry.profile());

    println!(
        "How effective is a {} move against {} ({})?",
        move_type,
        entry.name,
        entry.profile()
    );
    print!("Multiplier (0, 0.25, 0.5, 1, 2 or 4): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let guess: f32 = line.trim().parse().context("That is not a number")?;
    if guess == answer {
        println!("Correct! {} -- {}", answer, Efficacy::of(answer).label());
    } else {
        println!("Not quite: {}x -- {}", answer, Efficacy::of(answer).label());
    }
    Ok(())
}

fn join_types(types: &[Type]) -> String {
    types
        .iter()
        .map(|ty| ty.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_bucket(label: &str, types: &[Type]) {
    if types.is_empty() {
        println!("  {label}: -");
    } else {
        println!("  {label}: {}", join_types(types));
    }
}
