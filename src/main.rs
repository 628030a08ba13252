// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{anyhow, Context, Result};
use harmony::config::{validate_config, HarmonyFile};
use harmony::{Harmony, HarmonyRegistry, Note, PitchValue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, Level};

fn print_usage() {
    println!("HARMONY - Notes, Scales and Chords");
    println!();
    println!("Usage: harmony [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --list-scales            List scale factory names and aliases");
    println!("  --list-chords            List chord factory names and aliases");
    println!("  --scale <ROOT> <NAME>    Print the notes of a scale (e.g. --scale D dorian)");
    println!("  --chord <ROOT> <NAME>    Print the notes of a chord (e.g. --chord Bb min7)");
    println!("  --triads <ROOT> [NAME]   Print the triad on each degree (default major)");
    println!("  --random [SEED]          Pick a random scale or chord on a random root");
    println!("  --config <FILE>          Load a harmony file and print its scale and chord");
    println!("  --verbose                Enable debug logging");
    println!("  --help                   Show this help message");
}

fn format_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|n| format!("{} ({})", n, n.value()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_harmony(harmony: &Harmony) {
    println!("{}", harmony);
    println!("  {}", format_notes(&harmony.notes()));
}

fn list_names(registry: &HarmonyRegistry, names: Vec<&str>) {
    for name in names {
        let aliases = registry.aliases_of(name);
        if aliases.is_empty() {
            println!("{}", name);
        } else {
            println!("{}  (also: {})", name, aliases.join(", "));
        }
    }
}

fn parse_root(name: &str) -> Result<Note> {
    Note::from_name(name.trim()).with_context(|| format!("Invalid root note: {}", name))
}

fn print_triads(registry: &HarmonyRegistry, root: Note, scale_name: &str) -> Result<()> {
    let scale = registry.scale(scale_name, root)?;
    println!("Triads of {}", scale);
    for (degree, triad) in scale.degree_triads().enumerate() {
        let notes: Vec<Note> = triad.members().into_iter().collect();
        println!("  {}: {}", degree + 1, format_notes(&notes));
    }
    Ok(())
}

fn print_random(registry: &HarmonyRegistry, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let root = Note::new(60).transpose(rng.gen_range(0..12));
    let name = registry
        .random_chord_or_scale_name(&mut rng)
        .ok_or_else(|| anyhow!("Registry is empty"))?;
    debug!(%root, name, "random pick");
    print_harmony(&registry.build(name, root)?);
    Ok(())
}

fn print_config(path: &str) -> Result<()> {
    let file: HarmonyFile = validate_config(path)?;
    let registry = file.registry()?;
    let root = file.root_note()?;
    print_harmony(&Harmony::Scale(registry.scale(&file.harmony.scale, root)?));
    print_harmony(&Harmony::Chord(registry.chord(&file.harmony.chord, root)?));
    if let Some(seed) = file.harmony.seed {
        print_random(&registry, Some(seed))?;
    }
    Ok(())
}

fn require<'a>(args: &'a [String], index: usize, what: &str) -> &'a str {
    match args.get(index) {
        Some(arg) => arg,
        None => {
            eprintln!("Error: {} requires {}", args[0], what);
            print_usage();
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let (flags, args): (Vec<String>, Vec<String>) =
        env::args().skip(1).partition(|a| a == "--verbose");

    let level = if flags.is_empty() { Level::WARN } else { Level::DEBUG };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if args.is_empty() {
        println!("HARMONY - Notes, Scales and Chords");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let registry = HarmonyRegistry::with_builtins();

    match args[0].as_str() {
        "--list-scales" => {
            list_names(&registry, registry.scale_method_names());
        }
        "--list-chords" => {
            list_names(&registry, registry.chord_method_names());
        }
        "--scale" => {
            let root = parse_root(require(&args, 1, "a root note"))?;
            let name = require(&args, 2, "a scale name");
            print_harmony(&Harmony::Scale(registry.scale(name, root)?));
        }
        "--chord" => {
            let root = parse_root(require(&args, 1, "a root note"))?;
            let name = require(&args, 2, "a chord name");
            print_harmony(&Harmony::Chord(registry.chord(name, root)?));
        }
        "--triads" => {
            let root = parse_root(require(&args, 1, "a root note"))?;
            let name = args.get(2).map(String::as_str).unwrap_or("major_scale");
            print_triads(&registry, root, name)?;
        }
        "--random" => {
            let seed = match args.get(1) {
                Some(s) => Some(
                    s.parse::<u64>()
                        .map_err(|_| anyhow!("Invalid seed: {}", s))?,
                ),
                None => None,
            };
            print_random(&registry, seed)?;
        }
        "--config" => {
            print_config(require(&args, 1, "a file path"))?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[0]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
