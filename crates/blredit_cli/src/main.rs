use std::fs;
use std::path::PathBuf;
use std::process;

use blredit_core::core_api::{CoreError, ItemCatalog};
use blredit_core::share_code::{decode_share_code, encode_share_code, from_json, to_json_pretty};
use blredit_core::shareable::{LoadoutSet, Shareable3LoadoutSet};
use blredit_render::{
    JsonStyle, TextRenderOptions, render_json_loadout, render_json_profile, render_loadout_sheet,
    render_profile_sheet,
};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::debug;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// JSON if it parses, otherwise a share code.
    #[default]
    Auto,
    Json,
    Code,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Loadout set as JSON or as a share code.
    #[arg(value_name = "INPUT")]
    path: PathBuf,
    /// Item catalog JSON.
    #[arg(long, env = "BLREDIT_CATALOG", value_name = "PATH")]
    catalog: PathBuf,
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,
    /// Only show one loadout: 1 and 2 select the second and third, anything else the first.
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    loadout: Option<i32>,
    #[arg(long, conflicts_with_all = ["encode", "export_json"])]
    json: bool,
    /// Print the normalized share code.
    #[arg(long, conflicts_with_all = ["export_json", "loadout"])]
    encode: bool,
    /// Print the normalized loadout set JSON.
    #[arg(long = "export-json")]
    export_json: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = ItemCatalog::load_from_path(&cli.catalog).unwrap_or_else(|e| {
        eprintln!("Error loading item catalog {}:", cli.catalog.display());
        eprintln!("  {}", e);
        process::exit(1);
    });

    let input = fs::read_to_string(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });

    let set = parse_input(&input, cli.format).unwrap_or_else(|e| {
        eprintln!("Error parsing loadout set: {}", cli.path.display());
        eprintln!("  {}", e);
        process::exit(1);
    });

    let profile = set.to_profile(&catalog);

    if cli.encode || cli.export_json {
        let normalized = Shareable3LoadoutSet::from_profile(&profile, &catalog);
        let output = if cli.encode {
            encode_share_code(&normalized)
        } else if let Some(requested) = cli.loadout {
            to_json_pretty(normalized.get_loadout(requested))
        } else {
            to_json_pretty(&normalized)
        };
        match output {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error exporting loadout set: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let selected = cli.loadout.map(Shareable3LoadoutSet::loadout_index);
    if cli.json {
        let value = match selected {
            Some(index) => render_json_loadout(profile.loadouts()[index], JsonStyle::default()),
            None => render_json_profile(&profile, JsonStyle::default()),
        };
        match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing JSON output: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let options = TextRenderOptions {
        verbose: cli.verbose,
    };
    let sheet = match selected {
        Some(index) => render_loadout_sheet(profile.loadouts()[index], index, options),
        None => render_profile_sheet(&profile, options),
    };
    print!("{sheet}");
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn parse_input(input: &str, format: InputFormat) -> Result<Shareable3LoadoutSet, CoreError> {
    match format {
        InputFormat::Json => from_json(input),
        InputFormat::Code => decode_share_code(input),
        InputFormat::Auto => from_json(input).or_else(|e| {
            debug!("input is not loadout JSON ({e}), trying share code");
            decode_share_code(input)
        }),
    }
}
