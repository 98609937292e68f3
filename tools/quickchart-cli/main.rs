use clap::Parser;
use quickchart_formulas::prelude::*;
use std::fs;
use std::io::{self, Write};

/// Build QuickChart image URLs from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Formula to run (WordCloud, QRCode, GraphNodes, Chart)
    formula: Option<String>,
    /// Positional arguments as a JSON array, `null` for unset values
    args_json: Option<String>,

    /// Read the JSON argument array from a file instead
    #[arg(short = 'f', long)]
    args_file: Option<String>,

    /// Path to a pack config JSON file (baseUrl, palette)
    #[arg(short, long)]
    config: Option<String>,

    /// List the available formulas and their parameters
    #[arg(short, long)]
    list: bool,

    /// Run in interactive mode to be prompted for each parameter
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PackConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => PackConfig::default(),
    };
    let pack = FormulaPack::builder().with_config(config).build();

    if cli.list {
        print_formulas(&pack);
    } else if cli.human {
        run_interactive(&pack);
    } else {
        run_non_interactive(&pack, cli);
    }
}

fn print_formulas(pack: &FormulaPack) {
    for name in pack.names() {
        let Some(formula) = pack.get(name) else {
            continue;
        };
        println!("{}", name);
        println!("  {}", formula.description());
        for param in formula.parameters() {
            print_parameter(param, "");
        }
        for param in formula.vararg_parameters() {
            print_parameter(param, " (repeatable)");
        }
        if formula.cache_ttl_secs() == Some(0) {
            println!("  -> Result is never cached");
        }
        println!();
    }
}

fn print_parameter(param: &ParameterSpec, suffix: &str) {
    let requirement = if param.optional { "optional" } else { "required" };
    let default = param
        .default_value
        .map_or(String::new(), |d| format!(", default {}", d));
    println!(
        "    {:<16} {} ({}{}){}: {}",
        param.name, param.kind, requirement, default, suffix, param.description
    );
}

fn run_formula(pack: &FormulaPack, name: &str, args: &[Option<ParamValue>]) {
    let url = pack
        .execute(name, args)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!("{}", url);
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(pack: &FormulaPack, cli: Cli) {
    let name = cli.formula.unwrap_or_else(|| {
        exit_with_error("A formula name is required. Use --list to see the available formulas.")
    });

    let args_json = match (cli.args_json, cli.args_file) {
        (Some(json), _) => json,
        (None, Some(path)) => fs::read_to_string(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read arguments file '{}': {}", path, e))
        }),
        (None, None) => "[]".to_string(),
    };

    let args: Vec<Option<ParamValue>> = serde_json::from_str(&args_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse arguments JSON: {}", e)));

    run_formula(pack, &name, &args);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(pack: &FormulaPack) {
    println!("--- QuickChart Interactive Mode ---");
    println!("Formulas: {}", pack.names().join(", "));

    let name = prompt_for_input("Enter formula", Some("WordCloud"));
    let Some(formula) = pack.get(&name) else {
        exit_with_error(&format!("Unknown formula '{}'", name));
    };

    let mut args = Vec::new();
    for param in formula.parameters() {
        args.push(prompt_for_value(param));
    }

    if !formula.vararg_parameters().is_empty() {
        loop {
            let more = prompt_for_input("Add another group of repeated parameters? (y/n)", Some("n"));
            if !more.eq_ignore_ascii_case("y") {
                break;
            }
            for param in formula.vararg_parameters() {
                args.push(prompt_for_value(param));
            }
        }
    }

    // Unset trailing values are the same as omitted ones.
    while formula.vararg_parameters().is_empty() && matches!(args.last(), Some(None)) {
        args.pop();
    }

    println!();
    run_formula(pack, &name, &args);
}

/// Prompts for one parameter and parses the answer as JSON, falling back to a plain string.
fn prompt_for_value(param: &ParameterSpec) -> Option<ParamValue> {
    let label = format!("{} ({})", param.name, param.kind);
    let input = prompt_for_input(&label, None);
    if input.is_empty() {
        return None;
    }
    match param.kind {
        ParamKind::String => Some(ParamValue::String(input)),
        _ => serde_json::from_str(&input).unwrap_or_else(|e| {
            exit_with_error(&format!("Invalid value for '{}': {}", param.name, e))
        }),
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
