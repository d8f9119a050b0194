use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use feedtext_core::{
    ConversionMode, CustomRule, ScriptConverter, classify_code, format_for_language, normalize_rules,
    parse_rules_json, rules_fingerprint,
};

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Text processing for feed readers
#[derive(Parser, Debug)]
#[command(name = "feedtext")]
#[command(author = "Feedtext Contributors")]
#[command(version = VERSION)]
#[command(about = "Code-language detection and Chinese script conversion", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Guess the programming language of a code snippet
    Classify {
        /// Code file, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Print a JSON object instead of the bare tag
        #[arg(long)]
        json: bool,

        /// Print the (pretty-printed when JSON) snippet instead of the tag
        #[arg(long)]
        format: bool,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert Chinese script inside text or HTML
    Convert {
        /// HTML or text file, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Conversion mode (off, s2t, s2tw, s2hk, t2s, t2tw, t2hk)
        #[arg(short, long, value_name = "MODE")]
        mode: ConversionMode,

        /// JSON file with custom rules: an array of {"from", "to"} objects
        #[arg(long, value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Treat the input as plain text instead of HTML
        #[arg(long)]
        text: bool,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Inspect custom conversion rules
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum RulesCommand {
    /// Normalize a rule file and print its fingerprint (the cache key)
    Fingerprint {
        /// Rules JSON file, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,
    },
}

/// Read from a file, or from stdin when the input is "-".
fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

fn load_rules(path: Option<&Path>) -> anyhow::Result<Vec<CustomRule>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    let rules = parse_rules_json(&json).with_context(|| format!("Invalid rules file: {}", path.display()))?;
    Ok(rules)
}

fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display()));
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

fn run_classify(input: &str, json: bool, format: bool, output: Option<&Path>, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        echo::print_step(1, 2, "Reading code snippet");
    }
    let code = read_input(input)?;
    if verbose {
        echo::print_detail("Size", &echo::format_size(code.len()));
        echo::print_step(2, 2, "Classifying");
    }

    let tag = classify_code(&code);
    if verbose {
        echo::print_detail("Language", tag.as_str());
    }

    let rendered = if format {
        format_for_language(&code, tag)
    } else if json {
        serde_json::json!({ "language": tag }).to_string() + "\n"
    } else {
        format!("{}\n", tag)
    };

    write_output(output, &rendered)
}

fn run_convert(
    input: &str, mode: ConversionMode, rules_path: Option<&Path>, text: bool, output: Option<&Path>, verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        echo::print_step(1, 3, "Reading input");
    }
    let content = read_input(input)?;
    let rules = load_rules(rules_path)?;

    if verbose {
        echo::print_detail("Size", &echo::format_size(content.len()));
        echo::print_detail("Mode", mode.label());
        let effective = normalize_rules(&rules);
        echo::print_detail("Rules", &effective.len().to_string());
        echo::print_step(2, 3, if text { "Converting text" } else { "Converting HTML" });
    }

    let converter = ScriptConverter::new();
    let converted = if text {
        converter.convert_text(&content, mode, &rules)
    } else {
        converter.convert_html(&content, mode, &rules)
    };

    if verbose {
        echo::print_step(3, 3, "Writing output");
    }
    write_output(output, &converted)
}

fn run_rules_fingerprint(input: &str, verbose: bool) -> anyhow::Result<()> {
    let json = read_input(input)?;
    let rules = parse_rules_json(&json).context("Invalid rules input")?;

    if verbose {
        echo::print_detail("Rules", &rules.len().to_string());
    }
    println!("{}", rules_fingerprint(&rules));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
        echo::print_info("Verbose diagnostics enabled");
        eprintln!();
    }

    match args.command {
        Command::Classify { input, json, format, output } => {
            run_classify(&input, json, format, output.as_deref(), args.verbose)
        }
        Command::Convert { input, mode, rules, text, output } => {
            run_convert(&input, mode, rules.as_deref(), text, output.as_deref(), args.verbose)
        }
        Command::Rules { command } => match command {
            RulesCommand::Fingerprint { input } => run_rules_fingerprint(&input, args.verbose),
        },
    }
}
