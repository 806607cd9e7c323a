use aeaconf_rs::condition::{evaluate, parse_rule, Lexer, LocalFilesystem, MacroTable};
use aeaconf_rs::config::{ConfigLoader, ErrorPolicy};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a rule
    Tokens {
        /// The rule to tokenize
        rule: String,
    },
    /// Parse a single rule and print its condition tree
    Parse {
        /// The rule to parse
        rule: String,

        /// Take custom conditions from this configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load a configuration file and print every parsed check
    Check {
        /// Path to the configuration file
        file: PathBuf,

        /// Skip checks whose rule does not parse instead of failing
        #[arg(long)]
        skip_invalid: bool,

        /// Print the checks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate every check against the local filesystem
    Eval {
        /// Path to the configuration file
        file: PathBuf,

        /// Skip checks whose rule does not parse instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
}

fn loader(skip_invalid: bool) -> ConfigLoader {
    if skip_invalid {
        ConfigLoader::with_policy(ErrorPolicy::Skip)
    } else {
        ConfigLoader::new()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Tokens { rule } => {
            let tokens = Lexer::new(&rule).tokenize_all()?;
            for token in tokens {
                println!(
                    "{:>4}  {:<14} {:?}",
                    token.offset,
                    token.kind.to_string(),
                    token.text
                );
            }
        }
        Commands::Parse { rule, config, json } => {
            let macros = match config {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    MacroTable::from(ConfigLoader::parse_yaml(&content)?.custom_conditions)
                }
                None => MacroTable::new(),
            };

            let condition = parse_rule(&rule, &macros)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&condition)?);
            } else {
                println!("{:#?}", condition);
            }
        }
        Commands::Check {
            file,
            skip_invalid,
            json,
        } => {
            let card = loader(skip_invalid)
                .load(&file)
                .with_context(|| format!("failed to load {}", file.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&card)?);
            } else {
                println!("{:#?}", card);
            }
        }
        Commands::Eval { file, skip_invalid } => {
            let card = loader(skip_invalid)
                .load(&file)
                .with_context(|| format!("failed to load {}", file.display()))?;

            log::info!("Evaluating {} checks", card.checks.len());
            let env = LocalFilesystem;
            for check in &card.checks {
                let status = if evaluate(&check.condition, &env) {
                    "PASS"
                } else {
                    "FAIL"
                };
                println!("{}  [{:>3}] {}", status, check.points, check.message);
            }
            for skipped in &card.skipped {
                println!("SKIP  {}: {}", skipped.message, skipped.reason);
            }
        }
    }

    Ok(())
}
