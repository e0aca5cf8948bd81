use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use regrant::model::{FunctionConfig, Template};
use regrant::naming::canonical_function_id;
use regrant::rewrite::{build_alias_lookup, rewrite_permissions};

#[derive(Parser)]
#[command(name = "regrant")]
#[command(about = "Re-point permission grants at canary aliases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite provisioned-alias permission grants in a template
    Rewrite {
        /// Assembled template (JSON)
        #[arg(long)]
        template: PathBuf,
        /// Functions config (JSON map of function name -> config)
        #[arg(long)]
        functions: Option<PathBuf>,
        /// Write the rewritten template here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Emit the rewrite report as JSON on stdout (combine with --out to
        /// also keep the template)
        #[arg(long)]
        json: bool,
    },

    /// Print the alias lookup derived from the functions config
    Aliases {
        /// Functions config (JSON map of function name -> config)
        #[arg(long)]
        functions: PathBuf,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rewrite {
            template,
            functions,
            out,
            json,
        } => {
            let mut tpl = read_template(&template)?;
            let functions = match functions {
                Some(path) => read_functions(&path)?,
                None => BTreeMap::new(),
            };

            let report = rewrite_permissions(
                &mut tpl.resources,
                functions.keys().map(String::as_str),
                |name| functions.get(name),
                canonical_function_id,
            );

            for warning in &report.warnings {
                eprintln!("warning: {}", warning);
            }

            let tpl_bytes = serde_json::to_vec_pretty(&tpl).context("serialize template")?;
            match (&out, json) {
                (Some(path), _) => fs::write(path, &tpl_bytes)
                    .with_context(|| format!("write {}", path.display()))?,
                (None, false) => println!("{}", String::from_utf8_lossy(&tpl_bytes)),
                (None, true) => {}
            }
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serialize report")?
                );
            }
        }
        Commands::Aliases { functions, json } => {
            let functions = read_functions(&functions)?;
            let lookup = build_alias_lookup(
                functions.keys().map(String::as_str),
                |name| functions.get(name),
                canonical_function_id,
            );
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&lookup).context("serialize lookup")?
                );
            } else {
                for (function_id, alias) in &lookup {
                    println!("{} -> {}", function_id, alias);
                }
            }
        }
    }

    Ok(())
}

fn read_template(path: &Path) -> Result<Template> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse template {}", path.display()))
}

fn read_functions(path: &Path) -> Result<BTreeMap<String, FunctionConfig>> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("parse functions config {}", path.display()))
}
