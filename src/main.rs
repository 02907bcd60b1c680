use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use fluent_pattern::{CompileOptions, Scope, recipe};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recipe file (read from stdin if omitted)
    #[arg(value_name = "RECIPE")]
    recipe: Option<PathBuf>,

    /// Anchoring: anywhere, starts-with, ends-with or full-line
    #[arg(long, default_value = "anywhere")]
    scope: Scope,

    /// Case-insensitive matching
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// `^` and `$` match at line boundaries
    #[arg(short = 'm', long)]
    multi_line: bool,

    /// `.` also matches newline
    #[arg(short = 's', long)]
    dot_all: bool,

    /// Input to match against the built pattern (repeatable)
    #[arg(short = 't', long = "test", value_name = "INPUT")]
    tests: Vec<String>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let source = match args.recipe.as_ref() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .context("Failed to read stdin")?;
            contents
        }
    };

    let builder = recipe::build(&source, args.scope)?;
    println!("{}", builder);

    let options = CompileOptions {
        case_insensitive: args.ignore_case,
        multi_line: args.multi_line,
        dot_matches_new_line: args.dot_all,
    };
    let regex = builder
        .compile_with(&options)
        .context("Pattern does not compile")?;

    for input in &args.tests {
        let Some(caps) = regex.captures(input)? else {
            println!("{:?}: no match", input);
            continue;
        };
        let groups = caps
            .iter()
            .zip(regex.capture_names())
            .enumerate()
            .skip(1)
            .map(|(index, (group, name))| {
                let label = name.map_or_else(|| index.to_string(), str::to_string);
                match group {
                    Some(m) => format!("{}={:?}", label, m.as_str()),
                    None => format!("{}=<unset>", label),
                }
            })
            .join(" ");
        let whole = caps.get(0).map_or("", |m| m.as_str());
        if groups.is_empty() {
            println!("{:?}: match {:?}", input, whole);
        } else {
            println!("{:?}: match {:?} {}", input, whole, groups);
        }
    }
    Ok(())
}
