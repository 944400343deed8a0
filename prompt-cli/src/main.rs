//! Command-line interface for prompt
//! This binary parses, inspects and compiles prompt files.
//!
//! Usage:
//!   prompt `<path>`                              - Parse and compile back (round trip)
//!   prompt `<path>` --emit tree                  - Print the segment tree as JSON
//!   prompt `<path>` --emit treeviz               - Print the segment tree one node per line
//!   prompt `<path>` --expand --seed `<n>`        - Compile with seeded wildcard expansion
//!
//! `<path>` may be `-` to read from stdin.

use clap::{Arg, ArgAction, Command};
use std::io::Read;

use prompt_parser::prompt::compiling::{compile, CompileOptions};
use prompt_parser::prompt::formats::to_treeviz_str;
use prompt_parser::prompt::parsing::parse;

fn main() {
    env_logger::init();

    let matches = Command::new("prompt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and compiling prompt files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the prompt file, or '-' for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .short('e')
                .help("Output format: 'text', 'tree', or 'treeviz'")
                .default_value("text"),
        )
        .arg(
            Arg::new("expand")
                .long("expand")
                .help("Resolve presets and inline alternations while compiling")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .help("Seed for wildcard expansion")
                .default_value("0"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .help("Recursion guard for nested alternations")
                .default_value("50"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let emit = matches.get_one::<String>("emit").expect("has default");
    let seed = parse_number::<u64>(matches.get_one::<String>("seed"), "seed");
    let max_depth = parse_number::<usize>(matches.get_one::<String>("max-depth"), "max-depth");

    let source = read_source(path);
    let tree = parse(&source);

    let output = match emit.as_str() {
        "text" => compile(
            &tree,
            &CompileOptions {
                expand_wildcards: matches.get_flag("expand"),
                seed,
                max_depth,
            },
        ),
        "tree" => serde_json::to_string_pretty(&tree).unwrap_or_else(|e| {
            eprintln!("Error serializing tree: {}", e);
            std::process::exit(1);
        }),
        "treeviz" => to_treeviz_str(&tree),
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: text, tree, treeviz");
            std::process::exit(1);
        }
    };

    println!("{}", output.trim_end_matches('\n'));
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        return buffer;
    }
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", path, e);
        std::process::exit(1);
    })
}

fn parse_number<T: std::str::FromStr>(raw: Option<&String>, flag: &str) -> T {
    let raw = raw.expect("flag has a default value");
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value '{}' for --{}", raw, flag);
        std::process::exit(1);
    })
}
