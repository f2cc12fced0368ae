//! Command-line interface for bnfdoc
//! This binary renders a parsed grammar AST (JSON, produced by an upstream parser) into
//! human-readable grammar notation through one of the registered output backends.
//!
//! Usage:
//!   bnfdoc `<grammar.json>` [--format `<format>`] [--out `<path>` | --save]
//!   bnfdoc --list-formats

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, Command};

use bnfdoc_grammar::Grammar;
use bnfdoc_render::{derive_output_path, render_grammar, BackendRegistry, OutputTarget};

fn main() {
    let matches = Command::new("bnfdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a parsed grammar back into human-readable notation")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the grammar AST file (JSON)")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (or 'ast-json' to echo the parsed AST)")
                .default_value("text"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .help("Write output to this file (default: standard output)"),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .help("Write output next to the input, extension chosen by the format")
                .action(ArgAction::SetTrue)
                .conflicts_with("out"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let format = matches.get_one::<String>("format").unwrap();
    handle_render(
        path,
        format,
        matches.get_one::<String>("out"),
        matches.get_flag("save"),
    );
}

/// Handle the list-formats command
fn handle_list_formats() {
    let registry = BackendRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        let backend = registry.get(&name).expect("listed backend exists");
        println!("  {}", name);
        println!("    {}", backend.description());
        println!();
    }
}

/// Handle the render command
fn handle_render(path: &str, format: &str, out: Option<&String>, save: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    let grammar: Grammar = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error parsing {}: {}", path, e);
        std::process::exit(1);
    });

    if format == "ast-json" {
        let pretty = serde_json::to_string_pretty(&grammar).unwrap_or_else(|e| {
            eprintln!("Error formatting AST: {}", e);
            std::process::exit(1);
        });
        println!("{}", pretty);
        return;
    }

    let registry = BackendRegistry::with_defaults();
    let backend = registry.get(format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("\nAvailable output formats:");
        for name in registry.list_formats() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });

    let target = if let Some(out) = out {
        OutputTarget::File(PathBuf::from(out))
    } else if save {
        OutputTarget::File(derive_output_path(Path::new(path), backend.extension()))
    } else {
        OutputTarget::Stdout
    };

    let mut generator = backend.create(&grammar, target);
    render_grammar(&grammar, generator.as_mut());
}
