//! stylescan CLI
//!
//! Entry point for the `stylescan` command-line tool.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use stylescan::{resolve_build, ContentSet, ResolvedTheme, StyleConfig};

#[derive(Parser)]
#[command(name = "stylescan")]
#[command(
    about = "Content scanning and theme resolution for utility-class CSS generation",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the project configuration
    Verify {
        /// Path to config file (default: stylescan.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List the files selected by the content patterns
    Content {
        /// Path to config file (default: stylescan.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved theme
    Theme {
        /// Path to config file (default: stylescan.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,
    },

    /// Emit the full build input artifact
    Build {
        /// Path to config file (default: stylescan.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Write the artifact to a file instead of stdout
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Verify { config, json } => run_verify(config, json),
        Commands::Content { config, json } => run_content(config, json),
        Commands::Theme { config, human } => run_theme(config, human),
        Commands::Build { config, out } => run_build(config, out),
    }
}

fn config_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from("stylescan.toml"))
}

/// Content patterns resolve against the directory holding the config file
fn build_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn load_config(path: &Path) -> StyleConfig {
    match StyleConfig::from_file(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(2);
        }
    }
}

fn run_verify(config: Option<PathBuf>, json: bool) {
    let path = config_path(config);

    match StyleConfig::from_file(&path) {
        Ok(config) => {
            if json {
                let output = serde_json::json!({
                    "ok": true,
                    "path": path.display().to_string(),
                    "digest": config.source.digest,
                    "content_patterns": config.content.len(),
                });
                print_json(&output);
            } else {
                println!("Configuration valid: {}", path.display());
                println!();
                println!("  Content patterns: {}", config.content.len());
                if let Some(ref families) = config.theme.font_family {
                    println!(
                        "  Font families: {}",
                        families.keys().cloned().collect::<Vec<_>>().join(", ")
                    );
                }
                if let Some(ref screens) = config.theme.screens {
                    println!("  Screens: {}", screens.len());
                }
                if config.theme.extend.is_some() {
                    println!("  Extend: present");
                }
            }
        }
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(2);
        }
    }
}

fn run_content(config: Option<PathBuf>, json: bool) {
    let path = config_path(config);
    let config = load_config(&path);

    let content = match ContentSet::new(&config.content) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Content pattern error: {}", e);
            process::exit(2);
        }
    };

    let files = match content.resolve(&build_root(&path)) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error resolving content: {}", e);
            process::exit(3);
        }
    };

    if json {
        let output: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
        print_json(&output);
    } else {
        for file in &files {
            println!("{}", file.display());
        }
    }
}

fn run_theme(config: Option<PathBuf>, human: bool) {
    let path = config_path(config);
    let config = load_config(&path);

    let theme = match ResolvedTheme::resolve(&config.theme) {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!("Theme error: {}", e);
            process::exit(2);
        }
    };

    if human {
        println!("font_family:");
        for (family, stack) in &theme.font_family {
            println!("  {}: {}", family, stack.to_css());
        }
        println!("screens:");
        for (name, width) in &theme.screens {
            println!("  {}: {}", name, width.as_str());
        }
    } else {
        print_json(&theme);
    }
}

fn run_build(config: Option<PathBuf>, out: Option<PathBuf>) {
    let path = config_path(config);
    let config = load_config(&path);

    let input = match resolve_build(&config, &build_root(&path)) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Build resolution error: {}", e);
            process::exit(e.exit_code());
        }
    };

    match out {
        Some(out_path) => {
            if let Err(e) = input.write_to_file(&out_path) {
                eprintln!("Error writing artifact: {}", e);
                process::exit(e.exit_code());
            }
            println!("Wrote {}", out_path.display());
        }
        None => match input.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(4);
            }
        },
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(4);
        }
    }
}
