use anyhow::{Context, Result};
use inkpress_config::Config;
use inkpress_engine::html_to_markdown;
use std::{env, path::PathBuf, process};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Html,
    Tree,
    Import,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    input: PathBuf,
    mode: Mode,
    config: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut input = None;
    let mut mode = Mode::Html;
    let mut config = None;

    let mut it = args.iter().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--tree" | "--import" if mode != Mode::Html => {
                return Err("--tree and --import are mutually exclusive".into());
            }
            "--tree" => mode = Mode::Tree,
            "--import" => mode = Mode::Import,
            "--config" => {
                let path = it.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument {extra}")),
        }
    }

    Ok(Args {
        input: input.ok_or("missing input file")?,
        mode,
        config,
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    match loaded {
        Some(config) => Ok(config),
        None => {
            if let Some(path) = path {
                log::warn!("Config file {} not found, using defaults", path.display());
            }
            Ok(Config::default())
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    if args.mode == Mode::Import {
        return Ok(html_to_markdown(&text));
    }

    let config = load_config(args.config.as_ref())?;
    let renderer = config.renderer();
    log::info!("Rendering {} ({} bytes)", args.input.display(), text.len());

    match args.mode {
        Mode::Tree => serde_json::to_string_pretty(&renderer.render_tree(&text))
            .context("Failed to serialize node tree"),
        _ => Ok(renderer.render_html(&text)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Usage: {} <file> [--tree|--import] [--config <path>]",
                args.first().map_or("inkpress-cli", String::as_str)
            );
            eprintln!("Default config file: {}", Config::config_path().display());
            process::exit(1);
        }
    };

    println!("{}", run(&parsed)?);
    Ok(())
}
