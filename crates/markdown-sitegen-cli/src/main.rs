use anyhow::{Context, Result};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{copy_static, generate_pages_recursive};
use std::{env, process};

enum Command {
    Build { base_path: Option<String> },
    Init,
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [] => Some(Command::Build { base_path: None }),
        [cmd] if cmd == "init" => Some(Command::Init),
        [cmd] if cmd == "build" => Some(Command::Build { base_path: None }),
        [cmd, base] if cmd == "build" => Some(Command::Build {
            base_path: Some(base.clone()),
        }),
        [base] if !base.starts_with('-') => Some(Command::Build {
            base_path: Some(base.clone()),
        }),
        _ => None,
    }
}

/// Splits argv into the program name and its arguments; argv may be empty.
fn program_and_args(args: &[String]) -> (&str, &[String]) {
    match args {
        [program, rest @ ..] => (program, rest),
        [] => ("markdown-sitegen", &[]),
    }
}

fn load_config() -> Result<Config> {
    let config_path = Config::config_path();
    match Config::load()? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None => {
            log::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Ok(Config::default())
        }
    }
}

fn build(base_path: Option<String>) -> Result<()> {
    let mut config = load_config()?;
    if let Some(base_path) = base_path {
        config.base_path = base_path;
    }

    log::info!(
        "Copying {} to {}",
        config.static_dir.display(),
        config.output_dir.display()
    );
    let copied = copy_static(&config.static_dir, &config.output_dir).with_context(|| {
        format!(
            "Failed to copy static assets from {}",
            config.static_dir.display()
        )
    })?;

    log::info!("Generating pages from {}", config.content_dir.display());
    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.base_path,
    )
    .context("Failed to generate pages")?;

    log::info!(
        "Site generation complete: {} pages, {copied} static files, base path {}",
        pages.len(),
        config.base_path
    );
    Ok(())
}

fn init() -> Result<()> {
    let config_path = Config::config_path();
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }
    Config::default().save_to_path(&config_path)?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let (program, rest) = program_and_args(&args);
    let Some(command) = parse_args(rest) else {
        eprintln!("Usage: {program} [build] [base-path]");
        eprintln!("       {program} init");
        process::exit(1);
    };

    match command {
        Command::Build { base_path } => build(base_path),
        Command::Init => init(),
    }
}
