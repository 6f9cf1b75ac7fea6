mod cli;

use autotag::config::{self, API_KEY_ENV};
use autotag::metadata::providers::TmdbProvider;
use autotag::{
    process_file, ConsoleSelector, MovieProcessor, Parser as FilenameParser, ReportFormat,
    ReportWriter, TracingStatus,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "autotag=debug,autotag_parser=debug,autotag_core=debug".to_string()
        } else {
            "autotag=info,autotag_parser=info,autotag_core=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Tag {
            files,
            manual,
            json,
        } => tag_files(&files, cli.config.as_deref(), manual, json),
        Commands::Parse { names, json } => parse_names(&names, json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("autotag {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn tag_files(
    files: &[PathBuf],
    config_path: Option<&Path>,
    manual: bool,
    json: bool,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    if manual {
        config.resolution.manual_mode = true;
    }

    if config.tmdb.api_key.is_empty() {
        anyhow::bail!(
            "No TMDB API key configured; set [tmdb] api_key or the {} environment variable",
            API_KEY_ENV
        );
    }

    let provider = TmdbProvider::new(config.tmdb.api_key.clone(), config.tmdb.language.clone())?
        .with_base_url(config.tmdb.base_url.as_str());
    let processor = MovieProcessor::new(Arc::new(provider), config.resolution);

    let format = if json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    let writer = ReportWriter::new(format);

    // Files are processed one at a time so selector prompts never interleave.
    let rt = tokio::runtime::Runtime::new()?;
    let failed = rt.block_on(async {
        let mut failed = 0usize;
        for file in files {
            tracing::debug!("Tagging file: {:?}", file);
            if !process_file(&processor, file, &ConsoleSelector, &TracingStatus, &writer).await {
                failed += 1;
            }
        }
        failed
    });

    if failed > 0 {
        anyhow::bail!("{} of {} files could not be fully tagged", failed, files.len());
    }
    Ok(())
}

fn parse_names(names: &[String], json: bool) -> Result<()> {
    let parser = FilenameParser::new();
    let mut failed = 0usize;

    for name in names {
        match parser.parse(name) {
            Ok(key) if json => {
                let line = serde_json::json!({ "file": name, "key": key });
                println!("{}", serde_json::to_string(&line)?);
            }
            Ok(key) => {
                println!("{}", name);
                println!("  Title: {}", key.title);
                match key.year {
                    Some(year) => println!("  Year: {}", year),
                    None => println!("  Year: -"),
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}", e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} names could not be parsed", failed, names.len());
    }
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    println!("  TMDB language: {}", config.tmdb.language);
    println!("  TMDB base URL: {}", config.tmdb.base_url);
    println!(
        "  TMDB API key: {}",
        if config.tmdb.api_key.is_empty() {
            "not set"
        } else {
            "set"
        }
    );
    println!("  Manual mode: {}", config.resolution.manual_mode);

    Ok(())
}
