use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{info, warn};
use osmose_docconf::{
    generator_values, to_json, to_yaml, BuildDescriptor, DocConfig, Overrides, ProjectInfo,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "osmose-docconf",
    version,
    about = "Resolve and emit the OSMOSE documentation build configuration"
)]
struct Cli {
    /// Documentation root holding the reStructuredText sources
    #[arg(long, global = true, default_value = ".")]
    doc_root: PathBuf,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the configuration and emit the generator values
    Resolve {
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: EmitFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Inspect the documentation tree for problems
    Check,
    /// Print the release version read from the build descriptor
    Version,
}

#[derive(ValueEnum, Clone, Debug)]
enum EmitFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Resolve { format, output } => resolve(&cli.doc_root, format, output),
        Command::Check => check(&cli.doc_root),
        Command::Version => version(&cli.doc_root),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn resolve(doc_root: &Path, format: EmitFormat, output: Option<PathBuf>) -> Result<()> {
    let config = DocConfig::resolve(doc_root)
        .with_context(|| format!("Failed to resolve configuration at {}", doc_root.display()))?;
    let values = generator_values(&config);
    let rendered = match format {
        EmitFormat::Json => to_json(&values).context("Failed to render JSON")?,
        EmitFormat::Yaml => to_yaml(&values).context("Failed to render YAML")?,
    };
    let rendered = rendered.trim_end();
    match output {
        Some(path) => {
            fs::write(&path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} values to {}", values.len(), path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn check(doc_root: &Path) -> Result<()> {
    let config = DocConfig::resolve(doc_root)
        .with_context(|| format!("Failed to resolve configuration at {}", doc_root.display()))?;
    let findings = config.check();
    if findings.is_empty() {
        info!("No problems found under {}", doc_root.display());
        return Ok(());
    }
    for finding in &findings {
        warn!("{}: {}", finding.subject, finding.detail);
    }
    anyhow::bail!("{} problem(s) found", findings.len())
}

fn version(doc_root: &Path) -> Result<()> {
    let overrides = Overrides::load(doc_root)?;
    let mut project = ProjectInfo::default();
    if let Some(section) = &overrides.project {
        project.apply(section);
    }
    let descriptor = BuildDescriptor::new(project.descriptor_path(doc_root));
    let version = descriptor
        .extract_version()
        .with_context(|| format!("Failed to read the release version for {}", project.name))?;
    println!("{}", version);
    Ok(())
}
