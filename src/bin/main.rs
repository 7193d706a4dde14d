use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use suidgen::render::hex_dump;
use suidgen::semantic::ClassHierarchy;
use suidgen::{canonical_bytes_of, serial_version_uids, Config, InterfaceMode};

#[derive(Parser)]
#[command(name = "suidgen")]
#[command(about = "Default serialVersionUID calculator")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute serialVersionUIDs for classes in a snapshot
    Compute {
        /// Snapshot file, or a directory searched for *.json
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Only this class (binary name)
        #[arg(short, long, value_name = "NAME")]
        class: Option<String>,

        /// Interface collection: direct or transitive
        #[arg(long, value_name = "MODE")]
        interfaces: Option<String>,

        /// Print the field declaration instead of the bare value
        #[arg(long)]
        field: bool,

        /// Omit the @Serial annotation from --field output
        #[arg(long)]
        no_annotation: bool,

        /// Hash classes exactly as declared, without adding java.io.Serializable
        #[arg(long)]
        as_declared: bool,
    },

    /// Dump the canonical encoding of a class as hex
    Encode {
        /// Snapshot file, or a directory searched for *.json
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Class to encode (binary name)
        #[arg(short, long, value_name = "NAME")]
        class: String,

        /// Interface collection: direct or transitive
        #[arg(long, value_name = "MODE")]
        interfaces: Option<String>,

        /// Hash the class exactly as declared, without adding java.io.Serializable
        #[arg(long)]
        as_declared: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    config.debug |= cli.verbose;
    init_logging(config.debug);

    match &cli.command {
        Commands::Compute { input, class, interfaces, field, no_annotation, as_declared } => {
            let mut config = with_mode(config, interfaces.as_deref())?.with_serial_annotation(!*no_annotation);
            config.add_serializable &= !*as_declared;
            compute(input, class.as_deref(), *field, &config)?;
        }
        Commands::Encode { input, class, interfaces, as_declared } => {
            let mut config = with_mode(config, interfaces.as_deref())?;
            config.add_serializable &= !*as_declared;
            encode_class(input, class, &config)?;
        }
    }

    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    let _ = env_logger::builder().filter_level(level).parse_default_env().try_init();
}

fn with_mode(config: Config, mode: Option<&str>) -> Result<Config> {
    match mode {
        Some(mode) => Ok(config.with_interface_mode(mode.parse::<InterfaceMode>()?)),
        None => Ok(config),
    }
}

fn load(input: &Path) -> Result<ClassHierarchy> {
    let hierarchy = ClassHierarchy::load(input).with_context(|| format!("loading {}", input.display()))?;
    log::debug!("loaded {} classes from {}", hierarchy.len(), input.display());
    Ok(hierarchy)
}

fn compute(input: &Path, class: Option<&str>, field: bool, config: &Config) -> Result<()> {
    let hierarchy = load(input)?;
    let reports = serial_version_uids(&hierarchy, class, config)
        .with_context(|| format!("computing serialVersionUID from {}", input.display()))?;

    for report in reports {
        if report.declared {
            log::warn!("{} already declares serialVersionUID", report.class);
        }
        println!("{}", report.render(field, config.serial_annotation));
    }

    Ok(())
}

fn encode_class(input: &Path, class: &str, config: &Config) -> Result<()> {
    let hierarchy = load(input)?;
    let bytes = canonical_bytes_of(&hierarchy, class, config).with_context(|| format!("encoding {}", class))?;
    if !bytes.is_empty() {
        println!("{}", hex_dump(&bytes));
    }
    Ok(())
}
