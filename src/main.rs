use std::io::{self, Write};
use std::path::PathBuf;

use atomik::{
    Catalog, ConfigEmitter, Generate, GenerateOptions, default_catalog, extract_with, load_caller_config, overlay,
    validate,
};
use thiserror::Error;

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_target(false).init();

    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

struct CliConfig {
    files: Vec<PathBuf>,
    config_file: Option<PathBuf>,
    config_inline: Option<String>,
    catalog: Option<PathBuf>,
    out: Option<PathBuf>,
    require: Vec<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Run(#[from] atomik::Error),
    #[error(transparent)]
    Config(#[from] atomik::ConfigError),
    #[error(transparent)]
    Catalog(#[from] atomik::CatalogError),
    #[error(transparent)]
    Shape(#[from] atomik::ShapeError),
    #[error(transparent)]
    Generate(#[from] atomik::GenerateError),
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// 2 for anything the operator can fix on the command line or in a
    /// configuration file, 1 otherwise.
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Catalog(_) | CliError::Shape(_) => 2,
            CliError::Run(atomik::Error::Shape(_) | atomik::Error::Config(_) | atomik::Error::Catalog(_)) => 2,
            _ => 1,
        }
    }
}

fn run(cli: &CliConfig) -> Result<(), CliError> {
    let loaded_catalog;
    let catalog: &Catalog = match &cli.catalog {
        Some(path) => {
            loaded_catalog = Catalog::from_file(path)?;
            &loaded_catalog
        }
        None => default_catalog(),
    };

    // Each configuration surface is validated under its own flag name before
    // the two are merged.
    let from_file = match &cli.config_file {
        Some(path) => {
            let config = load_caller_config(Some(path.as_path()), None)?;
            validate(&config, "--config-file")?;
            Some(config)
        }
        None => None,
    };
    let from_inline = match &cli.config_inline {
        Some(json) => {
            let config = load_caller_config(None, Some(json.as_str()))?;
            validate(&config, "--config")?;
            Some(config)
        }
        None => None,
    };
    let caller = match (from_file, from_inline) {
        (None, None) => return Err(atomik::ConfigError::Missing.into()),
        (Some(config), None) | (None, Some(config)) => config,
        (Some(base), Some(over)) => overlay(base, &over),
    };

    let mut texts = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let text = std::fs::read_to_string(path)
            .map_err(|source| CliError::ReadInput { path: path.clone(), source })?;
        texts.push(text);
    }

    let result = extract_with(&texts, catalog, &caller)?;
    for diagnostic in &result.diagnostics {
        tracing::warn!("{diagnostic}");
    }

    let options = GenerateOptions { require: cli.require.clone() };
    let output = ConfigEmitter.generate(&result.config, &options)?;

    match &cli.out {
        Some(path) => {
            std::fs::write(path, output)
                .map_err(|source| CliError::WriteOutput { path: path.clone(), source })?;
            tracing::info!("{} successfully created", path.display());
        }
        None => {
            io::stdout()
                .write_all(output.as_bytes())
                .map_err(|source| CliError::WriteOutput { path: PathBuf::from("<stdout>"), source })?;
        }
    }

    Ok(())
}

fn parse_args() -> Result<CliConfig, String> {
    let mut cli = CliConfig {
        files: Vec::new(),
        config_file: None,
        config_inline: None,
        catalog: None,
        out: None,
        require: Vec::new(),
    };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("atomik {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-c" | "--config" => {
                set_once(&mut cli.config_inline, expect_value(&mut args, "--config")?, "--config")?;
            }
            "-f" | "--config-file" => {
                set_once(&mut cli.config_file, expect_value(&mut args, "--config-file")?.into(), "--config-file")?;
            }
            "--catalog" => {
                set_once(&mut cli.catalog, expect_value(&mut args, "--catalog")?.into(), "--catalog")?;
            }
            "-o" | "--out" => {
                set_once(&mut cli.out, expect_value(&mut args, "--out")?.into(), "--out")?;
            }
            "--require" => {
                cli.require.push(expect_value(&mut args, "--require")?.into());
            }
            "--" => {
                cli.files.extend(args.map(PathBuf::from));
                break;
            }
            _ if arg.starts_with("--config=") => {
                let value = arg.trim_start_matches("--config=").to_string();
                set_once(&mut cli.config_inline, value, "--config")?;
            }
            _ if arg.starts_with("--config-file=") => {
                let value = arg.trim_start_matches("--config-file=").into();
                set_once(&mut cli.config_file, value, "--config-file")?;
            }
            _ if arg.starts_with("--catalog=") => {
                let value = arg.trim_start_matches("--catalog=").into();
                set_once(&mut cli.catalog, value, "--catalog")?;
            }
            _ if arg.starts_with("--out=") => {
                let value = arg.trim_start_matches("--out=").into();
                set_once(&mut cli.out, value, "--out")?;
            }
            _ if arg.starts_with("--require=") => {
                cli.require.push(arg.trim_start_matches("--require=").into());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => cli.files.push(PathBuf::from(arg)),
        }
    }

    if cli.config_file.is_none() && cli.config_inline.is_none() {
        return Err(format!("error: --config or --config-file is required\n\n{}", help_text()));
    }

    Ok(cli)
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("error: {flag} expects a value"))
}

fn set_once<T>(slot: &mut Option<T>, value: T, flag: &str) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("error: {flag} provided multiple times"));
    }
    *slot = Some(value);
    Ok(())
}

fn help_text() -> String {
    format!(
        "atomik {version}

Scan source files for atomic class names and build the generator configuration.

Usage:
  atomik [OPTIONS] [--] <files...>

Options:
  -c, --config <json>        Inline caller configuration (JSON document).
  -f, --config-file <path>   Caller configuration file (JSON).
                             At least one of --config/--config-file is required;
                             inline keys win over file keys.
  --catalog <path>           Pattern catalog file (JSON array of patterns).
                             Default: built-in catalog.
  -o, --out <path>           Output path. Default: stdout.
  --require <path>           Extra file for the generator (repeatable).
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments, configuration, or catalog.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
