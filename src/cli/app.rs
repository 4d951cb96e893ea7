//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use domain_ruleset::config::ConfigLayer;
use domain_ruleset::normalizer::WildcardMode;
use domain_ruleset::output::OutputMode;
use domain_ruleset::{ConvertError, ConvertSummary, VERSION, convert};

/// domain-ruleset - Domain list to rule-set payload converter
#[derive(Parser, Debug)]
#[command(
    name = "domain-ruleset",
    version = VERSION,
    about = "Convert a plaintext domain list into rule-set payload YAML",
    long_about = "Convert a plaintext domain list into rule-set payload YAML.\n\n\
                  Each line holds one domain. Blank lines and lines starting with\n\
                  '#' or '//' are ignored, invalid lines are skipped and reported.\n\
                  Domains are emitted as '+.domain' (domain and subdomains) unless\n\
                  --exact is given.",
    after_help = "Examples:\n  \
                  domain-ruleset -i domain.txt -o rules.yaml\n  \
                  domain-ruleset -i domains.txt -o rules.yaml --exact"
)]
pub struct Cli {
    /// Input file (one domain per line) [default: domain.txt]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output YAML file [default: rules.yaml]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exact-match mode: emit bare domains without the "+." prefix
    #[arg(long, overrides_with = "no_exact")]
    pub exact: bool,

    /// Emit "+." prefixed domains even if the config file sets exact = true
    #[arg(long, overrides_with = "exact")]
    pub no_exact: bool,

    /// How "*." lines are scoped in exact-match mode: strip, preserve
    #[arg(long, value_name = "MODE")]
    pub wildcard: Option<WildcardMode>,

    /// Config file [default: .domain-ruleset.toml if present]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Settings given on the command line
    fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            input: self.input.clone(),
            output: self.output.clone(),
            exact: match (self.exact, self.no_exact) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            wildcard: self.wildcard,
        }
    }
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match execute(&cli) {
        Ok(summary) => {
            summary.render(output_mode);
            ExitCode::SUCCESS
        },
        Err(err) => match err.downcast_ref::<ConvertError>() {
            Some(convert_err) => {
                convert_err.render(output_mode);
                ExitCode::from(convert_err.exit_code())
            },
            None => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            },
        },
    }
}

fn execute(cli: &Cli) -> anyhow::Result<ConvertSummary> {
    let cwd = std::env::current_dir()?;
    let file = ConfigLayer::discover(cli.config.as_deref(), &cwd)?.unwrap_or_default();
    let options = cli.layer().over(file).resolve();

    log::debug!(
        "Converting {} -> {} (exact: {}, wildcard: {})",
        options.input.display(),
        options.output.display(),
        options.normalize.exact,
        options.normalize.wildcard
    );

    Ok(convert(&options)?)
}
