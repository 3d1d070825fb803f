//! Entry point for the translation updater CLI.

use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use translation_updater::config::{
    self,
    ConfigError,
    UpdaterSettings,
    ValidationError,
};
use translation_updater::plan::{
    Preset,
    UpdatePlan,
};
use translation_updater::types::Locale;
use translation_updater::{
    TranslationUpdater,
    UpdateError,
};

#[derive(Parser, Debug)]
#[command(
    name = "translation-updater",
    version,
    about = "Insert sections and set dotted keys in locale JSON translation files"
)]
struct Cli {
    /// Directory containing one `<locale>.json` file per locale
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Comma-separated locales to update (default: every locale in the plan)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_locale)]
    locales: Vec<Locale>,

    /// Update plan JSON file
    #[arg(short, long, conflicts_with = "preset", required_unless_present = "preset")]
    plan: Option<PathBuf>,

    /// Built-in plan: `feedback` or `page-instruction`
    #[arg(long)]
    preset: Option<Preset>,

    /// Settings file (default: `.translation-updater.json` in the current directory, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Separator for dotted key paths
    #[arg(long)]
    key_separator: Option<String>,

    /// Apply edits in memory only
    #[arg(long)]
    dry_run: bool,
}

/// Wrapper so clap can use [`Locale::new`] as a value parser.
fn parse_locale(code: &str) -> Result<Locale, UpdateError> {
    Locale::new(code)
}

/// Settings file (or defaults) with command-line overrides applied.
fn resolve_settings(cli: &Cli) -> Result<UpdaterSettings, ConfigError> {
    let mut settings = match &cli.config {
        Some(path) => config::load_settings_file(path)?,
        None => config::load_from_dir(Path::new("."))?.unwrap_or_default(),
    };

    if let Some(dir) = &cli.dir {
        settings.base_path.clone_from(dir);
    }
    if let Some(separator) = &cli.key_separator {
        settings.key_separator.clone_from(separator);
    }
    settings.dry_run |= cli.dry_run;

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    Ok(settings)
}

fn resolve_plan(cli: &Cli, settings: &UpdaterSettings) -> Result<UpdatePlan, ConfigError> {
    if let Some(path) = &cli.plan {
        return config::load_plan_file(path, &settings.key_separator);
    }

    let Some(preset) = cli.preset else {
        return Err(ConfigError::ValidationErrors(vec![ValidationError::new(
            "preset",
            "Either --plan or --preset is required",
        )]));
    };

    tracing::debug!(%preset, "Using built-in plan");
    let plan = preset.plan()?;
    plan.validate(&settings.key_separator).map_err(ConfigError::ValidationErrors)?;
    Ok(plan)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let prepared = resolve_settings(&cli)
        .and_then(|settings| resolve_plan(&cli, &settings).map(|plan| (settings, plan)));
    let (settings, plan) = match prepared {
        Ok(prepared) => prepared,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    let locales = if cli.locales.is_empty() { plan.locales() } else { cli.locales.clone() };
    let report = TranslationUpdater::new(&settings, &plan).run(&locales);

    if report.is_success() {
        tracing::info!("All translation files updated successfully!");
        ExitCode::SUCCESS
    } else {
        tracing::error!(
            "{} of {} translation files failed to update",
            report.failed(),
            report.files.len()
        );
        ExitCode::FAILURE
    }
}
