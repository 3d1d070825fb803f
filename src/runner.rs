//! Runs an update plan over the locale files of one directory.
//!
//! Each file is loaded, edited and saved on its own. A failure is logged
//! and recorded in the report, then the next file is attempted.

use std::path::{
    Path,
    PathBuf,
};

use crate::config::UpdaterSettings;
use crate::edit::apply_operation;
use crate::error::UpdateError;
use crate::input::translation::{
    leaf_paths,
    load_document,
    render_document,
    save_document,
};
use crate::plan::UpdatePlan;
use crate::types::Locale;

/// What happened to one locale file.
#[derive(Debug)]
pub enum FileOutcome {
    Updated {
        operations: usize,
        /// Leaf keys present after the edit that were not there before.
        keys_added: usize,
        /// `false` in dry-run mode.
        written: bool,
    },
    Failed(UpdateError),
}

#[derive(Debug)]
pub struct FileReport {
    pub locale: Locale,
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, FileOutcome::Updated { .. })
    }
}

/// Per-file results of one run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.files.iter().all(FileReport::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&FileReport, &UpdateError)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Failed(e) => Some((f, e)),
            FileOutcome::Updated { .. } => None,
        })
    }
}

/// Applies an [`UpdatePlan`] to `<base_path>/<locale>.json` files.
#[derive(Debug, Clone, Copy)]
pub struct TranslationUpdater<'a> {
    settings: &'a UpdaterSettings,
    plan: &'a UpdatePlan,
}

impl<'a> TranslationUpdater<'a> {
    #[must_use]
    pub const fn new(settings: &'a UpdaterSettings, plan: &'a UpdatePlan) -> Self {
        Self { settings, plan }
    }

    /// Update every locale in the plan, in plan order.
    #[must_use]
    pub fn run_all(&self) -> BatchReport {
        self.run(&self.plan.locales())
    }

    /// Update the given locales in order. Never stops early.
    #[must_use]
    pub fn run(&self, locales: &[Locale]) -> BatchReport {
        tracing::debug!(
            base_path = %self.settings.base_path.display(),
            plan = self.plan.name.as_deref().unwrap_or("<unnamed>"),
            locales = locales.len(),
            "Running update plan"
        );

        let files = locales
            .iter()
            .map(|locale| {
                let path = locale.file_path(&self.settings.base_path);
                tracing::info!("Updating {}...", path.display());

                let outcome = match self.update_file(locale, &path) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        tracing::error!("Error updating {}: {e}", path.display());
                        FileOutcome::Failed(e)
                    }
                };

                FileReport { locale: locale.clone(), path, outcome }
            })
            .collect();

        BatchReport { files }
    }

    /// Load → apply → save for a single file.
    fn update_file(&self, locale: &Locale, path: &Path) -> Result<FileOutcome, UpdateError> {
        let operations = self
            .plan
            .operations_for(locale)
            .ok_or_else(|| UpdateError::MissingPayload(locale.to_string()))?;

        let separator = self.settings.key_separator.as_str();
        let mut document = load_document(path)?;
        let leaves_before = leaf_paths(&document);

        for operation in operations {
            document = apply_operation(document, operation, separator)?;
        }

        let keys_added = leaf_paths(&document).difference(&leaves_before).count();

        if self.settings.dry_run {
            tracing::info!(
                keys_added,
                "Dry run: {} not written ({} operations)",
                path.display(),
                operations.len()
            );
            if tracing::enabled!(tracing::Level::DEBUG)
                && let Ok(text) = render_document(&document)
            {
                tracing::debug!("{text}");
            }
            return Ok(FileOutcome::Updated {
                operations: operations.len(),
                keys_added,
                written: false,
            });
        }

        save_document(path, &document)?;
        tracing::info!(keys_added, "Successfully saved {}", path.display());

        Ok(FileOutcome::Updated { operations: operations.len(), keys_added, written: true })
    }
}
