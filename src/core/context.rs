use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use tracing::{debug, info};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        AllLocaleMessages, LOCALES_DIR_NAME, LocaleMessages, LocaleRegistry, Locator,
        MessageScanWarning, scan_message_files,
    },
    issues::ParseErrorIssue,
};

/// Configuration and start directory shared by every command.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--primary-locale en`)
/// 2. `.glossarc.json` config file
/// 3. Built-in defaults
pub struct Settings {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    /// Absolute directory the upward search starts from.
    pub start_dir: PathBuf,
    /// Preferred locales directory, resolved against the config file location.
    pub preferred_dir: PathBuf,
    pub verbose: bool,
}

impl Settings {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let start_dir = match &common_args.root {
            Some(root) => cwd.join(root),
            None => cwd,
        };

        let config_result = load_config(&start_dir)?;
        match &config_result.path {
            Some(path) => debug!(path = %path.display(), "loaded config"),
            None => debug!("no config file found, using default configuration"),
        }
        let base_dir = config_result.base_dir(&start_dir).to_path_buf();
        let mut config = config_result.config;

        if let Some(ref primary_locale) = common_args.primary_locale {
            config.primary_locale = primary_locale.clone();
        }

        // A directory given on the command line is relative to the working
        // directory, one from the config file to the config file itself.
        let preferred_dir = match &common_args.locales_dir {
            Some(dir) => {
                config.locales_dir = dir.to_string_lossy().to_string();
                start_dir.join(dir)
            }
            None => resolve(&base_dir, &config.locales_dir),
        };

        Ok(Self {
            config,
            start_dir,
            preferred_dir,
            verbose: common_args.verbose,
        })
    }

    pub fn locator(&self) -> Locator {
        Locator::new(&self.start_dir)
    }

    /// The preferred directory if it exists, otherwise the nearest `locales`
    /// directory within `max_depth` levels of the start directory.
    pub async fn locales_dir(&self) -> Option<PathBuf> {
        self.locator()
            .effective_directory(&self.preferred_dir, LOCALES_DIR_NAME, self.config.max_depth)
            .await
    }
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path.strip_prefix(".").unwrap_or(path))
    }
}

/// Shorten `path` relative to the working directory for display and file
/// paths in reports.
fn relative_to_cwd(path: &Path) -> PathBuf {
    let Ok(cwd) = std::env::current_dir() else {
        return path.to_path_buf();
    };
    match path.strip_prefix(&cwd) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

/// Loaded locale data for commands that read translations.
pub struct CheckContext {
    pub settings: Settings,
    /// Directory the locale files were loaded from.
    pub locales_dir: PathBuf,
    /// Messages for all locales, keyed by locale code.
    pub messages: AllLocaleMessages,
    /// Files that could not be loaded.
    pub warnings: Vec<MessageScanWarning>,
    /// Translators for `messages`, used to resolve requested locales.
    pub registry: LocaleRegistry,
}

impl CheckContext {
    pub async fn new(common_args: &CommonArgs) -> Result<Self> {
        let settings = Settings::new(common_args)?;

        let Some(found) = settings.locales_dir().await else {
            bail!(
                "Could not find a locales directory.\n\
                 Hint: '{}' does not exist and no '{}' directory was found within {} level(s) of {}.",
                settings.preferred_dir.display(),
                LOCALES_DIR_NAME,
                settings.config.max_depth,
                settings.start_dir.display()
            );
        };

        let locales_dir = relative_to_cwd(&found);
        info!(path = %locales_dir.display(), "using locales directory");

        let ignores = settings.config.ignore_patterns()?;
        let scan = scan_message_files(&locales_dir, &ignores)?;

        let registry =
            LocaleRegistry::from_messages(settings.config.primary_locale.clone(), &scan.messages);

        Ok(Self {
            settings,
            locales_dir,
            messages: scan.messages,
            warnings: scan.warnings,
            registry,
        })
    }

    pub fn primary_locale(&self) -> &str {
        &self.settings.config.primary_locale
    }

    /// Messages for `locale`, or the primary locale when `None`.
    ///
    /// A locale that was not loaded falls back to its base language and then
    /// to the primary locale.
    pub fn locale_messages(&self, locale: Option<&str>) -> Result<&LocaleMessages> {
        let locale = locale.unwrap_or(self.primary_locale());
        let resolved = self.registry.resolve_locale(locale);
        resolved.and_then(|l| self.messages.get(l)).with_context(|| {
            let available: Vec<&str> = self.messages.keys().map(String::as_str).collect();
            format!(
                "Locale '{}' not found in {} (available: {})",
                locale,
                self.locales_dir.display(),
                if available.is_empty() {
                    "none".to_string()
                } else {
                    available.join(", ")
                }
            )
        })
    }

    pub fn locale_files_loaded(&self) -> usize {
        self.messages.values().map(|m| m.files.len()).sum()
    }

    pub fn parse_errors(&self) -> Vec<ParseErrorIssue> {
        self.warnings
            .iter()
            .map(|w| ParseErrorIssue {
                file_path: w.file_path.clone(),
                error: w.error.clone(),
            })
            .collect()
    }
}
