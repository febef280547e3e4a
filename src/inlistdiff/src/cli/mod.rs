// inlistdiff/src/cli/mod.rs

pub mod columns;
pub mod compare;

pub use columns::merge_columns;
pub use compare::{compare_dirs, compare_files};

use crate::compare::CompareOptions;
use crate::config::{MesaDir, OutputFormat, Settings};
use crate::error::CompareError;
use anyhow::Context;
use std::path::PathBuf;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GlobalArgs {
    /// Root of the MESA installation holding the `.defaults` files
    #[arg(long, value_name = "DIR", env = "MESA_DIR", global = true)]
    pub mesa_dir: Option<PathBuf>,

    /// Also compare the pgstar namelists
    #[arg(long, global = true)]
    pub pgstar: bool,

    /// Report matching values too
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format of the report
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Settings file (defaults to .inlistdiff.yml in the current directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

/// Everything a comparison needs, after merging flags and settings file
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub mesa_dir: MesaDir,
    pub options: CompareOptions,
    pub format: OutputFormat,
}

impl GlobalArgs {
    pub fn load_settings(&self) -> anyhow::Result<Settings> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Settings::load(self.config.as_deref(), &cwd)
    }

    /// Command line flags win over the settings file.
    pub fn run_settings(&self, settings: &Settings) -> Result<RunSettings, CompareError> {
        let mesa_dir = MesaDir::resolve([self.mesa_dir.clone(), settings.mesa_dir.clone()])?;
        Ok(RunSettings {
            mesa_dir,
            options: CompareOptions {
                pgstar: self.pgstar || settings.pgstar.unwrap_or(false),
                verbose: self.verbose || settings.verbose.unwrap_or(false),
            },
            format: self.output_format(settings),
        })
    }

    pub fn output_format(&self, settings: &Settings) -> OutputFormat {
        self.format.or(settings.format).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_flags_win_over_settings() {
        let args = GlobalArgs {
            mesa_dir: Some(PathBuf::from("/flag/mesa")),
            format: Some(OutputFormat::Text),
            ..Default::default()
        };
        let settings = Settings {
            mesa_dir: Some(PathBuf::from("/settings/mesa")),
            pgstar: Some(true),
            verbose: None,
            format: Some(OutputFormat::Json),
        };

        let run = args.run_settings(&settings).unwrap();

        assert_eq!(run.mesa_dir.root(), Path::new("/flag/mesa"));
        assert!(run.options.pgstar);
        assert!(!run.options.verbose);
        assert_eq!(run.format, OutputFormat::Text);
    }

    #[test]
    fn test_settings_fill_missing_flags() {
        let settings = Settings {
            mesa_dir: Some(PathBuf::from("/settings/mesa")),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };

        let run = GlobalArgs::default().run_settings(&settings).unwrap();

        assert_eq!(run.mesa_dir.root(), Path::new("/settings/mesa"));
        assert_eq!(run.format, OutputFormat::Json);
    }

    #[test]
    fn test_no_mesa_dir_anywhere() {
        let result = GlobalArgs::default().run_settings(&Settings::default());
        assert!(matches!(result, Err(CompareError::MesaDirUnset)));
    }
}
