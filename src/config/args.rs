use crate::config::toml_config::TomlConfig;
use crate::config::{CorpusSettings, ReportSettings};
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "smell-corpus")]
#[command(about = "Runs shared behavioural specs against every implementation of each code smell sample")]
pub struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Discover every suite and run it
    Run(RunArgs),
    /// Print the plan without running it
    Discover(SelectArgs),
    /// Build the refactoring prompt for one sample
    Prompt(PromptArgs),
    /// Turn saved completions into variant source files
    Extract(ExtractArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct TreeArgs {
    #[arg(long, help = "Corpus root directory")]
    pub root: Option<PathBuf>,

    #[arg(long, help = "Source file extension, without the dot")]
    pub extension: Option<String>,

    #[arg(long, help = "Name of the per-category refactored folder")]
    pub refactored_dir: Option<String>,
}

impl TreeArgs {
    fn apply(&self, settings: &mut CorpusSettings) {
        if let Some(root) = &self.root {
            settings.root = root.clone();
        }
        if let Some(extension) = &self.extension {
            settings.extension = extension.clone();
        }
        if let Some(dir) = &self.refactored_dir {
            settings.refactored_dir = dir.clone();
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SelectArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    #[arg(long, help = "Also run each sample's original implementation")]
    pub include_originals: bool,

    #[arg(long = "category", value_delimiter = ',', help = "Only these categories")]
    pub categories: Vec<String>,
}

impl SelectArgs {
    pub fn apply(&self, settings: &mut CorpusSettings) {
        self.tree.apply(settings);
        if self.include_originals {
            settings.include_originals = true;
        }
        if !self.categories.is_empty() {
            settings.categories = self.categories.clone();
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    #[arg(long, help = "Write reports into this directory")]
    pub output_path: Option<String>,

    #[arg(long = "format", value_delimiter = ',', help = "Report formats (csv, json)")]
    pub formats: Vec<String>,
}

impl RunArgs {
    pub fn apply_report(&self, report: &mut ReportSettings) {
        if let Some(path) = &self.output_path {
            report.output_path = Some(path.clone());
        }
        if !self.formats.is_empty() {
            report.output_formats = self.formats.clone();
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PromptArgs {
    pub category: String,
    pub sample: String,

    #[command(flatten)]
    pub tree: TreeArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    #[arg(long, help = "Only this category")]
    pub category: Option<String>,
}

impl Cli {
    /// The TOML file when one was given, otherwise built-in defaults.
    pub fn file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate_config()?;
                Ok(config)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// File settings with this command's flags applied on top.
    pub fn resolve(&self) -> Result<(CorpusSettings, ReportSettings)> {
        let file = self.file_config()?;
        let mut corpus = file.corpus;
        let mut report = file.report.unwrap_or_default();

        match &self.command {
            Command::Run(args) => {
                args.select.apply(&mut corpus);
                args.apply_report(&mut report);
            }
            Command::Discover(args) => args.apply(&mut corpus),
            Command::Prompt(args) => args.tree.apply(&mut corpus),
            Command::Extract(args) => {
                args.tree.apply(&mut corpus);
                if let Some(category) = &args.category {
                    corpus.categories = vec![category.clone()];
                }
            }
        }

        Ok((corpus, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_run_flags_override_defaults() {
        let cli = Cli::parse_from([
            "smell-corpus",
            "run",
            "--include-originals",
            "--category",
            "loops,global_data",
            "--output-path",
            "./reports",
            "--format",
            "json",
        ]);

        let (corpus, report) = cli.resolve().unwrap();

        assert!(corpus.include_originals);
        assert_eq!(corpus.categories, vec!["loops", "global_data"]);
        assert_eq!(report.output_path.as_deref(), Some("./reports"));
        assert_eq!(report.output_formats, vec!["json"]);
    }

    #[test]
    fn test_flags_win_over_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[corpus]\nextension = \"js\"\ninclude_originals = true\n")
            .unwrap();
        let config = temp_file.path().to_string_lossy().into_owned();

        let cli = Cli::parse_from([
            "smell-corpus",
            "--config",
            config.as_str(),
            "discover",
            "--extension",
            "rs",
        ]);

        let (corpus, _) = cli.resolve().unwrap();
        assert_eq!(corpus.extension, "rs");
        assert!(corpus.include_originals);
    }

    #[test]
    fn test_extract_category_becomes_filter() {
        let cli = Cli::parse_from(["smell-corpus", "extract", "--category", "loops", "--verbose"]);

        let (corpus, _) = cli.resolve().unwrap();
        assert!(cli.verbose);
        assert_eq!(corpus.categories, vec!["loops"]);
    }

    #[test]
    fn test_prompt_takes_category_and_sample() {
        let cli = Cli::parse_from(["smell-corpus", "prompt", "data_clumps", "1"]);

        match cli.command {
            Command::Prompt(args) => {
                assert_eq!(args.category, "data_clumps");
                assert_eq!(args.sample, "1");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
