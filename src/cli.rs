//! Command line definitions and the interactive shell command parser.

use clap::{Parser, Subcommand};
use resume_analyzer::infrastructure::expand_tilde;
use resume_analyzer::{AnalysisMode, ConfigOverrides};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "resume-analyzer")]
#[command(about = "Score a PDF resume against a job role or a job description")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: <config_dir>/resume-analyzer/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis backend
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Built-in theme name (catppuccin-mocha, catppuccin-latte)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level for the log file (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub trace_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fill in the analysis form interactively (default)
    Shell {
        /// Mode the form starts in (tfidf, semantic)
        #[arg(short, long)]
        mode: Option<AnalysisMode>,
    },

    /// Analyze a resume once and print the result
    Analyze {
        /// Path to the PDF resume
        #[arg(short, long)]
        resume: PathBuf,

        /// Job role for keyword (TF-IDF) matching: a catalog name, index or fuzzy name
        #[arg(long, conflicts_with_all = ["job_description", "job_description_file"])]
        role: Option<String>,

        /// Job description text for semantic matching
        #[arg(long, conflicts_with = "job_description_file")]
        job_description: Option<String>,

        /// File holding the job description for semantic matching
        #[arg(long)]
        job_description_file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the job roles offered by the backend
    Roles {
        /// Only show roles matching every word of this filter
        filter: Option<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Shell { mode: None }
    }
}

impl Cli {
    /// Flags that override the configuration file.
    pub fn overrides(&self) -> ConfigOverrides {
        let mode = match &self.command {
            Some(Commands::Shell { mode }) => *mode,
            _ => None,
        };

        ConfigOverrides {
            base_url: self.base_url.clone(),
            theme_name: self.theme.clone(),
            trace_level: self.trace_level.clone(),
            mode,
            no_color: self.no_color,
        }
    }
}

/// Help text printed by the `help` shell command.
pub const SHELL_HELP: &str = "\
Commands:
  file <path>        select the resume (PDF)
  mode <tfidf|semantic>
                     switch the analysis method
  role <n|name>      choose a job role by number or (fuzzy) name
  roles [filter]     list job roles, optionally filtered
  jd <text>          set the job description
  jd-file <path>     read the job description from a file
  submit             analyze the resume
  show               redraw the form
  help               show this help
  quit               leave";

/// One line typed into the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    File(PathBuf),
    Mode(AnalysisMode),
    Role(String),
    Roles(Option<String>),
    JobDescription(String),
    JobDescriptionFile(PathBuf),
    Submit,
    Show,
    Help,
    Quit,
    Empty,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, rest)| (name, rest.trim()));

        let required = |usage: &str| {
            if rest.is_empty() {
                Err(format!("usage: {usage}"))
            } else {
                Ok(rest)
            }
        };

        match name.to_lowercase().as_str() {
            "" => Ok(Self::Empty),
            "file" | "f" => required("file <path>").map(|p| Self::File(expand_tilde(p))),
            "mode" | "m" => required("mode <tfidf|semantic>")?.parse().map(Self::Mode),
            "role" | "r" => required("role <n|name>").map(|r| Self::Role(r.to_string())),
            "roles" => Ok(Self::Roles((!rest.is_empty()).then(|| rest.to_string()))),
            "jd" => Ok(Self::JobDescription(rest.to_string())),
            "jd-file" => required("jd-file <path>").map(|p| Self::JobDescriptionFile(expand_tilde(p))),
            "submit" | "analyze" | "go" => Ok(Self::Submit),
            "show" | "s" => Ok(Self::Show),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command `{other}`, type `help`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!("file cv.pdf".parse(), Ok(ShellCommand::File(PathBuf::from("cv.pdf"))));
        assert_eq!(
            "mode semantic".parse(),
            Ok(ShellCommand::Mode(AnalysisMode::SemanticMatch))
        );
        assert_eq!("role  2 ".parse(), Ok(ShellCommand::Role("2".into())));
        assert_eq!(
            "jd Senior Rust engineer".parse(),
            Ok(ShellCommand::JobDescription("Senior Rust engineer".into()))
        );
        assert_eq!("roles".parse(), Ok(ShellCommand::Roles(None)));
        assert_eq!("roles data eng".parse(), Ok(ShellCommand::Roles(Some("data eng".into()))));
    }

    #[test]
    fn rejects_missing_arguments_and_unknown_commands() {
        assert_eq!("file".parse::<ShellCommand>(), Err("usage: file <path>".into()));
        assert!("mode bm25".parse::<ShellCommand>().is_err());
        assert!("launch".parse::<ShellCommand>().is_err());
        assert_eq!("   ".parse(), Ok(ShellCommand::Empty));
    }

    #[test]
    fn empty_jd_clears_the_description() {
        assert_eq!("jd".parse(), Ok(ShellCommand::JobDescription(String::new())));
    }

    #[test]
    fn cli_defaults_to_shell() {
        let cli = Cli::try_parse_from(["resume-analyzer", "--no-color"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.command.unwrap_or_default(), Commands::Shell { mode: None });
    }

    #[test]
    fn analyze_targets_are_exclusive() {
        let result = Cli::try_parse_from([
            "resume-analyzer",
            "analyze",
            "--resume",
            "cv.pdf",
            "--role",
            "data_scientist",
            "--job-description",
            "Rust",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn shell_mode_becomes_an_override() {
        let cli = Cli::try_parse_from(["resume-analyzer", "--base-url", "http://h:1", "shell", "--mode", "semantic"])
            .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.mode, Some(AnalysisMode::SemanticMatch));
        assert_eq!(overrides.base_url.as_deref(), Some("http://h:1"));
    }
}
