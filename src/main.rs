//! Terminal front end for the resume analyzer.
//!
//! Three subcommands share one [`Workflow`]:
//!
//! - `shell` (default): an interactive form. Typed commands become events,
//!   and request completions are applied as they arrive, so the form keeps
//!   accepting input while the backend works.
//! - `analyze`: fills the form from flags, submits once and prints the result.
//! - `roles`: fetches and lists the job-role catalog.
//!
//! Everything runs on a single-threaded runtime; requests are polled on the
//! main task and never spawned.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, ShellCommand, SHELL_HELP};
use resume_analyzer::domain::{JobRoleCatalog, UploadedFile};
use resume_analyzer::observability::init_tracing;
use resume_analyzer::service::HttpAnalysisService;
use resume_analyzer::ui::helpers::strip_control;
use resume_analyzer::ui::{render, render_result, ResultView};
use resume_analyzer::{initialize, AnalysisMode, AppState, Config, Event, Result, Workflow};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const DEFAULT_COLS: usize = 80;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config.with_overrides(cli.overrides()),
        Err(e) => {
            eprintln!("error: failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        "resume analyzer starting"
    );

    match run_command(cli.command.unwrap_or_default(), &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_command(command: Commands, config: &Config) -> Result<ExitCode> {
    match command {
        Commands::Shell { .. } => run_shell(config).await.map(|()| ExitCode::SUCCESS),
        Commands::Analyze {
            resume,
            role,
            job_description,
            job_description_file,
            json,
        } => {
            let target = match (role, job_description, job_description_file) {
                (Some(role), _, _) => Target::Role(role),
                (None, Some(text), _) => Target::Description(text),
                (None, None, Some(path)) => Target::DescriptionFile(path),
                (None, None, None) => Target::Unset,
            };
            run_analyze(config, &resume, target, json).await
        }
        Commands::Roles { filter } => run_roles(config, filter.as_deref().unwrap_or("")).await,
    }
}

fn new_workflow(config: &Config, mode: AnalysisMode) -> Result<Workflow> {
    let service = Arc::new(HttpAnalysisService::new(&config.base_url)?);
    let mut state = initialize(config);
    state.mode = mode;
    Ok(Workflow::new(state, service))
}

/// Where rendered output goes.
struct Screen {
    cols: usize,
    color: bool,
}

impl Screen {
    fn new(config: &Config) -> Self {
        let cols = std::env::var("COLUMNS")
            .ok()
            .and_then(|c| c.parse().ok())
            .unwrap_or(DEFAULT_COLS);

        Self {
            cols,
            color: config.color && std::io::stdout().is_terminal(),
        }
    }

    fn draw(&self, state: &AppState) {
        println!();
        print!("{}", render(state, self.cols, self.color));
    }

    fn prompt() {
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}

async fn run_shell(config: &Config) -> Result<()> {
    let mut workflow = new_workflow(config, config.default_mode)?;
    let screen = Screen::new(config);

    workflow.dispatch(Event::Mounted);
    screen.draw(workflow.state());
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        Screen::prompt();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                match line.parse::<ShellCommand>() {
                    Ok(ShellCommand::Quit) => break,
                    Ok(command) => {
                        if apply_shell_command(&mut workflow, command).await {
                            screen.draw(workflow.state());
                        }
                    }
                    Err(message) => eprintln!("{message}"),
                }
            }
            Some(needs_render) = workflow.next_completion(), if !workflow.is_idle() => {
                if needs_render {
                    screen.draw(workflow.state());
                }
            }
        }
    }

    tracing::info!(in_flight = workflow.in_flight(), "shell closed");
    Ok(())
}

/// Applies one shell command. Returns `true` if the form should be redrawn.
async fn apply_shell_command(workflow: &mut Workflow, command: ShellCommand) -> bool {
    match command {
        ShellCommand::File(path) => match UploadedFile::load(&path).await {
            Ok(file) => workflow.dispatch(Event::FileSelected(file)),
            Err(e) => {
                eprintln!("cannot read {}: {e}", path.display());
                false
            }
        },
        ShellCommand::Mode(mode) => workflow.dispatch(Event::ModeSelected(mode)),
        ShellCommand::Role(input) => {
            let role = resolve_role(&workflow.state().job_roles, &input);
            workflow.dispatch(Event::JobRoleSelected(role))
        }
        ShellCommand::Roles(filter) => {
            print_roles(&workflow.state().job_roles, filter.as_deref().unwrap_or(""));
            false
        }
        ShellCommand::JobDescription(text) => workflow.dispatch(Event::JobDescriptionChanged(text)),
        ShellCommand::JobDescriptionFile(path) => match tokio::fs::read_to_string(&path).await {
            Ok(text) => workflow.dispatch(Event::JobDescriptionChanged(text)),
            Err(e) => {
                eprintln!("cannot read {}: {e}", path.display());
                false
            }
        },
        ShellCommand::Submit => workflow.dispatch(Event::Submit),
        ShellCommand::Show => true,
        ShellCommand::Help => {
            println!("{SHELL_HELP}");
            false
        }
        ShellCommand::Quit | ShellCommand::Empty => false,
    }
}

/// Maps picker input to a catalog entry, keeping the raw text when nothing matches.
fn resolve_role(catalog: &JobRoleCatalog, input: &str) -> String {
    catalog
        .resolve(input)
        .map_or_else(|| input.trim().to_string(), str::to_string)
}

fn print_roles(catalog: &JobRoleCatalog, filter: &str) {
    if catalog.is_empty() {
        println!("No job roles loaded.");
        return;
    }

    let matches = catalog.filter(filter);
    if matches.is_empty() {
        println!("No job roles match `{filter}`.");
        return;
    }

    for role in matches {
        let index = catalog.roles().iter().position(|r| r == role).map_or(0, |i| i + 1);
        println!("{index:>3}. {}", strip_control(role));
    }
}

/// What a one-shot analysis compares the resume against.
enum Target {
    Role(String),
    Description(String),
    DescriptionFile(PathBuf),
    Unset,
}

impl Target {
    fn mode(&self, fallback: AnalysisMode) -> AnalysisMode {
        match self {
            Self::Role(_) => AnalysisMode::KeywordMatch,
            Self::Description(_) | Self::DescriptionFile(_) => AnalysisMode::SemanticMatch,
            Self::Unset => fallback,
        }
    }
}

async fn run_analyze(config: &Config, resume: &Path, target: Target, json: bool) -> Result<ExitCode> {
    let mode = target.mode(config.default_mode);
    let mut workflow = new_workflow(config, mode)?;

    if mode == AnalysisMode::KeywordMatch {
        workflow.dispatch(Event::Mounted);
        workflow.settle().await;
        if let Some(message) = workflow.state().error_message() {
            eprintln!("warning: {}", strip_control(message));
        }
    }

    let file = UploadedFile::load(resume).await?;
    workflow.dispatch(Event::FileSelected(file));
    if let Some(message) = workflow.state().error_message() {
        eprintln!("error: {}", strip_control(message));
        return Ok(ExitCode::FAILURE);
    }

    match target {
        Target::Role(input) => {
            let role = resolve_role(&workflow.state().job_roles, &input);
            workflow.dispatch(Event::JobRoleSelected(role));
        }
        Target::Description(text) => {
            workflow.dispatch(Event::JobDescriptionChanged(text));
        }
        Target::DescriptionFile(path) => {
            let text = tokio::fs::read_to_string(&path).await?;
            workflow.dispatch(Event::JobDescriptionChanged(text));
        }
        Target::Unset => {}
    }

    workflow.dispatch(Event::Submit);
    workflow.settle().await;

    let state = workflow.into_state();
    if let Some(message) = state.error_message() {
        eprintln!("error: {}", strip_control(message));
        return Ok(ExitCode::FAILURE);
    }

    let Some(result) = &state.result else {
        eprintln!("error: no result received");
        return Ok(ExitCode::FAILURE);
    };

    if json {
        let text = serde_json::to_string_pretty(result).map_err(std::io::Error::from)?;
        println!("{text}");
    } else {
        let screen = Screen::new(config);
        print!(
            "{}",
            render_result(&ResultView::from_result(result), &state.theme, screen.cols, screen.color)
        );
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_roles(config: &Config, filter: &str) -> Result<ExitCode> {
    let mut workflow = new_workflow(config, AnalysisMode::KeywordMatch)?;
    workflow.dispatch(Event::Mounted);
    workflow.settle().await;

    let state = workflow.state();
    if let Some(message) = state.error_message() {
        eprintln!("error: {}", strip_control(message));
        return Ok(ExitCode::FAILURE);
    }

    print_roles(&state.job_roles, filter);
    Ok(ExitCode::SUCCESS)
}
