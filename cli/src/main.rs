//! `cms` - terminal front-end for the content console.
//!
//! Drives the same session lifecycle and view state as the browser console:
//! log in, browse and edit blog posts, case studies, team members and user
//! accounts, and change your own profile. Output is pretty-printed JSON on
//! stdout; prompts and notices go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use client::views::{LoginForm, PasswordForm, ProfileForm};
use client::{ApiError, ClientConfig};
use dialoguer::{Input, Password};
use models::guard::{DASHBOARD_PATH, LOGIN_PATH};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod console;
mod resources;

use console::Console;
use resources::{BlogCommand, CaseStudyCommand, TeamCommand, UserCommand};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not signed in; run `cms login` first")]
    NotSignedIn,
    #[error("no state directory; pass --state-dir or set CMS_STATE_DIR")]
    NoStateDir,
    #[error("{0}")]
    Failed(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "cms", about = "Content console for blog posts, case studies, team members and users")]
struct Cli {
    #[arg(long, env = "CMS_API_URL", default_value = client::config::DEFAULT_API_URL)]
    api_url: String,

    /// Where the session token and cookie jar are kept.
    #[arg(long, env = "CMS_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Domain recorded on the mirrored session cookie.
    #[arg(long, env = "CMS_CONSOLE_HOST", default_value = "localhost")]
    console_host: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session.
    Login(LoginArgs),
    /// Forget the stored session.
    Logout,
    /// Show the signed-in account.
    Whoami,
    /// Change your own profile or password.
    Settings(SettingsCommand),
    Blogs(BlogCommand),
    CaseStudies(CaseStudyCommand),
    Teams(TeamCommand),
    Users(UserCommand),
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: Option<String>,
    #[arg(long, env = "CMS_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SettingsSubcommand {
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Prompts for the new password twice.
    Password,
}

impl Command {
    /// Console route this command stands in for.
    fn console_path(&self) -> String {
        match self {
            Self::Login(_) => LOGIN_PATH.to_owned(),
            Self::Logout | Self::Whoami => DASHBOARD_PATH.to_owned(),
            Self::Settings(_) => "/settings".to_owned(),
            Self::Blogs(command) => command.console_path(),
            Self::CaseStudies(command) => command.console_path(),
            Self::Teams(command) => command.console_path(),
            Self::Users(command) => command.console_path(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let state_dir = cli.state_dir.or_else(console::default_state_dir).ok_or(CliError::NoStateDir)?;
    let config = ClientConfig { api_url: ClientConfig::new(&cli.api_url).api_url, ..ClientConfig::from_env() };
    let console = Console::open(config, &state_dir, &cli.console_host, &cli.command.console_path())?;

    let is_logout = matches!(cli.command, Command::Logout);
    let result = match cli.command {
        Command::Login(args) => run_login(&console, args).await,
        Command::Logout => {
            console.manager.logout();
            eprintln!("signed out");
            Ok(())
        }
        Command::Whoami => console.require_user().await.and_then(|user| print_json(&user)),
        Command::Settings(settings) => run_settings(&console, settings).await,
        Command::Blogs(command) => resources::run_blogs(&console, command).await,
        Command::CaseStudies(command) => resources::run_case_studies(&console, command).await,
        Command::Teams(command) => resources::run_teams(&console, command).await,
        Command::Users(command) => resources::run_users(&console, command).await,
    };

    if !is_logout && console.session_expired() {
        eprintln!("session expired; run `cms login` to sign in again");
    }
    result
}

async fn run_login(console: &Console, args: LoginArgs) -> Result<(), CliError> {
    let email = match args.email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let mut form = LoginForm::new(email, password);
    let Some(user) = form.submit(&console.manager).await else {
        return Err(CliError::Failed(form.error().unwrap_or(client::views::account::LOGIN_FAILED).to_owned()));
    };
    eprintln!("signed in as {}", user.email);
    print_json(&user)
}

async fn run_settings(console: &Console, settings: SettingsCommand) -> Result<(), CliError> {
    let user = console.require_user().await?;
    match settings.command {
        SettingsSubcommand::Profile { name, avatar } => {
            let mut form = ProfileForm::from_user(&user);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(avatar) = avatar {
                form.avatar = avatar;
            }
            let Some(updated) = form.submit(&console.manager).await else {
                return Err(failed(form.error(), client::views::account::PROFILE_FAILED));
            };
            print_json(&updated)
        }
        SettingsSubcommand::Password => {
            let new_password = Password::new().with_prompt("New password").interact()?;
            let confirm_password = Password::new().with_prompt("Confirm password").interact()?;
            let mut form = PasswordForm::new(new_password, confirm_password);
            if !form.submit(&console.manager).await {
                return Err(failed(form.error(), client::views::account::PASSWORD_FAILED));
            }
            eprintln!("password updated");
            Ok(())
        }
    }
}

fn failed(message: Option<&str>, fallback: &str) -> CliError {
    CliError::Failed(message.unwrap_or(fallback).to_owned())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
