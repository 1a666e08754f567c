use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{Duration, SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use client_core::{
    controller::{
        HomeController, LoginController, Phase, RegisterController, SessionAddController,
        SessionDetailController,
    },
    ApiClient, NetworkWalkcoreRepository, WalkcoreRepository,
};
use shared::{
    domain::{SessionId, SessionMode},
    protocol::Session,
};

mod config;

#[derive(Parser, Debug)]
#[command(name = "walkcore", about = "Command-line client for the walkcore backend")]
struct Args {
    /// Backend base URL; overrides walkcore.toml and WALKCORE_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the issued token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and print the issued token.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show profile, lifetime stats and the ongoing session.
    Overview,
    /// List every session available for browsing.
    Sessions,
    /// Show one session.
    Show { session_id: String },
    /// List everyone who joined a session.
    Participants { session_id: String },
    /// Show a session's ranking.
    Leaderboard { session_id: String },
    /// List friends.
    Friends,
    /// Create a walking session starting now.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value_t = 5000)]
        step_target: i64,
        #[arg(long, default_value_t = 10)]
        max_participants: i64,
        /// Length of the session window, in hours from now.
        #[arg(long, default_value_t = 2)]
        duration_hours: i64,
        /// Create an on-site session instead of a remote one.
        #[arg(long)]
        on_site: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }

    let api = Arc::new(ApiClient::new(&settings.base_url)?);
    if let Some(token) = settings.bearer_token.clone() {
        api.set_bearer_token(Some(token)).await;
    }
    let repository: Arc<dyn WalkcoreRepository> =
        Arc::new(NetworkWalkcoreRepository::new(Arc::clone(&api)));

    match args.command {
        Command::Login { email, password } => {
            let controller = LoginController::new(repository);
            controller.set_email(email);
            controller.set_password(password);
            controller.submit().await;
            let auth = finish(controller.state().phase)?;
            println!("Signed in as {} <{}>", auth.user.username, auth.user.email);
            println!("token: {}", auth.token);
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let controller = RegisterController::new(repository);
            controller.set_username(username);
            controller.set_email(email);
            controller.set_password(password);
            controller.submit().await;
            let auth = finish(controller.state().phase)?;
            println!("Registered {} <{}>", auth.user.username, auth.user.email);
            println!("token: {}", auth.token);
        }
        Command::Overview => {
            let controller = HomeController::new(repository);
            controller.refresh().await;
            let snapshot = finish(controller.state().phase)?;
            let profile = &snapshot.data.profile;
            let stats = &snapshot.data.stats;
            println!("{} <{}>", profile.username, profile.email);
            println!(
                "steps={} distance={} active_time={} calories={} streak={}",
                stats.total_steps,
                stats.total_distance,
                stats.total_active_time,
                stats.total_calories_burned,
                stats.longest_streak
            );
            match &snapshot.active_session {
                Some(active) => {
                    println!("Ongoing: {} ({})", active.title, active.date_time_range)
                }
                None => println!("No ongoing session."),
            }
        }
        Command::Sessions => {
            for session in repository.all_sessions().await? {
                print_session(&session);
            }
        }
        Command::Show { session_id } => {
            let controller = SessionDetailController::new(repository);
            controller.load(&SessionId::new(session_id)).await;
            let overview = finish(controller.state().phase)?;
            println!("{}  {}", overview.id, overview.title);
            println!("  {}", overview.date_time_range);
            if !overview.description.is_empty() {
                println!("  {}", overview.description);
            }
        }
        Command::Participants { session_id } => {
            let id = SessionId::new(session_id);
            for participant in repository.participants(&id).await? {
                let marker = if participant.is_admin { " (admin)" } else { "" };
                println!(
                    "{}  {}{marker}  {}",
                    participant.user_id, participant.username, participant.status
                );
            }
        }
        Command::Leaderboard { session_id } => {
            let id = SessionId::new(session_id);
            for entry in repository.leaderboard(&id).await? {
                println!(
                    "#{} {}  steps={} distance={} calories={}",
                    entry.rank,
                    entry.user.username,
                    entry.total_steps,
                    entry.approx_distance,
                    entry.calories_burned
                );
            }
        }
        Command::Friends => {
            for friend in repository.friends().await? {
                println!("{}  {}", friend.id, friend.username);
            }
        }
        Command::Create {
            title,
            description,
            step_target,
            max_participants,
            duration_hours,
            on_site,
        } => {
            let start = Utc::now();
            let end = start + Duration::hours(duration_hours);

            let controller = SessionAddController::new(repository);
            controller.set_title(title);
            controller.set_description(description);
            controller.set_step_target(step_target.to_string());
            controller.set_max_participants(max_participants.to_string());
            controller.set_mode(if on_site {
                SessionMode::OnSite
            } else {
                SessionMode::Remote
            });
            controller.set_window(
                start.to_rfc3339_opts(SecondsFormat::Secs, true),
                end.to_rfc3339_opts(SecondsFormat::Secs, true),
            );
            controller.submit().await;
            let session = finish(controller.state().phase)?;
            println!("Created session {}", session.id);
            print_session(&session);
        }
    }

    Ok(())
}

fn finish<T>(phase: Phase<T>) -> Result<T> {
    match phase {
        Phase::Success(value) => Ok(value),
        Phase::Error(message) => Err(anyhow!(message)),
        Phase::Idle | Phase::Loading => Err(anyhow!("action did not complete")),
    }
}

fn print_session(session: &Session) {
    println!(
        "{}  {}  [{:?}/{:?}]  {} - {}  target={} max={}",
        session.id,
        session.title,
        session.status,
        session.mode,
        session.start_time,
        session.end_time,
        session.step_target,
        session.max_participants
    );
}
