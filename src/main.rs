//! spindle-cli — exercise the Spindle client against a live backend.

use clap::{Parser, Subcommand};

use spindle_client::net::endpoints::url_for;
use spindle_client::session::storage::MemoryStorage;
use spindle_client::ui::NavView;
use spindle_client::{ApiClient, EnvConfig, Environment, LoginError, RequestError, SessionState, SessionStore};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("client setup failed: {0}")]
    Setup(#[from] RequestError),

    #[error("login failed: {0}")]
    Login(#[from] LoginError),
}

#[derive(Parser, Debug)]
#[command(name = "spindle-cli", about = "Spindle record-store API and session CLI")]
struct Cli {
    /// Hostname used for environment resolution when --base-url is absent.
    #[arg(long, env = "SPINDLE_HOST", default_value = "localhost")]
    host: String,

    #[arg(long, env = "SPINDLE_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "SPINDLE_SESSION_TOKEN")]
    session_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved environment and configuration.
    Env,
    /// Resolve an endpoint key (params as key=value pairs).
    Url {
        key: String,
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Check the current session and print the result.
    Session,
    /// Log in and print the authenticated identity.
    Login { username: String, password: String },
    /// Log out, clearing local session state.
    Logout,
    /// Report whether the current session may use a feature.
    CanAccess { feature: String },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("invalid parameter `{raw}` (expected key=value)"))
}

fn resolve_config(cli: &Cli) -> EnvConfig {
    match &cli.base_url {
        Some(base_url) => EnvConfig::with_base_url(Environment::resolve(&cli.host), base_url),
        None => EnvConfig::for_environment(Environment::resolve(&cli.host)),
    }
}

fn build_store(cli: &Cli, config: &EnvConfig) -> Result<SessionStore, CliError> {
    let api = ApiClient::new(config)?;
    let storage = match &cli.session_token {
        Some(token) => MemoryStorage::with_token(token),
        None => MemoryStorage::new(),
    };
    Ok(SessionStore::new(api, cli.host.clone(), Box::new(storage)))
}

fn print_state(state: &SessionState) {
    match state {
        SessionState::Unknown => println!("session: unknown"),
        SessionState::Anonymous => println!("session: anonymous"),
        SessionState::Authenticated { user, token } => {
            println!("session: {} (id={}, role={})", user.username, user.id, user.role);
            if let Some(token) = token {
                println!("token: {token}");
            }
            let links: Vec<&str> = NavView::from_state(state)
                .links()
                .iter()
                .map(|link| link.label)
                .collect();
            println!("nav: {}", links.join(", "));
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = resolve_config(&cli);

    match &cli.command {
        Command::Env => {
            println!("environment: {}", config.environment.as_str());
            println!("api_base_url: {}", config.api_base_url);
            println!("debug: {}", config.debug);
            println!(
                "timeouts: request={}s connect={}s",
                config.request_timeout_secs, config.connect_timeout_secs
            );
            Ok(())
        }
        Command::Url { key, params } => {
            let borrowed: Vec<(&str, &str)> = params
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            println!("{}", url_for(&config.api_base_url, key, &borrowed));
            Ok(())
        }
        Command::Session => {
            let store = build_store(&cli, &config)?;
            store.check_session().await;
            print_state(&store.snapshot());
            Ok(())
        }
        Command::Login { username, password } => {
            let store = build_store(&cli, &config)?;
            store.login(username, password).await?;
            print_state(&store.snapshot());
            Ok(())
        }
        Command::Logout => {
            let store = build_store(&cli, &config)?;
            store.logout().await;
            println!("logged out");
            Ok(())
        }
        Command::CanAccess { feature } => {
            let store = build_store(&cli, &config)?;
            store.check_session().await;
            print_state(&store.snapshot());
            println!("{feature}: {}", store.can_access(feature));
            Ok(())
        }
    }
}
