use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use code_helper_chat::config::{
    ADDR_ENV, API_ENV, ApiConfig, DEFAULT_ADDR, LEGACY_API_ENV, terminal_api_base,
};
use code_helper_chat::routes;
use code_helper_chat::services::chat_client::ChatClient;
use code_helper_chat::services::chat_form::{ChatForm, Submission};
use code_helper_chat::state::AppState;
use code_helper_chat::terminal::{self, BANNER};
use code_helper_chat::view::TerminalView;

#[derive(Parser, Debug)]
#[command(name = "code-helper-chat", version, about = "Chat form client for the code-helper API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the chat form page.
    Serve {
        #[arg(long, env = ADDR_ENV, default_value = DEFAULT_ADDR)]
        addr: String,
        /// API base; overrides the page's `?api=` parameter.
        #[arg(long, env = API_ENV)]
        api: Option<String>,
    },
    /// Chat from the terminal: one message with -m, otherwise line by line.
    Chat {
        /// API base; CODE_HELPER_API_URL is read when neither this nor CODE_HELPER_API is set.
        #[arg(long, env = API_ENV)]
        api: Option<String>,
        /// Project path sent with each message.
        #[arg(long)]
        path: Option<String>,
        #[arg(short, long)]
        message: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { addr, api } => {
            init_tracing("info");
            serve(&addr, api).await
        }
        Command::Chat { api, path, message } => {
            // Keep the terminal for replies; failures are already printed.
            init_tracing("error");
            let injected = terminal_api_base(api, std::env::var(LEGACY_API_ENV).ok());
            let form = ChatForm::new(
                ApiConfig::resolve(injected.as_deref(), None),
                ChatClient::new(),
            );
            let project_path = terminal::absolute_project_path(path.as_deref());
            let view = TerminalView::new();

            let ok = match message {
                Some(message) => match terminal::chat_once(&form, &message, &project_path, &view).await {
                    Submission::Settled(outcome) => outcome.is_reply(),
                    Submission::Skipped => true,
                },
                None => {
                    eprintln!("{BANNER}");
                    let stdin = BufReader::new(tokio::io::stdin());
                    terminal::chat_interactive(&form, &project_path, stdin, &view)
                        .await?
                        .is_none_or(|outcome| outcome.is_reply())
                }
            };
            if !ok {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

async fn serve(addr: &str, api: Option<String>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(api.filter(|a| !a.is_empty())));
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!("chat form running at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("serving chat form")?;
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
