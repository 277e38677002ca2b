//! # Món Ngon Storefront Library
//!
//! State container behind the Món Ngon food-delivery storefront: one root
//! state, the commands that change it, and the timed flows (login, order
//! placement, dish suggestion, toast expiry) that run alongside.
//!
//! ## Module Organization
//! ```text
//! monngon_storefront/
//! ├── lib.rs          ◄─── You are here (startup & console loop)
//! ├── storefront.rs   ◄─── Shared handle: state + tasks + config
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── app.rs      ◄─── Root AppState, snapshots, effects
//! │   └── config.rs   ◄─── StorefrontConfig (TOML + env overrides)
//! ├── commands/       ◄─── One module per screen area
//! ├── services/       ◄─── Suggestion collaborator
//! ├── tasks.rs        ◄─── View-scoped task registry
//! ├── console.rs      ◄─── Line-oriented shell
//! ├── messages.rs     ◄─── Customer-facing strings
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod messages;
pub mod services;
pub mod state;
pub mod storefront;
pub mod tasks;

use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use console::{Command, Reply};
use state::StorefrontConfig;
use storefront::Storefront;

/// Environment variable pointing at a config file.
pub const CONFIG_PATH_ENV: &str = "MONNGON_CONFIG";

/// Runs the storefront console until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize logging (RUST_LOG, default info + debug for monngon)    │
/// │  2. Resolve config path: $MONNGON_CONFIG, else the platform config dir │
/// │  3. Load config, apply MONNGON_* overrides, fall back to defaults      │
/// │  4. Build the Storefront (seeded catalog, guest session, Landing)      │
/// │  5. Read commands from stdin, print replies to stdout                  │
/// │  6. Abort outstanding flows and timers on exit                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() {
    init_tracing();

    info!("Starting Món Ngon storefront");

    let config_path = std::env::var(CONFIG_PATH_ENV)
        .ok()
        .map(PathBuf::from)
        .or_else(StorefrontConfig::default_config_path);
    info!(?config_path, "Config path determined");

    let config = StorefrontConfig::load_or_default(config_path);
    let app = match Storefront::new(config) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Catalog failed validation, not starting");
            return;
        }
    };

    if let Err(e) = console_loop(&app).await {
        warn!(error = %e, "Console closed with an I/O error");
    }

    app.shutdown();
}

async fn console_loop(app: &Storefront) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(console::HELP.as_bytes()).await?;
    stdout.write_all(b"\n> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let reply = match line.parse::<Command>() {
            Ok(command) => console::execute(app, command),
            Err(console::ParseError::Empty) => Reply::Text(String::new()),
            Err(e) => Reply::Text(format!("error {}", e)),
        };

        match reply {
            Reply::Quit => break,
            Reply::Text(text) => {
                if !text.is_empty() {
                    stdout.write_all(text.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                }
            }
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=monngon_storefront=trace` - Trace the shell only
/// - Default: INFO, DEBUG for the monngon crates
///
/// Logs go to stderr so they never interleave with console replies.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,monngon_core=debug,monngon_storefront=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .try_init();
}
