use anyhow::Context;
use clap::Parser;
use kanban_view::{
    domain::{snapshot::Snapshot, Group},
    loader::{HttpSnapshotSource, JsonFileSnapshotSource, SnapshotSource},
    storage::{FileStore, KeyValueStore},
    AppConfig, Board, GroupBy, OrderBy, Session, ViewState,
};
use std::{env, path::PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "kanban", about = "Show the tracker's tickets as a kanban board")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Group columns by status, user or priority (remembered for next time)
    #[arg(long)]
    group_by: Option<GroupBy>,

    /// Order cards by priority or title (remembered for next time)
    #[arg(long)]
    order_by: Option<OrderBy>,

    /// Read the snapshot from a JSON file instead of the endpoint
    #[arg(long)]
    file: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("KANBAN_LOG")
        .unwrap_or_else(|_| EnvFilter::new("kanban_view=info,warn"));

    let format = env::var("KANBAN_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let mut session = Session::open(FileStore::new(&config.state_dir)).await;

    let current = session.view();
    let requested = ViewState::new(
        cli.group_by.unwrap_or(current.grouping),
        cli.order_by.unwrap_or(current.sorting),
    );
    if requested != current {
        session.set_view(requested).await;
    }

    let source: Box<dyn SnapshotSource> = match &cli.file {
        Some(path) => Box::new(JsonFileSnapshotSource::new(path)),
        None => Box::new(
            HttpSnapshotSource::from_config(&config).context("Failed to set up snapshot source")?,
        ),
    };

    tokio::select! {
        _ = session.start(source.as_ref()) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted before the snapshot arrived");
            return Ok(());
        }
    }

    print!("{}", render(&session));
    Ok(())
}

fn render<S: KeyValueStore>(session: &Session<S>) -> String {
    let view = session.view();
    let mut out = format!(
        "☰ Display  grouping: {}  ordering: {}\n\n",
        view.grouping, view.sorting
    );

    match session.board() {
        // A failed load looks the same as one that never finished.
        Board::Loading | Board::Failed(_) => out.push_str("Loading...\n"),
        Board::Ready(groups) => {
            if let Some(snapshot) = session.load_state().snapshot() {
                for group in &groups {
                    render_column(&mut out, snapshot, group);
                }
            }
        }
    }
    out
}

fn render_column(out: &mut String, snapshot: &Snapshot, group: &Group<'_>) {
    out.push_str(&format!(
        "{} {}  {}    +  ...\n",
        group.icon,
        group.label,
        group.count()
    ));

    for ticket in &group.tickets {
        let avatar = snapshot
            .user_for(ticket)
            .and_then(|user| user.initial())
            .unwrap_or_default();
        out.push_str(&format!("  {:<10} [{}]\n", ticket.id.as_str(), avatar));
        out.push_str(&format!("  {}\n", ticket.title));

        let mut footer = vec![ticket.priority.icon().to_string()];
        footer.extend(ticket.tags.iter().map(|tag| format!("• {}", tag)));
        out.push_str(&format!("  {}\n\n", footer.join("  ")));
    }
}
