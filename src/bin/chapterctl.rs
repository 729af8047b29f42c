use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chapterhouse::{
    auth::AuthService,
    config::Settings,
    domain::{CreateEventRequest, EventCategory, EventStatus},
    query::{self, CategoryFilter, EventFilter, StatusFilter},
    repository::{ContentRepository, LoadOutcome},
    service::AdminService,
    storage::{JsonFileStore, StorageKeys},
};

/// Admin tool for the chapter content store.
#[derive(Parser)]
#[command(name = "chapterctl", version)]
struct Cli {
    /// Path of the JSON data file backing the store.
    #[arg(long, default_value = "chapterhouse.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List events, optionally filtered.
    List(ListArgs),
    /// Show one event in full.
    Show { id: String },
    /// List team members.
    Team,
    /// Show the announcement banner.
    Announcement,
    /// List blog posts, optionally by category.
    Posts {
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Add an event (requires login).
    AddEvent(AddEventArgs),
    /// Remove an event by id (requires login).
    RemoveEvent { id: String },
    /// Export the full content snapshot as JSON.
    Export {
        /// Write to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import a snapshot file (requires login).
    Import { file: PathBuf },
    /// Start an admin session.
    Login { secret: String },
    /// End the admin session.
    Logout,
    /// Show session and load status.
    Status,
}

#[derive(Args)]
struct ListArgs {
    /// upcoming | past
    #[arg(long)]
    status: Option<String>,
    /// workshop | talk | competition | networking | exhibition
    #[arg(long)]
    category: Option<String>,
    /// Substring match against title, description, or tags.
    #[arg(long, default_value = "")]
    search: String,
}

#[derive(Args)]
struct AddEventArgs {
    #[arg(long)]
    title: String,
    /// Calendar date, YYYY-MM-DD.
    #[arg(long)]
    date: String,
    #[arg(long)]
    description: String,
    #[arg(long, default_value = "")]
    image_url: String,
    #[arg(long, default_value = "workshop")]
    category: String,
    #[arg(long, default_value = "upcoming")]
    status: String,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    registration_url: Option<String>,
    #[arg(long = "tag")]
    tags: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chapterhouse=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    let cli = Cli::parse();

    let store = Arc::new(JsonFileStore::open(&cli.data));
    let keys = StorageKeys::with_namespace(&settings.storage.namespace);
    let auth = Arc::new(AuthService::new(
        store.clone(),
        keys.session.clone(),
        settings.auth.clone(),
    ));
    let repo = ContentRepository::open(store, keys);
    let mut admin = AdminService::new(repo, auth);

    match cli.command {
        Command::List(args) => {
            let filter = EventFilter {
                search: args.search,
                category: match args.category.as_deref() {
                    None => CategoryFilter::All,
                    Some(s) => CategoryFilter::Only(parse_category(s)?),
                },
                status: match args.status.as_deref() {
                    None => StatusFilter::All,
                    Some(s) => StatusFilter::Only(parse_status(s)?),
                },
            };
            let events = admin.repo().events();
            let filtered = query::filter_events(events, &filter);
            for event in &filtered {
                println!(
                    "{}  {}  [{}/{}]  {}",
                    event.id,
                    event.date,
                    event.category.as_str(),
                    event.status.as_str(),
                    event.title
                );
            }
            println!("Showing {} of {} events", filtered.len(), events.len());
        }
        Command::Show { id } => match admin.repo().event(&id) {
            Some(event) => println!("{}", serde_json::to_string_pretty(event)?),
            None => anyhow::bail!("no event with id {id}"),
        },
        Command::Team => {
            for member in admin.repo().team() {
                println!("{}  {}  ({})", member.id, member.name, member.designation);
            }
        }
        Command::Announcement => {
            let announcement = admin.repo().announcement();
            println!(
                "[{}{}] {}",
                announcement.kind.as_str(),
                if announcement.is_active { "" } else { ", inactive" },
                announcement.message
            );
        }
        Command::Posts { category } => {
            let posts = query::filter_posts(admin.repo().blog_posts(), &category);
            for post in posts {
                println!("{}  {}  [{}]  {}", post.id, post.date, post.category, post.title);
            }
        }
        Command::AddEvent(args) => {
            let event = admin.add_event(CreateEventRequest {
                title: args.title,
                date: args.date,
                description: args.description,
                image_url: args.image_url,
                category: parse_category(&args.category)?,
                status: parse_status(&args.status)?,
                location: args.location,
                registration_url: args.registration_url,
                tags: args.tags,
                gallery_images: Vec::new(),
            })?;
            println!("Added event {}", event.id);
        }
        Command::RemoveEvent { id } => {
            if admin.remove_event(&id)? {
                println!("Removed event {id}");
            } else {
                println!("No event with id {id}");
            }
        }
        Command::Export { out } => {
            let snapshot = admin.export_snapshot()?;
            match out {
                Some(path) => {
                    fs::write(&path, snapshot)?;
                    println!("Exported snapshot to {}", path.display());
                }
                None => println!("{snapshot}"),
            }
        }
        Command::Import { file } => {
            let text = fs::read_to_string(&file)?;
            let report = admin.import_snapshot(&text)?;
            println!(
                "Imported: events={} team={} announcement={}",
                report.events, report.team, report.announcement
            );
        }
        Command::Login { secret } => {
            if admin.login(&secret) {
                println!("Logged in");
            } else {
                anyhow::bail!("invalid admin secret");
            }
        }
        Command::Logout => {
            admin.logout();
            println!("Logged out");
        }
        Command::Status => {
            match admin.current_session() {
                Some(session) => println!("Logged in, session expires {}", session.expires_at),
                None => println!("Not logged in"),
            }
            let report = admin.repo().load_report();
            println!("events: {}", describe_outcome(&report.events));
            println!("team: {}", describe_outcome(&report.team));
            println!("announcement: {}", describe_outcome(&report.announcement));
        }
    }

    Ok(())
}

fn parse_category(s: &str) -> anyhow::Result<EventCategory> {
    EventCategory::from_str(s).ok_or_else(|| anyhow::anyhow!("unknown category: {s}"))
}

fn parse_status(s: &str) -> anyhow::Result<EventStatus> {
    EventStatus::from_str(s).ok_or_else(|| anyhow::anyhow!("unknown status: {s}"))
}

fn describe_outcome(outcome: &LoadOutcome) -> String {
    match outcome {
        LoadOutcome::Loaded => "loaded from store".to_string(),
        LoadOutcome::Defaults => "compiled-in defaults".to_string(),
        LoadOutcome::FellBack(reason) => format!("fell back to defaults ({reason})"),
    }
}
