use clap::{Parser, Subcommand};
use lostfound::cli::{self, ListQuery};
use lostfound::core::config;
use lostfound::core::item::{CategoryFilter, ItemStatus, ItemType};
use lostfound::core::navigation::Tab;
use lostfound::core::store::MemoryStore;
use lostfound::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "lostfound", about = "Campus lost & found board")]
struct Args {
    /// Tab to open on
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print listings and exit
    List {
        /// Which collection to list
        #[arg(short, long, value_enum)]
        kind: ItemType,
        /// Case-insensitive text matched against title, description and location
        #[arg(short, long, default_value = "")]
        search: String,
        /// Exact category name, or "All"
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
        #[arg(long, value_enum)]
        status: Option<ItemStatus>,
        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to lostfound.log in current directory.
    // Everything is let through here; the configured level is applied below.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("lostfound.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::LostFoundConfig::default()
    });
    let resolved = config::resolve(&file_config, args.tab);
    log::set_max_level(resolved.log_level);

    match args.command {
        Some(Command::List {
            kind,
            search,
            category,
            status,
            json,
        }) => {
            let filter = ListQuery {
                search,
                category,
                status,
            };
            let store = MemoryStore::seeded();
            cli::write_listing(&mut std::io::stdout().lock(), &store, kind, &filter, json)
        }
        None => {
            log::info!("Starting on tab {:?}", resolved.start_tab);
            tui::run(resolved)
        }
    }
}
