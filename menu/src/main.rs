use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moomenu::{
    config::{Config, DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER},
    utils::{format_roster, resolve_selector, resolve_selectors},
    AttendeeStore, DrinkOrder,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "moomenu")]
#[command(about = "Keep track of who is coming to lunch and what to order")]
#[command(version)]
struct Cli {
    /// Roster file (overrides MOOMENU_DATA)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show everyone; attendees are marked with *
    List,

    /// Add someone to the roster
    Add {
        name: String,
        drink: String,

        #[arg(long)]
        vegetarian: bool,
    },

    /// Replace the attendee list
    Select {
        /// Positions, names or ids; digits are a position unless past the end of the list
        #[arg(required_unless_present = "none")]
        people: Vec<String>,

        /// Clear the attendee list
        #[arg(long, conflicts_with = "people")]
        none: bool,
    },

    /// Add or remove one attendee
    Toggle {
        /// Position, name or id; digits are a position unless past the end of the list
        person: String,
    },

    /// Food and drink totals for the current attendees
    Summary {
        /// List drinks in roster order instead of by popularity
        #[arg(long)]
        unsorted: bool,
    },

    /// Print the roster file location
    Path,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::resolve(cli.data.as_deref())?;
    debug!(path = %config.data_file.display(), "Using roster file");

    let open_store = || {
        AttendeeStore::open(&config.data_file)
            .with_context(|| format!("opening {}", config.data_file.display()))
    };

    match cli.command {
        Commands::Path => {
            println!("{}", config.data_file.display());
        }
        Commands::List => {
            let store = open_store()?;
            print!("{}", format_roster(store.roster()));
        }
        Commands::Add { name, drink, vegetarian } => {
            let mut store = open_store()?;
            let id = store.add_person(&name, &drink, vegetarian)?;
            info!(%id, "Added {}", name);
            println!("Added {} ({})", name.trim(), id);
        }
        Commands::Select { people, none } => {
            let mut store = open_store()?;
            let ids = if none {
                Vec::new()
            } else {
                resolve_selectors(store.roster(), &people)?
            };
            store.set_attendees(ids)?;
            println!("{} attending", store.roster().attendee_count());
        }
        Commands::Toggle { person } => {
            let mut store = open_store()?;
            let id = resolve_selector(store.roster(), &person)?;
            let attending = store.toggle_attendee(id)?;
            let name = store.roster().get(id).map_or("?", |p| p.name.as_str());
            if attending {
                println!("{} is coming", name);
            } else {
                println!("{} is not coming", name);
            }
        }
        Commands::Summary { unsorted } => {
            let store = open_store()?;
            let order = if unsorted { DrinkOrder::FirstSeen } else { DrinkOrder::ByCount };
            print!("{}", store.summary(order));
        }
    }

    Ok(())
}
