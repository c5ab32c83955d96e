use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use pocketbook::audit::AuditLogger;
use pocketbook::cli::{
    handle_add_command, handle_categories_command, handle_currencies_command,
    handle_delete_command, handle_export_command, handle_history_command, handle_list_command,
    handle_monthly_command, handle_profile_command, handle_search_command, handle_summary_command,
    AddArgs, FilterArgs, ProfileCommands,
};
use pocketbook::config::{paths::DATA_DIR_ENV, PocketbookPaths, Settings};
use pocketbook::models::EntryKind;
use pocketbook::services::LedgerService;
use pocketbook::storage::Store;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Personal income and expense tracker",
    long_about = "Pocketbook records income and expenses in a local JSON ledger, \
                  filters and searches them, and summarises each month against \
                  your income target."
)]
struct Cli {
    /// Directory holding ledger.json, config.json and audit.log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income or expense entry
    Add(AddArgs),

    /// List entries, optionally filtered
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Search categories and descriptions
    Search {
        /// Text to look for (case-insensitive)
        text: String,
    },

    /// Delete an entry by id
    #[command(alias = "rm")]
    Delete {
        /// Entry id, e.g. 12 or #12
        id: String,
    },

    /// Summary of a month with a recommendation
    Summary {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Totals per category
    Categories {
        /// Entry kind to break down
        #[arg(short, long, default_value = "expense")]
        kind: EntryKind,
    },

    /// Income and expenses for every month
    Monthly,

    /// Income target and currency
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// List supported currencies
    Currencies,

    /// Show recent changes from the audit log
    History {
        /// Number of changes to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Export entries to a CSV file
    Export {
        /// Output file
        path: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Delete every entry and reset the profile
    Reset {
        /// Required; there is no undo
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the default config.json if there is none
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => PocketbookPaths::with_base_dir(dir),
        None => PocketbookPaths::new()?,
    };
    let audit = AuditLogger::new(paths.audit_log());

    let Some(command) = cli.command else {
        println!("Pocketbook - personal income and expense tracker");
        println!();
        println!("Run 'pocketbook --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Reset { force } => {
            if !force {
                bail!("Reset deletes every entry. Run 'pocketbook reset --force' to confirm.");
            }
            let mut store = match Store::load(paths.ledger_file()) {
                Ok(store) => store,
                Err(err) if err.is_corrupt() => {
                    log::warn!("Discarding corrupt ledger: {}", err);
                    Store::new(paths.ledger_file())
                }
                Err(err) => return Err(err.into()),
            };
            let removed = LedgerService::new(&mut store, &audit).reset()?;
            println!("Ledger reset, {} entries removed.", removed);
        }
        Commands::Config { init } => {
            let settings = load_settings(&paths)?;
            if init && !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Date format:         {}", settings.date_format);
            println!(
                "  Caution ratio:       {:.0}%",
                settings.recommendation.caution_ratio * 100.0
            );
            println!(
                "  Target savings rate: {:.0}%",
                settings.recommendation.target_savings_rate * 100.0
            );
        }
        Commands::History { limit } => handle_history_command(&audit, limit)?,
        Commands::Add(args) => handle_add_command(&mut load_store(&paths)?, &audit, args)?,
        Commands::List(filters) => {
            handle_list_command(&load_store(&paths)?, &load_settings(&paths)?, &filters)?
        }
        Commands::Search { text } => {
            handle_search_command(&load_store(&paths)?, &load_settings(&paths)?, &text)?
        }
        Commands::Delete { id } => handle_delete_command(&mut load_store(&paths)?, &audit, &id)?,
        Commands::Summary { month } => {
            let settings = load_settings(&paths)?;
            handle_summary_command(&load_store(&paths)?, &settings, month.as_deref())?
        }
        Commands::Categories { kind } => handle_categories_command(&load_store(&paths)?, kind)?,
        Commands::Monthly => handle_monthly_command(&load_store(&paths)?)?,
        Commands::Profile(cmd) => handle_profile_command(&mut load_store(&paths)?, &audit, cmd)?,
        Commands::Currencies => handle_currencies_command(&load_store(&paths)?)?,
        Commands::Export { path, filters } => {
            handle_export_command(&load_store(&paths)?, &path, &filters)?
        }
    }

    Ok(())
}

fn load_settings(paths: &PocketbookPaths) -> Result<Settings> {
    Settings::load_or_create(paths)
        .with_context(|| format!("Failed to load {}", paths.settings_file().display()))
}

fn load_store(paths: &PocketbookPaths) -> Result<Store> {
    Store::load(paths.ledger_file()).map_err(|err| {
        if err.is_corrupt() {
            anyhow::Error::new(err).context(
                "The ledger file could not be read. Fix it by hand, or start over \
                 with 'pocketbook reset --force'",
            )
        } else {
            err.into()
        }
    })
}
