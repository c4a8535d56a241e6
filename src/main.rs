use anyhow::Result;
use clap::{Parser, Subcommand};

use veckoplan::cli;
use veckoplan::config::{Config, StoreBackend};
use veckoplan_mealplan::Planner;
use veckoplan_mealplan::store::{MemoryStore, PlanStore, SqliteStore};
use veckoplan_recipe::Catalog;

/// veckoplan - weekly dinner planning
#[derive(Parser)]
#[command(name = "veckoplan")]
#[command(about = "Plans a week of dinners from a recipe catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a week's plan
    Show {
        /// Week identifier, e.g. 2026-W08 (defaults to the current week)
        #[arg(long)]
        week: Option<String>,

        /// Whole weeks to shift the target week by, e.g. -1 or 2
        #[arg(long)]
        offset: Option<i64>,

        /// Emit the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate and persist a fresh plan for a week
    Generate {
        #[arg(long)]
        week: Option<String>,

        #[arg(long)]
        offset: Option<i64>,

        /// Number of day slots to fill (overrides config)
        #[arg(long)]
        slots: Option<usize>,
    },
    /// Swap one slot for a recipe not already on the week
    Reroll {
        /// Slot index, 0-based
        #[arg(long)]
        slot: usize,

        #[arg(long)]
        week: Option<String>,

        #[arg(long)]
        offset: Option<i64>,
    },
    /// Put a specific recipe in a slot, or clear it
    Set {
        /// Slot index, 0-based
        #[arg(long)]
        slot: usize,

        /// Recipe id to assign
        #[arg(long, conflicts_with = "clear")]
        recipe: Option<String>,

        /// Empty the slot instead
        #[arg(long)]
        clear: bool,

        #[arg(long)]
        week: Option<String>,

        #[arg(long)]
        offset: Option<i64>,
    },
    /// Append an empty slot to a week (up to 7)
    AddSlot {
        #[arg(long)]
        week: Option<String>,

        #[arg(long)]
        offset: Option<i64>,
    },
    /// List the recipe catalog
    Recipes,
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    veckoplan::observability::init_observability("veckoplan", &config.observability.log_level)?;

    match cli.command {
        Commands::Migrate => return cli::migrate_command(&config).await,
        Commands::Reset => return cli::reset_command(&config).await,
        _ => {}
    }

    let catalog = if config.catalog.path.is_empty() {
        Catalog::load()?
    } else {
        Catalog::from_path(std::path::Path::new(&config.catalog.path))?
    };

    if let Commands::Recipes = cli.command {
        cli::recipes_command(&catalog);
        return Ok(());
    }

    match config.store.backend {
        StoreBackend::Memory => {
            tracing::warn!("memory store selected, plans will not outlive this process");
            let planner = Planner::new(catalog, MemoryStore::new(), config.planner.default_slots);
            run_plan_command(cli.command, &config, planner).await
        }
        StoreBackend::Sqlite => {
            let pool = veckoplan::db::connect(&config.store).await?;
            let planner = Planner::new(
                catalog,
                SqliteStore::new(pool),
                config.planner.default_slots,
            );
            run_plan_command(cli.command, &config, planner).await
        }
    }
}

async fn run_plan_command<S: PlanStore>(
    command: Commands,
    config: &Config,
    planner: Planner<S>,
) -> Result<()> {
    // Ambient randomness stays at this boundary; everything below takes an
    // injected source.
    let mut rng = rand::rng();

    match command {
        Commands::Show { week, offset, json } => {
            let week_id = cli::resolve_week(week.as_deref(), offset)?;
            cli::show_command(&planner, week_id, json).await
        }
        Commands::Generate {
            week,
            offset,
            slots,
        } => {
            let week_id = cli::resolve_week(week.as_deref(), offset)?;
            let num_slots = slots.unwrap_or(config.planner.default_slots);
            cli::generate_command(&planner, week_id, num_slots, &mut rng).await
        }
        Commands::Reroll { slot, week, offset } => {
            let week_id = cli::resolve_week(week.as_deref(), offset)?;
            cli::reroll_command(&planner, week_id, slot, &mut rng).await
        }
        Commands::Set {
            slot,
            recipe,
            clear,
            week,
            offset,
        } => {
            let week_id = cli::resolve_week(week.as_deref(), offset)?;
            if recipe.is_none() && !clear {
                anyhow::bail!("pass --recipe <ID> or --clear");
            }
            cli::set_command(&planner, week_id, slot, recipe).await
        }
        Commands::AddSlot { week, offset } => {
            let week_id = cli::resolve_week(week.as_deref(), offset)?;
            cli::add_slot_command(&planner, week_id).await
        }
        Commands::Recipes | Commands::Migrate | Commands::Reset => {
            unreachable!("handled before store selection")
        }
    }
}
