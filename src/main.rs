//! Command-line front end for the Battle Factory set finder.
//!
//! Run with: `factory search --move "meteor mash"` or
//! `factory stats 0 --name metagross --round 8`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use battle_factory::{
    DerivedStat, Factory, FactoryConfig, QueryCriteria, RoundContext, SetResults, Stat, StatLine,
};

/// Battle Factory set finder and stat calculator
#[derive(Parser)]
#[command(name = "factory")]
#[command(about = "Find Battle Factory sets and compute their stats", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to $FACTORY_CONFIG or ./factory.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List sets matching the filters
    Search(SearchArgs),

    /// Show the stats of one matching set
    Stats(StatsArgs),
}

#[derive(Args)]
struct Filters {
    /// Species name (partial, case-insensitive)
    #[arg(short, long, default_value = "")]
    name: String,

    /// Held item (partial, case-insensitive)
    #[arg(short, long, default_value = "")]
    item: String,

    /// Required move; repeat up to four times
    #[arg(short = 'm', long = "move", value_name = "MOVE", num_args = 1, action = clap::ArgAction::Append)]
    moves: Vec<String>,

    /// Tournament round (8 means 8 or later)
    #[arg(short, long)]
    round: Option<u32>,

    /// Use the Fight Seven schedule
    #[arg(long)]
    fight_seven: bool,

    /// Accepted for compatibility; matching is always case-insensitive
    #[arg(long)]
    exact: bool,
}

impl Filters {
    fn criteria(&self) -> Result<QueryCriteria> {
        if self.moves.len() > battle_factory::MOVE_SLOTS {
            anyhow::bail!("at most {} moves can be given", battle_factory::MOVE_SLOTS);
        }
        if self.exact {
            debug!("--exact has no effect on matching");
        }
        let mut criteria = QueryCriteria::new()
            .with_name(&self.name)
            .with_item(&self.item)
            .with_moves(&self.moves);
        if let Some(round) = self.round {
            criteria = criteria.with_round(self.round_context(round));
        }
        Ok(criteria)
    }

    fn round_context(&self, round: u32) -> RoundContext {
        RoundContext::new(round, self.fight_seven)
    }
}

#[derive(Args)]
struct SearchArgs {
    #[command(flatten)]
    filters: Filters,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Position of the set in the search results
    #[arg(value_name = "INDEX")]
    index: usize,

    #[command(flatten)]
    filters: Filters,

    /// Show how each value was derived
    #[arg(long)]
    breakdown: bool,

    /// Print stats as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => FactoryConfig::from_file(path)?,
        None => FactoryConfig::discover(),
    }
    .with_env_overrides();
    debug!(?config, "resolved configuration");

    let factory = Factory::new(config);
    match cli.command {
        Command::Search(args) => run_search(&factory, args),
        Command::Stats(args) => run_stats(&factory, args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_search(factory: &Factory, args: SearchArgs) -> Result<()> {
    let criteria = args.filters.criteria()?;
    let results = factory
        .search(&criteria)
        .context("failed to search combatant sets")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }
    Ok(())
}

fn print_results(results: &SetResults) {
    if results.is_empty() {
        println!("no matching sets");
        return;
    }
    println!("{:>3}  {:<14} {:>3}  {:<14} moves", "#", "name", "set", "item");
    for (index, set) in results.iter().enumerate() {
        let moves: Vec<&str> = set.filled_moves().collect();
        println!(
            "{:>3}  {:<14} {:>3}  {:<14} {}",
            index,
            set.name,
            set.set_number,
            set.item,
            moves.join(", ")
        );
    }
}

fn run_stats(factory: &Factory, args: StatsArgs) -> Result<()> {
    let criteria = args.filters.criteria()?;
    let round = args.filters.round_context(args.filters.round.unwrap_or(1));
    let results = factory
        .search(&criteria)
        .context("failed to search combatant sets")?;
    let set = results.get(args.index)?;

    if args.breakdown {
        let breakdown = factory.breakdown(set, round)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        } else {
            print_breakdown(&breakdown);
        }
        return Ok(());
    }

    let stats = factory
        .stats(set, round)
        .with_context(|| format!("failed to compute stats for {}", set.name))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "{} (set {}) @ {} | {} | round {}{} | effort {}",
            set.name,
            set.set_number,
            set.item,
            set.nature,
            round.round(),
            if round.fight_seven() { ", fight seven" } else { "" },
            round.effort()
        );
        for (stat, value) in stats.iter() {
            println!("{:>4} {:>4}", stat.abbreviation(), value);
        }
    }
    Ok(())
}

fn print_breakdown(breakdown: &StatLine<DerivedStat>) {
    for stat in Stat::ALL {
        let derived = breakdown.get_ref(stat);
        println!("{:>4} {:>4}", stat.abbreviation(), derived.value);
        for (description, value) in &derived.terms {
            println!("       + {description}: {value}");
        }
        for (description, value) in &derived.steps {
            println!("       = {description}: {value}");
        }
    }
}
