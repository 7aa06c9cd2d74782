use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use crate::cli::error::{user_error, validate_interval, validate_team};
use crate::cli::output::{
    format_board, format_metric_lines, format_ring, format_stage_card, format_stakeholder_table,
    is_tty,
};
use crate::cli::parser::resolve_ref;
use crate::config::BoardLocation;
use crate::filter::TeamFilter;
use crate::models::Dashboard;
use crate::progress::{apply_toggle, refresh_all};
use crate::ui::{Jitter, SectionState, DEFAULT_INTERVAL_SECS};

#[derive(Parser)]
#[command(name = "stagedash")]
#[command(about = "Stagedash - a terminal dashboard for multi-stage project launches")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Board seed file (overrides board.location in ~/.stagedash/rc)
    #[arg(long, global = true, value_name = "PATH")]
    pub board: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the board with default section states
    Show {
        /// Expand every section
        #[arg(long)]
        all: bool,
        /// Additionally open the named section(s) (e.g. "team", "stage-2")
        #[arg(long = "open", value_name = "SECTION")]
        open: Vec<String>,
        /// Output the board in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Toggle task items and show the recomputed progress
    Toggle {
        /// Task reference(s): <stage>.<task>, e.g. "1.2" or "planning.2"
        #[arg(required = true, value_name = "REF")]
        refs: Vec<String>,
        /// Output the resulting board in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List stage cards with progress bars and status badges
    Stages {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show the stakeholder directory
    Stakeholders {
        /// Filter by team tag ("All Teams" matches everything)
        #[arg(long, value_name = "TEAM")]
        team: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Run the cosmetic metric jitter loop
    Watch {
        /// Seconds between ticks
        #[arg(long, default_value_t = DEFAULT_INTERVAL_SECS)]
        interval: u64,
        /// Stop after this many ticks (default: run until interrupted)
        #[arg(long, value_name = "N")]
        ticks: Option<u64>,
        /// Seed the jitter RNG for reproducible runs
        #[arg(long, value_name = "SEED")]
        rng_seed: Option<u64>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let board_path = BoardLocation::resolve(cli.board.as_deref())?;
    let mut dashboard = Dashboard::load(&board_path)?;
    info!("board loaded from {}", board_path.display());

    // The seed carries checked flags; bring the derived numbers in line
    // before any command looks at them.
    refresh_all(&mut dashboard);

    match cli.command {
        Commands::Show { all, open, json } => handle_show(&dashboard, all, &open, json),
        Commands::Toggle { refs, json } => handle_toggle(&mut dashboard, &refs, json),
        Commands::Stages { json } => handle_stages(&dashboard, json),
        Commands::Stakeholders { team, json } => handle_stakeholders(&dashboard, team, json),
        Commands::Watch {
            interval,
            ticks,
            rng_seed,
        } => handle_watch(&mut dashboard, interval, ticks, rng_seed),
    }
}

fn handle_show(dashboard: &Dashboard, all: bool, open: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(dashboard)?);
        return Ok(());
    }

    let mut sections = SectionState::for_dashboard(dashboard);
    if all {
        sections.open_all();
    }
    for id in open {
        sections.open(id);
    }
    print!("{}", format_board(dashboard, &sections, is_tty()));
    Ok(())
}

fn handle_toggle(dashboard: &mut Dashboard, refs: &[String], json: bool) -> Result<()> {
    let tty = is_tty();
    let mut touched: Vec<usize> = Vec::new();

    for token in refs {
        let task_ref = match resolve_ref(dashboard, token) {
            Ok(r) => r,
            Err(e) => user_error(&e.to_string()),
        };
        // Indices come validated from resolve_ref, so the engine always
        // finds the item.
        if let Some(checked) = apply_toggle(dashboard, task_ref.stage, task_ref.task) {
            let stage = &dashboard.stages[task_ref.stage];
            if !json {
                println!(
                    "Toggled {}.{} ({}) -> {}",
                    stage.id,
                    task_ref.task + 1,
                    stage.tasks[task_ref.task].label,
                    if checked { "completed" } else { "open" }
                );
            }
            if !touched.contains(&task_ref.stage) {
                touched.push(task_ref.stage);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(dashboard)?);
        return Ok(());
    }

    println!();
    for idx in touched {
        print!("{}", format_stage_card(&dashboard.stages[idx], true, tty));
    }
    println!(
        "\nOverall: {}",
        format_ring(dashboard.overall_percentage, tty)
    );
    Ok(())
}

fn handle_stages(dashboard: &Dashboard, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard.stages)?);
        return Ok(());
    }
    let tty = is_tty();
    for stage in &dashboard.stages {
        print!("{}", format_stage_card(stage, true, tty));
    }
    println!(
        "\nOverall: {}",
        format_ring(dashboard.overall_percentage, tty)
    );
    Ok(())
}

fn handle_stakeholders(dashboard: &Dashboard, team: Option<String>, json: bool) -> Result<()> {
    let filter = match team {
        Some(value) => {
            if let Err(e) = validate_team(&value) {
                user_error(&e);
            }
            TeamFilter::parse(&value)
        }
        None => TeamFilter::AllTeams,
    };

    let visible = filter.apply(&dashboard.stakeholders);
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }
    print!("{}", format_stakeholder_table(&visible, &filter, is_tty()));
    Ok(())
}

fn handle_watch(
    dashboard: &mut Dashboard,
    interval: u64,
    ticks: Option<u64>,
    rng_seed: Option<u64>,
) -> Result<()> {
    let interval = match validate_interval(interval) {
        Ok(secs) => secs,
        Err(e) => user_error(&e),
    };

    let mut jitter = match rng_seed {
        Some(seed) => Jitter::seeded(seed),
        None => Jitter::new(),
    };

    let mut tick: u64 = 0;
    loop {
        tick += 1;
        jitter.step(&mut dashboard.metrics);
        println!("tick {}", tick);
        print!("{}", format_metric_lines(&dashboard.metrics));

        if let Some(max) = ticks {
            if tick >= max {
                break;
            }
        }
        std::thread::sleep(Duration::from_secs(interval));
    }
    Ok(())
}
