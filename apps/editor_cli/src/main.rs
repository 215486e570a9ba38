use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use objectives::{ObjectiveEditor, ObjectiveSink};
use reorder::{
    Axis, DragEvent, DragOutcome, Edge, ListEditor, NoFeedback, OrderedList, RotationSink,
};
use shared::{
    domain::{GameModeFamily, MapEntry, MapId, Orientation},
    error::EditorFault,
    protocol::{ObjectiveSubmission, RandomConstraints, RotationSave},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
#[command(about = "Map rotation and objective layout editor")]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drag one map onto another and print the saved rotation.
    Reorder {
        #[arg(long = "map", required = true)]
        maps: Vec<String>,
        #[arg(long)]
        from: usize,
        #[arg(long)]
        onto: usize,
        #[arg(long)]
        edge: Option<Edge>,
        #[arg(long)]
        axis: Option<Axis>,
    },
    /// Build an objective layout and print the submission.
    Objectives {
        #[arg(long, default_value = "warfare")]
        mode: GameModeFamily,
        #[arg(long)]
        orientation: Orientation,
        /// ROW:COL grid click
        #[arg(long = "click")]
        clicks: Vec<String>,
        /// LINE:INDEX pick
        #[arg(long = "pick")]
        picks: Vec<String>,
        /// LINE:NAME pick by objective name
        #[arg(long = "name")]
        names: Vec<String>,
        #[arg(long)]
        random_constraints: Option<u32>,
    },
}

struct StdoutSink;

#[async_trait]
impl RotationSink<MapId> for StdoutSink {
    async fn save(&self, request: &RotationSave<MapId>) -> Result<()> {
        println!("{}", serde_json::to_string(request)?);
        Ok(())
    }
}

#[async_trait]
impl ObjectiveSink for StdoutSink {
    async fn submit(&self, submission: &ObjectiveSubmission) -> Result<()> {
        println!("{}", serde_json::to_string(submission)?);
        Ok(())
    }
}

fn split_pair(raw: &str) -> Result<(&str, &str)> {
    raw.split_once(':')
        .map(|(left, right)| (left.trim(), right.trim()))
        .ok_or_else(|| anyhow!("expected 'A:B', got '{raw}'"))
}

fn parse_index_pair(raw: &str) -> Result<(usize, usize)> {
    let (left, right) = split_pair(raw)?;
    Ok((
        left.parse().with_context(|| format!("bad index in '{raw}'"))?,
        right.parse().with_context(|| format!("bad index in '{raw}'"))?,
    ))
}

fn fault(err: impl Into<EditorFault>) -> anyhow::Error {
    let fault = err.into();
    anyhow!("{:?}: {}", fault.code, fault.message)
}

async fn run_reorder(
    settings: &config::Settings,
    maps: Vec<String>,
    from: usize,
    onto: usize,
    edge: Option<Edge>,
    axis: Option<Axis>,
) -> Result<()> {
    let entries = maps
        .iter()
        .map(|id| MapEntry::new(id.as_str(), id.as_str(), GameModeFamily::Warfare));
    let list = OrderedList::from_payloads(entries, settings.max_list_items).map_err(fault)?;
    let mut editor: ListEditor<MapEntry> =
        ListEditor::new(list, axis.unwrap_or(settings.list_axis));

    let ids = editor.list().ids();
    let (Some(source), Some(target)) = (ids.get(from).copied(), ids.get(onto).copied()) else {
        bail!("--from/--onto must be below {}", ids.len());
    };
    let instance = editor.instance();

    let gesture = [
        DragEvent::start(instance, source),
        DragEvent::over(instance, source, Some(target), edge),
        DragEvent::release(instance, source, Some(target), edge),
    ];
    let mut last = None;
    for event in &gesture {
        last = Some(editor.handle_drag(event, &mut NoFeedback).map_err(fault)?);
    }
    match last {
        Some(DragOutcome::Reorder(intent)) => info!(
            from = intent.start_index,
            to = intent.finish_index,
            "rotation reordered"
        ),
        other => warn!(outcome = ?other, "drop did not move anything"),
    }

    editor.save_with(&StdoutSink).await.map_err(fault)?;
    Ok(())
}

async fn run_objectives(
    settings: &config::Settings,
    mode: GameModeFamily,
    orientation: Orientation,
    clicks: Vec<String>,
    picks: Vec<String>,
    names: Vec<String>,
    random_constraints: Option<u32>,
) -> Result<()> {
    let catalog = config::load_catalog(settings)?;
    let mut editor = ObjectiveEditor::open(mode, orientation, catalog).map_err(fault)?;

    for raw in &clicks {
        let (row, col) = parse_index_pair(raw)?;
        if !editor.click(row, col).map_err(fault)? {
            warn!(row, col, "click refused; deselect the line first or pick by name");
        }
    }
    for raw in &picks {
        let (line, objective) = parse_index_pair(raw)?;
        editor.pick(line, objective).map_err(fault)?;
    }
    for raw in &names {
        let (line, name) = split_pair(raw)?;
        let line = line
            .parse()
            .with_context(|| format!("bad line index in '{raw}'"))?;
        editor.pick_by_name(line, name).map_err(fault)?;
    }

    eprint!("{}", editor.grid());
    let selection = editor.selection().map_err(fault)?;
    for (entry, label) in selection.iter().zip(editor.catalog().describe(&selection)) {
        eprintln!("line {}: {label}", entry.line_index);
    }

    let constraints = random_constraints
        .map(RandomConstraints::from_mask)
        .transpose()?;
    editor
        .submit_with(&StdoutSink, constraints)
        .await
        .map_err(fault)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = config::load_settings(cli.config.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Reorder {
            maps,
            from,
            onto,
            edge,
            axis,
        } => run_reorder(&settings, maps, from, onto, edge, axis).await,
        Command::Objectives {
            mode,
            orientation,
            clicks,
            picks,
            names,
            random_constraints,
        } => {
            run_objectives(
                &settings,
                mode,
                orientation,
                clicks,
                picks,
                names,
                random_constraints,
            )
            .await
        }
    }
}
