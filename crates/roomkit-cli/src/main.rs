mod script;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use roomkit_io::{ObjModelSource, export_obj, load_settings};
use roomkit_openings::{OpeningRequest, OpeningType, compute_placement};
use roomkit_room::RoomDimensions;
use roomkit_scene::HeadlessScene;
use roomkit_session::{RoomSession, Settings};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "roomkit")]
#[command(about = "Room layout with wall openings and furniture")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Place(PlaceArgs),
    Run(RunArgs),
}

#[derive(Args)]
struct PlaceArgs {
    #[arg(long)]
    room: String,
    #[arg(long)]
    wall: i64,
    #[arg(long)]
    kind: OpeningType,
    #[arg(long)]
    width: f64,
    #[arg(long)]
    height: f64,
    #[arg(long = "from-wall")]
    from_wall: f64,
    #[arg(long = "from-floor", default_value_t = 0.0)]
    from_floor: f64,
}

#[derive(Args)]
struct RunArgs {
    #[arg(long)]
    script: PathBuf,
    #[arg(long)]
    settings: Option<PathBuf>,
    #[arg(long, default_value = ".")]
    models: PathBuf,
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Place(args) => place(args),
        Command::Run(args) => run(args),
    }
}

fn place(args: PlaceArgs) -> Result<()> {
    let (width, height, depth) = parse_size(&args.room)?;
    let room = RoomDimensions::new(width, height, depth).context("invalid room")?;
    let request = OpeningRequest::new(
        args.kind,
        args.wall,
        args.width,
        args.height,
        args.from_wall,
        args.from_floor,
    );

    let placement = compute_placement(&room, &request).context("placement failed")?;
    println!("{}", serde_json::to_string_pretty(&placement)?);
    Ok(())
}

fn run(args: RunArgs) -> Result<()> {
    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script {}", args.script.display()))?;
    let steps = script::parse_script(&text)?;

    let mut session =
        RoomSession::new(HeadlessScene::new(), settings).context("failed to draw room")?;
    let models = ObjModelSource::new(&args.models);
    let summary = script::run_steps(&mut session, &models, &steps)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if let Some(out) = &args.out {
        export_obj(session.scene(), out).context("OBJ export failed")?;
        info!(path = %out.display(), "OBJ export complete");
    }
    Ok(())
}

fn parse_size(text: &str) -> Result<(f64, f64, f64)> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        bail!("--room expects three comma-separated numbers, e.g. 10,2.5,10");
    }

    let width: f64 = parts[0].trim().parse().context("invalid width")?;
    let height: f64 = parts[1].trim().parse().context("invalid height")?;
    let depth: f64 = parts[2].trim().parse().context("invalid depth")?;
    Ok((width, height, depth))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
