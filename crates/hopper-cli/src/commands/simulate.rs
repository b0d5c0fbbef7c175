//! Simulate command: replays a key script without a window

use anyhow::{Context, Result};
use hopper_player::{logging, GameConfig, Script, TickRecord};
use hopper_runtime::GameEvent;
use std::io::{self, BufWriter, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;

pub struct SimulateArgs {
    pub script: PathBuf,
    pub ticks: Option<u64>,
    pub format: String,
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    logging::init("warn");

    let format = match args.format.as_str() {
        "text" => Format::Text,
        "json" => Format::Json,
        _ => anyhow::bail!("Unknown format: {}", args.format),
    };

    let config = GameConfig::load(args.config.as_deref()).context("Failed to load config")?;
    let script = Script::load(&args.script)
        .with_context(|| format!("Failed to load script {}", args.script.display()))?;

    let mut out = BufWriter::new(io::stdout().lock());
    let ticks = stream(&script, &config, args.ticks, format, &mut out)?;
    out.flush()?;
    tracing::info!(ticks, "simulation complete");

    Ok(())
}

/// Run the script, writing each tick to `out` as it is produced
fn stream<W: Write>(
    script: &Script,
    config: &GameConfig,
    ticks: Option<u64>,
    format: Format,
    out: &mut W,
) -> Result<u64> {
    if format == Format::Json {
        write!(out, "[")?;
    }

    let mut written = 0u64;
    let mut failure = None;
    let ran = script
        .run_with(config, ticks, |record| {
            match write_record(&mut *out, format, &record, written == 0) {
                Ok(()) => {
                    written += 1;
                    ControlFlow::Continue(())
                }
                Err(e) => {
                    failure = Some(e);
                    ControlFlow::Break(())
                }
            }
        })
        .context("Simulation failed")?;

    if let Some(e) = failure {
        return Err(e.context("Failed to write simulation output"));
    }
    if format == Format::Json {
        writeln!(out, "\n]")?;
    }
    Ok(ran)
}

fn write_record<W: Write>(out: &mut W, format: Format, record: &TickRecord, first: bool) -> Result<()> {
    match format {
        Format::Text => writeln!(out, "{}", format_line(record))?,
        Format::Json => {
            let separator = if first { "\n  " } else { ",\n  " };
            write!(out, "{}{}", separator, serde_json::to_string(record)?)?;
        }
    }
    Ok(())
}

fn format_line(record: &TickRecord) -> String {
    let p = &record.frame.player;
    let mut line = format!(
        "{:>5}  {:<11}  x {:>7.2}  y {:>6.2}  dx {:>5.2}  dy {:>5.2}{}",
        record.frame.frame,
        record.frame.animation.to_string(),
        p.x,
        p.y,
        p.dx,
        p.dy,
        if p.is_boosted { "  boosted" } else { "" },
    );
    for event in &record.events {
        line.push_str("  ");
        line.push_str(&describe(event));
    }
    line
}

fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::Jumped { dy } => format!("[jump {:.2}]", dy),
        GameEvent::Boosted { dy } => format!("[boost {:.2}]", dy),
        GameEvent::Landed => "[land]".to_string(),
        GameEvent::Wrapped { from, to } => format!("[wrap {:.2} -> {:.2}]", from, to),
        GameEvent::BackgroundChanged { phase } => format!("[background {}]", phase),
    }
}
