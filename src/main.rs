use clap::{Args, Parser, Subcommand};
use koch_polygon::{
    compose,
    render::{Render, Svg},
    script::CommandScript,
    Cursor, DrawCommand, DrawingConfig, LineError, Polarity, PolygonSpec, SimpleError,
    TraceSummary,
};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Closure tolerance used when reporting a finished trace
const CLOSURE_TOLERANCE: f64 = 1e-6;

#[derive(Parser, Debug)]
#[command(name = "koch-polygon", version, about = "Trace recursive indented polygons")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace a polygon with fractal edges
    Draw(DrawArgs),
    /// Replay a saved command stream
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct DrawArgs {
    /// Number of polygon sides (at least 3)
    #[arg(long, allow_hyphen_values = true)]
    sides: i64,

    /// Length of one polygon side, in pixels
    #[arg(long, allow_hyphen_values = true)]
    length: f64,

    /// Recursion depth; each level multiplies the segment count by 4
    #[arg(long, allow_hyphen_values = true)]
    depth: i64,

    /// Side of each edge the indentation bulges to
    #[arg(long, default_value_t = Polarity::Inward)]
    polarity: Polarity,

    /// Save the command stream to this file
    #[arg(long)]
    commands: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Command stream file
    file: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Render the trace into an SVG file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DrawingConfig::default().width)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DrawingConfig::default().height)]
    height: u32,

    #[arg(long, default_value_t = DrawingConfig::default().stroke_width)]
    stroke_width: f64,
}

impl OutputArgs {
    fn config(&self) -> DrawingConfig {
        DrawingConfig {
            width: self.width,
            height: self.height,
            stroke_width: self.stroke_width,
            ..DrawingConfig::default()
        }
    }

    fn render(&self, title: &str, cfg: &DrawingConfig) -> Option<Box<dyn Render>> {
        self.svg
            .as_ref()
            .map(|p| Box::new(Svg::new(p, title, cfg)) as Box<dyn Render>)
    }
}

fn title(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Inward => "Recursive Indented Polygon (Inward)",
        Polarity::Outward => "Recursive Indented Polygon (Outward)",
    }
}

fn draw(args: DrawArgs) -> Result<(), LineError> {
    let cfg = args.output.config();
    let spec = PolygonSpec::new(args.sides, args.length, args.depth)?.with_polarity(args.polarity);

    let count = spec.command_count();
    if count > cfg.large_trace {
        warn!(
            "depth {} produces {count} commands, this may take a while",
            spec.depth()
        );
    }
    info!(
        sides = spec.sides(),
        side_length = spec.side_length(),
        depth = spec.depth(),
        polarity = %spec.polarity(),
        "drawing polygon"
    );

    let mut cursor = Cursor::with_render(args.output.render(title(spec.polarity()), &cfg));
    compose(&spec, &mut cursor)?;
    let (commands, render) = cursor.finish();

    report(&commands)?;
    match &args.commands {
        Some(path) => {
            CommandScript::save(&commands, path).map_err(|e| write_error(path, e))?;
            info!("command stream written to {}", path.display());
        }
        None if render.is_none() => {
            CommandScript::write(&commands, io::stdout().lock())
                .map_err(|e| SimpleError(format!("Can't write to stdout: {e}")).no_line())?;
        }
        None => (),
    }
    finalize(render, args.output.svg.as_deref())
}

fn replay(args: ReplayArgs) -> Result<(), LineError> {
    let cfg = args.output.config();
    let script = CommandScript::load(&args.file)?;
    info!(
        "replaying {} commands from {}",
        script.commands().len(),
        args.file.display()
    );

    let mut cursor = Cursor::with_render(args.output.render("Recursive Indented Polygon", &cfg));
    script.replay(&mut cursor)?;
    let (commands, render) = cursor.finish();

    report(&commands)?;
    finalize(render, args.output.svg.as_deref())
}

fn report(commands: &[DrawCommand]) -> Result<(), LineError> {
    let summary = TraceSummary::of(commands)?;
    info!("{summary}");
    if !summary.is_closed(CLOSURE_TOLERANCE) {
        warn!("the traced figure is not closed");
    }
    Ok(())
}

fn finalize(render: Option<Box<dyn Render>>, path: Option<&Path>) -> Result<(), LineError> {
    if let (Some(render), Some(path)) = (render, path) {
        render.finalize().map_err(|e| write_error(path, e))?;
        info!("picture written to {}", path.display());
    }
    Ok(())
}

fn write_error(path: &Path, e: io::Error) -> LineError {
    SimpleError(format!("Can't write output file '{}': {e}", path.display())).no_line()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("koch_polygon=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Draw(args) => draw(args),
        Command::Replay(args) => replay(args),
    };

    if let Err(e) = result {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        stderr
            .set_color(
                ColorSpec::new()
                    .set_fg(Some(Color::Red))
                    .set_bold(true)
                    .set_intense(true),
            )
            .ok();
        writeln!(stderr, "{e}").ok();
        stderr.reset().ok();
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
