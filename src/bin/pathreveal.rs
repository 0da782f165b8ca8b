use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pathreveal", version)]
struct Cli {
    /// Log fit and measurement details to stderr (overridden by RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fit a path into a target rectangle and print the plan as JSON.
    Fit(FitArgs),
    /// Fit a path, trim it at a progress value and print the visible geometry.
    Trim(TrimArgs),
}

#[derive(Args, Debug)]
struct DescArgs {
    /// Descriptor JSON (`svg_path_d` plus optional placement fields).
    #[arg(long = "desc", conflicts_with = "d")]
    desc_path: Option<PathBuf>,

    /// Inline SVG path data.
    #[arg(long)]
    d: Option<String>,

    /// Alignment inside the target, e.g. `center`, `top_start`, `bottom_end`.
    #[arg(long, value_parser = parse_alignment)]
    align: Option<pathreveal::Alignment>,

    /// Progression policy for multiple contours: `sequential` or `independent`.
    #[arg(long, value_parser = parse_policy)]
    policy: Option<pathreveal::Progression>,

    /// Stretch to fill the target instead of keeping the aspect ratio.
    #[arg(long)]
    stretch: bool,

    /// Only translate into the target; never scale.
    #[arg(long)]
    no_scale: bool,

    /// Target rectangle as `x,y,width,height`.
    #[arg(long, value_parser = parse_rect)]
    target: pathreveal::Rect,
}

#[derive(Args, Debug)]
struct FitArgs {
    #[command(flatten)]
    desc: DescArgs,
}

#[derive(Args, Debug)]
struct TrimArgs {
    #[command(flatten)]
    desc: DescArgs,

    /// Progress in [0, 1]; out-of-range values are clamped.
    #[arg(long)]
    progress: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Svg,
    Json,
}

#[derive(serde::Serialize)]
struct FitReport {
    plan: Option<pathreveal::FitPlan>,
    bounds: Option<pathreveal::Bounds>,
    total_length: f64,
    contour_lengths: Vec<f64>,
}

#[derive(serde::Serialize)]
struct TrimReport {
    progress: f64,
    color: String,
    contours: Vec<TrimmedEntry>,
    pens: Vec<pathreveal::PositionSample>,
    svg_path_d: String,
}

#[derive(serde::Serialize)]
struct TrimmedEntry {
    state: &'static str,
    length: f64,
    svg_path_d: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Fit(args) => cmd_fit(args),
        Command::Trim(args) => cmd_trim(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pathreveal=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_desc(args: &DescArgs) -> anyhow::Result<pathreveal::PathDesc> {
    let mut spec = match (&args.desc_path, &args.d) {
        (Some(path), _) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read descriptor '{}'", path.display()))?;
            pathreveal::PathDescSpec::from_json(&s)
                .with_context(|| format!("parse descriptor '{}'", path.display()))?
        }
        (None, Some(d)) => pathreveal::PathDescSpec::new(d.clone(), Default::default()),
        (None, None) => anyhow::bail!("one of --desc or --d is required"),
    };

    if let Some(align) = args.align {
        spec.config.alignment = align;
    }
    if let Some(policy) = args.policy {
        spec.config.progression = policy;
    }
    if args.stretch {
        spec.config.keep_aspect = false;
    }
    if args.no_scale {
        spec.config.scale_for_bounds = false;
    }

    Ok(spec.build()?)
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let mut desc = load_desc(&args.desc)?;
    let plan = desc.on_bounds_changed(args.desc.target)?;

    let report = FitReport {
        plan,
        bounds: desc.bounds(),
        total_length: desc.measure().total_length(),
        contour_lengths: desc.measure().contour_lengths().collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_trim(args: TrimArgs) -> anyhow::Result<()> {
    let mut desc = load_desc(&args.desc)?;
    desc.on_bounds_changed(args.desc.target)?;

    let mut pens = Vec::new();
    let out = desc.trimmed_with(args.progress, |s| pens.push(s))?;

    match args.format {
        OutputFormat::Svg => println!("{}", out.to_bez_path().to_svg()),
        OutputFormat::Json => {
            let contours = out
                .iter()
                .map(|t| TrimmedEntry {
                    state: match t {
                        pathreveal::TrimmedContour::Absent => "absent",
                        pathreveal::TrimmedContour::Partial(_) => "partial",
                        pathreveal::TrimmedContour::Full(_) => "full",
                    },
                    length: t.length(pathreveal::ARCLEN_ACCURACY),
                    svg_path_d: t.contour().map(|c| c.to_bez_path().to_svg()),
                })
                .collect();
            let report = TrimReport {
                progress: args.progress,
                color: pathreveal::default_style(pathreveal::Layer::Progress)
                    .color
                    .to_css_hex(),
                contours,
                pens,
                svg_path_d: out.to_bez_path().to_svg(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn parse_rect(s: &str) -> Result<pathreveal::Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{s}': {e}"))?;
    let [x, y, w, h] = parts[..] else {
        return Err(format!("expected x,y,width,height, got '{s}'"));
    };
    if !(w >= 0.0 && h >= 0.0) {
        return Err(format!("width and height must be >= 0, got '{s}'"));
    }
    Ok(pathreveal::Rect::new(x, y, x + w, y + h))
}

fn parse_alignment(s: &str) -> Result<pathreveal::Alignment, String> {
    pathreveal::Alignment::parse(s).ok_or_else(|| format!("unknown alignment '{s}'"))
}

fn parse_policy(s: &str) -> Result<pathreveal::Progression, String> {
    pathreveal::Progression::parse(s).ok_or_else(|| format!("unknown progression policy '{s}'"))
}
