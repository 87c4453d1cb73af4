use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "curtain", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a page document and print its layout summary.
    Validate(ValidateArgs),
    /// Print the frame snapshot at one scroll position as JSON.
    Sample(SampleArgs),
    /// Render evenly spaced preview frames as PNGs.
    Storyboard(StoryboardArgs),
    /// Write the bundled demo page.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct ViewportArgs {
    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

impl ViewportArgs {
    fn viewport(&self) -> anyhow::Result<curtain::Viewport> {
        Ok(curtain::Viewport::new(self.width, self.height)?)
    }
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    viewport: ViewportArgs,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Document scroll offset in pixels.
    #[arg(long)]
    scroll: f64,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Print only the frame fingerprint.
    #[arg(long)]
    fingerprint: bool,
}

#[derive(Parser, Debug)]
struct StoryboardArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `frame_NNNN.png`.
    #[arg(long)]
    out: PathBuf,

    /// Number of frames from top to bottom of the page.
    #[arg(long, default_value_t = 24)]
    frames: u32,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Output pixels per CSS pixel.
    #[arg(long, default_value_t = 0.25)]
    scale: f64,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output page JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Storyboard(args) => cmd_storyboard(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn read_page(path: &Path) -> anyhow::Result<curtain::Page> {
    curtain::Page::from_path(path).with_context(|| format!("load page '{}'", path.display()))
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let page = read_page(&args.in_path)?;
    let layout = curtain::PageLayout::compute(&page, args.viewport.viewport()?)?;
    println!(
        "ok: '{}' has {} sections, {} chapters, document height {}px",
        page.title,
        page.sections.len(),
        page.navigation.len(),
        layout.document_height
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let page = read_page(&args.in_path)?;
    let mut stage = curtain::Stage::mount(page, args.viewport.viewport()?)?;
    let snapshot = stage.tick(args.scroll);
    if args.fingerprint {
        println!("{}", curtain::fingerprint_snapshot(&snapshot));
    } else {
        println!("{}", snapshot.to_json_pretty()?);
    }
    Ok(())
}

fn cmd_storyboard(args: StoryboardArgs) -> anyhow::Result<()> {
    let page = read_page(&args.in_path)?;
    let mut stage = curtain::Stage::mount(page, args.viewport.viewport()?)?;
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let positions = curtain::storyboard_positions(stage.layout().max_scroll(), args.frames);
    for (i, scroll_y) in positions.into_iter().enumerate() {
        let snapshot = stage.tick(scroll_y);
        let img = curtain::render_snapshot(&snapshot, args.scale)?;
        let path = args.out.join(format!("frame_{i:04}.png"));
        curtain::save_png(&img, &path)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let page = curtain::demo_page()?;
    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, page.to_json_pretty()?)
        .with_context(|| format!("write page '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
