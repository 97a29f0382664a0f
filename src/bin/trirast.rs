//! trirast - render a scene file to PNG.
//!
//! Run: `cargo run --features cli -- scene.txt -o scene.png`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use trirast::output::PngEncoder;
use trirast::scene::{from_scene, DEFAULT_SCENE, DEFAULT_SIZE};

/// Rasterize a scene of colored lines and triangles to a PNG image
#[derive(Parser, Debug)]
#[command(name = "trirast")]
#[command(version)]
#[command(about = "Rasterize a scene of colored lines and triangles", long_about = None)]
struct Cli {
    /// Scene file (`v,x,y,r,g,b;`, `l,i,j;`, `t,i,j,k;` records).
    /// Renders the built-in demo scene when omitted.
    scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "scene.png")]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    height: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = match &cli.scene {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?,
        None => DEFAULT_SCENE.to_owned(),
    };

    let fb = from_scene(&source, cli.width, cli.height).context("rendering scene")?;
    PngEncoder::write_to_file(&fb, &cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    println!(
        "wrote {}x{} image to {}",
        fb.width(),
        fb.height(),
        cli.output.display()
    );
    Ok(())
}
