use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "maskgen", version)]
struct Cli {
    /// Output directory for the generated mask JSON files.
    #[arg(long, default_value = "src/assets/masks")]
    out: PathBuf,

    /// Tile width/height in pixels.
    #[arg(long, default_value_t = 64)]
    size: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("create output dir '{}'", cli.out.display()))?;

    for preset in maskgen::PRESETS {
        let tile = maskgen::generate(cli.size, cli.size, preset.amplitude, Some(preset.seed))?;
        let path = cli.out.join(format!("{}.json", preset.name));
        maskgen::write_mask(&tile, &path)?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}
