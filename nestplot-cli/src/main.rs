use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use nestplot::render::LayoutRenderer;
use nestplot_cli::config::PlotConfig;
use nestplot_cli::font::StrokeFont;
use nestplot_cli::io;
use nestplot_cli::io::cli::Cli;
use nestplot_cli::io::svg_sink::SvgPageSink;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlotConfig::for_variant(args.variant)
        }
        Some(config_file) => io::read_config(config_file, args.variant)?,
    };
    info!("[MAIN] Successfully parsed PlotConfig: {config:?}");

    let input = io::load_input(args.variant, &args.input_files)?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!(
                "could not create output folder: {}",
                args.output_folder.display()
            )
        })?;
    }

    let strategy = config.anchor_strategy.build()?;
    let frame = config.page.frame(input.bin_size)?;
    let font = StrokeFont::romans()?;

    let renderer = LayoutRenderer::new(
        &input.catalog,
        &input.labels,
        &font,
        strategy.as_ref(),
        frame,
        &config.theme,
    );
    let mut sink = SvgPageSink::new(&args.output_folder, &input.stem);
    let stats = renderer.render(&input.bins, &mut sink, config.parallel)?;

    info!(
        "[MAIN] {} pages rendered: {} pieces, {} placements skipped, {} pieces without label anchor",
        stats.n_pages, stats.n_pieces, stats.n_skipped, stats.n_unanchored
    );
    Ok(())
}
