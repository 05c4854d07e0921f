use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use log::{LevelFilter, info};
use nestplot::entities::{Bin, LabelSource, PieceCatalog};
use svg::Document;

use crate::EPOCH;
use crate::config::PlotConfig;
use crate::io::cli::InputVariant;

pub mod archive;
pub mod cli;
pub mod positions;
pub mod shapes;
pub mod slices;
pub mod svg_sink;

/// Everything needed to render a solution, independent of the input format
#[derive(Debug)]
pub struct PlotInput {
    pub catalog: PieceCatalog,
    pub bins: Vec<Bin>,
    pub labels: LabelSource,
    /// Bin size, if the input defines one
    pub bin_size: Option<(f64, f64)>,
    /// Prefix of the output files
    pub stem: String,
}

/// Loads the input files of a run.
///
/// shapes: `<shapes> <positions> [labels]`,
/// slices: `<archive.zip>` or `<slices> <positions>`.
pub fn load_input(variant: InputVariant, files: &[PathBuf]) -> Result<PlotInput> {
    let input = match (variant, files) {
        (InputVariant::Shapes, [shapes_path, positions_path, labels_path @ ..])
            if labels_path.len() <= 1 =>
        {
            let shapes_file = shapes::parse_shapes(&read_text(shapes_path)?).with_context(|| {
                format!("could not parse shapes file: {}", shapes_path.display())
            })?;
            let labels = match labels_path.first() {
                Some(path) => LabelSource::Indexed(slices::parse_slice_labels(&read_text(path)?)),
                None => LabelSource::Identifier,
            };
            PlotInput {
                catalog: PieceCatalog::from_iter(shapes_file.pieces),
                bins: positions::parse_counted_positions(&read_text(positions_path)?),
                labels,
                bin_size: Some((shapes_file.bin_width, shapes_file.bin_height)),
                stem: file_stem(shapes_path)?,
            }
        }
        (InputVariant::Slices, [archive_path]) => {
            let contents = archive::read_slices_archive(archive_path)?;
            slices_input(&contents.slices, &contents.positions)
        }
        (InputVariant::Slices, [slices_path, positions_path]) => {
            slices_input(&read_text(slices_path)?, &read_text(positions_path)?)
        }
        (variant, files) => bail!(
            "unexpected input files for variant {variant:?}: {files:?}, see --help for usage"
        ),
    };

    ensure!(
        !input.catalog.is_empty(),
        "no piece definitions found in the input files"
    );
    ensure!(!input.bins.is_empty(), "no bins found in the positions file");
    info!(
        "[IO] {} piece definitions and {} bins loaded",
        input.catalog.len(),
        input.bins.len()
    );
    Ok(input)
}

fn slices_input(slices: &str, positions: &str) -> PlotInput {
    let slices_file = slices::parse_named_slices(slices);
    let stem = match slices_file.tag.split_once('-') {
        Some((prefix, _)) => prefix.to_owned(),
        None => slices_file.tag.clone(),
    };
    PlotInput {
        catalog: PieceCatalog::from_iter(slices_file.pieces),
        bins: positions::parse_headered_positions(positions),
        labels: LabelSource::Identifier,
        bin_size: None,
        stem,
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("could not read file: {}", path.display()))
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
        .with_context(|| format!("invalid file name: {}", path.display()))
}

/// Reads a (partial) config file, missing fields take the defaults of `variant`
pub fn read_config(path: &Path, variant: InputVariant) -> Result<PlotConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let json = serde_json::from_reader(reader).context("config file is not valid JSON")?;
    PlotConfig::from_json(json, variant)
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!(
        "[IO] svg written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    //make sure the epoch is initialized before the first log line
    let _ = *EPOCH;
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
