use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// shapes: <shapes> <positions> [labels], slices: <archive.zip> | <slices> <positions>
    #[arg(short, long, value_name = "FILE", num_args = 1..=3, required = true)]
    pub input_files: Vec<PathBuf>,
    #[arg(long, value_enum, default_value = "shapes")]
    pub variant: InputVariant,
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputVariant {
    /// Pieces from a shapes file, identified by index, placed by a counted positions file
    #[value(name = "shapes")]
    Shapes,
    /// Named slices, grouped by block and mirrored, placed by a headered positions file
    #[value(name = "slices")]
    Slices,
}
