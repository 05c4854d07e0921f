use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use anyhow::{Context, Result};
use zip::ZipArchive;

pub const SLICES_ENTRY: &str = "slices.txt";
pub const POSITIONS_ENTRY: &str = "positions.txt";

/// Text contents of a slices archive
#[derive(Clone, Debug)]
pub struct SlicesArchive {
    pub slices: String,
    pub positions: String,
}

pub fn read_slices_archive(path: &Path) -> Result<SlicesArchive> {
    let file = File::open(path)
        .with_context(|| format!("could not open archive: {}", path.display()))?;
    parse_slices_archive(BufReader::new(file))
        .with_context(|| format!("could not read archive: {}", path.display()))
}

/// Reads `slices.txt` and `positions.txt` from a ZIP archive
pub fn parse_slices_archive<R: Read + Seek>(reader: R) -> Result<SlicesArchive> {
    let mut archive = ZipArchive::new(reader).context("not a valid zip archive")?;
    Ok(SlicesArchive {
        slices: read_entry(&mut archive, SLICES_ENTRY)?,
        positions: read_entry(&mut archive, POSITIONS_ENTRY)?,
    })
}

fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut entry = archive
        .by_name(name)
        .with_context(|| format!("archive does not contain {name}"))?;
    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .with_context(|| format!("{name} is not valid UTF-8 text"))?;
    Ok(content)
}
