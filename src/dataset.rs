use std::{
    ffi::OsString,
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{error::Result, point::Point};

pub const DATA_FILE: &str = "data.json";

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DATA_FILE));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_pretty(path: &Path, points: &[Point]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, points)?;
    writer.flush()?;
    Ok(())
}

/// Writes a two-space indented JSON array via a sibling `.tmp` file renamed over `path`.
pub fn save_points(path: impl AsRef<Path>, points: &[Point]) -> Result<()> {
    let path = path.as_ref();
    let tmp = temp_path(path);

    let result = write_pretty(&tmp, points).and_then(|()| Ok(fs::rename(&tmp, path)?));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Read a dataset written by [`save_points`].
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
