use std::fs;
use std::io;
use std::path::Path;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;
const TIB: u64 = 1024 * 1024 * 1024 * 1024;

/// Renders a byte count as a human readable data volume.
///
/// Pure function: the precision is an explicit parameter, trailing zeros are
/// trimmed ("1.50 KiB" becomes "1.5 KiB", "1.00 KiB" becomes "1 KiB").
pub fn data_volume_string(bytes: u64, fraction_digits: usize) -> String {
    if bytes < KIB {
        return format!("{bytes} Byte");
    }
    let (value, unit) = if bytes < MIB {
        (bytes as f64 / KIB as f64, "KiB")
    } else if bytes < GIB {
        (bytes as f64 / MIB as f64, "MiB")
    } else if bytes < TIB {
        (bytes as f64 / GIB as f64, "GiB")
    } else {
        (bytes as f64 / TIB as f64, "TiB")
    };
    format!("{} {}", trim_fraction(value, fraction_digits), unit)
}

fn trim_fraction(value: f64, fraction_digits: usize) -> String {
    let rendered = format!("{value:.fraction_digits$}");
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        rendered
    }
}

/// Sums the sizes of all regular files under `path`.
///
/// Symlinks are not followed and contribute nothing.
pub fn tree_size(path: &Path) -> io::Result<u64> {
    let meta = fs::symlink_metadata(path)?;
    if meta.file_type().is_file() {
        return Ok(meta.len());
    }
    if !meta.file_type().is_dir() {
        return Ok(0);
    }

    let mut size = 0;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            size += tree_size(&entry.path())?;
        } else if file_type.is_file() {
            size += entry.metadata()?.len();
        }
    }
    Ok(size)
}
