// Local filesystem helpers
//
// Symlink-aware deletion and collision-free temp naming used by the mount
// teardown path, plus a couple of small file utilities.

pub mod error;
pub mod path;
pub mod size;

pub use error::{FsError, FsResult};
pub use path::{create_temp_directory, create_unique_file, is_symlink, recursive_delete};
pub use size::{data_volume_string, tree_size};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads a file line by line.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}
