//! Branch definition building.
//!
//! A branch definition is the single option string the union mount consumes:
//! the writable branch first, then every read-only branch in layer order,
//! `br=<rw>:<ro1>:...:<roN>`.

/// Builds the branch definition for one writable mount point and an ordered
/// list of read-only mount points. Pure function; an empty read-only list
/// yields a valid single-branch definition.
pub fn branch_definition(read_write_mount_point: &str, read_only_mount_points: &[String]) -> String {
    let mut definition = String::from("br=");
    definition.push_str(read_write_mount_point);
    for read_only_mount_point in read_only_mount_points {
        definition.push(':');
        definition.push_str(read_only_mount_point);
    }
    definition
}
