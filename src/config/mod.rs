use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub archive: ArchiveConfig,
    #[serde(default)]
    pub union: UnionConfig,
}

/// Where the read-only system archives live and how they are recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Subdirectory of the system path that holds the archives.
    pub live_subdir: String,
    /// Archive file extension, without the leading dot.
    pub extension: String,
}

/// Union mount parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionConfig {
    /// Filesystem type passed to `mount -t`.
    pub fs_type: String,
    /// Scratch root for the copy-on-write branch and the index file. Must be
    /// a writable filesystem that is never itself part of a union; /run is a
    /// tmpfs and satisfies both.
    pub scratch_dir: String,
    /// Base name for the copy-on-write directory.
    pub cow_base_name: String,
    /// Base name for the union driver's auxiliary index file.
    pub index_base_name: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("LIVEROOT"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self { live_subdir: "live".to_string(), extension: "squashfs".to_string() }
    }
}

impl Default for UnionConfig {
    fn default() -> Self {
        Self {
            fs_type: "aufs".to_string(),
            scratch_dir: "/run".to_string(),
            cow_base_name: "cow".to_string(),
            index_base_name: ".union.index".to_string(),
        }
    }
}
