//! Snapshot persistence — the whole record set in one JSON file.
//!
//! File format:
//! ```json
//! {
//!     "version": 1,
//!     "checksum": "<hex sha-256 of the serialized snapshot>",
//!     "snapshot": {
//!         "profile": { ... } | null,
//!         "activities": [ ... ],
//!         "competencies": [ ... ]
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{PdrError, Result};
use crate::record::UserProfile;
use crate::store::{Store, StoreSnapshot};

// ── File format constants ─────────────────────────────────────────────────────

const SNAPSHOT_FILE_VERSION: u32 = 1;

/// Name of the snapshot file inside the store directory.
pub const SNAPSHOT_FILE_NAME: &str = "records.json";

// ── On-disk structure ─────────────────────────────────────────────────────────

/// Everything persisted for one person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub profile: Option<UserProfile>,
    pub activities: Vec<crate::record::Activity>,
    pub competencies: Vec<crate::record::Competency>,
}

impl Snapshot {
    /// Split into the optional profile and a ready-to-use store.
    pub fn into_store(self) -> (Option<UserProfile>, Store) {
        (
            self.profile,
            Store::with_records(self.activities, self.competencies),
        )
    }

    /// Combine a profile with a store's collections.
    pub fn from_parts(profile: Option<UserProfile>, records: StoreSnapshot) -> Self {
        Self {
            profile,
            activities: records.activities,
            competencies: records.competencies,
        }
    }
}

/// Wrapper written to disk.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    /// Format version number.
    version: u32,
    /// Hex SHA-256 of the compact JSON encoding of `snapshot`.
    checksum: String,
    snapshot: Snapshot,
}

fn checksum(snapshot: &Snapshot) -> Result<String> {
    let bytes =
        serde_json::to_vec(snapshot).map_err(|e| PdrError::SerializationError(e.to_string()))?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

// ── SnapshotStore ─────────────────────────────────────────────────────────────

/// Filesystem-backed store for a single [`Snapshot`].
///
/// Saves write a temporary file and rename it over the previous snapshot,
/// so a crash mid-save leaves the old file intact. Concurrent writers from
/// multiple processes are not coordinated.
pub struct SnapshotStore {
    base_dir: PathBuf,
}

impl SnapshotStore {
    /// Create a `SnapshotStore` rooted at `base_dir`.
    ///
    /// The directory and any missing parents are created if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns `PdrError::Io` if the directory cannot be created.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.base_dir.join(SNAPSHOT_FILE_NAME)
    }

    /// Persist `snapshot`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `PdrError::SerializationError` if JSON serialization fails,
    /// or `PdrError::Io` for filesystem errors.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let file = SnapshotFile {
            version: SNAPSHOT_FILE_VERSION,
            checksum: checksum(snapshot)?,
            snapshot: snapshot.clone(),
        };

        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| PdrError::SerializationError(e.to_string()))?;

        let path = self.path();
        let tmp = path.with_extension("json.tmp");
        let written =
            std::fs::write(&tmp, json.as_bytes()).and_then(|()| std::fs::rename(&tmp, &path));
        if let Err(e) = written {
            // Previous snapshot is intact; drop the partial temp file.
            let _ = std::fs::remove_file(&tmp);
            log::warn!("failed to save snapshot to {}: {e}", path.display());
            return Err(PdrError::Io(e));
        }

        log::debug!(
            "saved snapshot to {} ({} activities, {} competencies)",
            path.display(),
            snapshot.activities.len(),
            snapshot.competencies.len()
        );
        Ok(())
    }

    /// Load the snapshot. A missing file loads as an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns `PdrError::InvalidFileFormat` if the file cannot be parsed,
    /// has an unknown version, or fails its checksum, or `PdrError::Io` for
    /// other filesystem errors.
    pub fn load(&self) -> Result<Snapshot> {
        let path = self.path();

        if !path.exists() {
            log::debug!("no snapshot at {}, starting empty", path.display());
            return Ok(Snapshot::default());
        }

        read_snapshot(&path)
    }

    /// Remove the snapshot file. Missing files are not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PdrError::Io(e)),
        }
    }
}

fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let bytes = std::fs::read(path)?;
    let file: SnapshotFile = serde_json::from_slice(&bytes).map_err(|e| {
        PdrError::InvalidFileFormat(format!(
            "failed to parse snapshot file {}: {e}",
            path.display()
        ))
    })?;

    if file.version != SNAPSHOT_FILE_VERSION {
        return Err(PdrError::InvalidFileFormat(format!(
            "unsupported snapshot version {} (expected {})",
            file.version, SNAPSHOT_FILE_VERSION
        )));
    }

    let actual = checksum(&file.snapshot)?;
    if actual != file.checksum {
        log::warn!("checksum mismatch in {}", path.display());
        return Err(PdrError::InvalidFileFormat(format!(
            "checksum mismatch in {}",
            path.display()
        )));
    }

    log::debug!(
        "loaded snapshot from {} ({} activities, {} competencies)",
        path.display(),
        file.snapshot.activities.len(),
        file.snapshot.competencies.len()
    );
    Ok(file.snapshot)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
