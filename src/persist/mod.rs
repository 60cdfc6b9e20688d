//! Persistence gateway - opaque save/load of cube documents.
//!
//! The engine treats storage as an external collaborator: it hands a
//! `CubeDoc` over and gets a receipt (or an error) back. Retry policy,
//! timeouts and transport all belong on the gateway side; the core
//! never retries.
//!
//! Cube ids are opaque strings. Bundled (statically shipped) cubes are
//! distinguished from server-backed ones by a prefix convention; the
//! core only ever checks for the prefix's existence, never parses
//! beyond it.

use rustc_hash::FxHashMap;

use crate::cube::CubeDoc;
use crate::error::CubeError;

/// Prefix marking a bundled, read-only cube id.
pub const BUNDLED_PREFIX: &str = "static-";

/// Whether a cube id refers to a bundled cube (prefix existence check
/// only - the id stays opaque).
#[must_use]
pub fn is_bundled(cube_id: &str) -> bool {
    cube_id.starts_with(BUNDLED_PREFIX)
}

/// Successful save result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveReceipt {
    /// The cube's id - newly assigned when saving without one.
    pub id: String,
}

/// Opaque cube storage.
pub trait PersistenceGateway {
    /// Persist a document. `cube_id` of `None` asks the gateway to
    /// assign a fresh id, returned in the receipt.
    fn save(&mut self, cube_id: Option<&str>, doc: &CubeDoc) -> Result<SaveReceipt, CubeError>;

    /// Fetch a document by id.
    fn load(&mut self, cube_id: &str) -> Result<CubeDoc, CubeError>;
}

/// In-memory gateway for tests and offline use.
///
/// Stores bincode blobs, exercising the same serialize path a remote
/// backend would. `fail_next` injects one transport failure for
/// error-path tests.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    blobs: FxHashMap<String, Vec<u8>>,
    next_id: u64,
    fail_next: Option<String>,
}

impl MemoryGateway {
    /// Create an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next save or load fail with an `Io` error.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }

    /// Preload a bundled cube under a `static-` id.
    pub fn insert_bundled(&mut self, suffix: &str, doc: &CubeDoc) -> Result<String, CubeError> {
        let id = format!("{}{}", BUNDLED_PREFIX, suffix);
        let blob = bincode::serialize(doc).map_err(|e| CubeError::Io(e.to_string()))?;
        self.blobs.insert(id.clone(), blob);
        Ok(id)
    }

    /// Number of stored cubes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the gateway holds no cubes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    fn take_injected_failure(&mut self) -> Option<CubeError> {
        self.fail_next.take().map(CubeError::Io)
    }
}

impl PersistenceGateway for MemoryGateway {
    fn save(&mut self, cube_id: Option<&str>, doc: &CubeDoc) -> Result<SaveReceipt, CubeError> {
        if let Some(err) = self.take_injected_failure() {
            return Err(err);
        }
        let id = match cube_id {
            Some(id) => id.to_string(),
            None => {
                self.next_id += 1;
                format!("cube-{}", self.next_id)
            }
        };
        let blob = bincode::serialize(doc).map_err(|e| CubeError::Io(e.to_string()))?;
        self.blobs.insert(id.clone(), blob);
        Ok(SaveReceipt { id })
    }

    fn load(&mut self, cube_id: &str) -> Result<CubeDoc, CubeError> {
        if let Some(err) = self.take_injected_failure() {
            return Err(err);
        }
        let blob = self
            .blobs
            .get(cube_id)
            .ok_or_else(|| CubeError::CubeNotFound(cube_id.to_string()))?;
        bincode::deserialize(blob).map_err(|e| CubeError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameId;

    fn doc() -> CubeDoc {
        let mut d = CubeDoc::new(GameId::new("mtg"), Some(1));
        d.name = "Test Cube".to_string();
        d
    }

    #[test]
    fn test_bundled_prefix() {
        assert!(is_bundled("static-vintage-cube"));
        assert!(!is_bundled("cube-12"));
    }

    #[test]
    fn test_save_assigns_id_and_load_round_trips() {
        let mut gateway = MemoryGateway::new();

        let receipt = gateway.save(None, &doc()).unwrap();
        assert_eq!(receipt.id, "cube-1");

        let loaded = gateway.load(&receipt.id).unwrap();
        assert_eq!(loaded, doc());
    }

    #[test]
    fn test_save_with_existing_id_overwrites() {
        let mut gateway = MemoryGateway::new();
        let receipt = gateway.save(None, &doc()).unwrap();

        let mut updated = doc();
        updated.description = "v2".to_string();
        let second = gateway.save(Some(&receipt.id), &updated).unwrap();

        assert_eq!(second.id, receipt.id);
        assert_eq!(gateway.len(), 1);
        assert_eq!(gateway.load(&receipt.id).unwrap().description, "v2");
    }

    #[test]
    fn test_load_unknown_id() {
        let mut gateway = MemoryGateway::new();
        let result = gateway.load("cube-404");
        assert!(matches!(result, Err(CubeError::CubeNotFound(id)) if id == "cube-404"));
    }

    #[test]
    fn test_injected_failure() {
        let mut gateway = MemoryGateway::new();
        gateway.fail_next("connection reset");

        let result = gateway.save(None, &doc());
        assert!(matches!(result, Err(CubeError::Io(msg)) if msg == "connection reset"));

        // The failure is one-shot.
        assert!(gateway.save(None, &doc()).is_ok());
    }

    #[test]
    fn test_bundled_round_trip() {
        let mut gateway = MemoryGateway::new();
        let id = gateway.insert_bundled("vintage", &doc()).unwrap();

        assert!(is_bundled(&id));
        assert_eq!(gateway.load(&id).unwrap().name, "Test Cube");
    }
}
