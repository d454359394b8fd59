use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

// Process-wide immutable cache keyed by artifact path. The first successful
// load for a path is retained for the process lifetime; there is no
// invalidation short of restart.
pub struct PathCache<T> {
    map: OnceLock<Mutex<HashMap<PathBuf, Arc<T>>>>,
}

impl<T> PathCache<T> {
    pub const fn new() -> Self {
        Self {
            map: OnceLock::new(),
        }
    }

    pub fn get_or_load<E>(
        &self,
        path: &Path,
        load: impl FnOnce(&Path) -> Result<T, E>,
    ) -> Result<Arc<T>, E> {
        let map = self.map.get_or_init(|| Mutex::new(HashMap::new()));
        let key = path.to_path_buf();

        {
            let guard = map.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(hit) = guard.get(&key) {
                return Ok(hit.clone());
            }
        }

        let value = Arc::new(load(path)?);
        let mut guard = map.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.entry(key).or_insert(value).clone())
    }
}
