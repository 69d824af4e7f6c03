use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ide::AnalysisHost;

const LUA_EXT: &str = "lua";

/// Loads workspace files on demand
pub struct WorkspaceLoader;

impl WorkspaceLoader {
    pub fn new() -> Self {
        Self
    }

    /// Loads all Lua files from a directory into an AnalysisHost.
    ///
    /// Each file is tracked and indexed immediately, in discovery order.
    pub fn load_directory_into_host<P: Into<PathBuf>>(
        &self,
        path: P,
        host: &mut AnalysisHost,
    ) -> Result<(), String> {
        let path = path.into();
        if !path.exists() || !path.is_dir() {
            return Err(format!("Directory not found: {}", path.display()));
        }

        let paths = collect_lua_paths(&path)?;
        debug!(count = paths.len(), root = %path.display(), "seeding workspace");

        let mut errors = Vec::new();
        let mut pairs = Vec::new();
        for path in paths {
            match fs::read_to_string(&path) {
                Ok(text) => pairs.push((path.to_string_lossy().into_owned(), text)),
                Err(e) => errors.push(format!("{}: {}", path.display(), e)),
            }
        }
        host.seed_documents(pairs);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Failed to load {} file(s):\n  {}",
                errors.len(),
                errors.join("\n  ")
            ))
        }
    }

    /// Loads a single file into an AnalysisHost.
    pub fn load_file_into_host<P: Into<PathBuf>>(
        &self,
        path: P,
        host: &mut AnalysisHost,
    ) -> Result<(), String> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
        host.seed_documents([(path.to_string_lossy().into_owned(), text)]);
        Ok(())
    }
}

impl Default for WorkspaceLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect every `.lua` file under `dir`, recursively, in a stable order.
fn collect_lua_paths(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let mut found = Vec::new();
    collect_into(dir, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect_into(dir: &Path, found: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Cannot read {}: {}", dir.display(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("Cannot read {}: {}", dir.display(), e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_into(&path, found)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(LUA_EXT) {
            found.push(path);
        }
    }
    Ok(())
}
