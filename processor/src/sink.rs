use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

/// Rendered source for one generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub package: String,
    pub class_name: String,
    pub source: String,
}

impl GeneratedArtifact {
    /// Path of the compilation unit relative to the output root, e.g. `com/example/Main_.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').filter(|p| !p.is_empty()).collect();
        path.push(format!("{}.java", self.class_name));
        path
    }

    pub fn qualified_name(&self) -> String {
        match self.package.is_empty() {
            true => self.class_name.clone(),
            false => format!("{}.{}", self.package, self.class_name),
        }
    }
}

#[derive(Debug, Error)]
#[error("could not write {}: {}", .path.display(), .source)]
pub struct SinkError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Persists generated artifacts; one call per compilation unit.
pub trait CodeSink {
    fn write(&mut self, artifact: &GeneratedArtifact) -> Result<(), SinkError>;
}

/// Writes artifacts under a root directory, one file per class.
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CodeSink for FileSink {
    fn write(&mut self, artifact: &GeneratedArtifact) -> Result<(), SinkError> {
        let path = self.root.join(artifact.relative_path());
        let err = |source| SinkError {
            path: path.clone(),
            source,
        };

        // Leave unchanged files untouched so mtimes stay stable
        if fs::read(&path).is_ok_and(|bytes| bytes == artifact.source.as_bytes()) {
            debug!(path = %path.display(), "artifact unchanged");
            return Ok(());
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(err)?;
        }
        fs::write(&path, &artifact.source).map_err(err)?;
        debug!(path = %path.display(), "wrote artifact");
        Ok(())
    }
}

/// Keeps artifacts in memory, keyed by qualified name.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: BTreeMap<String, GeneratedArtifact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, qualified_name: &str) -> Option<&GeneratedArtifact> {
        self.artifacts.get(qualified_name)
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.values()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl CodeSink for MemorySink {
    fn write(&mut self, artifact: &GeneratedArtifact) -> Result<(), SinkError> {
        self.artifacts
            .insert(artifact.qualified_name(), artifact.clone());
        Ok(())
    }
}
