use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::EngineError;

/// Where a model or metadata artifact comes from.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<u8>, EngineError>;
}

/// A blob the embedding application already fetched.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    bytes: Vec<u8>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl ArtifactSource for StaticSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, EngineError> {
        Ok(self.bytes.clone())
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArtifactSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, EngineError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| EngineError::Fetch {
                source_name: self.describe(),
                reason: e.to_string(),
            })
    }
}
