use crate::errors::{AppError, AppResult};
use crate::models::TodoDocument;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> TodoDocument {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "todo store missing; starting empty");
                return TodoDocument::default();
            }
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %error,
                    "todo store unreadable; starting empty"
                );
                return TodoDocument::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(document) => document,
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %error,
                    "todo store is not valid json; starting empty"
                );
                TodoDocument::default()
            }
        }
    }

    pub async fn save(&self, document: &TodoDocument) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|error| AppError::Io(format!("failed to prepare store directory: {}", error)))?;
        }

        let mut bytes = serde_json::to_vec_pretty(document)?;
        bytes.push(b'\n');

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, bytes)
            .await
            .map_err(|error| AppError::Io(format!("failed to write todo store: {}", error)))?;

        if let Err(error) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(AppError::Io(format!("failed to replace todo store: {}", error)));
        }

        tracing::debug!(path = %self.path.display(), count = document.todos.len(), "todo store saved");
        Ok(())
    }
}
