use crate::errors::AppError;
use crate::models::RecordSet;
use std::path::Path;
use tokio::fs;
use tracing::{debug, error};

pub async fn load_records(path: &Path) -> RecordSet {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<RecordSet>(&bytes) {
            Ok(records) => {
                debug!(count = records.len(), "loaded records");
                records
            }
            Err(err) => {
                error!("failed to parse records file: {err}");
                RecordSet::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => RecordSet::default(),
        Err(err) => {
            error!("failed to read records file: {err}");
            RecordSet::default()
        }
    }
}

/// Writes the whole set as one snapshot.
pub async fn persist_records(path: &Path, records: &RecordSet) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(records)?;
    fs::write(path, payload).await?;
    Ok(())
}
