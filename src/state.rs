use crate::models::RecordSet;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub records: Arc<Mutex<RecordSet>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, records: RecordSet) -> Self {
        Self {
            data_path,
            records: Arc::new(Mutex::new(records)),
        }
    }
}
