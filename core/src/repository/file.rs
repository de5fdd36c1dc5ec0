use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::model::task::Task;
use crate::repository::traits::TaskStore;

const DEFAULT_FILE_NAME: &str = "tarefas.json";

/// JSON-file-backed task store: one array holding every record.
#[derive(Clone)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Opens the store under `base_dir`, defaulting to `~/.tarefas`.
    /// The directory is created eagerly; the file itself appears on the
    /// first save.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self, StoreError> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
                home_dir.join(".tarefas")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);
        Ok(JsonFileStore { file_path: path })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "no task file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        let reader = BufReader::new(file);
        let tasks: Vec<Task> =
            serde_json::from_reader(reader).map_err(|source| StoreError::Corrupt {
                path: self.file_path.clone(),
                source,
            })?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        // Written to a sibling file first so a crash mid-write cannot
        // truncate the only copy of the data.
        let tmp_path = self.file_path.with_extension("json.tmp");
        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        serde_json::to_writer_pretty(&mut writer, tasks).map_err(StoreError::Encode)?;
        writer.flush()?;
        drop(writer);
        fs::rename(&tmp_path, &self.file_path)?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
