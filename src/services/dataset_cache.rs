use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::services::loader::{load_comments, CommentFrame, DataFormatError};

/// 数据集缓存：进程内只加载一次，显式 clear 后下次访问重新加载
pub struct DatasetCache {
    path: PathBuf,
    slot: Mutex<Option<Arc<CommentFrame>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStatus {
    pub path: PathBuf,
    pub loaded: bool,
    pub rows: Option<usize>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<CommentFrame>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 加载失败不会写入缓存，错误直接返回给调用方
    pub fn get_or_load(&self) -> Result<Arc<CommentFrame>, DataFormatError> {
        let mut slot = self.lock();
        if let Some(frame) = slot.as_ref() {
            return Ok(Arc::clone(frame));
        }
        let frame = Arc::new(load_comments(&self.path).map_err(|e| {
            tracing::error!("failed to load dataset {}: {}", self.path.display(), e);
            e
        })?);
        *slot = Some(Arc::clone(&frame));
        Ok(frame)
    }

    pub fn clear(&self) -> bool {
        let cleared = self.lock().take().is_some();
        tracing::info!("dataset cache cleared (was loaded: {})", cleared);
        cleared
    }

    pub fn status(&self) -> DatasetStatus {
        let slot = self.lock();
        DatasetStatus {
            path: self.path.clone(),
            loaded: slot.is_some(),
            rows: slot.as_ref().map(|frame| frame.height()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const CSV: &str = "Time,Company,BERT_Label,Upvotes\n2024-01-15,TCS,POSITIVE,3\n";

    #[test]
    fn memoizes_until_cleared() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let cache = DatasetCache::new(file.path());

        assert!(!cache.status().loaded);
        let first = cache.get_or_load().unwrap();
        let second = cache.get_or_load().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.status().rows, Some(1));

        // 文件变化在 clear 之前不可见
        file.write_all(b"2024-01-16,TCS,NEGATIVE,1\n").unwrap();
        file.flush().unwrap();
        assert_eq!(cache.get_or_load().unwrap().height(), 1);

        assert!(cache.clear());
        assert!(!cache.clear());
        assert_eq!(cache.get_or_load().unwrap().height(), 2);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.csv");
        let cache = DatasetCache::new(&path);

        assert!(cache.get_or_load().is_err());
        assert!(!cache.status().loaded);

        std::fs::write(&path, CSV).unwrap();
        assert_eq!(cache.get_or_load().unwrap().height(), 1);
    }
}
