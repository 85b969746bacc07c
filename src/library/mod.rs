use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use flume::Sender;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{event::events::Event, util::task::TaskManager};

const SCAN_TASK: &str = "library_scan";

const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "flac", "ogg", "opus", "wav", "m4a", "aac", "mod", "xm", "s3m", "it", "sid", "sndh",
    "sc68", "nsf", "spc",
];

/// Kicks off indexing of the media library. Fire-and-forget: the caller never
/// waits on or inspects the outcome.
#[cfg_attr(test, mockall::automock)]
pub trait LibraryScanner: Send {
    fn begin_scan(&mut self, full: bool);
}

/// Walks the library directory on a blocking task and posts the result as an
/// app event. The last successful walk is cached: a quick scan answers from
/// the cache when there is one, a full scan always walks the tree again.
pub struct FsScanner {
    root: PathBuf,
    event_tx: Sender<Event>,
    cache: Arc<Mutex<Option<Vec<PathBuf>>>>,
    tasks: TaskManager,
}

impl FsScanner {
    pub fn new(root: PathBuf, event_tx: Sender<Event>) -> Self {
        Self {
            root,
            event_tx,
            cache: Arc::new(Mutex::new(None)),
            tasks: TaskManager::new(),
        }
    }
}

impl LibraryScanner for FsScanner {
    fn begin_scan(&mut self, full: bool) {
        if self.tasks.is_running(SCAN_TASK) && !full {
            return;
        }

        let root = self.root.clone();
        let tx = self.event_tx.clone();
        let cache = self.cache.clone();
        info!(root = %root.display(), full, "starting library scan");

        self.tasks.spawn(
            SCAN_TASK,
            tokio::spawn(async move {
                let mut cached = cache.lock().await;
                if let (false, Some(entries)) = (full, cached.as_ref()) {
                    debug!(count = entries.len(), "library scan answered from cache");
                    let event = Event::LibraryScanned {
                        root,
                        entries: entries.clone(),
                    };
                    let _ = tx.send_async(event).await;
                    return;
                }

                let scan_root = root.clone();
                let result = tokio::task::spawn_blocking(move || scan_dir(&scan_root)).await;
                let event = match result {
                    Ok(Ok(entries)) => {
                        info!(count = entries.len(), "library scan finished");
                        *cached = Some(entries.clone());
                        Event::LibraryScanned { root, entries }
                    }
                    Ok(Err(e)) => {
                        warn!("library scan failed: {}", e);
                        Event::ScanFailed(e.to_string())
                    }
                    Err(e) => Event::ScanFailed(e.to_string()),
                };
                drop(cached);
                let _ = tx.send_async(event).await;
            }),
        );
    }
}

/// Collects playable files anywhere under `root`. Symlinked directories are
/// not followed, so a link back up the tree cannot make the walk loop.
pub fn scan_dir(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_symlink() && path.is_dir() {
                debug!(path = %path.display(), "skipping symlinked directory");
            } else if is_audio(&path) {
                entries.push(path);
            }
        }
    }

    entries.sort();
    Ok(entries)
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
