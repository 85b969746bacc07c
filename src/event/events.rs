use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Event {
    Tick,
    OpenSettings,
    LibraryScanned {
        root: PathBuf,
        entries: Vec<PathBuf>,
    },
    ScanFailed(String),
}
