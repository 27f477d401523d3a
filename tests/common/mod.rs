use std::io::Write;

use tempfile::NamedTempFile;

/// Dataset file on disk, removed when dropped.
pub struct TestDataset {
    file: NamedTempFile,
}

impl TestDataset {
    pub fn new(json: &str) -> Self {
        let mut file = NamedTempFile::new().expect("create dataset file");
        file.write_all(json.as_bytes()).expect("write dataset file");
        Self { file }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}
