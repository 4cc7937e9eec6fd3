use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::Path;

use csv::{ReaderBuilder, Writer, WriterBuilder};

use crate::models::types::MatchRow;

// Append-only CSV sink. Prior rows are never rewritten; the header is
// emitted once, when the file is first created.
pub struct MatchStorage {
    writer: Writer<std::fs::File>,
}

impl MatchStorage {
    // Match ids already present in the store; empty if the file is missing.
    pub fn load_known_ids(path: &Path) -> HashSet<u64> {
        let mut known = HashSet::new();
        let Ok(mut reader) = ReaderBuilder::new().flexible(true).from_path(path) else {
            return known;
        };
        for row in reader.records() {
            // Only the id column matters here. A row truncated by an
            // interrupted run still counts as collected as long as its id
            // made it to disk.
            let Ok(row) = row else { continue };
            if let Some(id) = row.get(0).and_then(|field| field.parse::<u64>().ok()) {
                known.insert(id);
            }
        }
        known
    }

    // Opens the store for append, creating it with a header row if needed.
    pub fn open(path: &Path) -> Result<Self, String> {
        let write_header = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("ouverture de {} impossible: {}", path.display(), e))?;

        let writer = WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        Ok(Self { writer })
    }

    // Flushes per row, so an interrupted run keeps everything accepted so far.
    pub fn append(&mut self, row: &MatchRow) -> Result<(), String> {
        self.writer.serialize(row).map_err(|e| e.to_string())?;
        self.writer.flush().map_err(|e| e.to_string())
    }
}
