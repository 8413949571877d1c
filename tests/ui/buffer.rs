//! Helpers for reading a TestBackend buffer as text

use ratatui::backend::TestBackend;

/// Every row of the backend buffer as a string
pub fn rows(backend: &TestBackend) -> Vec<String> {
    let buffer = backend.buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

/// True if any row contains `needle`
pub fn contains(backend: &TestBackend, needle: &str) -> bool {
    rows(backend).iter().any(|row| row.contains(needle))
}
