use std::sync::Mutex;

use crate::errors::CollectorResult;
use crate::sink::traits::{ValueInput, Worksheet};

/// Worksheet backed by an in-process grid. Used by tests the way the
/// sqlite-backed projects use an in-memory database.
pub struct InMemoryWorksheet {
    rows: Mutex<Vec<Vec<String>>>,
    frozen_rows: Mutex<usize>,
}

impl InMemoryWorksheet {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: Mutex::new(rows),
            frozen_rows: Mutex::new(0),
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().unwrap().clone()
    }

    pub fn frozen_rows(&self) -> usize {
        *self.frozen_rows.lock().unwrap()
    }
}

impl Default for InMemoryWorksheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Worksheet for InMemoryWorksheet {
    fn header_row(&self) -> CollectorResult<Vec<String>> {
        Ok(self.rows.lock().unwrap().first().cloned().unwrap_or_default())
    }

    fn write_header(&self, headers: &[String]) -> CollectorResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.is_empty() {
            rows.push(headers.to_vec());
        } else {
            rows[0] = headers.to_vec();
        }
        Ok(())
    }

    fn column_body(&self, column: usize) -> CollectorResult<Vec<String>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .skip(1)
            .map(|row| row.get(column).cloned().unwrap_or_default())
            .collect())
    }

    fn append_rows(&self, new_rows: &[Vec<String>], _input: ValueInput) -> CollectorResult<()> {
        self.rows.lock().unwrap().extend(new_rows.iter().cloned());
        Ok(())
    }

    fn trim_columns(&self, keep: usize) -> CollectorResult<()> {
        for row in self.rows.lock().unwrap().iter_mut() {
            row.truncate(keep);
        }
        Ok(())
    }

    fn freeze_header(&self) -> CollectorResult<()> {
        *self.frozen_rows.lock().unwrap() = 1;
        Ok(())
    }

    fn sort_body_by_column(&self, column: usize) -> CollectorResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.len() > 1 {
            rows[1..].sort_by(|a, b| {
                let left = a.get(column).map(String::as_str).unwrap_or("");
                let right = b.get(column).map(String::as_str).unwrap_or("");
                left.cmp(right)
            });
        }
        Ok(())
    }

    fn clear_background(&self, _columns: usize) -> CollectorResult<()> {
        Ok(())
    }
}
