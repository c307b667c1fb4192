//! Application state and logic.

use std::path::PathBuf;

use crate::data::FitnessMatrix;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Loaded fitness samples.
    pub matrix: FitnessMatrix,
    /// Path the samples were loaded from.
    pub file_path: PathBuf,
    /// Generation highlighted by the plot cursor.
    pub cursor: usize,
    /// Status message.
    pub status: String,
}

impl App {
    /// Create a new application instance around a loaded matrix.
    pub fn new(file_path: PathBuf, matrix: FitnessMatrix) -> Self {
        let status = format!(
            "{} loaded",
            file_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "file".to_string())
        );
        tracing::info!(path = %file_path.display(), "file loaded successfully");
        Self {
            matrix,
            file_path,
            cursor: 0,
            status,
        }
    }

    /// Move the generation cursor one step back.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the generation cursor one step forward.
    pub fn cursor_right(&mut self) {
        if self.cursor + 1 < self.matrix.generations() {
            self.cursor += 1;
        }
    }

    /// Jump the cursor to the first generation.
    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump the cursor to the last generation.
    pub fn cursor_last(&mut self) {
        self.cursor = self.matrix.generations().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FitnessMatrix;
    use std::path::PathBuf;

    fn app(rows: Vec<Vec<f64>>) -> App {
        let matrix = FitnessMatrix::from_rows(PathBuf::from("test.txt"), rows).unwrap();
        App::new(PathBuf::from("test.txt"), matrix)
    }

    #[test]
    fn cursor_stays_within_loaded_generations() {
        let mut app = app(vec![vec![1.0], vec![2.0], vec![3.0]]);
        app.cursor_left();
        assert_eq!(app.cursor, 0);
        app.cursor_last();
        assert_eq!(app.cursor, 2);
        app.cursor_right();
        assert_eq!(app.cursor, 2);
        app.cursor_first();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn cursor_on_empty_matrix_is_inert() {
        let mut app = app(vec![]);
        app.cursor_right();
        app.cursor_last();
        assert_eq!(app.cursor, 0);
    }
}
