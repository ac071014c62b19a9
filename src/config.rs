//! Diagram size, palette and layout settings

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

/// Rendering and layout configuration.
///
/// Never part of a [`Board`](crate::hexapawn::Board); positions compare
/// equal regardless of how they are drawn.
///
/// # Examples
///
/// ```
/// use hexapawn::config::Config;
///
/// let config = Config::default().with_width(45.0).with_boards_per_row(3);
/// assert_eq!(config.space_size(), 15.0);
/// assert_eq!(config.units(15.0), "15mm");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of one board diagram in millimetres
    pub width: f64,
    /// Move arrow colors, paired in order with a board's legal moves
    pub colors: Vec<String>,
    /// Number of diagrams per row in the catalog layout
    pub boards_per_row: usize,
    /// Gap between diagrams in a row, in millimetres
    pub horizontal_spacing: f64,
    /// Gap between rows, in millimetres
    pub vertical_spacing: f64,
}

impl Config {
    /// Load a JSON configuration file; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or
    /// fails [`Config::validate`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: Config = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that sizes are positive and the palette and rows are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] describing the first
    /// offending field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let invalid = |message: String| Err(crate::Error::InvalidConfiguration { message });

        if !(self.width.is_finite() && self.width > 0.0) {
            return invalid(format!("width must be positive, got {}", self.width));
        }
        if self.colors.is_empty() {
            return invalid("at least one move color is required".to_string());
        }
        if self.boards_per_row == 0 {
            return invalid("boards_per_row must be at least 1".to_string());
        }
        for (name, value) in [
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return invalid(format!("{name} must be non-negative, got {value}"));
            }
        }

        Ok(())
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_boards_per_row(mut self, boards_per_row: usize) -> Self {
        self.boards_per_row = boards_per_row;
        self
    }

    pub fn with_spacing(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    /// Side length of one square
    pub fn space_size(&self) -> f64 {
        self.width / f64::from(crate::hexapawn::SIZE)
    }

    /// Format a length for TikZ
    pub fn units(&self, value: f64) -> String {
        format!("{value}mm")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 30.0,
            colors: ["red", "green!50!black", "blue", "orange"]
                .into_iter()
                .map(String::from)
                .collect(),
            boards_per_row: 4,
            horizontal_spacing: 5.0,
            vertical_spacing: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.space_size(), 10.0);
        assert_eq!(config.colors.len(), 4);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(Config::default().with_width(0.0).validate().is_err());
        assert!(Config::default().with_width(f64::NAN).validate().is_err());
        assert!(
            Config::default()
                .with_colors(Vec::<String>::new())
                .validate()
                .is_err()
        );
        assert!(Config::default().with_boards_per_row(0).validate().is_err());
        assert!(Config::default().with_spacing(-1.0, 0.0).validate().is_err());
    }

    #[test]
    fn loads_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"width": 60, "colors": ["red", "blue"]}}"#).unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.width, 60.0);
        assert_eq!(config.colors, vec!["red", "blue"]);
        assert_eq!(config.boards_per_row, Config::default().boards_per_row);
    }

    #[test]
    fn missing_file_reports_operation() {
        let err = Config::from_path("/nonexistent/hexapawn.json").unwrap_err();
        assert!(err.to_string().contains("open config file"));
    }
}
