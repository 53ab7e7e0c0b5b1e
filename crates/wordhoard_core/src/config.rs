//! Dictionary file configuration.

use crate::types::LineEnding;

/// Configuration for loading and saving dictionary files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether opening a missing file yields an empty dictionary.
    pub create_if_missing: bool,

    /// Whether whitespace-only lines are skipped when loading.
    pub skip_blank_lines: bool,

    /// Whether to sync the file to disk after every save.
    pub sync_on_save: bool,

    /// Line ending written between records.
    pub line_ending: LineEnding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            create_if_missing: false,
            skip_blank_lines: true,
            sync_on_save: true,
            line_ending: LineEnding::native(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to create the file if missing.
    #[must_use]
    pub const fn create_if_missing(mut self, value: bool) -> Self {
        self.create_if_missing = value;
        self
    }

    /// Sets whether blank lines are skipped on load.
    #[must_use]
    pub const fn skip_blank_lines(mut self, value: bool) -> Self {
        self.skip_blank_lines = value;
        self
    }

    /// Sets whether to sync after every save.
    #[must_use]
    pub const fn sync_on_save(mut self, value: bool) -> Self {
        self.sync_on_save = value;
        self
    }

    /// Sets the line ending used when saving.
    #[must_use]
    pub const fn line_ending(mut self, value: LineEnding) -> Self {
        self.line_ending = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(!config.create_if_missing);
        assert!(config.skip_blank_lines);
        assert!(config.sync_on_save);
        assert_eq!(config.line_ending, LineEnding::native());
    }

    #[test]
    fn strict_blank_lines() {
        let config = Config::new().skip_blank_lines(false);
        assert!(!config.skip_blank_lines);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new()
            .create_if_missing(true)
            .sync_on_save(false)
            .line_ending(LineEnding::CrLf);

        assert!(config.create_if_missing);
        assert!(!config.sync_on_save);
        assert_eq!(config.line_ending, LineEnding::CrLf);
    }
}
