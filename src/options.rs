//! Game configuration options.

use crate::table::TABLE_SIZE;

/// Configuration options for a Set game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use setrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_table_size(9)
///     .with_target_score(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of table slots to fill (typically 12).
    pub table_size: usize,
    /// Score at which a participant wins the game.
    pub target_score: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            table_size: TABLE_SIZE,
            target_score: 5,
        }
    }
}

impl GameOptions {
    /// Sets the number of table slots.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_table_size(15);
    /// assert_eq!(options.table_size, 15);
    /// ```
    #[must_use]
    pub const fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(10);
    /// assert_eq!(options.target_score, 10);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }
}
