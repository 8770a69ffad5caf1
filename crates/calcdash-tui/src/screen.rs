//! Screen trait and screen identifier enum.

use std::fmt;

/// Identifies each primary TUI screen, navigable by Tab or number keys
/// (number keys only on screens without a text field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Overview, // 1
    Greet,     // 2
    Fibonacci, // 3
    Stats,     // 4
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 4] = [Self::Overview, Self::Greet, Self::Fibonacci, Self::Stats];

    /// Numeric key (1-4) for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Overview => 1,
            Self::Greet => 2,
            Self::Fibonacci => 3,
            Self::Stats => 4,
        }
    }

    /// Screen from a numeric key (1-4). Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Overview),
            2 => Some(Self::Greet),
            3 => Some(Self::Fibonacci),
            4 => Some(Self::Stats),
            _ => None,
        }
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Greet => "Greet",
            Self::Fibonacci => "Fibonacci",
            Self::Stats => "Stats",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
