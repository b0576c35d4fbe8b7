use serde::{Deserialize, Serialize};

/// The four clock actions a worker can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StampAction {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
}

impl StampAction {
    pub const ALL: [StampAction; 4] = [
        StampAction::ClockIn,
        StampAction::ClockOut,
        StampAction::BreakStart,
        StampAction::BreakEnd,
    ];

    /// Wire / audit-log name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StampAction::ClockIn => "clock_in",
            StampAction::ClockOut => "clock_out",
            StampAction::BreakStart => "break_start",
            StampAction::BreakEnd => "break_end",
        }
    }

    /// Accepts both `clock_in` and `clock-in` spellings.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "clock_in" => Some(StampAction::ClockIn),
            "clock_out" => Some(StampAction::ClockOut),
            "break_start" => Some(StampAction::BreakStart),
            "break_end" => Some(StampAction::BreakEnd),
            _ => None,
        }
    }

    /// Short human label used in console feedback.
    pub fn label(&self) -> &'static str {
        match self {
            StampAction::ClockIn => "Clocked in",
            StampAction::ClockOut => "Clocked out",
            StampAction::BreakStart => "Break started",
            StampAction::BreakEnd => "Break ended",
        }
    }
}
