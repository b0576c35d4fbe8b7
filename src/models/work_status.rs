use super::stamp::Stamp;
use serde::Serialize;

/// Daily work status, derived from today's stamp (never stored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    NotWorking,
    Working,
    OnBreak,
    ClockedOut,
}

impl WorkStatus {
    pub fn from_stamp(stamp: Option<&Stamp>) -> Self {
        match stamp {
            None => WorkStatus::NotWorking,
            Some(s) if s.is_clocked_out() => WorkStatus::ClockedOut,
            Some(s) if s.has_open_break() => WorkStatus::OnBreak,
            Some(_) => WorkStatus::Working,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::NotWorking => "not_working",
            WorkStatus::Working => "working",
            WorkStatus::OnBreak => "on_break",
            WorkStatus::ClockedOut => "clocked_out",
        }
    }
}

/// Answer of `StampLogic::get_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentStatus {
    pub status: WorkStatus,
    pub stamp: Option<Stamp>,
}
