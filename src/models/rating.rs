use serde::Serialize;

/// Daily classification of a CO2 total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Low,
    Ok,
    High,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Low => "LOW",
            Rating::Ok => "OK",
            Rating::High => "HIGH",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Rating::Low => "Great job, low-emission day",
            Rating::Ok => "Acceptable, but there is room to improve",
            Rating::High => "High emissions today",
        }
    }
}
