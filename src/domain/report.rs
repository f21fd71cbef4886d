use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub id: &'static str,
    pub rank: u32,
    pub code: &'static str,
    pub name: &'static str,
    pub recommendation: Recommendation,
    pub score: u32,
    /// Model confidence in percent.
    pub confidence: u32,
    pub price_change: f64,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Hold,
    Monitor,
}

impl Recommendation {
    /// Upper-case badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Monitor => "MONITOR",
        }
    }
}
