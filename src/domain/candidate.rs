use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockCandidate {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    /// Last price in won.
    pub price: i64,
    /// Daily change in percent.
    pub price_change: f64,
    pub ai_score: u32,
    pub added_date: &'static str,
    pub status: CandidateStatus,
    pub indicators: TechnicalIndicators,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Pending,
    Approved,
    Monitoring,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TechnicalIndicators {
    pub rsi: f64,
    pub macd: MacdSignal,
    pub volume: VolumeLevel,
    /// Five-day price change in percent.
    pub change_5d: f64,
    /// Volume relative to the 20-day average.
    pub vol_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdSignal {
    Bullish,
    Neutral,
    Bearish,
}

impl MacdSignal {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
            Self::Bearish => "Bearish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeLevel {
    High,
    Normal,
    Low,
}

impl VolumeLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Normal => "Normal",
            Self::Low => "Low",
        }
    }
}

/// Band an AI score falls into, used to color score badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// 80 and above.
    High,
    /// 60 to 79.
    Medium,
    /// 40 to 59.
    Low,
    /// Below 40.
    Weak,
}

impl ScoreTier {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::High,
            60..=79 => Self::Medium,
            40..=59 => Self::Low,
            _ => Self::Weak,
        }
    }
}
