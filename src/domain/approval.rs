//! Approval recommendation badge.
//!
//! Combines the AI score, recent momentum, RSI and the AI report verdict into a
//! small integer score and maps it onto one of three badges. The badge only
//! informs the reviewer; nothing is approved automatically.

use serde::Serialize;

use super::candidate::StockCandidate;
use super::report::{Recommendation, Report};

/// Score at or above which a candidate is a strong approve.
const STRONG_APPROVE_MIN: i32 = 5;
/// Score at or above which a candidate should be watched longer.
const WATCH_MORE_MIN: i32 = 3;

/// Confidence (percent) above which a buy verdict counts double.
const CONFIDENT_BUY: u32 = 75;

/// Approval recommendation shown on the quick analysis panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalBadge {
    StrongApprove,
    WatchMore,
    DoNotApprove,
}

impl ApprovalBadge {
    /// Score a candidate, optionally taking its AI report into account.
    #[must_use]
    pub fn evaluate(candidate: &StockCandidate, report: Option<&Report>) -> Assessment {
        let mut score = 0;

        score += match candidate.ai_score {
            85.. => 2,
            75..=84 => 1,
            _ => 0,
        };

        let indicators = &candidate.indicators;
        if indicators.change_5d > 3.0 {
            score += 1;
        }
        if indicators.vol_ratio > 1.2 {
            score += 1;
        }

        if (45.0..=65.0).contains(&indicators.rsi) {
            score += 1;
        } else if indicators.rsi > 70.0 {
            score -= 1;
        }

        if let Some(report) = report {
            if report.recommendation == Recommendation::Buy {
                score += if report.confidence >= CONFIDENT_BUY { 2 } else { 1 };
            }
        }

        let badge = if score >= STRONG_APPROVE_MIN {
            Self::StrongApprove
        } else if score >= WATCH_MORE_MIN {
            Self::WatchMore
        } else {
            Self::DoNotApprove
        };

        Assessment { badge, score }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StrongApprove => "STRONG APPROVE",
            Self::WatchMore => "WATCH MORE",
            Self::DoNotApprove => "DO NOT APPROVE",
        }
    }
}

/// Outcome of [`ApprovalBadge::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub badge: ApprovalBadge,
    pub score: i32,
}

impl Assessment {
    /// Whether the "Start Trading" action should be enabled.
    #[must_use]
    pub fn allows_approval(&self) -> bool {
        self.badge != ApprovalBadge::DoNotApprove
    }

    /// One-line reviewer guidance for the badge.
    #[must_use]
    pub fn explanation(&self) -> String {
        match self.badge {
            ApprovalBadge::StrongApprove => format!(
                "Combined score {} strongly supports approval. All indicators are positive.",
                self.score
            ),
            ApprovalBadge::WatchMore => format!(
                "Combined score {}. Indicators are mixed; observe for another 1-2 days.",
                self.score
            ),
            ApprovalBadge::DoNotApprove => format!(
                "Combined score {} does not meet the approval conditions.",
                self.score
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candidate::{
        CandidateStatus, MacdSignal, TechnicalIndicators, VolumeLevel,
    };

    fn candidate(ai_score: u32, rsi: f64, change_5d: f64, vol_ratio: f64) -> StockCandidate {
        StockCandidate {
            id: "t",
            code: "000000",
            name: "Test",
            price: 10_000,
            price_change: 1.0,
            ai_score,
            added_date: "2025-01-15",
            status: CandidateStatus::Pending,
            indicators: TechnicalIndicators {
                rsi,
                macd: MacdSignal::Neutral,
                volume: VolumeLevel::Normal,
                change_5d,
                vol_ratio,
            },
        }
    }

    fn report(recommendation: Recommendation, confidence: u32) -> Report {
        Report {
            id: "r",
            rank: 1,
            code: "000000",
            name: "Test",
            recommendation,
            score: 90,
            confidence,
            price_change: 1.0,
            summary: "",
        }
    }

    #[test]
    fn test_strong_approve() {
        let c = candidate(92, 55.0, 4.0, 1.5);
        let assessment = ApprovalBadge::evaluate(&c, Some(&report(Recommendation::Buy, 80)));
        // 2 + 1 + 1 + 1 + 2
        assert_eq!(assessment.score, 7);
        assert_eq!(assessment.badge, ApprovalBadge::StrongApprove);
        assert!(assessment.allows_approval());
    }

    #[test]
    fn test_watch_more_without_report() {
        let c = candidate(80, 50.0, 1.0, 1.3);
        let assessment = ApprovalBadge::evaluate(&c, None);
        assert_eq!(assessment.score, 3);
        assert_eq!(assessment.badge, ApprovalBadge::WatchMore);
        assert!(assessment.allows_approval());
    }

    #[test]
    fn test_overbought_rsi_penalized() {
        let c = candidate(86, 73.4, 5.3, 0.9);
        let assessment = ApprovalBadge::evaluate(&c, Some(&report(Recommendation::Monitor, 64)));
        assert_eq!(assessment.score, 2);
        assert_eq!(assessment.badge, ApprovalBadge::DoNotApprove);
        assert!(!assessment.allows_approval());
    }

    #[test]
    fn test_low_confidence_buy_counts_once() {
        let c = candidate(70, 68.0, 0.0, 1.0);
        let confident = ApprovalBadge::evaluate(&c, Some(&report(Recommendation::Buy, 75)));
        let hesitant = ApprovalBadge::evaluate(&c, Some(&report(Recommendation::Buy, 74)));
        assert_eq!(confident.score, 2);
        assert_eq!(hesitant.score, 1);
    }

    #[test]
    fn test_explanation_mentions_score() {
        let c = candidate(30, 80.0, 0.0, 0.5);
        let assessment = ApprovalBadge::evaluate(&c, None);
        assert_eq!(assessment.score, -1);
        assert!(assessment.explanation().contains("-1"));
    }
}
