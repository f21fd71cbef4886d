use serde::Serialize;

/// An open position shown on the active trades view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub ticker: &'static str,
    pub company: &'static str,
    pub entry_price: i64,
    pub current_price: i64,
    pub quantity: i64,
    pub open_date: &'static str,
}

impl Position {
    /// Market value at the current price.
    #[must_use]
    pub fn position_value(&self) -> i64 {
        self.current_price * self.quantity
    }

    #[must_use]
    pub fn cost_basis(&self) -> i64 {
        self.entry_price * self.quantity
    }

    /// Unrealized profit or loss in won.
    #[must_use]
    pub fn pnl(&self) -> i64 {
        (self.current_price - self.entry_price) * self.quantity
    }

    /// Unrealized profit or loss relative to the entry price, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pnl_pct(&self) -> f64 {
        if self.entry_price == 0 {
            return 0.0;
        }
        (self.current_price - self.entry_price) as f64 / self.entry_price as f64 * 100.0
    }
}

/// Aggregate figures for the active trades KPI row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_pnl: i64,
    /// Total P&L over the total cost basis, in percent.
    pub total_pnl_pct: f64,
    /// Mean of the per-position P&L percentages.
    pub average_pnl_pct: f64,
    pub total_value: i64,
    pub positions: usize,
}

impl PortfolioSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_positions(positions: &[Position]) -> Self {
        if positions.is_empty() {
            return Self::default();
        }

        let total_pnl: i64 = positions.iter().map(Position::pnl).sum();
        let total_value: i64 = positions.iter().map(Position::position_value).sum();
        let cost_basis: i64 = positions.iter().map(Position::cost_basis).sum();
        let pct_sum: f64 = positions.iter().map(Position::pnl_pct).sum();

        let total_pnl_pct = if cost_basis == 0 {
            0.0
        } else {
            total_pnl as f64 / cost_basis as f64 * 100.0
        };

        Self {
            total_pnl,
            total_pnl_pct,
            average_pnl_pct: pct_sum / positions.len() as f64,
            total_value,
            positions: positions.len(),
        }
    }
}
