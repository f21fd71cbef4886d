use serde::Serialize;

/// Cash position of the brokerage account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountBalance {
    pub available_cash: i64,
    pub buying_power: i64,
    /// Share of margin in use, in percent.
    pub margin_used_pct: u32,
}

/// A market index on the trading view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketIndex {
    pub name: &'static str,
    pub value: f64,
    /// Daily change in percent.
    pub change: f64,
}

/// Risk limits applied to new orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradingLimits {
    pub max_position_size: i64,
    pub max_daily_loss: i64,
    pub max_leverage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Market,
    Limit,
    StopLoss,
}

impl OrderKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::Limit => "Limit",
            Self::StopLoss => "Stop Loss",
        }
    }
}

/// A submitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Order {
    pub ticker: &'static str,
    pub company: &'static str,
    pub side: OrderSide,
    pub kind: OrderKind,
    pub quantity: i64,
    /// Fill or limit price in won.
    pub price: i64,
    pub placed_at: &'static str,
}

impl Order {
    /// Order value before commission.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.price * self.quantity
    }
}

/// Whole millions, for the limits panel (`50_000_000` is `50`).
#[must_use]
pub fn whole_millions(amount: i64) -> i64 {
    amount / 1_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total() {
        let order = Order {
            ticker: "STK023",
            company: "Samsung Electronics",
            side: OrderSide::Buy,
            kind: OrderKind::Limit,
            quantity: 150,
            price: 68_500,
            placed_at: "2025-12-28 09:02",
        };
        assert_eq!(order.total(), 10_275_000);
    }

    #[test]
    fn test_whole_millions_truncates() {
        assert_eq!(whole_millions(50_000_000), 50);
        assert_eq!(whole_millions(10_999_999), 10);
    }
}
