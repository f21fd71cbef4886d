use serde::Serialize;

/// A screened stock in the pool, before it reaches the AI report stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoolStock {
    pub ticker: &'static str,
    pub company: &'static str,
    pub sector: Sector,
    /// Last price in won.
    pub price: i64,
    /// Daily change in percent.
    pub change: f64,
    /// Traded volume in millions of shares.
    pub volume_m: f64,
    pub ai_score: u32,
    pub status: PoolStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Consumer,
    Energy,
    Finance,
    Healthcare,
    Technology,
}

impl Sector {
    /// Alphabetical, the order the filter lists them in.
    pub const ALL: [Self; 5] = [
        Self::Consumer,
        Self::Energy,
        Self::Finance,
        Self::Healthcare,
        Self::Technology,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Consumer => "Consumer",
            Self::Energy => "Energy",
            Self::Finance => "Finance",
            Self::Healthcare => "Healthcare",
            Self::Technology => "Technology",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|sector| sector.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// Where a pool stock stands in screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolStatus {
    Analyzing,
    Qualified,
    Rejected,
    Watching,
}

impl PoolStatus {
    pub const ALL: [Self; 4] = [
        Self::Analyzing,
        Self::Qualified,
        Self::Rejected,
        Self::Watching,
    ];

    /// Lowercase label, also the query value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Analyzing => "analyzing",
            Self::Qualified => "qualified",
            Self::Rejected => "rejected",
            Self::Watching => "watching",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// Search and filter state of the stock pool table.
///
/// Every field narrows the result; an empty filter keeps every stock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolFilter {
    /// Substring matched against ticker and company, ignoring case.
    pub query: Option<String>,
    pub sector: Option<Sector>,
    pub status: Option<PoolStatus>,
}

impl PoolFilter {
    /// Build a filter from raw query values.
    ///
    /// Blank values and unknown sectors or statuses (including the "All"
    /// choices of the form) leave that dimension unfiltered.
    pub fn from_params(query: Option<&str>, sector: Option<&str>, status: Option<&str>) -> Self {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);
        let sector = sector.filter(|s| !s.trim().is_empty()).and_then(|s| {
            let parsed = Sector::parse(s);
            if parsed.is_none() {
                tracing::debug!(sector = s, "Unknown sector filter, ignoring");
            }
            parsed
        });
        let status = status.filter(|s| !s.trim().is_empty()).and_then(|s| {
            let parsed = PoolStatus::parse(s);
            if parsed.is_none() {
                tracing::debug!(status = s, "Unknown status filter, ignoring");
            }
            parsed
        });

        Self {
            query,
            sector,
            status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.sector.is_none() && self.status.is_none()
    }

    pub fn matches(&self, stock: &PoolStock) -> bool {
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let hit = stock.ticker.to_lowercase().contains(&needle)
                || stock.company.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        self.sector.is_none_or(|sector| stock.sector == sector)
            && self.status.is_none_or(|status| stock.status == status)
    }

    /// Stocks that pass the filter, in pool order.
    pub fn apply<'a>(&self, stocks: &'a [PoolStock]) -> Vec<&'a PoolStock> {
        stocks.iter().filter(|stock| self.matches(stock)).collect()
    }
}
