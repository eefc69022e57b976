// src/models.rs
use serde::{Deserialize, Serialize, Serializer};

fn default_store_count() -> u32 {
    1
}

/// One snapshot of the business inputs. Fractions are ratios in [0, 1],
/// currency amounts are per store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    pub visitors_per_day: f64,
    pub conversion_rate: f64,
    pub average_ticket_value: f64,
    pub open_days_per_week: u32,
    pub capital_expense: f64,
    pub monthly_subscription: f64,
    pub gross_margin: f64,
    pub conversion_uplift: f64,
    pub price_uplift: f64,
    pub saturday_revenue_share: f64,
    pub saturday_conversion_boost: f64,
    #[serde(default = "default_store_count")]
    pub store_count: u32,
}

/// Partial update of a snapshot. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputEdit {
    pub visitors_per_day: Option<f64>,
    pub conversion_rate: Option<f64>,
    pub average_ticket_value: Option<f64>,
    pub open_days_per_week: Option<u32>,
    pub capital_expense: Option<f64>,
    pub monthly_subscription: Option<f64>,
    pub gross_margin: Option<f64>,
    pub conversion_uplift: Option<f64>,
    pub price_uplift: Option<f64>,
    pub saturday_revenue_share: Option<f64>,
    pub saturday_conversion_boost: Option<f64>,
    pub store_count: Option<u32>,
}

impl InputEdit {
    pub fn touches_store_count(&self) -> bool {
        self.store_count.is_some()
    }

    /// Returns a new snapshot with the edited fields replaced.
    pub fn applied_to(&self, base: &InputParameters) -> InputParameters {
        InputParameters {
            visitors_per_day: self.visitors_per_day.unwrap_or(base.visitors_per_day),
            conversion_rate: self.conversion_rate.unwrap_or(base.conversion_rate),
            average_ticket_value: self.average_ticket_value.unwrap_or(base.average_ticket_value),
            open_days_per_week: self.open_days_per_week.unwrap_or(base.open_days_per_week),
            capital_expense: self.capital_expense.unwrap_or(base.capital_expense),
            monthly_subscription: self.monthly_subscription.unwrap_or(base.monthly_subscription),
            gross_margin: self.gross_margin.unwrap_or(base.gross_margin),
            conversion_uplift: self.conversion_uplift.unwrap_or(base.conversion_uplift),
            price_uplift: self.price_uplift.unwrap_or(base.price_uplift),
            saturday_revenue_share: self.saturday_revenue_share.unwrap_or(base.saturday_revenue_share),
            saturday_conversion_boost: self
                .saturday_conversion_boost
                .unwrap_or(base.saturday_conversion_boost),
            store_count: self.store_count.unwrap_or(base.store_count),
        }
    }
}

/// Conversion vs. ticket-value split of the uplift. The two figures are
/// independent counterfactuals and do not add up to the total uplift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Attribution {
    pub conversion_attributed_uplift: f64,
    pub price_attributed_uplift: f64,
    pub conversion_share: f64,
    pub price_share: f64,
}

// serde_json cannot represent infinity; "no payback" goes out as null.
fn serialize_months<S>(months: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if months.is_finite() {
        serializer.serialize_some(months)
    } else {
        serializer.serialize_none()
    }
}

/// Derived figures for one snapshot. Totals already include the store count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiResult {
    pub annual_visitors: f64,
    pub annual_transactions: f64,
    pub baseline_annual_revenue: f64,
    pub scenario_annual_revenue: f64,
    pub annual_uplift: f64,
    pub monthly_uplift: f64,
    pub monthly_extra_profit: f64,
    /// `f64::INFINITY` when the investment is never recovered.
    #[serde(serialize_with = "serialize_months")]
    pub payback_months: f64,
    pub annual_roi_pct: f64,
    pub capital_expense_total: f64,
    pub monthly_subscription_total: f64,
    pub attribution: Attribution,
}

impl RoiResult {
    pub fn payback(&self) -> Option<f64> {
        self.payback_months.is_finite().then_some(self.payback_months)
    }
}
