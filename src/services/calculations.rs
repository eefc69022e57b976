// src/services/calculations.rs
use crate::models::{Attribution, InputParameters, RoiResult};

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const SPLIT_EPSILON: f64 = 1e-9;

/// Transactions for a visitor count split into a Saturday bucket (with the
/// extra Saturday conversion boost) and the rest of the week.
///
/// `sat * c * (1 + boost) + (V - sat) * c` is evaluated as
/// `V * c * (1 + share * boost)`, which is exactly `V * c` when there is no
/// boost, so neutral levers reproduce the baseline without rounding residue.
fn split_transactions(annual_visitors: f64, conversion: f64, inputs: &InputParameters) -> f64 {
    let saturday_lift = inputs.saturday_revenue_share * inputs.saturday_conversion_boost;
    annual_visitors * conversion * (1.0 + saturday_lift)
}

fn attribution_split(
    inputs: &InputParameters,
    annual_visitors: f64,
    annual_transactions: f64,
    baseline_revenue: f64,
    conversion_new: f64,
    ticket_new: f64,
) -> Attribution {
    // Conversion lever only: scenario conversion, baseline ticket value.
    let conversion_only_revenue =
        split_transactions(annual_visitors, conversion_new, inputs) * inputs.average_ticket_value;
    // Price lever only: baseline transactions, scenario ticket value.
    let price_only_revenue = annual_transactions * ticket_new;

    let conversion_attributed_uplift = (conversion_only_revenue - baseline_revenue).max(0.0);
    let price_attributed_uplift = (price_only_revenue - baseline_revenue).max(0.0);

    let split_total = conversion_attributed_uplift + price_attributed_uplift;
    let (conversion_share, price_share) = if split_total < SPLIT_EPSILON {
        (0.5, 0.5)
    } else {
        let conversion_share = conversion_attributed_uplift / split_total;
        (conversion_share, 1.0 - conversion_share)
    };

    Attribution {
        conversion_attributed_uplift,
        price_attributed_uplift,
        conversion_share,
        price_share,
    }
}

/// Computes every derived figure for one input snapshot.
///
/// Total over validated inputs: a scenario below baseline reports zero
/// uplift, an unrecoverable investment reports infinite payback, and ROI
/// is floored at -100%.
pub fn compute(inputs: &InputParameters) -> RoiResult {
    let stores = f64::from(inputs.store_count);

    let annual_visitors =
        inputs.visitors_per_day * f64::from(inputs.open_days_per_week) * WEEKS_PER_YEAR * stores;
    let annual_transactions = annual_visitors * inputs.conversion_rate;
    let baseline_annual_revenue = annual_transactions * inputs.average_ticket_value;

    let conversion_new = inputs.conversion_rate * (1.0 + inputs.conversion_uplift);
    let ticket_new = inputs.average_ticket_value * (1.0 + inputs.price_uplift);

    let scenario_annual_revenue =
        split_transactions(annual_visitors, conversion_new, inputs) * ticket_new;

    let annual_uplift = (scenario_annual_revenue - baseline_annual_revenue).max(0.0);
    let monthly_uplift = annual_uplift / MONTHS_PER_YEAR;

    let capital_expense_total = inputs.capital_expense * stores;
    let monthly_subscription_total = inputs.monthly_subscription * stores;

    let monthly_extra_profit = monthly_uplift * inputs.gross_margin - monthly_subscription_total;
    let payback_months = if monthly_extra_profit > 0.0 {
        capital_expense_total / monthly_extra_profit
    } else {
        f64::INFINITY
    };

    let annual_subscription_total = monthly_subscription_total * MONTHS_PER_YEAR;
    let annual_roi_pct = ((annual_uplift * inputs.gross_margin
        - annual_subscription_total
        - capital_expense_total)
        / (capital_expense_total + annual_subscription_total).max(1.0))
    .max(-1.0);

    let attribution = attribution_split(
        inputs,
        annual_visitors,
        annual_transactions,
        baseline_annual_revenue,
        conversion_new,
        ticket_new,
    );

    RoiResult {
        annual_visitors,
        annual_transactions,
        baseline_annual_revenue,
        scenario_annual_revenue,
        annual_uplift,
        monthly_uplift,
        monthly_extra_profit,
        payback_months,
        annual_roi_pct,
        capital_expense_total,
        monthly_subscription_total,
        attribution,
    }
}
