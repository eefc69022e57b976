// src/services/recommendations.rs
use serde::Serialize;

use crate::models::{InputParameters, RoiResult};

const SATURDAY_SHARE_THRESHOLD: f64 = 0.12;
const FAST_PAYBACK_MONTHS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    RaiseTicketOrConversion,
    FocusConversion,
    ActivateUpsell,
    SaturdayEngine,
    FastPayback,
    AdjustCosts,
    Experiment,
}

impl RecommendationKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::RaiseTicketOrConversion => "Increase ATV (bundles, checkout add-ons) or conversion at entry; current inputs do not yield a positive ROI.",
            Self::FocusConversion => "Focus on conversion during peak hours (greet & lead, extra front-of-store staffing, queue trimming).",
            Self::ActivateUpsell => "Activate upsell/cross-sell routines (bundles, accessories); coach teams on average ticket value.",
            Self::SaturdayEngine => "Make Saturday your profit engine: hourly micro-promos, fast checkout, hero products at the entrance.",
            Self::FastPayback => "Headliner: payback < 12 months. Decision-makers react fast to this.",
            Self::AdjustCosts => "Adjust costs or margins: renegotiate subscription or focus on higher-margin categories.",
            Self::Experiment => "Stable performance. Try micro-experiments: 2 weeks with 1 upsell script + staff roster tuned to peaks.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

impl From<RecommendationKind> for Recommendation {
    fn from(kind: RecommendationKind) -> Self {
        Recommendation {
            kind,
            message: kind.message().to_string(),
        }
    }
}

fn kinds(inputs: &InputParameters, result: &RoiResult) -> Vec<RecommendationKind> {
    use RecommendationKind::*;

    if result.annual_uplift <= 0.0 {
        return vec![RaiseTicketOrConversion];
    }

    let mut kinds = Vec::new();
    if inputs.conversion_uplift > inputs.price_uplift {
        kinds.push(FocusConversion);
    }
    if inputs.price_uplift >= inputs.conversion_uplift {
        kinds.push(ActivateUpsell);
    }
    if inputs.saturday_conversion_boost > 0.0
        && inputs.saturday_revenue_share > SATURDAY_SHARE_THRESHOLD
    {
        kinds.push(SaturdayEngine);
    }
    if result.payback().is_some_and(|months| months < FAST_PAYBACK_MONTHS) {
        kinds.push(FastPayback);
    }
    if result.monthly_extra_profit <= 0.0 {
        kinds.push(AdjustCosts);
    }
    if kinds.is_empty() {
        kinds.push(Experiment);
    }
    kinds
}

/// Guidance for one computed snapshot, in display order. Never empty.
pub fn recommend(inputs: &InputParameters, result: &RoiResult) -> Vec<Recommendation> {
    kinds(inputs, result).into_iter().map(Recommendation::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calculations::compute;
    use crate::services::presets::PresetCatalog;
    use super::RecommendationKind::*;

    fn kinds_for(inputs: &InputParameters) -> Vec<RecommendationKind> {
        recommend(inputs, &compute(inputs))
            .into_iter()
            .map(|r| r.kind)
            .collect()
    }

    fn fashion() -> InputParameters {
        PresetCatalog::builtin().default_inputs(1)
    }

    #[test]
    fn fashion_preset_gets_upsell_saturday_and_payback() {
        assert_eq!(kinds_for(&fashion()), vec![ActivateUpsell, SaturdayEngine, FastPayback]);
    }

    #[test]
    fn no_uplift_short_circuits() {
        let mut inputs = fashion();
        inputs.conversion_uplift = 0.0;
        inputs.price_uplift = 0.0;
        inputs.saturday_conversion_boost = 0.0;
        let recs = recommend(&inputs, &compute(&inputs));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RaiseTicketOrConversion);
        assert!(recs[0].message.contains("positive ROI"));
    }

    #[test]
    fn conversion_lever_above_price_lever() {
        let mut inputs = fashion();
        inputs.conversion_uplift = 0.10;
        inputs.saturday_revenue_share = 0.10;
        assert_eq!(kinds_for(&inputs), vec![FocusConversion, FastPayback]);
    }

    #[test]
    fn unprofitable_uplift_asks_for_cost_changes() {
        let mut inputs = fashion();
        inputs.visitors_per_day = 5.0;
        inputs.monthly_subscription = 500.0;
        inputs.saturday_conversion_boost = 0.0;
        assert_eq!(kinds_for(&inputs), vec![ActivateUpsell, AdjustCosts]);
    }

    #[test]
    fn slow_payback_is_not_a_headline() {
        let mut inputs = fashion();
        inputs.visitors_per_day = 20.0;
        inputs.capital_expense = 100_000.0;
        inputs.monthly_subscription = 0.0;
        let result = compute(&inputs);
        assert!(result.payback_months > 12.0);
        assert!(!kinds_for(&inputs).contains(&FastPayback));
    }
}
