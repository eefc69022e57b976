// src/services/dashboard.rs
use serde::Serialize;

use crate::models::{InputParameters, RoiResult};
use crate::services::format::{format_currency, format_months, format_percent, Locale};

const FAST_PAYBACK_MONTHS: f64 = 12.0;

pub const COLOR_PURPLE: &str = "#762181";
pub const COLOR_RED: &str = "#F04438";
pub const COLOR_AMBER: &str = "#F59E0B";

/// The page variants differ only in these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresentationConfig {
    pub locale: Locale,
    pub expo: bool,
    pub multi_store: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Eu,
            expo: true,
            multi_store: true,
        }
    }
}

impl PresentationConfig {
    pub fn bar_chart_height(&self) -> u32 {
        if self.expo {
            420
        } else {
            360
        }
    }

    pub fn donut_chart_height(&self) -> u32 {
        self.bar_chart_height() - 40
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiCard {
    pub title: String,
    pub value: f64,
    pub display: String,
    pub subtitle: String,
    pub highlight: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub display: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonutSlice {
    pub label: String,
    pub share: f64,
    pub uplift: f64,
    pub display: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChart {
    pub category: String,
    pub height: u32,
    pub series: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonutChart {
    pub height: u32,
    pub slices: Vec<DonutSlice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub cards: Vec<KpiCard>,
    pub bar_chart: BarChart,
    pub donut_chart: DonutChart,
}

fn scope(config: &PresentationConfig) -> &'static str {
    if config.multi_store {
        " (chain)"
    } else {
        ""
    }
}

fn cards(inputs: &InputParameters, result: &RoiResult, config: &PresentationConfig) -> Vec<KpiCard> {
    let locale = config.locale;
    let eur = |x: f64| format_currency(x, 0, locale);
    let stores = if config.multi_store {
        format!("× {} stores", inputs.store_count)
    } else {
        "per store".to_string()
    };

    vec![
        KpiCard {
            title: format!("Baseline revenue/year{}", scope(config)),
            value: result.baseline_annual_revenue,
            display: eur(result.baseline_annual_revenue),
            subtitle: stores,
            highlight: false,
        },
        KpiCard {
            title: "Uplift (year)".to_string(),
            value: result.annual_uplift,
            display: eur(result.annual_uplift),
            subtitle: format!("≈ {} / month", eur(result.monthly_uplift)),
            highlight: false,
        },
        KpiCard {
            title: "Extra profit/month".to_string(),
            value: result.monthly_extra_profit,
            display: eur(result.monthly_extra_profit),
            subtitle: format!("Margin {}", format_percent(inputs.gross_margin, 1, locale)),
            highlight: false,
        },
        KpiCard {
            title: format!("Payback time{}", scope(config)),
            value: result.payback_months,
            display: format_months(result.payback_months, locale),
            subtitle: format!("ROI-year {}", format_percent(result.annual_roi_pct, 1, locale)),
            highlight: result.payback().is_some_and(|m| m < FAST_PAYBACK_MONTHS),
        },
    ]
}

/// Builds the cards and chart series for one computed snapshot. Raw values
/// travel next to their formatted labels.
pub fn build(inputs: &InputParameters, result: &RoiResult, config: &PresentationConfig) -> Dashboard {
    let locale = config.locale;
    let split = &result.attribution;

    let bar_chart = BarChart {
        category: format!("Revenue/year{}", scope(config)),
        height: config.bar_chart_height(),
        series: vec![
            ChartPoint {
                label: "Baseline".to_string(),
                value: result.baseline_annual_revenue,
                display: format_currency(result.baseline_annual_revenue, 0, locale),
                color: COLOR_AMBER,
            },
            ChartPoint {
                label: "New (scenario)".to_string(),
                value: result.scenario_annual_revenue,
                display: format_currency(result.scenario_annual_revenue, 0, locale),
                color: COLOR_PURPLE,
            },
        ],
    };

    let donut_chart = DonutChart {
        height: config.donut_chart_height(),
        slices: vec![
            DonutSlice {
                label: "Conversion".to_string(),
                share: split.conversion_share,
                uplift: split.conversion_attributed_uplift,
                display: format_currency(split.conversion_attributed_uplift, 0, locale),
                color: COLOR_RED,
            },
            DonutSlice {
                label: "SPV".to_string(),
                share: split.price_share,
                uplift: split.price_attributed_uplift,
                display: format_currency(split.price_attributed_uplift, 0, locale),
                color: COLOR_PURPLE,
            },
        ],
    };

    Dashboard {
        cards: cards(inputs, result, config),
        bar_chart,
        donut_chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calculations::compute;
    use crate::services::presets::PresetCatalog;

    #[test]
    fn fashion_chain_dashboard() {
        let inputs = PresetCatalog::builtin().default_inputs(1);
        let result = compute(&inputs);
        let dashboard = build(&inputs, &result, &PresentationConfig::default());

        assert_eq!(dashboard.cards.len(), 4);
        assert_eq!(dashboard.cards[0].title, "Baseline revenue/year (chain)");
        assert_eq!(dashboard.cards[0].display, "€2.620.800");
        assert_eq!(dashboard.cards[0].subtitle, "× 1 stores");
        assert_eq!(dashboard.cards[2].subtitle, "Margin 60,0%");
        assert!(dashboard.cards[3].highlight);
        assert_eq!(dashboard.cards[3].display, "0,1 mo");

        assert_eq!(dashboard.bar_chart.height, 420);
        assert_eq!(dashboard.bar_chart.series[1].display, "€2.941.442");
        assert_eq!(dashboard.donut_chart.height, 380);
        assert_eq!(dashboard.donut_chart.slices[1].display, "€131.040");
    }

    #[test]
    fn single_store_english_without_payback() {
        let mut inputs = PresetCatalog::builtin().default_inputs(1);
        inputs.conversion_uplift = 0.0;
        inputs.price_uplift = 0.0;
        inputs.saturday_conversion_boost = 0.0;
        let result = compute(&inputs);
        let config = PresentationConfig {
            locale: Locale::En,
            expo: false,
            multi_store: false,
        };

        let dashboard = build(&inputs, &result, &config);

        assert_eq!(dashboard.cards[0].title, "Baseline revenue/year");
        assert_eq!(dashboard.cards[0].subtitle, "per store");
        assert_eq!(dashboard.cards[3].display, "n/a");
        assert!(!dashboard.cards[3].highlight);
        assert_eq!(dashboard.bar_chart.height, 360);
        assert_eq!(dashboard.donut_chart.slices[0].share, 0.5);
    }
}
