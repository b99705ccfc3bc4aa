//! 產線計算的性質測試

use prodline_calc::{
    calculate_line_performance, FlowGraphBuilder, TimeSeriesCalculator, WaterfallCalculator,
    WaterfallMeasure,
};
use prodline_core::StepDefinition;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// 乘積捨入容許誤差
fn tolerance() -> Decimal {
    Decimal::new(1, 18)
}

fn step_strategy() -> impl Strategy<Value = StepDefinition> {
    (
        1i64..=1000,  // 週期時間（0.1 分鐘）
        1u32..=10,    // 機台
        0i64..=10000, // 購置成本
        0i64..=500,   // 閒置成本率（0.01）
        0i64..=1000,  // 不良率（0.1%）
        0i64..=100,   // 不良品成本
    )
        .prop_map(|(cycle, machines, capital, idle, defect, unit_cost)| {
            StepDefinition::new("step", Decimal::new(cycle, 1))
                .with_machine_count(machines)
                .with_capital_cost(Decimal::from(capital))
                .with_idle_cost_rate(Decimal::new(idle, 2))
                .with_defect_rate_percent(Decimal::new(defect, 1))
                .with_defect_unit_cost(Decimal::from(unit_cost))
        })
}

fn line_strategy() -> impl Strategy<Value = (Vec<StepDefinition>, Decimal, Decimal, Decimal)> {
    (
        prop::collection::vec(step_strategy(), 1..8),
        1i64..=10000,
        0i64..=1000,
        0i64..=100,
    )
        .prop_map(|(steps, runtime, price, material)| {
            (
                steps,
                Decimal::from(runtime),
                Decimal::from(price),
                Decimal::from(material),
            )
        })
}

proptest! {
    #[test]
    fn bottleneck_caps_every_step((steps, runtime, price, material) in line_strategy()) {
        let results = calculate_line_performance(&steps, runtime, price, material).unwrap();

        for step in &results.steps {
            let busy = results.ideal_throughput * step.effective_cycle_time;
            prop_assert!(busy <= runtime + tolerance());
            prop_assert!(step.idle_time >= Decimal::ZERO);
        }
        let bottleneck = results.bottleneck();
        prop_assert_eq!(bottleneck.idle_time, Decimal::ZERO);
        prop_assert!((results.ideal_throughput * bottleneck.effective_cycle_time - runtime).abs() <= tolerance());
    }

    #[test]
    fn defects_never_add_units((steps, runtime, price, material) in line_strategy()) {
        let results = calculate_line_performance(&steps, runtime, price, material).unwrap();

        prop_assert!(results.final_good_units <= results.ideal_throughput);
        prop_assert!(results.final_good_units >= Decimal::ZERO);
    }

    #[test]
    fn waterfall_total_equals_relative_sum((steps, runtime, price, material) in line_strategy()) {
        let results = calculate_line_performance(&steps, runtime, price, material).unwrap();
        let entries = WaterfallCalculator::build(&results);

        let relative_sum = entries
            .iter()
            .filter(|e| e.measure == WaterfallMeasure::Relative)
            .fold(Decimal::ZERO, |acc, e| acc + e.value);
        let total = entries.last().unwrap();

        prop_assert_eq!(total.measure, WaterfallMeasure::Total);
        prop_assert_eq!(total.value, relative_sum);
        prop_assert_eq!(total.value, results.profit);
    }

    #[test]
    fn series_end_matches_profit((steps, runtime, price, material) in line_strategy()) {
        let results = calculate_line_performance(&steps, runtime, price, material).unwrap();
        prop_assume!(results.lead_time < runtime);

        let end = TimeSeriesCalculator::point_at(&results, runtime);
        prop_assert_eq!(end.profit, results.profit);
    }

    #[test]
    fn calculation_is_idempotent((steps, runtime, price, material) in line_strategy()) {
        let first = calculate_line_performance(&steps, runtime, price, material).unwrap();
        let second = calculate_line_performance(&steps, runtime, price, material).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn flow_graph_conserves_units(steps in prop::collection::vec(step_strategy(), 1..8)) {
        let graph = FlowGraphBuilder::build_default(&steps).unwrap();

        prop_assert_eq!(graph.edges.len(), steps.len() * 2 - 1);
        prop_assert!((graph.final_output + graph.total_defects() - graph.input_units).abs() <= tolerance());
    }
}
