//! 預設工序目錄（紙飛機產線）

use rust_decimal::Decimal;

use crate::StepDefinition;

/// 預設的六道工序
pub fn default_steps() -> Vec<StepDefinition> {
    vec![
        step("Material intake", Decimal::new(30, 1), 50, Decimal::new(10, 2), Decimal::new(30, 1), 2),
        step("Cutting", Decimal::new(60, 1), 100, Decimal::new(120, 2), Decimal::new(20, 1), 5),
        step("Assembly", Decimal::new(100, 1), 200, Decimal::from(2), Decimal::new(30, 1), 10),
        step("Painting", Decimal::new(40, 1), 800, Decimal::from(4), Decimal::new(45, 1), 15),
        step("Quality inspection", Decimal::new(50, 1), 120, Decimal::new(225, 2), Decimal::new(120, 1), 25),
        step("Shipping", Decimal::new(30, 1), 70, Decimal::new(15, 1), Decimal::new(5, 1), 2),
    ]
}

fn step(
    name: &str,
    cycle_time: Decimal,
    capital_cost: i64,
    idle_cost_rate: Decimal,
    defect_rate_percent: Decimal,
    defect_unit_cost: i64,
) -> StepDefinition {
    StepDefinition::new(name, cycle_time)
        .with_capital_cost(Decimal::from(capital_cost))
        .with_idle_cost_rate(idle_cost_rate)
        .with_defect_rate_percent(defect_rate_percent)
        .with_defect_unit_cost(Decimal::from(defect_unit_cost))
}
