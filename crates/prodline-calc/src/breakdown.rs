//! 各工序成本拆解與不良成本總覽

use rust_decimal::Decimal;
use serde::Serialize;

use crate::LineResults;

/// 單一工序的成本組成
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepCostBreakdown {
    pub step_name: String,
    /// 購置成本 = 每台成本 × 機台數量
    pub capital_cost: Decimal,
    pub overhead_cost: Decimal,
    pub fail_cost: Decimal,
}

impl StepCostBreakdown {
    pub fn total(&self) -> Decimal {
        self.capital_cost + self.overhead_cost + self.fail_cost
    }
}

/// 不良成本總覽的一列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefectCostRow {
    pub step_name: String,
    pub defect_rate_percent: Decimal,
    pub defect_unit_cost: Decimal,
    pub fail_cost: Decimal,
}

/// 不良成本總覽
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefectCostOverview {
    pub rows: Vec<DefectCostRow>,
    pub total_fail_cost: Decimal,
}

/// 成本拆解計算器
///
/// 不良成本直接取自計算結果中的逐站傳遞，不重新推算
pub struct BreakdownCalculator;

impl BreakdownCalculator {
    /// 每道工序的購置／間接／不良成本（依流程順序）
    pub fn per_step(results: &LineResults) -> Vec<StepCostBreakdown> {
        results
            .steps
            .iter()
            .map(|step| StepCostBreakdown {
                step_name: step.name().to_string(),
                capital_cost: step.capital_cost,
                overhead_cost: step.overhead_cost,
                fail_cost: step.fail_cost(),
            })
            .collect()
    }

    /// 不良成本總覽
    pub fn defect_overview(results: &LineResults) -> DefectCostOverview {
        let rows: Vec<DefectCostRow> = results
            .steps
            .iter()
            .map(|step| DefectCostRow {
                step_name: step.name().to_string(),
                defect_rate_percent: step.definition.defect_rate_percent,
                defect_unit_cost: step.definition.defect_unit_cost,
                fail_cost: step.fail_cost(),
            })
            .collect();

        DefectCostOverview {
            total_fail_cost: results.total_fail_cost,
            rows,
        }
    }
}
