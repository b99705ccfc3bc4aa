//! 不良逐站傳遞
//!
//! 投入數量依流程順序經過每道工序：每站扣除不良品，不良品永久離線、不重工，
//! 良品流向下一站。計算器、成本拆解與物料流向圖共用此邏輯。

use prodline_core::StepDefinition;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::checked_mul;

/// 單站傳遞結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepYield {
    /// 進站數量
    pub units_in: Decimal,
    /// 不良數量 = 進站數量 × 不良率
    pub defective_units: Decimal,
    /// 不良成本 = 不良數量 × 單位不良成本
    pub fail_cost: Decimal,
    /// 出站良品數量
    pub good_units_out: Decimal,
}

/// 整條產線的傳遞結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropagationOutcome {
    pub per_step: Vec<StepYield>,
    pub total_fail_cost: Decimal,
    /// 最後一站的出站良品（空製程時等於投入數量）
    pub final_good_units: Decimal,
}

/// 不良傳遞計算器
pub struct DefectPropagation;

impl DefectPropagation {
    /// 從 `start_units` 開始依序傳遞
    pub fn run(start_units: Decimal, steps: &[StepDefinition]) -> prodline_core::Result<PropagationOutcome> {
        let mut per_step = Vec::with_capacity(steps.len());
        let mut units_in = start_units;
        let mut total_fail_cost = Decimal::ZERO;

        for step in steps {
            let defective_units = checked_mul(units_in, step.defect_rate(), "不良數量")?;
            let fail_cost = checked_mul(defective_units, step.defect_unit_cost, "不良成本")?;
            let good_units_out = units_in - defective_units;

            tracing::debug!(
                "不良傳遞 {}: 進站 {}, 不良 {}, 良品 {}",
                step.name,
                units_in,
                defective_units,
                good_units_out
            );

            total_fail_cost += fail_cost;
            per_step.push(StepYield {
                units_in,
                defective_units,
                fail_cost,
                good_units_out,
            });

            units_in = good_units_out;
        }

        Ok(PropagationOutcome {
            per_step,
            total_fail_cost,
            final_good_units: units_in,
        })
    }
}
