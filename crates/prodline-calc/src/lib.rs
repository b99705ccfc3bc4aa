//! # Production Line Calculation Engine
//!
//! 瓶頸產能、成本累計與衍生分析

pub mod breakdown;
pub mod calculator;
pub mod flow;
pub mod propagation;
pub mod timeseries;
pub mod waterfall;

use prodline_core::{LineError, RunParameters, StepDefinition};
use rust_decimal::Decimal;
use serde::Serialize;

// Re-export 主要類型
pub use breakdown::{BreakdownCalculator, DefectCostOverview, DefectCostRow, StepCostBreakdown};
pub use calculator::{calculate_line_performance, LineCalculator};
pub use flow::{FlowEdge, FlowGraph, FlowGraphBuilder, FlowNode, FlowNodeKind, DEFAULT_FLOW_INPUT_UNITS};
pub use propagation::{DefectPropagation, PropagationOutcome, StepYield};
pub use timeseries::{CostProfitPoint, TimeSeriesCalculator};
pub use waterfall::{WaterfallCalculator, WaterfallEntry, WaterfallMeasure};

/// 產線績效計算結果（計算後不可變）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineResults {
    /// 本次運行參數
    pub params: RunParameters,

    /// 各工序明細（依流程順序）
    pub steps: Vec<StepPerformance>,

    /// 理想產能 T_ideal（瓶頸工序在運行時間內可投入的單位數）
    pub ideal_throughput: Decimal,

    /// 瓶頸工序索引（第一個達到最小產能的工序）
    pub bottleneck_index: usize,

    /// 前置時間（所有工序有效週期時間總和）
    pub lead_time: Decimal,

    /// 最終良品數量
    pub final_good_units: Decimal,

    pub total_capital_cost: Decimal,
    pub total_overhead_cost: Decimal,
    pub total_fail_cost: Decimal,
    pub total_material_cost: Decimal,
    pub total_revenue: Decimal,

    /// 利潤 = 營收 - (購置 + 間接 + 不良 + 材料)
    pub profit: Decimal,
}

impl LineResults {
    /// 運行時間（分鐘）
    pub fn runtime(&self) -> Decimal {
        self.params.runtime
    }

    /// 瓶頸工序
    pub fn bottleneck(&self) -> &StepPerformance {
        &self.steps[self.bottleneck_index]
    }

    /// 總成本
    pub fn total_cost(&self) -> Decimal {
        self.total_capital_cost + self.total_overhead_cost + self.total_fail_cost + self.total_material_cost
    }

    /// 整體良率（最終良品 / 投入）
    pub fn overall_yield(&self) -> Decimal {
        if self.ideal_throughput.is_zero() {
            Decimal::ZERO
        } else {
            self.final_good_units / self.ideal_throughput
        }
    }
}

/// 單一工序的計算明細
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepPerformance {
    /// 原始工序定義
    pub definition: StepDefinition,

    /// 有效週期時間 = 週期時間 / 機台數量
    pub effective_cycle_time: Decimal,

    /// 閒置時間（分鐘，不小於 0）
    pub idle_time: Decimal,

    /// 閒置造成的間接成本
    pub overhead_cost: Decimal,

    /// 購置成本 = 每台成本 × 機台數量
    pub capital_cost: Decimal,

    /// 不良傳遞結果
    pub flow: StepYield,
}

impl StepPerformance {
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// 此工序的不良成本
    pub fn fail_cost(&self) -> Decimal {
        self.flow.fail_cost
    }
}

/// 利潤：依固定順序逐項扣除成本
///
/// 計算器、時間序列與瀑布圖都經由此處，確保各處數值完全一致
pub(crate) fn profit_of(
    revenue: Decimal,
    capital: Decimal,
    overhead: Decimal,
    fail: Decimal,
    material: Decimal,
) -> Decimal {
    revenue - capital - overhead - fail - material
}

/// 溢位檢查乘法
pub(crate) fn checked_mul(a: Decimal, b: Decimal, what: &str) -> prodline_core::Result<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| LineError::Calculation(format!("{}溢位: {} × {}", what, a, b)))
}
