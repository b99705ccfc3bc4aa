//! 運行期間的成本／利潤時間序列
//!
//! - 購置成本在開始時一次投入
//! - 間接成本隨 t / runtime 線性累計
//! - 材料、不良成本與營收在第一件走完前置時間後才開始，於剩餘時間內線性累計

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{profit_of, LineResults};

/// 某一時間點的累計值
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostProfitPoint {
    /// 時間（分鐘）
    pub minute: Decimal,
    pub revenue: Decimal,
    pub material_cost: Decimal,
    pub overhead_cost: Decimal,
    pub fail_cost: Decimal,
    pub capital_cost: Decimal,
    pub profit: Decimal,
}

/// 時間序列計算器
pub struct TimeSeriesCalculator;

impl TimeSeriesCalculator {
    /// 每分鐘一點，t = 0..=runtime
    ///
    /// 運行時間非整數時，最後再補一點於 t = runtime，序列終點永遠等於總結果
    pub fn project(results: &LineResults) -> Vec<CostProfitPoint> {
        let runtime = results.runtime();
        let whole_minutes = runtime.trunc().to_u64().unwrap_or_default();

        let mut minutes: Vec<Decimal> = (0..=whole_minutes).map(Decimal::from).collect();
        if runtime.fract() > Decimal::ZERO {
            minutes.push(runtime);
        }

        tracing::debug!(
            "時間序列：{} 點，前置時間 {} 分鐘",
            minutes.len(),
            results.lead_time
        );

        minutes
            .into_iter()
            .map(|minute| Self::point_at(results, minute))
            .collect()
    }

    /// 計算單一時間點
    pub fn point_at(results: &LineResults, minute: Decimal) -> CostProfitPoint {
        let runtime = results.runtime();
        let overhead_fraction = minute / runtime;
        let output_fraction = Self::output_fraction(minute, runtime, results.lead_time);

        let revenue = results.total_revenue * output_fraction;
        let material_cost = results.total_material_cost * output_fraction;
        let fail_cost = results.total_fail_cost * output_fraction;
        let overhead_cost = results.total_overhead_cost * overhead_fraction;
        let capital_cost = results.total_capital_cost;

        CostProfitPoint {
            minute,
            revenue,
            material_cost,
            overhead_cost,
            fail_cost,
            capital_cost,
            profit: profit_of(revenue, capital_cost, overhead_cost, fail_cost, material_cost),
        }
    }

    /// 產出相關項目的累計比例
    ///
    /// 前置時間不小於運行時間時，產線在運行內完成不了任何一件，恆為 0
    fn output_fraction(minute: Decimal, runtime: Decimal, lead_time: Decimal) -> Decimal {
        if lead_time >= runtime || minute < lead_time {
            Decimal::ZERO
        } else {
            (minute - lead_time) / (runtime - lead_time)
        }
    }
}
