//! 產線績效主計算器

use prodline_core::{validate_steps, LineError, RunParameters, StepDefinition};
use rust_decimal::Decimal;

use crate::propagation::DefectPropagation;
use crate::{checked_mul, profit_of, LineResults, StepPerformance};

/// 產線績效計算器
///
/// 不保留任何跨呼叫狀態：每次 [`LineCalculator::calculate`] 都從頭計算
pub struct LineCalculator {
    /// 運行參數
    params: RunParameters,
}

impl LineCalculator {
    /// 創建新的計算器
    pub fn new(params: RunParameters) -> Self {
        Self { params }
    }

    /// 主計算入口
    pub fn calculate(&self, steps: &[StepDefinition]) -> prodline_core::Result<LineResults> {
        tracing::info!(
            "開始產線計算：工序 {} 道，運行時間 {} 分鐘",
            steps.len(),
            self.params.runtime
        );

        // Step 0: 輸入驗證（任何錯誤都不回傳部分結果）
        validate_steps(steps)?;
        self.params.validate()?;

        let runtime = self.params.runtime;

        // Step 1: 有效週期時間與各站產能
        tracing::debug!("Step 1: 有效週期時間");
        let effective_cycle_times: Vec<Decimal> =
            steps.iter().map(StepDefinition::effective_cycle_time).collect();
        let capacities = effective_cycle_times
            .iter()
            .zip(steps)
            .map(|(ect, step)| {
                runtime.checked_div(*ect).ok_or_else(|| {
                    LineError::Calculation(format!("工序 {} 產能溢位", step.name))
                })
            })
            .collect::<prodline_core::Result<Vec<Decimal>>>()?;

        // Step 2: 瓶頸決定理想產能
        tracing::debug!("Step 2: 瓶頸分析");
        let (bottleneck_index, ideal_throughput) = Self::find_bottleneck(&capacities);
        tracing::debug!(
            "瓶頸工序: {} (T_ideal = {})",
            steps[bottleneck_index].name,
            ideal_throughput
        );

        // Step 3: 閒置時間與間接成本
        tracing::debug!("Step 3: 閒置時間與間接成本");
        let mut idle_and_overhead = Vec::with_capacity(steps.len());
        for ((step, ect), capacity) in steps.iter().zip(&effective_cycle_times).zip(&capacities) {
            // 與瓶頸同速的工序沒有閒置
            let idle_time = if *capacity == ideal_throughput {
                Decimal::ZERO
            } else {
                (runtime - checked_mul(ideal_throughput, *ect, "使用時間")?).max(Decimal::ZERO)
            };
            let overhead_cost = checked_mul(
                checked_mul(idle_time, step.idle_cost_rate_per_machine, "間接成本")?,
                Decimal::from(step.machine_count),
                "間接成本",
            )?;
            idle_and_overhead.push((idle_time, overhead_cost));
        }

        // Step 4: 不良逐站傳遞
        tracing::debug!("Step 4: 不良傳遞");
        let propagation = DefectPropagation::run(ideal_throughput, steps)?;

        // Step 5: 彙總
        tracing::debug!("Step 5: 成本彙總");
        let step_results: Vec<StepPerformance> = steps
            .iter()
            .zip(effective_cycle_times)
            .zip(idle_and_overhead)
            .zip(propagation.per_step)
            .map(|(((step, effective_cycle_time), (idle_time, overhead_cost)), flow)| {
                StepPerformance {
                    definition: step.clone(),
                    effective_cycle_time,
                    idle_time,
                    overhead_cost,
                    capital_cost: step.capital_cost(),
                    flow,
                }
            })
            .collect();

        let total_capital_cost: Decimal = step_results.iter().map(|s| s.capital_cost).sum();
        let total_overhead_cost: Decimal = step_results.iter().map(|s| s.overhead_cost).sum();
        let lead_time: Decimal = step_results.iter().map(|s| s.effective_cycle_time).sum();
        let total_fail_cost = propagation.total_fail_cost;
        let final_good_units = propagation.final_good_units;

        // 材料按投入數量計價（含報廢品耗用的材料）
        let total_material_cost =
            checked_mul(ideal_throughput, self.params.material_cost_per_unit, "材料成本")?;
        let total_revenue = checked_mul(final_good_units, self.params.sale_price_per_unit, "營收")?;
        let profit = profit_of(
            total_revenue,
            total_capital_cost,
            total_overhead_cost,
            total_fail_cost,
            total_material_cost,
        );

        let results = LineResults {
            params: self.params,
            steps: step_results,
            ideal_throughput,
            bottleneck_index,
            lead_time,
            final_good_units,
            total_capital_cost,
            total_overhead_cost,
            total_fail_cost,
            total_material_cost,
            total_revenue,
            profit,
        };

        tracing::info!(
            "產線計算完成：良品 {}，利潤 {}",
            results.final_good_units,
            results.profit
        );

        Ok(results)
    }

    /// 找出產能最小的工序（並列時取流程中最早者）
    fn find_bottleneck(capacities: &[Decimal]) -> (usize, Decimal) {
        capacities
            .iter()
            .copied()
            .enumerate()
            .fold((0, capacities[0]), |best, (index, capacity)| {
                if capacity < best.1 {
                    (index, capacity)
                } else {
                    best
                }
            })
    }

    /// 獲取運行參數
    pub fn params(&self) -> &RunParameters {
        &self.params
    }
}

/// 以純量參數計算產線績效
pub fn calculate_line_performance(
    steps: &[StepDefinition],
    runtime: Decimal,
    sale_price_per_unit: Decimal,
    material_cost_per_unit: Decimal,
) -> prodline_core::Result<LineResults> {
    LineCalculator::new(RunParameters::new(runtime, sale_price_per_unit, material_cost_per_unit))
        .calculate(steps)
}
