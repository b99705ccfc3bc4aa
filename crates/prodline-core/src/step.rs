//! 工序定義模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LineError, Result};

/// 單一工序的靜態描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// 工序名稱（同一製程內唯一，作為識別碼）
    pub name: String,

    /// 週期時間（每台機台每單位分鐘數）
    pub cycle_time: Decimal,

    /// 平行機台數量
    pub machine_count: u32,

    /// 每台機台購置成本
    pub capital_cost_per_machine: Decimal,

    /// 每台機台閒置成本率（每分鐘）
    pub idle_cost_rate_per_machine: Decimal,

    /// 不良率（百分比，0-100）
    ///
    /// 外部表示以百分比存放，計算前透過 [`StepDefinition::defect_rate`] 正規化
    pub defect_rate_percent: Decimal,

    /// 每個不良品的成本
    pub defect_unit_cost: Decimal,
}

impl StepDefinition {
    /// 創建新的工序（單機台、無成本、無不良）
    pub fn new(name: impl Into<String>, cycle_time: Decimal) -> Self {
        Self {
            name: name.into(),
            cycle_time,
            machine_count: 1,
            capital_cost_per_machine: Decimal::ZERO,
            idle_cost_rate_per_machine: Decimal::ZERO,
            defect_rate_percent: Decimal::ZERO,
            defect_unit_cost: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置機台數量
    pub fn with_machine_count(mut self, count: u32) -> Self {
        self.machine_count = count;
        self
    }

    /// 建構器模式：設置每台購置成本
    pub fn with_capital_cost(mut self, cost: Decimal) -> Self {
        self.capital_cost_per_machine = cost;
        self
    }

    /// 建構器模式：設置每台閒置成本率
    pub fn with_idle_cost_rate(mut self, rate: Decimal) -> Self {
        self.idle_cost_rate_per_machine = rate;
        self
    }

    /// 建構器模式：設置不良率（百分比）
    pub fn with_defect_rate_percent(mut self, percent: Decimal) -> Self {
        self.defect_rate_percent = percent;
        self
    }

    /// 建構器模式：設置每個不良品成本
    pub fn with_defect_unit_cost(mut self, cost: Decimal) -> Self {
        self.defect_unit_cost = cost;
        self
    }

    /// 正規化後的不良率（0-1）
    pub fn defect_rate(&self) -> Decimal {
        self.defect_rate_percent / Decimal::ONE_HUNDRED
    }

    /// 有效週期時間 = 週期時間 / 機台數量
    ///
    /// 呼叫前必須先通過 [`StepDefinition::validate`]
    pub fn effective_cycle_time(&self) -> Decimal {
        self.cycle_time / Decimal::from(self.machine_count)
    }

    /// 此工序的總購置成本
    pub fn capital_cost(&self) -> Decimal {
        self.capital_cost_per_machine * Decimal::from(self.machine_count)
    }

    /// 驗證工序參數
    pub fn validate(&self) -> Result<()> {
        if self.cycle_time <= Decimal::ZERO {
            return Err(LineError::invalid_step(&self.name, "週期時間必須大於 0"));
        }

        if self.machine_count < 1 {
            return Err(LineError::invalid_step(&self.name, "機台數量必須至少為 1"));
        }

        if self.defect_rate_percent < Decimal::ZERO
            || self.defect_rate_percent > Decimal::ONE_HUNDRED
        {
            return Err(LineError::invalid_step(
                &self.name,
                format!("不良率必須介於 0% 與 100% 之間（目前 {}%）", self.defect_rate_percent),
            ));
        }

        let costs = [
            ("購置成本", self.capital_cost_per_machine),
            ("閒置成本率", self.idle_cost_rate_per_machine),
            ("不良品成本", self.defect_unit_cost),
        ];
        if let Some((label, _)) = costs.iter().find(|(_, value)| *value < Decimal::ZERO) {
            return Err(LineError::invalid_step(&self.name, format!("{}不可為負數", label)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_create_step() {
        let step = StepDefinition::new("Cutting", Decimal::from(6));

        assert_eq!(step.name, "Cutting");
        assert_eq!(step.machine_count, 1);
        assert_eq!(step.defect_rate(), Decimal::ZERO);
        assert!(step.validate().is_ok());
    }

    #[test]
    fn test_step_builder() {
        let step = StepDefinition::new("Assembly", Decimal::from(10))
            .with_machine_count(4)
            .with_capital_cost(Decimal::from(200))
            .with_idle_cost_rate(Decimal::from(2))
            .with_defect_rate_percent(Decimal::from(3))
            .with_defect_unit_cost(Decimal::from(10));

        assert_eq!(step.machine_count, 4);
        assert_eq!(step.defect_rate(), Decimal::new(3, 2));
        assert_eq!(step.effective_cycle_time(), Decimal::new(25, 1));
        assert_eq!(step.capital_cost(), Decimal::from(800));
    }

    #[rstest]
    #[case(Decimal::ZERO, 1)]
    #[case(Decimal::from(-2), 1)]
    #[case(Decimal::from(5), 0)]
    fn test_invalid_cycle_or_machines(#[case] cycle_time: Decimal, #[case] machines: u32) {
        let step = StepDefinition::new("Bad", cycle_time).with_machine_count(machines);
        assert!(matches!(step.validate(), Err(LineError::InvalidStep { .. })));
    }

    #[rstest]
    #[case(Decimal::from(-1))]
    #[case(Decimal::new(1001, 1))]
    fn test_defect_rate_out_of_range(#[case] percent: Decimal) {
        let step = StepDefinition::new("Painting", Decimal::from(4)).with_defect_rate_percent(percent);
        assert!(step.validate().is_err());
    }

    #[test]
    fn test_defect_rate_bounds_are_inclusive() {
        let all_scrap = StepDefinition::new("Scrap", Decimal::ONE)
            .with_defect_rate_percent(Decimal::ONE_HUNDRED);
        assert!(all_scrap.validate().is_ok());
        assert_eq!(all_scrap.defect_rate(), Decimal::ONE);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let step = StepDefinition::new("Shipping", Decimal::from(3))
            .with_idle_cost_rate(Decimal::new(-15, 1));

        match step.validate() {
            Err(LineError::InvalidStep { reason, .. }) => assert!(reason.contains("閒置成本率")),
            other => panic!("expected InvalidStep, got {:?}", other),
        }
    }

    #[test]
    fn test_step_json_representation() {
        let step = StepDefinition::new("Inspection", Decimal::from(5))
            .with_defect_rate_percent(Decimal::from(12));

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["name"], "Inspection");
        assert_eq!(json["defect_rate_percent"], "12");

        let back: StepDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }
}
