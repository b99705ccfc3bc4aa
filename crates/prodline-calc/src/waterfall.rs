//! 瀑布圖：營收 - 各項成本 = 利潤

use rust_decimal::Decimal;
use serde::Serialize;

use crate::LineResults;

/// 瀑布圖項目類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterfallMeasure {
    /// 相對增減
    Relative,
    /// 累計總額
    Total,
}

/// 瀑布圖項目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallEntry {
    pub label: &'static str,
    /// 帶正負號的數值（成本為負）
    pub value: Decimal,
    pub measure: WaterfallMeasure,
}

impl WaterfallEntry {
    fn relative(label: &'static str, value: Decimal) -> Self {
        Self {
            label,
            value,
            measure: WaterfallMeasure::Relative,
        }
    }
}

/// 瀑布圖計算器
pub struct WaterfallCalculator;

impl WaterfallCalculator {
    /// 依序：營收、購置、間接、不良、材料、利潤（總額）
    pub fn build(results: &LineResults) -> Vec<WaterfallEntry> {
        let mut entries = vec![
            WaterfallEntry::relative("Revenue", results.total_revenue),
            WaterfallEntry::relative("Capital Cost", -results.total_capital_cost),
            WaterfallEntry::relative("Overhead Cost", -results.total_overhead_cost),
            WaterfallEntry::relative("Fail Cost", -results.total_fail_cost),
            WaterfallEntry::relative("Material Cost", -results.total_material_cost),
        ];

        let total = entries
            .iter()
            .fold(Decimal::ZERO, |acc, entry| acc + entry.value);

        entries.push(WaterfallEntry {
            label: "Profit",
            value: total,
            measure: WaterfallMeasure::Total,
        });

        entries
    }
}
