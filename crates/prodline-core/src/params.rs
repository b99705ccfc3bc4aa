//! 運行參數配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LineError, Result};

/// 一次產線運行的參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    /// 運行時間（分鐘）
    pub runtime: Decimal,

    /// 成品單位售價
    pub sale_price_per_unit: Decimal,

    /// 每單位材料成本（按投入數量計）
    pub material_cost_per_unit: Decimal,
}

impl RunParameters {
    /// 創建新的運行參數
    pub fn new(runtime: Decimal, sale_price_per_unit: Decimal, material_cost_per_unit: Decimal) -> Self {
        Self {
            runtime,
            sale_price_per_unit,
            material_cost_per_unit,
        }
    }

    /// 建構器模式：設置運行時間
    pub fn with_runtime(mut self, runtime: Decimal) -> Self {
        self.runtime = runtime;
        self
    }

    /// 建構器模式：設置售價
    pub fn with_sale_price(mut self, price: Decimal) -> Self {
        self.sale_price_per_unit = price;
        self
    }

    /// 建構器模式：設置材料成本
    pub fn with_material_cost(mut self, cost: Decimal) -> Self {
        self.material_cost_per_unit = cost;
        self
    }

    /// 驗證運行參數
    pub fn validate(&self) -> Result<()> {
        if self.runtime <= Decimal::ZERO {
            return Err(LineError::InvalidParameter(format!(
                "運行時間必須大於 0（目前 {}）",
                self.runtime
            )));
        }

        if self.sale_price_per_unit < Decimal::ZERO {
            return Err(LineError::InvalidParameter("售價不可為負數".to_string()));
        }

        if self.material_cost_per_unit < Decimal::ZERO {
            return Err(LineError::InvalidParameter("材料成本不可為負數".to_string()));
        }

        Ok(())
    }
}

impl Default for RunParameters {
    /// 一個班次 480 分鐘，售價 300，材料成本 25
    fn default() -> Self {
        Self::new(Decimal::from(480), Decimal::from(300), Decimal::from(25))
    }
}
