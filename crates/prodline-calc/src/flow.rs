//! 物料流向與不良分析圖
//!
//! 以正規化的投入量（預設 100 單位）展示物料逐站流動。每道工序：
//! - 一條邊流向下一道工序（最後一道沒有）
//! - 一條邊流向自己的不良匯點
//!
//! 不良匯點為終端節點。此圖與 T_ideal／運行時間無關，僅供示意。

use prodline_core::{validate_steps, LineError, StepDefinition};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::propagation::DefectPropagation;

/// 預設正規化投入量
pub const DEFAULT_FLOW_INPUT_UNITS: Decimal = Decimal::ONE_HUNDRED;

/// 節點類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowNodeKind {
    Step,
    DefectSink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub label: String,
    pub kind: FlowNodeKind,
}

/// 有向帶權邊（以節點索引表示）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowEdge {
    pub source: usize,
    pub target: usize,
    pub value: Decimal,
}

/// 物料流向圖
///
/// 節點排列：先是 n 道工序（索引 0..n），接著依序為各工序的不良匯點（索引 n..2n）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    pub input_units: Decimal,
    /// 最後一道工序流出的良品
    pub final_output: Decimal,
}

impl FlowGraph {
    /// 工序數量
    pub fn step_count(&self) -> usize {
        self.nodes.len() / 2
    }

    /// 某工序對應的不良匯點索引
    pub fn sink_of(&self, step_index: usize) -> Option<usize> {
        (step_index < self.step_count()).then(|| self.step_count() + step_index)
    }

    /// 從某節點流出的邊
    pub fn outgoing(&self, node: usize) -> impl Iterator<Item = &FlowEdge> + '_ {
        self.edges.iter().filter(move |edge| edge.source == node)
    }

    /// 所有不良匯點收到的總量
    pub fn total_defects(&self) -> Decimal {
        self.edges
            .iter()
            .filter(|edge| self.nodes[edge.target].kind == FlowNodeKind::DefectSink)
            .map(|edge| edge.value)
            .sum()
    }
}

/// 物料流向圖建構器
pub struct FlowGraphBuilder;

impl FlowGraphBuilder {
    /// 以預設 100 單位建構
    pub fn build_default(steps: &[StepDefinition]) -> prodline_core::Result<FlowGraph> {
        Self::build(steps, DEFAULT_FLOW_INPUT_UNITS)
    }

    /// 以指定投入量建構
    pub fn build(steps: &[StepDefinition], input_units: Decimal) -> prodline_core::Result<FlowGraph> {
        validate_steps(steps)?;
        if input_units < Decimal::ZERO {
            return Err(LineError::InvalidParameter(format!(
                "流向圖投入量不可為負數（目前 {}）",
                input_units
            )));
        }

        let propagation = DefectPropagation::run(input_units, steps)?;
        let step_count = steps.len();

        let mut nodes: Vec<FlowNode> = steps
            .iter()
            .map(|step| FlowNode {
                label: step.name.clone(),
                kind: FlowNodeKind::Step,
            })
            .collect();
        nodes.extend(steps.iter().map(|step| FlowNode {
            label: format!("Defect_{}", step.name),
            kind: FlowNodeKind::DefectSink,
        }));

        let mut edges = Vec::with_capacity(step_count * 2);
        for (index, flow) in propagation.per_step.iter().enumerate() {
            if index + 1 < step_count {
                edges.push(FlowEdge {
                    source: index,
                    target: index + 1,
                    value: flow.good_units_out,
                });
            }
            edges.push(FlowEdge {
                source: index,
                target: step_count + index,
                value: flow.defective_units,
            });
        }

        tracing::debug!(
            "流向圖：{} 節點，{} 邊，最終產出 {}",
            nodes.len(),
            edges.len(),
            propagation.final_good_units
        );

        Ok(FlowGraph {
            nodes,
            edges,
            input_units,
            final_output: propagation.final_good_units,
        })
    }
}
