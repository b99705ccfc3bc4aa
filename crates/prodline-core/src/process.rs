//! 製程（有序工序列表）

use serde::{Deserialize, Serialize};

use crate::{default_steps, LineError, Result, StepDefinition};

/// 工序移動方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    /// 往前（流程較早）
    Up,
    /// 往後（流程較晚）
    Down,
}

/// 由呼叫端持有的有序工序列表
///
/// 順序即為物料流動順序。計算器每次呼叫時只讀取，不保留也不修改它。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessLine {
    steps: Vec<StepDefinition>,
}

impl ProcessLine {
    /// 創建空的製程
    pub fn new() -> Self {
        Self::default()
    }

    /// 以預設工序目錄建立製程
    pub fn with_default_catalog() -> Self {
        Self {
            steps: default_steps(),
        }
    }

    /// 從工序列表建立製程（工序名稱不可重複）
    pub fn from_steps(steps: Vec<StepDefinition>) -> Result<Self> {
        let mut line = Self::new();
        for step in steps {
            line.add_step(step)?;
        }
        Ok(line)
    }

    /// 從 JSON 陣列載入
    pub fn from_json(json: &str) -> Result<Self> {
        let steps: Vec<StepDefinition> = serde_json::from_str(json)?;
        Self::from_steps(steps)
    }

    /// 輸出為 JSON 陣列
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.steps)?)
    }

    /// 在流程末端添加工序
    pub fn add_step(&mut self, step: StepDefinition) -> Result<()> {
        if self.get(&step.name).is_some() {
            return Err(LineError::DuplicateStep(step.name));
        }
        self.steps.push(step);
        Ok(())
    }

    /// 移除指定名稱的工序，回傳實際移除的數量
    ///
    /// 不存在的名稱會被忽略
    pub fn remove_steps<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let before = self.steps.len();
        self.steps
            .retain(|step| !names.iter().any(|name| name.as_ref() == step.name));
        before - self.steps.len()
    }

    /// 將工序與相鄰工序交換位置
    ///
    /// 已在邊界（或索引超出範圍）時不做任何事，回傳是否有移動
    pub fn move_step(&mut self, index: usize, direction: MoveDirection) -> bool {
        match direction {
            MoveDirection::Up if index > 0 && index < self.steps.len() => {
                self.steps.swap(index, index - 1);
                true
            }
            MoveDirection::Down if index + 1 < self.steps.len() => {
                self.steps.swap(index, index + 1);
                true
            }
            _ => false,
        }
    }

    /// 依名稱查找工序
    pub fn get(&self, name: &str) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.name == name)
    }

    /// 依名稱取得可修改的工序
    pub fn get_mut(&mut self, name: &str) -> Result<&mut StepDefinition> {
        self.steps
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| LineError::StepNotFound(name.to_string()))
    }

    /// 依名稱取得工序在流程中的位置
    pub fn position(&self, name: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.name == name)
    }

    /// 所有工序名稱（依流程順序）
    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepDefinition> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<StepDefinition> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProcessLine {
    type Item = &'a StepDefinition;
    type IntoIter = std::slice::Iter<'a, StepDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn three_step_line() -> ProcessLine {
        ProcessLine::from_steps(vec![
            StepDefinition::new("A", Decimal::ONE),
            StepDefinition::new("B", Decimal::from(2)),
            StepDefinition::new("C", Decimal::from(3)),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_step() {
        let mut line = ProcessLine::new();
        line.add_step(StepDefinition::new("Folding", Decimal::from(5))).unwrap();

        assert_eq!(line.len(), 1);
        assert_eq!(line.names(), vec!["Folding"]);
    }

    #[test]
    fn test_add_duplicate_step_rejected() {
        let mut line = three_step_line();
        let result = line.add_step(StepDefinition::new("B", Decimal::from(9)));

        assert!(matches!(result, Err(LineError::DuplicateStep(name)) if name == "B"));
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn test_remove_steps() {
        let mut line = three_step_line();

        let removed = line.remove_steps(&["A", "C", "does-not-exist"]);

        assert_eq!(removed, 2);
        assert_eq!(line.names(), vec!["B"]);
    }

    #[rstest]
    #[case(1, MoveDirection::Up, true, vec!["B", "A", "C"])]
    #[case(1, MoveDirection::Down, true, vec!["A", "C", "B"])]
    #[case(0, MoveDirection::Up, false, vec!["A", "B", "C"])]
    #[case(2, MoveDirection::Down, false, vec!["A", "B", "C"])]
    #[case(7, MoveDirection::Up, false, vec!["A", "B", "C"])]
    fn test_move_step(
        #[case] index: usize,
        #[case] direction: MoveDirection,
        #[case] moved: bool,
        #[case] expected: Vec<&str>,
    ) {
        let mut line = three_step_line();
        assert_eq!(line.move_step(index, direction), moved);
        assert_eq!(line.names(), expected);
    }

    #[test]
    fn test_lookup() {
        let mut line = three_step_line();

        assert_eq!(line.position("C"), Some(2));
        assert!(line.get("Z").is_none());
        assert!(matches!(line.get_mut("Z"), Err(LineError::StepNotFound(_))));

        line.get_mut("B").unwrap().machine_count = 3;
        assert_eq!(line.get("B").unwrap().machine_count, 3);
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let line = ProcessLine::with_default_catalog();
        let json = line.to_json().unwrap();

        let loaded = ProcessLine::from_json(&json).unwrap();
        assert_eq!(loaded, line);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"[
            {"name": "X", "cycle_time": "1", "machine_count": 1, "capital_cost_per_machine": "0",
             "idle_cost_rate_per_machine": "0", "defect_rate_percent": "0", "defect_unit_cost": "0"},
            {"name": "X", "cycle_time": "2", "machine_count": 1, "capital_cost_per_machine": "0",
             "idle_cost_rate_per_machine": "0", "defect_rate_percent": "0", "defect_unit_cost": "0"}
        ]"#;

        assert!(matches!(ProcessLine::from_json(json), Err(LineError::DuplicateStep(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            ProcessLine::from_json("{not json"),
            Err(LineError::Serialization(_))
        ));
    }
}
