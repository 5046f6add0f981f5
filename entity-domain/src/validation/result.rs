//! 校验结果（ValidationResult）
//!
//! 非中断式校验的违规收集容器：按记录顺序保存违规，空集合即合法。
//!
use std::ops::Deref;
use std::slice::Iter;
use std::vec::IntoIter;

/// 单条违规：机器可读的种类与面向人的消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    kind: String,
    message: String,
}

impl Violation {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 有序的违规集合；空集合表示被校验对象合法
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条违规（保持记录顺序）
    pub fn record(&mut self, kind: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(kind, message));
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Violation> {
        self.violations.iter()
    }
}

impl IntoIterator for ValidationResult {
    type Item = Violation;
    type IntoIter = IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Violation;
    type IntoIter = Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl Deref for ValidationResult {
    type Target = [Violation];

    fn deref(&self) -> &Self::Target {
        &self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试空结果表示合法
    #[test]
    fn empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }

    // 测试违规按记录顺序保存
    #[test]
    fn violations_keep_recording_order() {
        let mut result = ValidationResult::new();
        result.record("city_not_in_country", "city does not belong to country");
        result.record("invalid_postcode", "postcode does not match format");

        assert!(!result.is_valid());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].kind(), "city_not_in_country");
        assert_eq!(result[1].kind(), "invalid_postcode");
    }

    // 测试迭代接口
    #[test]
    fn iteration_yields_all_violations() {
        let mut result = ValidationResult::new();
        result.record("a", "first");
        result.record("b", "second");

        let kinds: Vec<&str> = result.iter().map(|v| v.kind()).collect();
        assert_eq!(kinds, vec!["a", "b"]);
    }
}
