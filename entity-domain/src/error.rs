//! 领域层统一错误定义
//!
//! 聚焦标识生成/绑定、属性与状态守卫、仓储与事件投递等最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use std::fmt;
use thiserror::Error;

/// 统一错误类型（内核最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 标识生成 ---
    #[error("unsupported identity strategy: {strategy}")]
    UnsupportedStrategy { strategy: String },
    #[error("identity generation failed: {reason}")]
    GenerationFailed { reason: String },
    #[error("invalid identity format: input={input}, reason={reason}")]
    InvalidIdentityFormat { input: String, reason: String },
    #[error("foreign identity unavailable: {reason}")]
    ForeignIdentityUnavailable { reason: String },

    // --- 标识绑定 ---
    #[error("identity already assigned: {existing}")]
    IdentityAlreadyAssigned { existing: String },
    #[error("identity not yet assigned")]
    IdentityNotYetAssigned,

    // --- 领域规则/属性与状态 ---
    #[error("invalid argument: {constraint}")]
    InvalidArgument { constraint: String },
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 仓储/持久化 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("version conflict: expected={expected}, actual={actual}")]
    VersionConflict { expected: usize, actual: usize },

    // --- 事件接收器 ---
    #[error("event sink error: {reason}")]
    EventSink { reason: String },
    #[error("event handler error: handler={handler}, reason={reason}")]
    EventHandler { handler: String, reason: String },
    #[error("event delivery incomplete: {failures}")]
    EventDelivery { failures: DeliveryFailures },

    // --- 序列化/解析 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("parse error: {reason}")]
    Parse { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

/// 单个处理器的投递失败记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    pub handler: String,
    pub reason: String,
}

/// 一次发布中收集到的全部处理器失败（聚合错误，绝不静默吞掉）
#[derive(Debug, Clone, Default)]
pub struct DeliveryFailures(Vec<HandlerFailure>);

impl DeliveryFailures {
    pub fn new(failures: Vec<HandlerFailure>) -> Self {
        Self(failures)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HandlerFailure> {
        self.0.iter()
    }
}

impl fmt::Display for DeliveryFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for failure in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "handler={}, reason={}", failure.handler, failure.reason)?;
            first = false;
        }
        Ok(())
    }
}

// ---- Cross-crate conversions for boundary convenience ----
// 允许在边界实现中直接使用 `?` 将 uuid/std 解析等错误转换为 DomainError

impl From<uuid::Error> for DomainError {
    fn from(err: uuid::Error) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<std::num::ParseIntError> for DomainError {
    fn from(err: std::num::ParseIntError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<chrono::ParseError> for DomainError {
    fn from(err: chrono::ParseError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}
