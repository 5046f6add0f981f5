//! 标识槽位（IdentitySlot）
//!
//! 以组合方式承载"标识尚未分配"这一生命周期状态：仓储分配策略下，
//! 实体在首次持久化前持有 `Unassigned` 哨兵，由仓储通过一次性的
//! `bind` 完成绑定。其余策略在构造时即为 `Assigned`。
//!
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::identity::Identity;

/// 标识槽位：未分配哨兵或已分配的标识值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum IdentitySlot<I> {
    Unassigned,
    Assigned(I),
}

impl<I> Default for IdentitySlot<I> {
    fn default() -> Self {
        Self::Unassigned
    }
}

impl<I: Identity> IdentitySlot<I> {
    /// 未分配哨兵（仓储分配策略的生成结果）
    pub fn unassigned() -> Self {
        Self::Unassigned
    }

    /// 以已知标识构造（应用分配 / 调用方提供 / 外部分配策略）
    pub fn assigned(id: I) -> Self {
        Self::Assigned(id)
    }

    /// 一次性绑定：重复绑定属于编码缺陷，直接以错误暴露
    pub fn bind(&mut self, id: I) -> DomainResult<()> {
        match self {
            Self::Unassigned => {
                *self = Self::Assigned(id);
                Ok(())
            }
            Self::Assigned(existing) => Err(DomainError::IdentityAlreadyAssigned {
                existing: existing.to_string(),
            }),
        }
    }

    /// 获取已分配的标识；未分配时返回 `IdentityNotYetAssigned`
    pub fn get(&self) -> DomainResult<&I> {
        match self {
            Self::Assigned(id) => Ok(id),
            Self::Unassigned => Err(DomainError::IdentityNotYetAssigned),
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }
}

// 相等性：仅当双方都已分配且标识值相等时相等。
// 未分配槽位与任何槽位（包括它自身）都不相等，避免持久化前的假阳性，
// 因此有意不实现 `Eq`（不满足自反性）。
impl<I: Identity> PartialEq for IdentitySlot<I> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Assigned(a), Self::Assigned(b)) => a == b,
            _ => false,
        }
    }
}

impl<I: Identity> fmt::Display for IdentitySlot<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned(id) => write!(f, "{id}"),
            Self::Unassigned => write!(f, "(unassigned)"),
        }
    }
}
