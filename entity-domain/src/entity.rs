//! 实体（Entity）基础抽象
//!
//! 实体的同一性由标识而非属性值决定：属性可变，标识在对象整个生命周期内
//! 稳定。标识通过 `IdentitySlot` 以组合方式持有，仓储分配策略下允许
//! "先构造、后绑定"，其余策略在构造时即已分配。
//!
use crate::error::DomainResult;
use crate::identity::{Identity, IdentitySlot};
use crate::value_object::Version;

/// 具备稳定标识与版本的实体抽象
///
/// 属性变更一律通过具名领域操作（而非通用 setter）完成：每个操作同步
/// 校验自身前置条件、应用变更，并返回它宣告的领域事件，由封闭操作转交
/// 显式注入的事件接收器。
pub trait Entity: Send + Sync {
    /// 实体标识类型
    type Id: Identity;

    /// 获取已分配的标识；仅仓储分配策略在首次持久化前返回
    /// `IdentityNotYetAssigned`
    fn identity(&self) -> DomainResult<&Self::Id>;

    /// 一次性标识绑定（仓储分配策略下由仓储在首次持久化时调用）；
    /// 重复调用返回 `IdentityAlreadyAssigned`
    fn bind_identity(&mut self, id: Self::Id) -> DomainResult<()>;

    /// 标识槽位的只读视图
    fn identity_slot(&self) -> &IdentitySlot<Self::Id>;

    /// 获取当前版本（用于乐观锁与并发控制）
    fn version(&self) -> Version;

    /// 推进版本（由仓储在成功保存后调用）
    fn advance_version(&mut self);

    /// 实体相等性：双方标识均已分配且相等时才相等；
    /// 未分配标识的实体不等于任何实例（包括它自身的另一引用）
    fn same_identity_as<E>(&self, other: &E) -> bool
    where
        E: Entity<Id = Self::Id>,
        Self: Sized,
    {
        self.identity_slot() == other.identity_slot()
    }
}
