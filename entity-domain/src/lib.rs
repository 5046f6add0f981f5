//! 领域建模内核（entity-domain）
//!
//! 提供以实体标识与校验为中心的通用抽象与构件，用于在应用中实现：
//! - 标识值对象与四种标识生成策略（`identity`）
//! - 具备稳定标识的实体契约（`entity`）与值对象（`value_object`）
//! - 属性级 / 组合级 / 跨聚合三层校验（`validation`）
//! - 领域事件与事件接收器（`domain_event`、`eventing`）
//! - 仓储与外部上下文等边界协作者（`store`、`foreign`）
//!
//! 本 crate 尽量保持与存储与传输实现解耦，仅定义领域层接口与最小必要的错误类型，
//! 以便在不同基础设施（例如 Postgres、消息中间件等）上进行适配实现。
//!
//! 典型用法：
//! 1. 用 `#[identity]` 定义标识类型，向 `GeneratorRegistry` 注册所需的生成策略；
//! 2. 用 `#[entity]` 定义实体，在工厂与具名领域操作中守卫属性级不变量；
//! 3. 为聚合定义校验处理器接口并实现 `Validator`，收集关系级违规；
//! 4. 通过显式传入的 `EventSink` 发布状态变更事件，经 `Store` 持久化。
//!
pub mod clock;
pub mod domain_event;
pub mod domain_service;
pub mod entity;
pub mod error;
pub mod foreign;
pub mod identity;
pub mod store;
pub mod validation;
pub mod value_object;

#[cfg(feature = "eventing")]
pub mod eventing;

// 允许在本 crate 内部通过 ::entity_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::entity_domain 路径。
extern crate self as entity_domain;
