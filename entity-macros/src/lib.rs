//! entity-domain 配套过程宏
//!
//! - `#[identity]`：为单字段 tuple struct 形式的标识类型生成值对象样板；
//! - `#[entity(id = IdType)]`：注入标识槽位与版本字段并实现 `Entity`；
//! - `#[value_object]`：合并值对象所需的基础派生。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity;
mod identity;
mod value_object;

/// 标识宏
/// 用于为 `tuple struct` 形式的标识类型（例如 `struct PostId(Uuid);`、
/// `struct CountryCode(String);`）：
/// - 合并/追加派生：Default, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash
/// - 提供 new(value)、Display、FromStr、AsRef/From 等便捷实现
/// - 实现 `::entity_domain::identity::Identity` 标记
/// 仅支持单字段的 `tuple struct`。
#[proc_macro_attribute]
pub fn identity(attr: TokenStream, item: TokenStream) -> TokenStream {
    identity::expand(attr, item)
}

/// 实体宏
/// - 追加字段：`id: IdentitySlot<IdType>`, `version: Version`（若缺失）并置于字段最前
/// - 自动为目标结构体实现 `::entity_domain::entity::Entity` trait
///   （identity/bind_identity/identity_slot/version/advance_version）
/// - 必选参数：`#[entity(id = IdType)]`
/// 工厂与具名领域操作仍由调用方手写，以便守卫属性级前置条件。
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 值对象宏
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Default, Clone, (Debug 可控), Serialize, Deserialize, PartialEq, Eq
/// - 参数：`#[value_object(debug = true|false)]`，默认 true
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
