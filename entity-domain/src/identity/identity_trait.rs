use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::error::DomainResult;

/// 标识值对象需要满足的通用能力边界
///
/// 标识构造后不可变，相等性完全由值决定（而非引用），
/// 因此要求 `Eq + Hash` 以便跨实例比较与作为键使用。
pub trait Identity:
    Clone + PartialEq + Eq + Hash + Debug + Display + FromStr + Send + Sync + 'static
{
}

/// 带文法校验的标识：面向调用方提供原始输入的场景
///
/// `parse` 是一个校验式构造器：结构或校验位不满足领域标识文法时
/// 返回 `InvalidIdentityFormat`，绝不产出部分构造的标识。
pub trait ValidatedIdentity: Identity {
    fn parse(raw: &str) -> DomainResult<Self>;
}
