//! 校验（Validation）框架
//!
//! 三个粒度，均为针对已构造对象的纯函数（绝不在校验中变更被校验对象）：
//! - 属性级：实体/标识的构造器与具名操作内联守卫，首个失败即止
//!   （`InvalidArgument`），不收集多条违规；
//! - 组合级：独立的 `Validator` 组件配合按聚合类型定义的处理器接口
//!   （每种违规一个方法，编译期检查），一趟收集全部关系级违规；
//! - 跨聚合级：以领域服务（`DomainService`）建模，经仓储取得协作聚合后
//!   执行组合校验，并通过事件接收器宣告校验结论。

mod result;
mod specification;
mod validator;

pub use result::{ValidationResult, Violation};
pub use specification::{AndSpecification, NotSpecification, OrSpecification, Specification};
pub use validator::Validator;
