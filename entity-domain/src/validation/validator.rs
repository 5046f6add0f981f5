//! 组合校验协议（Validator）
//!
//! 校验器接收一个完整构造的聚合（属性层面可能自洽、关系层面仍可能非法，
//! 例如城市不属于声明的国家）与一个校验处理器协作者：每条被违反的关系
//! 规则恰好触发一次处理器方法调用，而非抛出错误，从而允许一趟收集多条
//! 违规。处理器接口按聚合类型定义（每种违规一个方法），调用点保持
//! 编译期检查，而非字符串键的通用回调。
//!

/// 组合校验器：对 `Subject` 运行关系级规则，把违规报告给 `Handler`
///
/// 约束：校验过程不得变更被校验对象；处理器调用顺序与规则检查顺序一致。
pub trait Validator: Send + Sync {
    /// 被校验的聚合类型
    type Subject;
    /// 按聚合类型定义的校验处理器接口
    type Handler: ?Sized;

    fn validate(&self, subject: &Self::Subject, handler: &mut Self::Handler);
}
