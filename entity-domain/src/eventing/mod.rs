//! 事件接收器（Event Sink）
//!
//! 进程内、随生命周期作用域显式传递的发布/订阅通道：
//! - `publish` 同步地（返回前）按注册顺序调用所有匹配的处理器；
//! - 单个处理器失败不阻断后续投递，失败被收集后作为聚合错误上报；
//! - 订阅注册表是唯一的共享可变资源，由互斥锁串行化注册与投递。

mod handler;
mod sink;
mod sink_inmemory;

pub use handler::{EventHandler, HandledEventType};
pub use sink::{EventSink, SubscriptionToken};
pub use sink_inmemory::InMemoryEventSink;
