use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::domain_event::{DomainEvent, EventContext, Metadata};
use crate::error::DomainResult;

/// 事件信封：发布时刻捕获的不可变载荷、元数据与业务上下文
///
/// 信封自带 `event_id`/`event_type`，载荷以 JSON 形式冻结，
/// 因此接收器与处理器无需泛型参数即可传递任意事件。
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    event_id: String,
    event_type: String,
    metadata: Metadata,
    payload: serde_json::Value,
    context: EventContext,
}

impl EventEnvelope {
    /// 封装一个类型化事件：序列化载荷并从注入的时间源取发生时间
    pub fn enclose<E: DomainEvent>(
        entity_id: &str,
        entity_type: &str,
        event: &E,
        context: EventContext,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        let metadata = Metadata::builder()
            .entity_id(entity_id.to_string())
            .entity_type(entity_type.to_string())
            .occurred_at(clock.now())
            .build();

        Ok(Self {
            event_id: event.event_id().to_string(),
            event_type: event.event_type().to_string(),
            metadata,
            payload: serde_json::to_value(event)?,
            context,
        })
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    pub fn context(&self) -> &EventContext {
        &self.context
    }

    /// 将冻结的 JSON 载荷还原为类型化事件
    pub fn payload_as<E: DomainEvent>(&self) -> DomainResult<E> {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum PingEvent {
        Pinged { id: String, count: u32 },
    }

    impl DomainEvent for PingEvent {
        fn event_id(&self) -> &str {
            match self {
                Self::Pinged { id, .. } => id,
            }
        }

        fn event_type(&self) -> &str {
            "PingEvent.Pinged"
        }
    }

    // 测试封装后载荷与元数据在发布时刻被冻结
    #[test]
    fn enclose_captures_payload_and_occurrence_time() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
        let clock = FixedClock::new(at);
        let event = PingEvent::Pinged {
            id: "evt-1".into(),
            count: 3,
        };

        let envelope = EventEnvelope::enclose(
            "ping-9",
            "ping",
            &event,
            EventContext::default(),
            &clock,
        )
        .unwrap();

        assert_eq!(envelope.event_id(), "evt-1");
        assert_eq!(envelope.event_type(), "PingEvent.Pinged");
        assert_eq!(envelope.metadata().entity_id(), "ping-9");
        assert_eq!(envelope.metadata().entity_type(), "ping");
        assert_eq!(*envelope.metadata().occurred_at(), at);

        let decoded: PingEvent = envelope.payload_as().unwrap();
        assert_eq!(decoded, event);
    }
}
