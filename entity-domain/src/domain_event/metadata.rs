use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 事件元数据：来源实体与发生时间
#[derive(Builder, Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    entity_id: String,
    entity_type: String,
    occurred_at: DateTime<Utc>,
}

impl Metadata {
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }
}
