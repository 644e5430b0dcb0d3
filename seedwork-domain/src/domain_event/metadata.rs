use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 事件元数据：标识、载荷版本、所属聚合与发生时间
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventMetadata {
    #[builder(into)]
    event_id: String,
    #[builder(into, default = String::from("1.0"))]
    event_version: String,
    #[builder(into)]
    aggregate_id: String,
    #[builder(into)]
    aggregate_type: String,
    #[builder(default = Utc::now())]
    occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn event_version(&self) -> &str {
        &self.event_version
    }

    pub fn aggregate_id(&self) -> &str {
        &self.aggregate_id
    }

    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_version_and_serializes_flat() {
        let metadata = EventMetadata::builder()
            .event_id("evt-1")
            .aggregate_id("ctr-1")
            .aggregate_type("counter")
            .occurred_at(DateTime::<Utc>::UNIX_EPOCH)
            .build();

        assert_eq!(metadata.event_version(), "1.0");
        assert_eq!(
            serde_json::to_value(&metadata).unwrap(),
            serde_json::json!({
                "event_id": "evt-1",
                "event_version": "1.0",
                "aggregate_id": "ctr-1",
                "aggregate_type": "counter",
                "occurred_at": "1970-01-01T00:00:00Z",
            })
        );
    }
}
