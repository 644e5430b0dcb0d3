//! 领域事件（Domain Event）与事件集合
//!
//! 定义事件需要实现的最小接口（`DomainEvent`）、通用的事件元数据（`EventMetadata`），
//! 以及聚合内累积事件的只读集合 `AggregateEvents`。

mod aggregate_events;
mod domain_event_trait;
mod metadata;

pub use aggregate_events::AggregateEvents;
pub use domain_event_trait::DomainEvent;
pub use metadata::EventMetadata;
