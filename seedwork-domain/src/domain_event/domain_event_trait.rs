use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;

/// 领域事件需要满足的通用能力边界
///
/// 事件创建后不可变；相等性仅由事件标识决定（用于重复投递去重）。
pub trait DomainEvent: fmt::Debug + Send + Sync + 'static {
    /// 事件唯一标识
    fn event_id(&self) -> &str;

    /// 事件类型（稳定的路由键，形如 `bank_account.money_deposited`）
    fn event_type(&self) -> &str;

    /// 事件载荷版本（用于结构演进）
    fn event_version(&self) -> &str;

    /// 可序列化的键值载荷（JSON 对象）
    fn payload(&self) -> serde_json::Value;

    /// 事件发生时间（UTC）
    fn occurred_at(&self) -> DateTime<Utc>;

    /// 类型擦除视图，供订阅方还原具体事件类型
    fn as_any(&self) -> &dyn Any;
}

impl dyn DomainEvent {
    /// 尝试还原为具体事件类型
    pub fn downcast_ref<E: DomainEvent>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }

    /// 基于标识的相等性
    pub fn is_same_event(&self, other: &dyn DomainEvent) -> bool {
        self.event_id() == other.event_id()
    }
}
