use std::ops::Deref;
use std::slice::Iter;
use std::sync::Arc;

use super::domain_event_trait::DomainEvent;

/// 聚合内累积的事件集合，按记录顺序排列
///
/// 底层为共享的不可变切片：克隆只复制指针，任何持有者都无法修改聚合内部的事件日志。
/// 需要可变副本时使用 `to_vec()`。
#[derive(Clone, Debug)]
pub struct AggregateEvents {
    events: Arc<[Arc<dyn DomainEvent>]>,
}

impl AggregateEvents {
    pub fn new() -> Self {
        Self {
            events: Arc::from(Vec::new()),
        }
    }

    /// 追加一个新事件，返回新的集合（原集合保持不变）
    pub fn recorded<E: DomainEvent>(&self, event: E) -> Self {
        let next: Vec<Arc<dyn DomainEvent>> = self
            .events
            .iter()
            .cloned()
            .chain(std::iter::once(Arc::new(event) as Arc<dyn DomainEvent>))
            .collect();

        Self {
            events: Arc::from(next),
        }
    }

    /// 获取事件列表的不可变引用
    pub fn events(&self) -> &[Arc<dyn DomainEvent>] {
        &self.events
    }

    /// 事件标识列表（按记录顺序）
    pub fn ids(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.event_id()).collect()
    }

    /// 获取事件数量
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// 判断是否为空
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 迭代事件引用
    pub fn iter(&self) -> Iter<'_, Arc<dyn DomainEvent>> {
        self.events.iter()
    }
}

impl Default for AggregateEvents {
    fn default() -> Self {
        Self::new()
    }
}

// 事件以标识相等，集合相等即逐个标识相等
impl PartialEq for AggregateEvents {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.is_same_event(b.as_ref()))
    }
}

impl FromIterator<Arc<dyn DomainEvent>> for AggregateEvents {
    fn from_iter<I: IntoIterator<Item = Arc<dyn DomainEvent>>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AggregateEvents {
    type Item = &'a Arc<dyn DomainEvent>;
    type IntoIter = Iter<'a, Arc<dyn DomainEvent>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl Deref for AggregateEvents {
    type Target = [Arc<dyn DomainEvent>];

    fn deref(&self) -> &Self::Target {
        &self.events
    }
}
