//! 聚合根（Aggregate Root）抽象
//!
//! 聚合根是一致性边界内唯一的修改入口：
//! - 状态迁移不修改原实例，而是返回携带新状态的新实例；
//! - 每次迁移记录的领域事件沿实例链向后传递（旧事件 ++ 新事件）；
//! - `collect_events` 返回只读视图，调用方无法借此修改聚合内部的事件日志。
//!
use crate::domain_event::AggregateEvents;
use crate::entity::Entity;

/// 聚合根接口
pub trait AggregateRoot: Entity + Clone + Send + Sync + 'static {
    /// 聚合类型名（用于事件元数据与诊断）
    const TYPE: &'static str;

    /// 当前实例累积的全部领域事件（不清空聚合）
    fn collect_events(&self) -> AggregateEvents;

    /// 返回事件日志为空的副本，相当于从存储重新加载的状态
    fn without_events(&self) -> Self;
}
