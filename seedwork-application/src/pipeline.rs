use crate::{
    command_bus::{CommandBus, NonTransactional},
    event_flush_command_bus::{DomainEventFlushCommandBus, FlushPolicy},
    transactional_command_bus::TransactionalCommandBus,
};
use bon::Builder;
use seedwork_domain::unit_of_work::UnitOfWork;
use std::sync::Arc;

/// 标准命令管道：事务（外）→ 事件冲刷（中）→ 实际分发（内）
///
/// ```rust,ignore
/// let bus = CommandPipeline::builder()
///     .inner(ContainerCommandBus::new(container))
///     .unit_of_work(uow)
///     .build()
///     .into_bus();
/// ```
#[derive(Builder)]
pub struct CommandPipeline<B> {
    inner: B,
    unit_of_work: Arc<dyn UnitOfWork>,
    #[builder(default)]
    flush_policy: FlushPolicy,
}

/// 管道组装后的总线类型
pub type PipelineBus<B> = TransactionalCommandBus<DomainEventFlushCommandBus<B>>;

impl<B> CommandPipeline<B>
where
    B: CommandBus + NonTransactional,
{
    pub fn into_bus(self) -> PipelineBus<B> {
        TransactionalCommandBus::new(
            DomainEventFlushCommandBus::with_policy(self.inner, self.flush_policy),
            self.unit_of_work,
        )
    }
}
