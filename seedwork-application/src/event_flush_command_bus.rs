use crate::{
    command::Command,
    command_bus::{CommandBus, NonTransactional},
    context::AppContext,
    error::AppError,
};
use async_trait::async_trait;

/// 命令失败时对已缓冲事件的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlushPolicy {
    /// 丢弃失败命令发布的事件（默认）
    #[default]
    DiscardOnFailure,
    /// 保留在缓冲中，随下一次成功的冲刷一并投递
    RetainOnFailure,
}

/// 事件冲刷装饰器
///
/// 委托内层总线分发命令；仅在成功后对 `ctx.events()` 执行 `flush`。
/// 失败时不冲刷，错误原样返回。只能包裹 [`NonTransactional`] 总线。
pub struct DomainEventFlushCommandBus<B> {
    inner: B,
    policy: FlushPolicy,
}

impl<B> DomainEventFlushCommandBus<B>
where
    B: CommandBus + NonTransactional,
{
    pub fn new(inner: B) -> Self {
        Self::with_policy(inner, FlushPolicy::default())
    }

    pub fn with_policy(inner: B, policy: FlushPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> FlushPolicy {
        self.policy
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

#[async_trait]
impl<B> CommandBus for DomainEventFlushCommandBus<B>
where
    B: CommandBus + NonTransactional,
{
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>
    where
        C: Command,
    {
        let events = ctx.events()?;

        match self.inner.dispatch(ctx, cmd).await {
            Ok(()) => events.flush().await,
            Err(err) => {
                if self.policy == FlushPolicy::DiscardOnFailure {
                    let dropped = events.discard();
                    if dropped > 0 {
                        tracing::debug!(
                            command = C::NAME,
                            events = dropped,
                            "command failed, events discarded"
                        );
                    }
                }
                Err(err)
            }
        }
    }
}

impl<B> NonTransactional for DomainEventFlushCommandBus<B> where B: CommandBus + NonTransactional {}
