use crate::{command::Command, command_bus::CommandBus, context::AppContext, error::AppError};
use async_trait::async_trait;
use seedwork_domain::unit_of_work::UnitOfWork;
use std::sync::Arc;

/// 事务装饰器
///
/// `create_session` → 内层分发 → `commit`。
/// - 打开会话失败：错误直接返回，不分发也不回滚；
/// - 分发或提交失败：执行一次 `rollback`，再返回原错误；
/// - 回滚自身失败只记录日志，不覆盖原错误。
///
/// 本类型不实现 `NonTransactional`，因此不能被事件冲刷装饰器包裹。
pub struct TransactionalCommandBus<B> {
    inner: B,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl<B> TransactionalCommandBus<B>
where
    B: CommandBus,
{
    pub fn new(inner: B, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        Self {
            inner,
            unit_of_work,
        }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

#[async_trait]
impl<B> CommandBus for TransactionalCommandBus<B>
where
    B: CommandBus,
{
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>
    where
        C: Command,
    {
        self.unit_of_work.create_session().await?;

        let outcome = match self.inner.dispatch(ctx, cmd).await {
            Ok(()) => self.unit_of_work.commit().await.map_err(AppError::from),
            Err(err) => Err(err),
        };

        if let Err(err) = outcome {
            tracing::warn!(command = C::NAME, error = %err, "rolling back unit of work");
            if let Err(rollback_err) = self.unit_of_work.rollback().await {
                tracing::error!(command = C::NAME, error = %rollback_err, "rollback failed");
            }
            return Err(err);
        }

        tracing::debug!(command = C::NAME, "unit of work committed");
        Ok(())
    }
}
