use crate::{command::Command, context::AppContext, error::AppError};
use async_trait::async_trait;
use std::sync::Arc;

/// 命令总线（Command Bus）
///
/// - 根据命令的具体类型路由到唯一的处理器；
/// - 装饰器（事务、事件冲刷）同样实现本 trait，可层层包裹；
/// - 该 trait 带有泛型方法，以具体实现类型注入使用。
#[async_trait]
pub trait CommandBus: Send + Sync {
    /// 分发命令到对应处理器
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>
    where
        C: Command;
}

/// 不开启事务的命令总线
///
/// 事件冲刷装饰器只能包裹实现了本标记的总线，
/// 保证冲刷始终发生在事务提交之前（事务在外，冲刷在内）。
pub trait NonTransactional: CommandBus {}

#[async_trait]
impl<B> CommandBus for Arc<B>
where
    B: CommandBus,
{
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>
    where
        C: Command,
    {
        (**self).dispatch(ctx, cmd).await
    }
}

impl<B> NonTransactional for Arc<B> where B: NonTransactional {}
