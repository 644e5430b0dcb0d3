use crate::{
    container::{Container, resolve_handler},
    context::AppContext,
    error::AppError,
    query::Query,
    query_bus::QueryBus,
    query_handler::QueryHandler,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::Arc;

/// 基于容器的 QueryBus 实现
/// - 以查询的 TypeId 登记处理器标识（后登记者覆盖）
/// - 分发时解析处理器并校验其满足 `QueryHandler<Q>` 契约
pub struct ContainerQueryBus {
    container: Arc<dyn Container>,
    handlers: DashMap<TypeId, (&'static str, String)>,
}

impl ContainerQueryBus {
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self {
            container,
            handlers: DashMap::new(),
        }
    }

    /// 登记查询处理器标识
    pub fn register<Q>(&self, handler_id: impl Into<String>)
    where
        Q: Query,
    {
        let handler_id = handler_id.into();
        if let Some((_, previous)) = self
            .handlers
            .insert(TypeId::of::<Q>(), (Q::NAME, handler_id.clone()))
        {
            tracing::debug!(
                query = Q::NAME,
                %previous,
                handler = %handler_id,
                "query handler replaced"
            );
        }
    }

    /// 已登记的查询名列表（只读视图）
    pub fn registered_queries(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| e.value().0).collect()
    }
}

#[async_trait]
impl QueryBus for ContainerQueryBus {
    async fn ask<Q>(&self, ctx: &AppContext, q: Q) -> Result<Q::Dto, AppError>
    where
        Q: Query,
    {
        let Some(handler_id) = self
            .handlers
            .get(&TypeId::of::<Q>())
            .map(|e| e.value().1.clone())
        else {
            tracing::warn!(query = Q::NAME, "no query handler registered");
            return Err(AppError::HandlerNotFound {
                kind: "query",
                name: Q::NAME.to_owned(),
            });
        };

        let handler = resolve_handler::<Arc<dyn QueryHandler<Q>>>(
            self.container.as_ref(),
            &handler_id,
            "query",
            Q::NAME,
        )?;

        tracing::debug!(query = Q::NAME, handler = %handler_id, "dispatching query");
        handler.handle(ctx, q).await
    }
}
