//! 服务容器（Container）
//!
//! 总线只登记“请求类型 → 处理器标识”，在分发时才向容器解析处理器实例。
//! 容器返回类型擦除的实例，由总线负责校验其是否满足处理器契约。
//!
//! 处理器以 trait 对象形式登记：`Arc<dyn CommandHandler<C>>`、
//! `Arc<dyn QueryHandler<Q>>`、`Arc<dyn DomainEventHandler>`；
//! 以其它形式登记的实例在分发时报告 `AppError::InvalidHandler`。
//!
use crate::{
    command::Command, command_handler::CommandHandler, error::AppError,
    event_bus::DomainEventHandler, query::Query, query_handler::QueryHandler,
};
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// 类型擦除的容器实例
pub type Instance = Arc<dyn Any + Send + Sync>;

pub trait Container: Send + Sync {
    /// 按标识解析实例
    fn get(&self, id: &str) -> Result<Instance, AppError>;

    /// 是否已绑定该标识
    fn has(&self, id: &str) -> bool;
}

/// 从容器解析并还原为具体的处理器 trait 对象
pub(crate) fn resolve_handler<T>(
    container: &dyn Container,
    id: &str,
    kind: &'static str,
    name: &str,
) -> Result<T, AppError>
where
    T: Any + Clone,
{
    let instance = container.get(id)?;
    instance
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| AppError::InvalidHandler {
            kind,
            name: name.to_owned(),
        })
}

/// 基于内存的容器（测试与开发环境使用）
#[derive(Default)]
pub struct InMemoryContainer {
    entries: DashMap<String, Instance>,
}

impl InMemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 绑定任意实例（同一标识后绑定者覆盖先绑定者）
    pub fn bind<T>(&self, id: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        self.entries.insert(id.into(), Arc::new(value));
    }

    pub fn bind_command_handler<C, H>(&self, id: impl Into<String>, handler: Arc<H>)
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        self.bind(id, handler as Arc<dyn CommandHandler<C>>);
    }

    pub fn bind_query_handler<Q, H>(&self, id: impl Into<String>, handler: Arc<H>)
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        self.bind(id, handler as Arc<dyn QueryHandler<Q>>);
    }

    pub fn bind_event_handler<H>(&self, id: impl Into<String>, handler: Arc<H>)
    where
        H: DomainEventHandler + 'static,
    {
        self.bind(id, handler as Arc<dyn DomainEventHandler>);
    }

    /// 解除绑定，返回是否存在
    pub fn unbind(&self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }
}

impl Container for InMemoryContainer {
    fn get(&self, id: &str) -> Result<Instance, AppError> {
        self.entries
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::Resolve {
                id: id.to_owned(),
                reason: "no instance bound".into(),
            })
    }

    fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }
}
