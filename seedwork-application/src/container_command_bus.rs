use crate::{
    command::Command,
    command_bus::{CommandBus, NonTransactional},
    command_handler::CommandHandler,
    container::{Container, resolve_handler},
    context::AppContext,
    error::AppError,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::Arc;

/// 基于容器的 CommandBus 实现
/// - 以命令的 TypeId 登记处理器标识（同一命令重复登记时后者覆盖）
/// - 分发时才向容器解析处理器，并校验其满足 `CommandHandler<C>` 契约
pub struct ContainerCommandBus {
    container: Arc<dyn Container>,
    handlers: DashMap<TypeId, (&'static str, String)>,
}

impl ContainerCommandBus {
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self {
            container,
            handlers: DashMap::new(),
        }
    }

    /// 登记命令处理器标识
    pub fn register<C>(&self, handler_id: impl Into<String>)
    where
        C: Command,
    {
        let handler_id = handler_id.into();
        if let Some((_, previous)) = self
            .handlers
            .insert(TypeId::of::<C>(), (C::NAME, handler_id.clone()))
        {
            tracing::debug!(
                command = C::NAME,
                %previous,
                handler = %handler_id,
                "command handler replaced"
            );
        }
    }

    /// 已登记的命令名列表（只读视图）
    pub fn registered_commands(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| e.value().0).collect()
    }
}

#[async_trait]
impl CommandBus for ContainerCommandBus {
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>
    where
        C: Command,
    {
        let Some(handler_id) = self
            .handlers
            .get(&TypeId::of::<C>())
            .map(|e| e.value().1.clone())
        else {
            tracing::warn!(command = C::NAME, "no command handler registered");
            return Err(AppError::HandlerNotFound {
                kind: "command",
                name: C::NAME.to_owned(),
            });
        };

        let handler = resolve_handler::<Arc<dyn CommandHandler<C>>>(
            self.container.as_ref(),
            &handler_id,
            "command",
            C::NAME,
        )?;

        tracing::debug!(command = C::NAME, handler = %handler_id, "dispatching command");
        handler.handle(ctx, cmd).await
    }
}

impl NonTransactional for ContainerCommandBus {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::InMemoryContainer;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Ping {
        n: u32,
    }

    impl Command for Ping {
        const NAME: &'static str = "Ping";
    }

    struct Pong;

    impl Command for Pong {
        const NAME: &'static str = "Pong";
    }

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<Ping>>,
    }

    #[async_trait]
    impl CommandHandler<Ping> for Recording {
        async fn handle(&self, _ctx: &AppContext, cmd: Ping) -> Result<(), AppError> {
            self.seen.lock().unwrap().push(cmd);
            Ok(())
        }
    }

    fn bus_with(container: Arc<InMemoryContainer>) -> ContainerCommandBus {
        ContainerCommandBus::new(container)
    }

    #[tokio::test]
    async fn dispatch_invokes_registered_handler_once() {
        let container = Arc::new(InMemoryContainer::new());
        let handler = Arc::new(Recording::default());
        container.bind_command_handler::<Ping, _>("ping.handler", handler.clone());

        let bus = bus_with(container);
        bus.register::<Ping>("ping.handler");
        bus.dispatch(&AppContext::default(), Ping { n: 7 }).await.unwrap();

        assert_eq!(*handler.seen.lock().unwrap(), vec![Ping { n: 7 }]);
        assert_eq!(bus.registered_commands(), vec!["Ping"]);
    }

    #[tokio::test]
    async fn unregistered_command_is_a_configuration_error() {
        let bus = bus_with(Arc::new(InMemoryContainer::new()));
        let err = bus.dispatch(&AppContext::default(), Pong).await.unwrap_err();

        assert!(err.is_configuration());
        assert_eq!(err.to_string(), "no handler registered for command Pong");
    }

    #[tokio::test]
    async fn unbound_handler_id_fails_to_resolve() {
        let bus = bus_with(Arc::new(InMemoryContainer::new()));
        bus.register::<Ping>("missing");

        let err = bus
            .dispatch(&AppContext::default(), Ping { n: 1 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Resolve { ref id, .. } if id == "missing"));
    }

    #[tokio::test]
    async fn object_without_handler_contract_is_rejected() {
        let container = Arc::new(InMemoryContainer::new());
        container.bind("ping.handler", String::from("not a handler"));
        let bus = bus_with(container);
        bus.register::<Ping>("ping.handler");

        let err = bus
            .dispatch(&AppContext::default(), Ping { n: 1 })
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "handler for command Ping is not a valid handler"
        );
    }

    #[tokio::test]
    async fn later_registration_wins() {
        let container = Arc::new(InMemoryContainer::new());
        let first = Arc::new(Recording::default());
        let second = Arc::new(Recording::default());
        container.bind_command_handler::<Ping, _>("first", first.clone());
        container.bind_command_handler::<Ping, _>("second", second.clone());

        let bus = bus_with(container);
        bus.register::<Ping>("first");
        bus.register::<Ping>("second");
        bus.dispatch(&AppContext::default(), Ping { n: 2 }).await.unwrap();

        assert!(first.seen.lock().unwrap().is_empty());
        assert_eq!(second.seen.lock().unwrap().len(), 1);
        assert_eq!(bus.registered_commands().len(), 1);
    }
}
