//! Bridge between the single-threaded screen and async gateway calls.
//!
//! The screen pushes [`GatewayCommand`]s into a bounded channel without
//! blocking. The worker spawns one task per command and hands every
//! completion to a caller-supplied sink as a [`GatewayEvent`].

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::gateway::client::RecordGateway;
use crate::gateway::error::GatewayError;
use crate::model::VaccineRecord;

const COMMAND_BUFFER: usize = 16;

/// A backend call requested by the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCommand {
    /// Refetch the full list. `seq` identifies the request so late
    /// responses can be recognised as stale.
    FetchAll { seq: u64 },
    Create { record: VaccineRecord },
    Update { id: i64, record: VaccineRecord },
    Deactivate { id: i64 },
    Activate { id: i64 },
}

/// Completion of a [`GatewayCommand`].
#[derive(Debug)]
pub enum GatewayEvent {
    Listed {
        seq: u64,
        result: Result<Vec<VaccineRecord>, GatewayError>,
    },
    Created {
        result: Result<VaccineRecord, GatewayError>,
    },
    Updated {
        id: i64,
        result: Result<VaccineRecord, GatewayError>,
    },
    Deactivated {
        id: i64,
        result: Result<VaccineRecord, GatewayError>,
    },
    Activated {
        id: i64,
        result: Result<VaccineRecord, GatewayError>,
    },
}

pub type GatewayCommandSender = mpsc::Sender<GatewayCommand>;

pub struct GatewayWorker {
    gateway: Arc<RecordGateway>,
    receiver: mpsc::Receiver<GatewayCommand>,
}

impl GatewayWorker {
    /// Create the command channel and the worker draining it.
    pub fn channel(gateway: RecordGateway) -> (GatewayCommandSender, GatewayWorker) {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        (
            sender,
            GatewayWorker {
                gateway: Arc::new(gateway),
                receiver,
            },
        )
    }

    /// Run until every sender is dropped.
    ///
    /// Commands execute concurrently; completions reach `sink` in the order
    /// they finish, not the order they were sent.
    pub async fn run<F>(mut self, sink: F)
    where
        F: Fn(GatewayEvent) + Clone + Send + Sync + 'static,
    {
        while let Some(command) = self.receiver.recv().await {
            let gateway = Arc::clone(&self.gateway);
            let sink = sink.clone();
            tokio::spawn(async move {
                let event = execute(&gateway, command).await;
                sink(event);
            });
        }
        tracing::debug!("gateway worker stopped: command channel closed");
    }
}

/// Execute one command against the gateway.
pub async fn execute(gateway: &RecordGateway, command: GatewayCommand) -> GatewayEvent {
    match command {
        GatewayCommand::FetchAll { seq } => GatewayEvent::Listed {
            seq,
            result: gateway.fetch_all().await,
        },
        GatewayCommand::Create { record } => GatewayEvent::Created {
            result: gateway.create(&record).await,
        },
        GatewayCommand::Update { id, record } => GatewayEvent::Updated {
            id,
            result: gateway.update(id, &record).await,
        },
        GatewayCommand::Deactivate { id } => GatewayEvent::Deactivated {
            id,
            result: gateway.deactivate(id).await,
        },
        GatewayCommand::Activate { id } => GatewayEvent::Activated {
            id,
            result: gateway.activate(id).await,
        },
    }
}
