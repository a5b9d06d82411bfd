use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use widget_logging::widget_warn;

use crate::backends::{
    BackendSettings, ChatBackend, HttpChatBackend, HttpJobSearchBackend, JobSearchBackend,
};
use crate::types::{DispatchId, DispatchOutcome, EngineEvent, Timestamp};

/// Clock injected into the engine so tests can pin delivery timestamps.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// Engine configuration: backend addresses plus the delivery cadence.
#[derive(Clone)]
pub struct EngineConfig {
    pub settings: BackendSettings,
    /// Simulated think-time before the first message of a batch.
    pub initial_delay: Duration,
    /// Stagger between subsequent messages of the same batch.
    pub per_message_delay: Duration,
    pub now: Clock,
}

impl EngineConfig {
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            settings,
            initial_delay: Duration::from_millis(1000),
            per_message_delay: Duration::from_millis(500),
            now: Arc::new(Utc::now),
        }
    }
}

enum EngineCommand {
    DispatchJobSearch {
        dispatch_id: DispatchId,
        query: String,
    },
    DispatchChat {
        dispatch_id: DispatchId,
        utterance: String,
    },
    Deliver {
        dispatch_id: DispatchId,
        bodies: Vec<String>,
    },
}

#[derive(Clone, Copy)]
struct DeliverySchedule {
    initial_delay: Duration,
    per_message_delay: Duration,
}

/// Handle to the engine thread. Commands are fire-and-forget; results come
/// back as [`EngineEvent`]s. Every dispatch and every delivery batch runs as
/// its own task, so concurrent batches interleave by their own schedules.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let chat: Arc<dyn ChatBackend> = Arc::new(HttpChatBackend::new(config.settings.clone()));
        let jobs: Arc<dyn JobSearchBackend> =
            Arc::new(HttpJobSearchBackend::new(config.settings.clone()));
        let schedule = DeliverySchedule {
            initial_delay: config.initial_delay,
            per_message_delay: config.per_message_delay,
        };
        let now = config.now;

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let chat = chat.clone();
                let jobs = jobs.clone();
                let now = now.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(chat, jobs, schedule, now, command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Routes one classified utterance to the job search backend.
    pub fn dispatch_job_search(&self, dispatch_id: DispatchId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::DispatchJobSearch {
            dispatch_id,
            query: query.into(),
        });
    }

    /// Routes one classified utterance to the chat backend.
    pub fn dispatch_chat(&self, dispatch_id: DispatchId, utterance: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::DispatchChat {
            dispatch_id,
            utterance: utterance.into(),
        });
    }

    /// Schedules a formatted batch for staggered delivery. Fire-and-forget;
    /// the caller observes progress through [`EngineEvent::Delivery`].
    pub fn deliver(&self, dispatch_id: DispatchId, bodies: Vec<String>) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::Deliver { dispatch_id, bodies });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    chat: Arc<dyn ChatBackend>,
    jobs: Arc<dyn JobSearchBackend>,
    schedule: DeliverySchedule,
    now: Clock,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::DispatchJobSearch { dispatch_id, query } => {
            let result = jobs.search(&query).await;
            if let Err(err) = &result {
                widget_warn!("job search dispatch {} failed: {}", dispatch_id, err);
            }
            let _ = event_tx.send(EngineEvent::DispatchResolved {
                dispatch_id,
                outcome: DispatchOutcome::JobSearch(result),
            });
        }
        EngineCommand::DispatchChat {
            dispatch_id,
            utterance,
        } => {
            let result = chat.send(&utterance).await;
            if let Err(err) = &result {
                widget_warn!("chat dispatch {} failed: {}", dispatch_id, err);
            }
            let _ = event_tx.send(EngineEvent::DispatchResolved {
                dispatch_id,
                outcome: DispatchOutcome::Chat(result),
            });
        }
        EngineCommand::Deliver { dispatch_id, bodies } => {
            // The formatter guarantees at least one body per batch; an empty
            // batch would leave the dispatch in flight forever.
            if bodies.is_empty() {
                widget_warn!("delivery batch {} arrived empty", dispatch_id);
                return;
            }
            tokio::time::sleep(schedule.initial_delay).await;
            let total = bodies.len();
            for (index, body) in bodies.into_iter().enumerate() {
                if index > 0 {
                    tokio::time::sleep(schedule.per_message_delay).await;
                }
                let _ = event_tx.send(EngineEvent::Delivery {
                    dispatch_id,
                    body,
                    timestamp: (now)(),
                    last: index + 1 == total,
                });
            }
        }
    }
}
