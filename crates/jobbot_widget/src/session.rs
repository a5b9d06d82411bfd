use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use jobbot_core::{update, Msg, WidgetState, WidgetViewModel};
use jobbot_engine::{BackendSettings, EngineConfig};

use crate::effects::EffectRunner;

/// Host-facing configuration: the two backend addresses plus the delivery
/// cadence. Delays default to the stock typing simulation; the request
/// timeout defaults to none, matching the original behavior.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub chat_url: String,
    pub jobs_url: String,
    pub initial_delay: Duration,
    pub per_message_delay: Duration,
    pub request_timeout: Option<Duration>,
}

impl WidgetConfig {
    pub fn new(chat_url: impl Into<String>, jobs_url: impl Into<String>) -> Self {
        Self {
            chat_url: chat_url.into(),
            jobs_url: jobs_url.into(),
            initial_delay: Duration::from_millis(1000),
            per_message_delay: Duration::from_millis(500),
            request_timeout: None,
        }
    }
}

/// One embeddable widget session.
///
/// All methods are synchronous; backend calls and delivery timing run on the
/// engine's own thread. The host calls [`WidgetSession::process_pending`]
/// from its event loop to drain scheduled deliveries into the timeline, and
/// re-renders from [`WidgetSession::view`] when [`WidgetSession::take_dirty`]
/// reports a change.
pub struct WidgetSession {
    state: Option<WidgetState>,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl WidgetSession {
    pub fn new(config: WidgetConfig) -> anyhow::Result<Self> {
        url::Url::parse(&config.chat_url)
            .with_context(|| format!("invalid chat endpoint {}", config.chat_url))?;
        url::Url::parse(&config.jobs_url)
            .with_context(|| format!("invalid job search endpoint {}", config.jobs_url))?;

        let mut settings = BackendSettings::new(config.chat_url, config.jobs_url);
        settings.request_timeout = config.request_timeout;
        let mut engine_config = EngineConfig::new(settings);
        engine_config.initial_delay = config.initial_delay;
        engine_config.per_message_delay = config.per_message_delay;

        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(msg_tx, engine_config);

        Ok(Self {
            state: Some(WidgetState::new(Utc::now())),
            runner,
            msg_rx,
        })
    }

    /// User edited the composer.
    pub fn composer_changed(&mut self, text: impl Into<String>) {
        self.dispatch_msg(Msg::ComposerChanged(text.into()));
    }

    /// User submitted the composer contents. A no-op when the trimmed text
    /// is empty and no attachment is staged.
    pub fn submit(&mut self) {
        self.dispatch_msg(Msg::Submitted { at: Utc::now() });
    }

    /// User picked a file for the next message; the gate decides its fate.
    pub fn select_attachment(&mut self, file_name: impl Into<String>, media_type: impl Into<String>) {
        self.dispatch_msg(Msg::AttachmentSelected {
            file_name: file_name.into(),
            media_type: media_type.into(),
            at: Utc::now(),
        });
    }

    pub fn set_open(&mut self, open: bool) {
        self.dispatch_msg(Msg::OpenToggled { open });
    }

    pub fn drag_started(&mut self, x: f64, y: f64) {
        self.dispatch_msg(Msg::DragStarted { x, y });
    }

    pub fn drag_moved(&mut self, x: f64, y: f64) {
        self.dispatch_msg(Msg::DragMoved { x, y });
    }

    pub fn drag_ended(&mut self) {
        self.dispatch_msg(Msg::DragEnded);
    }

    /// Drains messages forwarded from the engine into the state machine.
    pub fn process_pending(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    pub fn view(&self) -> WidgetViewModel {
        self.state().view()
    }

    /// True when the view changed since the last call; hosts re-render then.
    pub fn take_dirty(&mut self) -> bool {
        self.state
            .as_mut()
            .expect("widget state present")
            .consume_dirty()
    }

    fn state(&self) -> &WidgetState {
        self.state.as_ref().expect("widget state present")
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = self.state.take().expect("widget state present");
        let (state, effects) = update(state, msg);
        self.state = Some(state);
        if !effects.is_empty() {
            self.runner.run(effects);
        }
    }
}
