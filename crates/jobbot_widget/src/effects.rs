use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use jobbot_core::{format_outcome, AdapterFailure, Effect, Msg};
use jobbot_engine::{AdapterErrorKind, EngineConfig, EngineEvent, EngineHandle};
use widget_logging::widget_info;

/// Executes core effects against the engine and forwards engine events back
/// into the core as messages.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(msg_tx: mpsc::Sender<Msg>, config: EngineConfig) -> Self {
        let engine = EngineHandle::new(config);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::DispatchJobSearch { dispatch_id, query } => {
                    widget_info!(
                        "DispatchJobSearch dispatch_id={} query_len={}",
                        dispatch_id,
                        query.len()
                    );
                    self.engine.dispatch_job_search(dispatch_id, query);
                }
                Effect::DispatchChat {
                    dispatch_id,
                    utterance,
                    attachment,
                } => {
                    widget_info!(
                        "DispatchChat dispatch_id={} utterance_len={} attachment={}",
                        dispatch_id,
                        utterance.len(),
                        attachment.is_some()
                    );
                    self.engine.dispatch_chat(dispatch_id, utterance);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::DispatchResolved {
                        dispatch_id,
                        outcome,
                    } => {
                        let outcome = normalize_outcome(outcome);
                        let bodies = format_outcome(&outcome);
                        engine.deliver(dispatch_id, bodies);
                    }
                    EngineEvent::Delivery {
                        dispatch_id,
                        body,
                        timestamp,
                        last,
                    } => {
                        let delivered = Msg::BotDelivered {
                            dispatch_id,
                            body,
                            at: timestamp,
                            last,
                        };
                        if msg_tx.send(delivered).is_err() {
                            // Session dropped; nothing left to deliver to.
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn normalize_outcome(outcome: jobbot_engine::DispatchOutcome) -> jobbot_core::DispatchOutcome {
    match outcome {
        jobbot_engine::DispatchOutcome::JobSearch(result) => jobbot_core::DispatchOutcome::JobSearch(
            result
                .map(|records| records.into_iter().map(normalize_record).collect())
                .map_err(normalize_failure),
        ),
        jobbot_engine::DispatchOutcome::Chat(result) => jobbot_core::DispatchOutcome::Chat(
            result
                .map(|reply| jobbot_core::ChatReply { reply: reply.reply })
                .map_err(normalize_failure),
        ),
    }
}

fn normalize_failure(err: jobbot_engine::AdapterError) -> AdapterFailure {
    match err.kind {
        AdapterErrorKind::Unreachable => AdapterFailure::Unreachable,
        AdapterErrorKind::MalformedResponse => AdapterFailure::MalformedResponse,
    }
}

fn normalize_record(record: jobbot_engine::JobRecord) -> jobbot_core::JobRecord {
    jobbot_core::JobRecord {
        title: record.title,
        company: record.company,
        location: record.location,
        job_type: record.job_type,
        salary: record.salary,
        posted: record.posted,
        skills_required: record.skills_required,
        experience_required: record.experience_required,
        company_website: record.company_website,
        apply_link: record.apply_link,
        hr_email: record.hr_email,
        hr_contact: record.hr_contact,
    }
}
