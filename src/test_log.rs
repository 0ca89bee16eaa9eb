//! Collects `tracing` events emitted while a closure runs.

use std::{fmt, sync::{Arc, Mutex}};

use tracing::{field::{Field, Visit}, Event, Level, Subscriber};
use tracing_subscriber::{layer::{Context, Layer, SubscriberExt}, Registry};

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

struct FieldRecorder<'a>(&'a mut Vec<(String, String)>);

impl Visit for FieldRecorder<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_owned(), format!("{value:?}")));
    }
}

#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<CapturedEvent>>>);

impl<S: Subscriber> Layer<S> for EventLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Vec::new();
        event.record(&mut FieldRecorder(&mut fields));

        self.0.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields,
        });
    }
}

pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let log = EventLog::default();
    let subscriber = Registry::default().with(log.clone());
    let res = tracing::subscriber::with_default(subscriber, f);

    let events = log.0.lock().unwrap().clone();
    (res, events)
}
