#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;
use xswap_core::Edge;

/// Captures emitted events so tests can assert on diagnostics.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<LoggedEvent>>>,
}

#[derive(Debug, Clone)]
pub struct LoggedEvent {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl EventLog {
    pub fn events(&self) -> Vec<LoggedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<LoggedEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.level == Level::WARN)
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for EventLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldCollector(&mut fields));
        self.events.lock().unwrap().push(LoggedEvent {
            level: *event.metadata().level(),
            fields,
        });
    }
}

struct FieldCollector<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldCollector<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_owned(), value.to_string());
    }
}

/// Circulant graph: node `k` points at `k + 1` and `k + 17`, modulo `nodes`.
pub fn circulant_edges(nodes: u32) -> Vec<Edge> {
    (0..nodes)
        .flat_map(|k| [Edge::new(k, (k + 1) % nodes), Edge::new(k, (k + 17) % nodes)])
        .collect()
}
