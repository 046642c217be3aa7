#![forbid(unsafe_code)]

//! Structured log events emitted by the editor and its history.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

use revbuf::{Editor, HistoryConfig};

// Tracing capture infrastructure
#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    target: String,
    fields: HashMap<String, String>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct CaptureHandle {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn with_target(&self, target: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.target == target)
            .collect()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for EventCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured_tracing<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { events }
}

fn message(event: &CapturedEvent) -> &str {
    event.fields.get("message").map_or("", String::as_str)
}

// =====================================================================
// Editor events
// =====================================================================

#[test]
fn each_edit_emits_one_trace_event() {
    let handle = with_captured_tracing(|| {
        let mut editor = Editor::from_text("Hello");
        editor.insert(5, ", World").unwrap();
        editor.replace(1, 4, "ipp").unwrap();
        editor.reverse();
    });

    let recorded: Vec<_> = handle
        .with_target("revbuf.editor")
        .into_iter()
        .filter(|e| message(e) == "edit recorded")
        .collect();
    assert_eq!(recorded.len(), 3);
    assert!(recorded.iter().all(|e| e.level == tracing::Level::TRACE));

    let insert = &recorded[0];
    assert_eq!(insert.fields.get("kind").map(String::as_str), Some("Insert text"));
    assert_eq!(insert.fields.get("start").map(String::as_str), Some("5"));
    assert_eq!(insert.fields.get("inserted").map(String::as_str), Some("7"));
    assert_eq!(insert.fields.get("depth").map(String::as_str), Some("1"));

    assert_eq!(recorded[2].fields.get("kind").map(String::as_str), Some("Reverse"));
}

#[test]
fn failed_edit_emits_nothing() {
    let handle = with_captured_tracing(|| {
        let mut editor = Editor::from_text("abc");
        assert!(editor.delete(2, 9).is_err());
    });
    assert!(handle.with_target("revbuf.editor").is_empty());
}

#[test]
fn undo_emits_debug_events() {
    let handle = with_captured_tracing(|| {
        let mut editor = Editor::from_text("Hello");
        editor.append('!');
        editor.undo();
        editor.undo();
    });

    let debug: Vec<_> = handle
        .with_target("revbuf.editor")
        .into_iter()
        .filter(|e| e.level == tracing::Level::DEBUG)
        .collect();
    assert_eq!(debug.len(), 2);

    assert_eq!(message(&debug[0]), "undo applied");
    assert_eq!(debug[0].fields.get("kind").map(String::as_str), Some("Insert text"));
    assert_eq!(debug[0].fields.get("remaining").map(String::as_str), Some("0"));

    assert_eq!(message(&debug[1]), "undo on empty history");
}

// =====================================================================
// History and buffer events
// =====================================================================

#[test]
fn eviction_is_logged() {
    let handle = with_captured_tracing(|| {
        let mut editor = Editor::with_history_config("", HistoryConfig::new(1, 0));
        editor.append('a');
        editor.append('b');
    });

    let evicted = handle.with_target("revbuf.history");
    assert_eq!(evicted.len(), 1);
    assert_eq!(message(&evicted[0]), "history entry evicted");
    assert_eq!(evicted[0].fields.get("limit").map(String::as_str), Some("max_depth"));
}

#[test]
fn unlimited_history_never_evicts() {
    let handle = with_captured_tracing(|| {
        let mut editor = Editor::new();
        for _ in 0..100 {
            editor.append('x');
        }
    });
    assert!(handle.with_target("revbuf.history").is_empty());
}

#[test]
fn reverse_logs_buffer_event() {
    let handle = with_captured_tracing(|| {
        let mut editor = Editor::from_text("abc");
        editor.reverse();
    });
    let text_events = handle.with_target("revbuf.text");
    assert_eq!(text_events.len(), 1);
    assert_eq!(text_events[0].fields.get("len_chars").map(String::as_str), Some("3"));
}
