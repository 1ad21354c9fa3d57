//! Tests for tracing instrumentation.
//!
//! These tests verify that tracing spans and events are emitted correctly
//! when the tracing feature is enabled.

#![cfg(feature = "tracing")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use oriscan::format::SequenceFormat;
use oriscan::reader::read_sequence;
use oriscan::{build_frequency_table, find_clumps, find_clumps_sliding};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_test::traced_test;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A simple layer that counts events at or above a level.
struct EventCounter {
    count: Arc<AtomicUsize>,
    level: Level,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if event.metadata().level() <= &self.level {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// A layer that records the names of entered spans.
struct SpanRecorder {
    names: Arc<Mutex<Vec<&'static str>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanRecorder {
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.names.lock().unwrap().push(attrs.metadata().name());
    }
}

fn count_events(level: Level, f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let layer = EventCounter {
        count: Arc::clone(&count),
        level,
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}

#[test]
fn read_sequence_emits_info_event() {
    let events = count_events(Level::INFO, || {
        read_sequence(fixture_path("ori_vibrio.fa"), SequenceFormat::Auto)
            .expect("should read fixture");
    });
    assert!(events > 0, "should emit an info event when reading");
}

#[test]
fn frequency_table_emits_debug_event() {
    let events = count_events(Level::DEBUG, || {
        build_frequency_table("ACGTACGTTT", 3).expect("should build table");
    });
    assert_eq!(events, 1);
}

#[test]
fn clump_finders_open_named_spans() {
    let names = Arc::new(Mutex::new(Vec::new()));
    let layer = SpanRecorder {
        names: Arc::clone(&names),
    };
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        find_clumps("CGGACTCGACAGATGTGAAGAAATGTGAAGA", 5, 20, 2).expect("exhaustive");
        find_clumps_sliding("CGGACTCGACAGATGTGAAGAAATGTGAAGA", 5, 20, 2).expect("sliding");
    });

    let names = names.lock().unwrap();
    assert!(names.contains(&"find_clumps"));
    assert!(names.contains(&"find_clumps_sliding"));
}

#[test]
fn failed_validation_emits_nothing() {
    let events = count_events(Level::TRACE, || {
        assert!(find_clumps("ACGT", 5, 3, 1).is_err());
    });
    assert_eq!(events, 0);
}

#[traced_test]
#[test]
fn sliding_search_logs_result_size() {
    let clumps = find_clumps_sliding("AAAACCCCCCCCAAAA", 3, 5, 3).unwrap();
    assert_eq!(clumps.len(), 1);
    assert!(logs_contain("sliding clump search finished"));
    assert!(logs_contain("found=1"));
}
