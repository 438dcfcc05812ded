//! Session building and scoring benchmark
//!
//! Measures the join of a synthetic error log onto a synthetic event log and
//! the scoring of the resulting sessions, for classes of growing size.
//!
//! # Run Instructions
//!
//! ```bash
//! cargo bench --bench session_scoring
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jadud_eq::ingest::EventRow;
use jadud_eq::normalize::ErrorRecord;
use jadud_eq::scoring::score_sessions;
use jadud_eq::session::{ErrorTable, SessionBuilder};

const EVENTS_PER_STUDENT: usize = 40;

/// Every third attempt is clean; the rest alternate between two errors
fn synthetic_class(students: usize) -> (Vec<EventRow>, Vec<ErrorRecord>) {
    let mut events = Vec::with_capacity(students * EVENTS_PER_STUDENT);
    let mut errors = Vec::new();

    for s in 0..students {
        let student_id = format!("student_{}", s);
        for e in 0..EVENTS_PER_STUDENT {
            let timestamp = format!("2023-02-01 10:{:02}:{:02}", e / 60, e % 60);
            if e % 3 != 0 {
                errors.push(ErrorRecord {
                    student_id: student_id.clone(),
                    timestamp: timestamp.clone(),
                    identity: if e % 2 == 0 {
                        "cannot find symbol".to_string()
                    } else {
                        "';' expected".to_string()
                    },
                });
            }
            events.push(EventRow {
                student_id: student_id.clone(),
                timestamp,
            });
        }
    }

    (events, errors)
}

fn bench_build_sessions(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_sessions");

    for students in [10, 100, 1000] {
        let (events, errors) = synthetic_class(students);
        group.bench_with_input(
            BenchmarkId::from_parameter(students),
            &(events, errors),
            |b, (events, errors)| {
                b.iter(|| {
                    let table: ErrorTable = errors.iter().cloned().collect();
                    let sessions = SessionBuilder::new(table).build_from_rows(events.clone());
                    black_box(sessions.len());
                });
            },
        );
    }

    group.finish();
}

fn bench_score_sessions(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_sessions");

    for students in [10, 100, 1000] {
        let (events, errors) = synthetic_class(students);
        let table: ErrorTable = errors.into_iter().collect();
        let sessions = SessionBuilder::new(table).build_from_rows(events);

        group.bench_with_input(
            BenchmarkId::from_parameter(students),
            &sessions,
            |b, sessions| {
                b.iter(|| black_box(score_sessions(sessions)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build_sessions, bench_score_sessions);
criterion_main!(benches);
