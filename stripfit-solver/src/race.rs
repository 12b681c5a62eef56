//! Component D: the Parallel Race Harness (spec.md §4.D / §5).
//!
//! Shared-nothing worker threads, each running an independent IDBS over a
//! deep copy of the input rectangles, racing to the first feasible result.
//! Deliberately `std::thread` + `mpsc` rather than `rayon`: the teacher
//! (`jagua-rs`) reaches for rayon only for data-parallel iteration over a
//! known-size collection, not for this race-to-first-success shape (spec.md
//! §9 "Parallelism": "a systems-language implementation should use threads
//! with message passing on the result channel").

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use stripfit_core::Rectangle;

use crate::config::SolverConfig;
use crate::idbs::{self, IdbsResult};

/// Final outcome of the race: the best result any worker produced, or
/// `None` if the whole race ran out of time without a single feasible
/// height.
pub struct RaceOutcome {
    pub result: Option<IdbsResult>,
}

/// Spawns `max(1, parallelism / 2)` workers (spec.md §4.D), each racing an
/// independent IDBS over `rectangles`. The first worker to report success
/// triggers `cancel` for the rest; the harness then takes whichever result
/// arrives first off the channel.
pub fn run(
    rectangles: &[Rectangle],
    width: i64,
    target_height: Option<i64>,
    config: &SolverConfig,
) -> RaceOutcome {
    let worker_count = (config.parallelism / 2).max(1);
    let cancel = Arc::new(AtomicBool::new(false));
    let found = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel::<Option<IdbsResult>>();

    let handles: Vec<_> = (0..worker_count)
        .map(|worker_index| {
            let rectangles = rectangles.to_vec();
            let cancel = Arc::clone(&cancel);
            let found = Arc::clone(&found);
            let tx = tx.clone();
            let config = config.clone();

            thread::Builder::new()
                .name(format!("idbs-worker-{worker_index}"))
                .spawn(move || {
                    let mut rng = match config.prng_seed {
                        Some(seed) => SmallRng::seed_from_u64(seed ^ worker_index as u64),
                        None => SmallRng::from_os_rng(),
                    };
                    let result = idbs::run(
                        &rectangles,
                        width,
                        target_height,
                        config.time_limit,
                        &cancel,
                        &config,
                        &mut rng,
                    );
                    if result.is_some() {
                        found.store(true, Ordering::Relaxed);
                        cancel.store(true, Ordering::Relaxed);
                    }
                    // A send failure just means the harness already moved on.
                    let _ = tx.send(result);
                })
                .expect("failed to spawn IDBS worker thread")
        })
        .collect();

    drop(tx);

    let mut best: Option<IdbsResult> = None;
    for _ in 0..worker_count {
        match rx.recv_timeout(config.time_limit + Duration::from_secs(1)) {
            Ok(Some(candidate)) => {
                let better = match &best {
                    None => true,
                    Some(b) => candidate.height < b.height,
                };
                if better {
                    best = Some(candidate);
                }
                if found.load(Ordering::Relaxed) {
                    break;
                }
            }
            Ok(None) => {}
            Err(_) => break,
        }
    }

    cancel.store(true, Ordering::Relaxed);
    for handle in handles {
        let _ = handle.join();
    }

    info!(
        "race finished: {}",
        match &best {
            Some(r) => format!("height={} wasted={}", r.height, r.wasted_area),
            None => "no feasible height found".to_string(),
        }
    );

    RaceOutcome { result: best }
}
