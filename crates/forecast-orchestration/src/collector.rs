//! Collector queue between calculation workers and the aggregator.
//!
//! Every worker owns a `Collector` clone; the aggregator owns the single
//! `CollectorQueue`. The queue ends once every `Collector` has been dropped,
//! which is the completion signal the aggregator waits for.

use crossbeam_channel::{unbounded, Receiver, Sender};

use forecast_core::calculator::ParseError;
use forecast_core::model::CityStats;

/// Outcome of one calculation task.
#[derive(Debug)]
pub struct Completion {
    /// Position of the city in the submitted list.
    pub seq: usize,
    /// City identifier the task was submitted for.
    pub city: String,
    pub outcome: Result<CityStats, ParseError>,
}

/// Producer side. Cheap to clone, one per task.
#[derive(Clone)]
pub struct Collector {
    tx: Sender<Completion>,
}

/// Consumer side, owned by the aggregator.
pub struct CollectorQueue {
    rx: Receiver<Completion>,
}

/// Create a connected collector/queue pair.
#[must_use]
pub fn collector() -> (Collector, CollectorQueue) {
    let (tx, rx) = unbounded();
    (Collector { tx }, CollectorQueue { rx })
}

impl Collector {
    /// Push a completed task. Never blocks.
    pub fn push(&self, completion: Completion) {
        if let Err(err) = self.tx.send(completion) {
            tracing::warn!(city = %err.0.city, "Collector queue closed, result dropped");
        }
    }
}

impl CollectorQueue {
    /// Receive until every producer is gone.
    #[must_use]
    pub fn drain(self) -> Vec<Completion> {
        let mut items = Vec::new();
        for completion in self.rx {
            tracing::debug!(city = %completion.city, seq = completion.seq, "Collected");
            items.push(completion);
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn stats(city: &str) -> CityStats {
        CityStats {
            city: city.to_string(),
            days: Vec::new(),
            average_temp: Some(1),
            no_rain: Some(1),
        }
    }

    #[test]
    fn drain_waits_for_all_producers() {
        let (collector, queue) = collector();
        let handles: Vec<_> = (0..8usize)
            .map(|seq| {
                let collector = collector.clone();
                thread::spawn(move || {
                    thread::sleep(std::time::Duration::from_millis(seq as u64 * 3));
                    collector.push(Completion {
                        seq,
                        city: format!("c{seq}"),
                        outcome: Ok(stats(&format!("c{seq}"))),
                    });
                })
            })
            .collect();
        drop(collector);

        let mut items = queue.drain();
        for handle in handles {
            handle.join().unwrap();
        }
        items.sort_by_key(|c| c.seq);
        let seqs: Vec<usize> = items.iter().map(|c| c.seq).collect();
        assert_eq!(seqs, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn drain_empty_when_no_producers() {
        let (collector, queue) = collector();
        drop(collector);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn push_after_queue_dropped_does_not_panic() {
        let (collector, queue) = collector();
        drop(queue);
        collector.push(Completion {
            seq: 0,
            city: "x".into(),
            outcome: Ok(stats("x")),
        });
    }
}
