/// What an enrichment task will fetch for a point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EnrichmentKind {
    AirQuality,
    Weather,
    Satellite,
}

/// One queued fetch for one registered point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentTask {
    pub point_name: String,
    pub kind: EnrichmentKind,
}

#[derive(Debug)]
struct QueueItem {
    task: EnrichmentTask,
    cancelled: bool,
}

/// Serialized, cancellable queue of per-point enrichment work.
///
/// Points are enriched one at a time, so this is a plain FIFO with
/// tombstone cancellation: cancelling never perturbs the order of the
/// remaining items. Submitting a (point, kind) pair that is already
/// pending is a no-op, which keeps hover storms from queueing the same
/// fetch repeatedly.
#[derive(Debug, Default)]
pub struct EnrichmentQueue {
    items: Vec<QueueItem>,
}

impl EnrichmentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.iter().filter(|i| !i.cancelled).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queue a fetch. Returns false if the same (point, kind) is
    /// already pending.
    pub fn submit(&mut self, point_name: impl Into<String>, kind: EnrichmentKind) -> bool {
        let point_name = point_name.into();
        let duplicate = self
            .items
            .iter()
            .any(|i| !i.cancelled && i.task.kind == kind && i.task.point_name == point_name);
        if duplicate {
            return false;
        }

        self.items.push(QueueItem {
            task: EnrichmentTask { point_name, kind },
            cancelled: false,
        });
        true
    }

    /// Cancel all pending work for one point. Returns how many tasks
    /// were cancelled.
    pub fn cancel(&mut self, point_name: &str) -> usize {
        let mut cancelled = 0;
        for item in &mut self.items {
            if !item.cancelled && item.task.point_name == point_name {
                item.cancelled = true;
                cancelled += 1;
            }
        }
        cancelled
    }

    /// Cancel everything pending, for teardown or a metric-mode switch
    /// that obsoletes the queued work.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.len();
        self.items.clear();
        cancelled
    }

    /// Next live task in submission order.
    pub fn pop_next(&mut self) -> Option<EnrichmentTask> {
        while !self.items.is_empty() {
            let item = self.items.remove(0);
            if !item.cancelled {
                return Some(item.task);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{EnrichmentKind, EnrichmentQueue};

    #[test]
    fn fifo_order_is_preserved() {
        let mut q = EnrichmentQueue::new();
        assert!(q.submit("Station - London", EnrichmentKind::AirQuality));
        assert!(q.submit("Station - Tokyo", EnrichmentKind::AirQuality));
        assert!(q.submit("Station - London", EnrichmentKind::Weather));

        assert_eq!(q.pop_next().unwrap().point_name, "Station - London");
        assert_eq!(q.pop_next().unwrap().point_name, "Station - Tokyo");
        let last = q.pop_next().unwrap();
        assert_eq!(last.kind, EnrichmentKind::Weather);
        assert!(q.pop_next().is_none());
    }

    #[test]
    fn duplicate_pending_submission_is_rejected() {
        let mut q = EnrichmentQueue::new();
        assert!(q.submit("Station - London", EnrichmentKind::AirQuality));
        assert!(!q.submit("Station - London", EnrichmentKind::AirQuality));
        assert_eq!(q.len(), 1);

        // A different kind for the same point is new work.
        assert!(q.submit("Station - London", EnrichmentKind::Satellite));
        assert_eq!(q.len(), 2);

        // Once popped, the pair may be queued again.
        let _ = q.pop_next();
        assert!(q.submit("Station - London", EnrichmentKind::AirQuality));
    }

    #[test]
    fn cancelled_tasks_are_skipped_without_reordering() {
        let mut q = EnrichmentQueue::new();
        q.submit("a", EnrichmentKind::Weather);
        q.submit("b", EnrichmentKind::Weather);
        q.submit("c", EnrichmentKind::Weather);

        assert_eq!(q.cancel("b"), 1);
        assert_eq!(q.cancel("b"), 0);
        assert_eq!(q.len(), 2);

        assert_eq!(q.pop_next().unwrap().point_name, "a");
        assert_eq!(q.pop_next().unwrap().point_name, "c");
    }

    #[test]
    fn cancel_all_empties_the_queue() {
        let mut q = EnrichmentQueue::new();
        q.submit("a", EnrichmentKind::AirQuality);
        q.submit("a", EnrichmentKind::Weather);
        q.submit("b", EnrichmentKind::Satellite);

        assert_eq!(q.cancel_all(), 3);
        assert!(q.is_empty());
        assert!(q.pop_next().is_none());
    }
}
