/// Append-only notification log for the status layer.
///
/// The orchestrator and enrichment tasks emit here; the UI drains on its
/// own cadence. Events carry a bus-assigned sequence number so ordering
/// is still visible after a drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub seq: u64,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EventBus {
    next_seq: u64,
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, kind: &'static str, message: impl Into<String>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push(Event {
            seq,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::EventBus;

    #[test]
    fn records_events_in_emit_order() {
        let mut bus = EventBus::new();
        bus.emit("phase", "basic globe ready");
        bus.emit("enrichment", "station enriched");
        assert_eq!(bus.events().len(), 2);
        assert_eq!(bus.events()[0].kind, "phase");
        assert_eq!(bus.events()[1].seq, 1);
    }

    #[test]
    fn sequence_survives_drain() {
        let mut bus = EventBus::new();
        bus.emit("k", "first");
        let drained = bus.drain();
        assert_eq!(drained.len(), 1);
        assert!(bus.events().is_empty());

        bus.emit("k", "second");
        assert_eq!(bus.events()[0].seq, 1);
    }
}
