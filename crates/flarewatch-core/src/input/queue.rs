/// A control event from the UI layer (React buttons, slider, canvas
/// clicks). `op` identifies the control; `a`, `b`, `c` carry data.
/// Dashboard-level op codes live next to the handler in `dashboard.rs`.
#[derive(Debug, Clone, Copy)]
pub struct ControlEvent {
    pub op: u32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

/// A queue of control events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct ControlQueue {
    events: Vec<ControlEvent>,
}

impl ControlQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new control event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: ControlEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &ControlEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for ControlQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = ControlQueue::new();
        q.push(ControlEvent { op: 1, a: -30.0, b: 0.0, c: 0.0 });
        q.push(ControlEvent { op: 2, a: 0.0, b: 0.0, c: 0.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn payload_survives_the_queue() {
        let mut q = ControlQueue::new();
        q.push(ControlEvent { op: 7, a: 1.5, b: 2.5, c: 3.5 });
        let events = q.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].op, 7);
        assert_eq!(events[0].a, 1.5);
        assert_eq!(events[0].b, 2.5);
        assert_eq!(events[0].c, 3.5);
    }
}
