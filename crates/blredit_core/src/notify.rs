use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback = Box<dyn FnMut(&str)>;

/// Synchronous property-change observers.
///
/// Callbacks run on the notifying thread in subscription order. Delivery is
/// not guarded against reentrancy.
#[derive(Default)]
pub struct PropertyObservers {
    next_id: u64,
    callbacks: Vec<(ObserverId, Callback)>,
}

impl PropertyObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&str) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(observer, _)| *observer != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, property: &str) {
        for (_, callback) in &mut self.callbacks {
            callback(property);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for PropertyObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyObservers")
            .field("observers", &self.callbacks.len())
            .finish()
    }
}
