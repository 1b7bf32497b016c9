use std::sync::{Arc, Mutex};

use crate::slot::SessionSlot;

/// In-memory SessionSlot for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionSlot for MemorySlot {
    fn load(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }

    fn save(&self, value: &str) {
        *self.value.lock().unwrap() = Some(value.to_string());
    }

    fn clear(&self) {
        *self.value.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let slot = MemorySlot::new();
        assert!(slot.load().is_none());

        slot.save("{\"id\":1}");
        assert_eq!(slot.load().as_deref(), Some("{\"id\":1}"));

        slot.save("{\"id\":2}");
        assert_eq!(slot.load().as_deref(), Some("{\"id\":2}"));

        slot.clear();
        assert!(slot.load().is_none());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let slot = MemorySlot::new();
        let other = slot.clone();

        slot.save("shared");
        assert_eq!(other.load().as_deref(), Some("shared"));

        other.clear();
        assert!(slot.load().is_none());
    }
}
