//! # Durable session slot
//!
//! The session is persisted as a single serialized value under one global
//! key. [`SessionSlot`] abstracts over where that value lives so the same
//! session logic runs against `localStorage` in the browser and against an
//! in-memory slot in tests and native builds.
//!
//! The slot stores opaque strings; serialization happens in the caller.
//! There is exactly one writer (the session service) — everything else
//! treats the slot as read-only.

/// A single durable key-value slot holding the serialized session.
pub trait SessionSlot {
    /// Read the stored value, if any.
    fn load(&self) -> Option<String>;
    /// Replace the stored value.
    fn save(&self, value: &str);
    /// Remove the stored value. Never fails.
    fn clear(&self);
}
