//! Navigation-related state types.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Articles,
    Detail { post_id: u64 },
}

/// Specifying how an in-progress press was started.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PressSource {
    /// Keyboard activation, released automatically at the given instant.
    Key { release_at: u64 },
    /// Mouse button held down until the matching release event.
    Pointer,
}

/// A card currently held down.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Press {
    pub id: u64,
    pub source: PressSource,
}
