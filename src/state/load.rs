//! Load lifecycle types.

/// Specifying the lifecycle of one loadable piece of the screen.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Tracks the outstanding request of one kind, numbering each request so
/// that responses to superseded requests can be recognized and dropped.
///
#[derive(Debug, Default, Clone)]
pub struct Flight {
    generation: u64,
    in_flight: bool,
}

impl Flight {
    /// Begin a request unless one is already outstanding. Returns the new
    /// request's generation, or None if the request should be dropped.
    ///
    pub fn try_begin(&mut self) -> Option<u64> {
        if self.in_flight {
            return None;
        }
        Some(self.supersede())
    }

    /// Begin a request, superseding any outstanding one.
    ///
    pub fn supersede(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight = true;
        self.generation
    }

    /// Finish the request with `generation`. Returns false if it is not the
    /// outstanding request.
    ///
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.in_flight && generation == self.generation {
            self.in_flight = false;
            return true;
        }
        false
    }

    /// Forget the outstanding request so that its response is dropped.
    ///
    pub fn abandon(&mut self) {
        if self.in_flight {
            self.generation += 1;
            self.in_flight = false;
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
