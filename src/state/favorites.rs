use std::collections::HashSet;

/// Session-local set of favorited article ids.
///
#[derive(Debug, Default, Clone)]
pub struct FavoriteSet {
    ids: HashSet<u64>,
}

impl FavoriteSet {
    /// Flip membership of `id`. Returns whether it is a favorite afterwards.
    ///
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
