/// Outcome of [`RevealSet::reveal`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reveal {
    /// The element was hidden and is now revealed.
    Revealed,
    /// The element had been revealed before; nothing changes.
    AlreadyRevealed,
    /// No element is registered under this index.
    Unknown,
}

/// One-shot reveal bookkeeping for a fixed list of observed elements.
///
/// Elements are only ever revealed, never hidden again.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    /// Tracks `len` hidden elements.
    pub fn new(len: usize) -> RevealSet {
        RevealSet {
            revealed: vec![false; len],
        }
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// Whether no elements are tracked.
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Records that element `index` intersected the viewport.
    pub fn reveal(&mut self, index: usize) -> Reveal {
        match self.revealed.get_mut(index) {
            Some(true) => Reveal::AlreadyRevealed,
            Some(revealed) => {
                *revealed = true;
                Reveal::Revealed
            }
            None => Reveal::Unknown,
        }
    }

    /// Whether element `index` has been revealed.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or_default()
    }

    /// Number of elements still waiting to be revealed.
    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|revealed| !**revealed).count()
    }
}
