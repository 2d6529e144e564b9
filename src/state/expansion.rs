use std::collections::BTreeMap;

/// Which result cards have their detail panel open, keyed by position.
///
/// Positions are only meaningful for the list they were recorded against;
/// the owner clears the map whenever a new result set arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionMap {
    open: BTreeMap<usize, bool>,
}

impl ExpansionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the panel at `index`; an unseen index counts as closed.
    /// Returns the new value.
    pub fn toggle(&mut self, index: usize) -> bool {
        let entry = self.open.entry(index).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.open.get(&index).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_absent_index_is_collapsed() {
        let map = ExpansionMap::new();
        assert!(!map.is_expanded(3));
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut map = ExpansionMap::new();
        assert!(map.toggle(2));
        assert!(map.is_expanded(2));
        assert!(!map.toggle(2));
        assert!(!map.is_expanded(2));
    }

    #[test]
    fn test_toggle_leaves_other_indices_alone() {
        let mut map = ExpansionMap::new();
        map.toggle(0);
        map.toggle(4);
        map.toggle(0);
        assert!(!map.is_expanded(0));
        assert!(map.is_expanded(4));
    }

    #[test]
    fn test_clear_empties_map() {
        let mut map = ExpansionMap::new();
        map.toggle(1);
        map.clear();
        assert!(map.is_empty());
        assert!(!map.is_expanded(1));
    }

    proptest! {
        #[test]
        fn prop_double_toggle_restores(
            history in proptest::collection::vec(0usize..8, 0..20),
            index in 0usize..8,
        ) {
            let mut map = ExpansionMap::new();
            for i in history {
                map.toggle(i);
            }
            let before = map.is_expanded(index);

            map.toggle(index);
            map.toggle(index);

            prop_assert_eq!(map.is_expanded(index), before);
        }
    }
}
