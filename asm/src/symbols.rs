use arch::symbol::PREDEFINED;
use indexmap::IndexMap;

/// Name-to-address table, pre-seeded with the predefined symbols.
/// Insertion order is kept (IndexMap) so repeated runs produce identical
/// dumps and the table never depends on hash order.
pub struct Symbols(IndexMap<String, u16>);

impl Symbols {
    pub fn new() -> Self {
        let mut map = IndexMap::new();
        for (name, addr) in PREDEFINED {
            map.insert(name.to_string(), addr);
        }
        Symbols(map)
    }

    /// Binds `name` to `addr` unless it is already bound. The first binding
    /// wins; predefined symbols can never be shadowed. Returns false if the
    /// name was already taken.
    pub fn insert(&mut self, name: &str, addr: u16) -> bool {
        if self.0.contains_key(name) {
            return false;
        }
        self.0.insert(name.to_string(), addr);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.0.iter().map(|(name, &addr)| (name.as_str(), addr))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preseeded() {
        let symbols = Symbols::new();
        assert_eq!(symbols.len(), 23);
        assert_eq!(symbols.get("SP"), Some(0));
        assert_eq!(symbols.get("R15"), Some(15));
        assert_eq!(symbols.get("KBD"), Some(24576));
        assert!(!symbols.contains("LOOP"));
    }

    #[test]
    fn first_binding_wins() {
        let mut symbols = Symbols::new();
        assert!(symbols.insert("LOOP", 7));
        assert!(!symbols.insert("LOOP", 9));
        assert_eq!(symbols.get("LOOP"), Some(7));
        // Predefined symbols cannot be rebound either.
        assert!(!symbols.insert("SP", 100));
        assert_eq!(symbols.get("SP"), Some(0));
    }
}
