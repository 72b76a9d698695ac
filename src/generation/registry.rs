use crate::cards::Signature;
use std::collections::HashSet;
use std::sync::Mutex;

/// Every signature accepted so far in the batch being built.
/// Check-and-insert is one critical section, so the registry can be shared
/// across workers.
#[derive(Debug, Default)]
pub struct Registry {
    seen: Mutex<HashSet<Signature>>,
}

impl Registry {
    /// false iff the signature was already taken
    pub fn register(&self, signature: Signature) -> bool {
        self.seen.lock().expect("registry lock").insert(signature)
    }
    pub fn contains(&self, signature: &Signature) -> bool {
        self.seen.lock().expect("registry lock").contains(signature)
    }
    pub fn len(&self) -> usize {
        self.seen.lock().expect("registry lock").len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn duplicates_rejected() {
        let registry = Registry::default();
        assert!(registry.register(Signature::from(vec![1, 2, 3])));
        assert!(!registry.register(Signature::from(vec![3, 2, 1])));
        assert!(registry.register(Signature::from(vec![1, 2, 4])));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&Signature::from(vec![2, 1, 4])));
    }

    #[test]
    fn concurrent_registration_admits_once() {
        let registry = Arc::new(Registry::default());
        let accepted = (0..8)
            .map(|_| Arc::clone(&registry))
            .map(|r| std::thread::spawn(move || r.register(Signature::from(vec![5, 6]))))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .filter(|&ok| ok)
            .count();
        assert_eq!(accepted, 1);
        assert_eq!(registry.len(), 1);
    }
}
