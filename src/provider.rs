//! Type metadata providers consumed by the expression type engine.
//!
//! The engine only depends on the one-method [`TypeInfoProvider`] contract
//! and may call `lookup` repeatedly for the same name; providers decide
//! their own caching and thread-safety policy.

use std::num::NonZeroUsize;
use std::sync::Arc;

use dashmap::DashMap;
use log::warn;
use lru::LruCache;
use parking_lot::Mutex;

use crate::rcode::{ByteOrder, TypeInfo, decode_unit};

/// Source of reflection metadata for fully-qualified class names.
pub trait TypeInfoProvider {
    /// Metadata for `class_name`, or `None` when the class is unknown.
    fn lookup(&self, class_name: &str) -> Option<Arc<TypeInfo>>;
}

impl<P: TypeInfoProvider + ?Sized> TypeInfoProvider for Arc<P> {
    fn lookup(&self, class_name: &str) -> Option<Arc<TypeInfo>> {
        (**self).lookup(class_name)
    }
}

impl<P: TypeInfoProvider + ?Sized> TypeInfoProvider for &P {
    fn lookup(&self, class_name: &str) -> Option<Arc<TypeInfo>> {
        (**self).lookup(class_name)
    }
}

/// Provider that knows no types at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyTypeProvider;

impl TypeInfoProvider for EmptyTypeProvider {
    fn lookup(&self, _class_name: &str) -> Option<Arc<TypeInfo>> {
        None
    }
}

/// In-memory registry keyed by case-insensitive class name.
///
/// Backed by a concurrent map, so one registry can serve analyses of
/// several units at once.
#[derive(Debug, Default)]
pub struct MapTypeProvider {
    types: DashMap<String, Arc<TypeInfo>>,
}

impl MapTypeProvider {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register decoded metadata under its own type name.
    pub fn insert(&self, info: TypeInfo) {
        self.types
            .insert(info.type_name.to_ascii_uppercase(), Arc::new(info));
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeInfoProvider for MapTypeProvider {
    fn lookup(&self, class_name: &str) -> Option<Arc<TypeInfo>> {
        self.types
            .get(&class_name.to_ascii_uppercase())
            .map(|entry| Arc::clone(&entry))
    }
}

/// Bounded LRU wrapper over another provider.
///
/// Caches hits and misses alike; a miss for an unknown class is as common as
/// a hit during hierarchy walks, and re-asking the inner provider for it
/// every time defeats the cache.
pub struct CachingTypeProvider<P> {
    inner: P,
    cache: Mutex<LruCache<String, Option<Arc<TypeInfo>>>>,
}

impl<P: TypeInfoProvider> CachingTypeProvider<P> {
    /// Wrap `inner` with a cache of `capacity` entries.
    pub fn new(inner: P, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("max(1) is nonzero");
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: TypeInfoProvider> TypeInfoProvider for CachingTypeProvider<P> {
    fn lookup(&self, class_name: &str) -> Option<Arc<TypeInfo>> {
        let key = class_name.to_ascii_uppercase();
        let mut cache = self.cache.lock();
        if let Some(cached) = cache.get(&key) {
            return cached.clone();
        }
        let result = self.inner.lookup(class_name);
        cache.put(key, result.clone());
        result
    }
}

enum UnitSlot {
    Raw(Vec<u8>, ByteOrder),
    Decoded(Arc<TypeInfo>),
    Failed,
}

/// Provider that decodes registered r-code buffers on first lookup.
///
/// A buffer that fails to decode is reported once via `log::warn!` and
/// treated as absent from then on; one corrupt unit never affects lookups
/// of other units.
#[derive(Default)]
pub struct RcodeTypeProvider {
    units: DashMap<String, UnitSlot>,
}

impl RcodeTypeProvider {
    /// An empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the raw metadata buffer for `class_name`.
    pub fn register(&self, class_name: &str, bytes: Vec<u8>, order: ByteOrder) {
        self.units.insert(
            class_name.to_ascii_uppercase(),
            UnitSlot::Raw(bytes, order),
        );
    }
}

impl TypeInfoProvider for RcodeTypeProvider {
    fn lookup(&self, class_name: &str) -> Option<Arc<TypeInfo>> {
        let key = class_name.to_ascii_uppercase();
        let mut slot = self.units.get_mut(&key)?;
        let decoded = match &*slot {
            UnitSlot::Decoded(info) => return Some(Arc::clone(info)),
            UnitSlot::Failed => return None,
            UnitSlot::Raw(bytes, order) => decode_unit(bytes, *order),
        };
        match decoded {
            Ok(info) => {
                let info = Arc::new(info);
                *slot = UnitSlot::Decoded(Arc::clone(&info));
                Some(info)
            }
            Err(err) => {
                warn!("discarding undecodable metadata for {class_name}: {err}");
                *slot = UnitSlot::Failed;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rcode::encode_unit;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
        inner: MapTypeProvider,
    }

    impl TypeInfoProvider for CountingProvider {
        fn lookup(&self, class_name: &str) -> Option<Arc<TypeInfo>> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.inner.lookup(class_name)
        }
    }

    #[test]
    fn map_provider_is_case_insensitive() {
        let provider = MapTypeProvider::new();
        provider.insert(TypeInfo::named("acme.Order", ""));
        assert!(provider.lookup("ACME.ORDER").is_some());
        assert!(provider.lookup("acme.order").is_some());
        assert!(provider.lookup("acme.Other").is_none());
    }

    #[test]
    fn caching_provider_asks_inner_once_per_name() {
        let inner = MapTypeProvider::new();
        inner.insert(TypeInfo::named("acme.Order", ""));
        let counting = CountingProvider {
            calls: AtomicUsize::new(0),
            inner,
        };
        let cached = CachingTypeProvider::new(counting, 16);

        let first = cached.lookup("acme.Order").unwrap();
        let second = cached.lookup("acme.Order").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        // Misses are cached too.
        assert!(cached.lookup("acme.Nope").is_none());
        assert!(cached.lookup("acme.Nope").is_none());
        assert_eq!(cached.inner().calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn rcode_provider_decodes_on_demand_and_isolates_failures() {
        let provider = RcodeTypeProvider::new();
        let good = TypeInfo::named("acme.Good", "");
        provider.register(
            "acme.Good",
            encode_unit(&good, ByteOrder::Little),
            ByteOrder::Little,
        );
        provider.register("acme.Bad", vec![0xde, 0xad, 0xbe, 0xef], ByteOrder::Little);

        assert!(provider.lookup("acme.Bad").is_none());
        let decoded = provider.lookup("acme.Good").unwrap();
        assert_eq!(decoded.type_name, "acme.Good");
        // Second lookup returns the memoized Arc.
        let again = provider.lookup("acme.Good").unwrap();
        assert!(Arc::ptr_eq(&decoded, &again));
        // The failed unit stays absent.
        assert!(provider.lookup("acme.Bad").is_none());
    }
}
