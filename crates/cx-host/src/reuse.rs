// ABOUTME: Registry of reusable collection elements keyed by kind and reuse identifier.
// ABOUTME: Types register a factory once and are dequeued by type, with checked downcasts.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Where an element appears in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Item,
    SectionHeader,
    SectionFooter,
    InterItemGapIndicator,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Item => "item",
            ElementKind::SectionHeader => "section header",
            ElementKind::SectionFooter => "section footer",
            ElementKind::InterItemGapIndicator => "inter-item gap indicator",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// An element type with a stable reuse identifier.
pub trait Reusable: Sized + 'static {
    const REUSE_IDENTIFIER: &'static str;

    fn make(index_path: IndexPath) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReuseError {
    #[error("No {kind} registered for identifier {identifier:?}")]
    NotRegistered {
        kind: ElementKind,
        identifier: &'static str,
    },

    #[error("Identifier {identifier:?} is registered to a different {kind} type")]
    TypeMismatch {
        kind: ElementKind,
        identifier: &'static str,
    },
}

type Factory = Box<dyn Fn(IndexPath) -> Box<dyn Any> + Send + Sync>;

#[derive(Default)]
pub struct ReuseRegistry {
    factories: HashMap<(ElementKind, &'static str), Factory>,
}

impl ReuseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under its reuse identifier, replacing any earlier registration.
    pub fn register<T: Reusable>(&mut self, kind: ElementKind) {
        let factory: Factory =
            Box::new(|index_path| Box::new(T::make(index_path)) as Box<dyn Any>);
        if self
            .factories
            .insert((kind, T::REUSE_IDENTIFIER), factory)
            .is_some()
        {
            tracing::debug!("Replaced {} registration for {}", kind, T::REUSE_IDENTIFIER);
        }
    }

    pub fn register_item<T: Reusable>(&mut self) {
        self.register::<T>(ElementKind::Item);
    }

    pub fn register_header<T: Reusable>(&mut self) {
        self.register::<T>(ElementKind::SectionHeader);
    }

    pub fn register_footer<T: Reusable>(&mut self) {
        self.register::<T>(ElementKind::SectionFooter);
    }

    pub fn register_gap_indicator<T: Reusable>(&mut self) {
        self.register::<T>(ElementKind::InterItemGapIndicator);
    }

    pub fn is_registered<T: Reusable>(&self, kind: ElementKind) -> bool {
        self.factories.contains_key(&(kind, T::REUSE_IDENTIFIER))
    }

    /// Make a `T` for `index_path` from the factory registered under `T`'s identifier.
    pub fn dequeue<T: Reusable>(
        &self,
        kind: ElementKind,
        index_path: IndexPath,
    ) -> Result<T, ReuseError> {
        let identifier = T::REUSE_IDENTIFIER;
        let factory = self
            .factories
            .get(&(kind, identifier))
            .ok_or(ReuseError::NotRegistered { kind, identifier })?;

        factory(index_path)
            .downcast::<T>()
            .map(|element| *element)
            .map_err(|_| ReuseError::TypeMismatch { kind, identifier })
    }

    pub fn dequeue_item<T: Reusable>(&self, index_path: IndexPath) -> Result<T, ReuseError> {
        self.dequeue(ElementKind::Item, index_path)
    }

    pub fn dequeue_header<T: Reusable>(&self, index_path: IndexPath) -> Result<T, ReuseError> {
        self.dequeue(ElementKind::SectionHeader, index_path)
    }

    pub fn dequeue_footer<T: Reusable>(&self, index_path: IndexPath) -> Result<T, ReuseError> {
        self.dequeue(ElementKind::SectionFooter, index_path)
    }

    pub fn dequeue_gap_indicator<T: Reusable>(
        &self,
        index_path: IndexPath,
    ) -> Result<T, ReuseError> {
        self.dequeue(ElementKind::InterItemGapIndicator, index_path)
    }
}

impl fmt::Debug for ReuseRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReuseRegistry")
            .field("registered", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
