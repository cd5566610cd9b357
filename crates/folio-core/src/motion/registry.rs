//! Identity-keyed registry of animatable elements.

use std::collections::{HashMap, HashSet};

use super::{Category, ElementId};

/// Outcome of a registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// First time this element was seen
    Added,
    /// A previously unmounted element was rendered again
    Remounted,
    /// Already registered and mounted; nothing changed
    Duplicate,
    /// Already registered under a different category; nothing changed
    Conflict(Category),
}

impl Registration {
    /// Whether the element now needs its handlers bound.
    pub fn is_new_binding(&self) -> bool {
        matches!(self, Registration::Added | Registration::Remounted)
    }
}

/// Arena mapping element identity to category, with per-category
/// registration order.
#[derive(Debug, Default)]
pub struct Registry {
    categories: HashMap<ElementId, Category>,
    members: HashMap<Category, Vec<ElementId>>,
    unmounted: HashSet<ElementId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: ElementId, category: Category) -> Registration {
        if let Some(existing) = self.categories.get(&id) {
            if *existing != category {
                return Registration::Conflict(*existing);
            }
            if self.unmounted.remove(&id) {
                return Registration::Remounted;
            }
            return Registration::Duplicate;
        }

        self.members.entry(category).or_default().push(id.clone());
        self.categories.insert(id, category);
        Registration::Added
    }

    pub fn category_of(&self, id: &ElementId) -> Option<Category> {
        self.categories.get(id).copied()
    }

    pub fn is_mounted(&self, id: &ElementId) -> bool {
        self.categories.contains_key(id) && !self.unmounted.contains(id)
    }

    /// Mark an element as gone. Returns false if it was unknown or already gone.
    pub fn mark_unmounted(&mut self, id: &ElementId) -> bool {
        self.categories.contains_key(id) && self.unmounted.insert(id.clone())
    }

    /// Registered elements of `category`, in registration order.
    pub fn members(&self, category: Category) -> &[ElementId] {
        self.members
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Mounted elements of `category`, in registration order.
    pub fn mounted(&self, category: Category) -> impl Iterator<Item = &ElementId> {
        self.members(category)
            .iter()
            .filter(move |id| !self.unmounted.contains(*id))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
