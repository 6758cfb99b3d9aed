use serde::Serialize;

use crate::model::task::Listed;

/// True if `name` is acceptable for a new task or counter (non-blank after trimming)
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// An ordered list of named items addressed by id.
///
/// Insertion order is display order. Ids are handed out monotonically and are
/// never reused, so a stale id held by the UI can only miss, never hit the
/// wrong entry.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ItemList<T> {
    items: Vec<T>,
    #[serde(skip)]
    next_id: u32,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        ItemList {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Listed> ItemList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item. Blank names are rejected and return `None`.
    pub fn add(&mut self, name: &str) -> Option<T::Id> {
        if !is_valid_name(name) {
            return None;
        }
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        self.items.push(T::create(id, name.to_string()));
        Some(id)
    }

    /// Remove the item with this id. Absent ids are a no-op.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let pos = self.position(id)?;
        Some(self.items.remove(pos))
    }

    /// Remove the first item with this exact name. Absent names are a no-op.
    pub fn remove_named(&mut self, name: &str) -> Option<T> {
        let pos = self.items.iter().position(|t| t.item_name() == name)?;
        Some(self.items.remove(pos))
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|t| t.item_id() == id)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|t| t.item_id() == id)
    }

    /// First item with this exact name
    pub fn find_named(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|t| t.item_name() == name)
    }

    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|t| t.item_id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
