//! Filter State
//!
//! Selector values driving the list view. Ephemeral, never persisted.

use super::item::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ItemKind),
}

impl TypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(kind) => kind.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Self {
        ItemKind::from_str(s).map_or(TypeFilter::All, TypeFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn from_str(s: &str) -> Self {
        if s == "all" || s.is_empty() {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s.to_string())
        }
    }
}

/// Type, category and active-only selectors
///
/// Picking a type or a category clears `active_only`; the user re-applies it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    kind: TypeFilter,
    category: CategoryFilter,
    active_only: bool,
}

impl Filter {
    pub fn new(kind: TypeFilter, category: CategoryFilter, active_only: bool) -> Self {
        Self {
            kind,
            category,
            active_only,
        }
    }

    pub fn kind(&self) -> TypeFilter {
        self.kind
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn active_only(&self) -> bool {
        self.active_only
    }

    pub fn set_kind(&mut self, kind: TypeFilter) {
        self.kind = kind;
        self.active_only = false;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.active_only = false;
    }

    pub fn set_active_only(&mut self, active_only: bool) {
        self.active_only = active_only;
    }
}
