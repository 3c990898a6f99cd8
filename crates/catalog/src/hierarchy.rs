//! Category hierarchy with both sides of every link kept in agreement.
//!
//! `Category::set_parent_category` and `Category::add_children` each update a
//! single category. `CategoryTree` owns a set of categories and links them
//! through `attach`/`detach`, which update parent and child together and
//! refuse links that would create a cycle.

use std::collections::HashMap;

use storefront_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::ids::CategoryId;

#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    categories: HashMap<CategoryId, Category>,
}

impl CategoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category that is not yet linked to anything.
    ///
    /// Categories carrying parent/child ids from elsewhere are rejected;
    /// links inside the tree are only made through `attach`.
    pub fn insert(&mut self, category: Category) -> DomainResult<CategoryId> {
        let id = category.id_typed();
        if self.categories.contains_key(&id) {
            return Err(DomainError::invalid_state("the tree already contains the category"));
        }
        if category.parent().is_some() || !category.children().is_empty() {
            return Err(DomainError::invalid_argument(
                "only unlinked categories can be inserted",
            ));
        }
        self.categories.insert(id, category);
        Ok(id)
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    /// Run a field change against one category.
    ///
    /// All or nothing: if `f` fails, the category is put back as it was.
    /// Links inside the tree change only through `attach`/`detach`, so an `f`
    /// that touches the parent or children is rolled back with `InvalidState`.
    pub fn update<T>(
        &mut self,
        id: CategoryId,
        f: impl FnOnce(&mut Category) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let category = self.categories.get_mut(&id).ok_or_else(DomainError::not_found)?;
        let snapshot = category.clone();

        let result = f(&mut *category).and_then(|out| {
            if category.parent() != snapshot.parent() || category.children() != snapshot.children() {
                return Err(DomainError::invalid_state(
                    "category links inside a tree change only through attach/detach",
                ));
            }
            Ok(out)
        });
        if result.is_err() {
            *category = snapshot;
        }
        result
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Make `child_id` a child of `parent_id`, updating both categories.
    pub fn attach(&mut self, parent_id: CategoryId, child_id: CategoryId) -> DomainResult<()> {
        if parent_id == child_id {
            return Err(DomainError::invalid_argument("a category cannot be its own parent"));
        }
        if !self.categories.contains_key(&parent_id) {
            return Err(DomainError::not_found());
        }
        let child = self.categories.get(&child_id).ok_or_else(DomainError::not_found)?;

        match child.parent() {
            Some(existing) if existing == parent_id => {
                return Err(DomainError::invalid_state("the category already contains the child"));
            }
            Some(_) => {
                return Err(DomainError::invalid_state("the category already has a parent"));
            }
            None => {}
        }

        if self.ancestors(parent_id).any(|ancestor| ancestor.id_typed() == child_id) {
            return Err(DomainError::invalid_state("linking would create a cycle"));
        }

        if let Some(parent) = self.categories.get_mut(&parent_id) {
            parent.link_child(child_id);
        }
        if let Some(child) = self.categories.get_mut(&child_id) {
            child.link_parent(parent_id);
        }
        tracing::debug!(%parent_id, %child_id, "category attached");
        Ok(())
    }

    /// Unlink `child_id` from its parent. Returns the former parent id.
    pub fn detach(&mut self, child_id: CategoryId) -> DomainResult<CategoryId> {
        let child = self.categories.get(&child_id).ok_or_else(DomainError::not_found)?;
        let parent_id = child
            .parent()
            .ok_or_else(|| DomainError::invalid_state("the category has no parent"))?;

        if let Some(parent) = self.categories.get_mut(&parent_id) {
            parent.unlink_child(child_id);
        }
        if let Some(child) = self.categories.get_mut(&child_id) {
            child.unlink_parent();
        }
        tracing::debug!(%parent_id, %child_id, "category detached");
        Ok(parent_id)
    }

    /// Categories without a parent.
    pub fn roots(&self) -> impl Iterator<Item = &Category> {
        self.categories.values().filter(|c| c.parent().is_none())
    }

    /// Parent, grandparent, ... up to the root. Empty for unknown ids.
    pub fn ancestors(&self, id: CategoryId) -> impl Iterator<Item = &Category> {
        let mut next = self.categories.get(&id).and_then(Category::parent);
        std::iter::from_fn(move || {
            let current = self.categories.get(&next?)?;
            next = current.parent();
            Some(current)
        })
    }

    /// All categories below `id`, depth first in child insertion order.
    pub fn descendants(&self, id: CategoryId) -> Vec<&Category> {
        let mut out = Vec::new();
        let mut stack: Vec<CategoryId> = match self.categories.get(&id) {
            Some(category) => category.children().iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(current) = stack.pop() {
            if let Some(category) = self.categories.get(&current) {
                stack.extend(category.children().iter().rev().copied());
                out.push(category);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(names: &[&str]) -> (CategoryTree, Vec<CategoryId>) {
        let mut tree = CategoryTree::new();
        let ids = names
            .iter()
            .map(|name| {
                let category = Category::create(*name, *name, format!("/{name}")).unwrap();
                tree.insert(category).unwrap()
            })
            .collect();
        (tree, ids)
    }

    fn names<'a>(categories: impl IntoIterator<Item = &'a Category>) -> Vec<&'a str> {
        categories.into_iter().map(Category::name).collect()
    }

    #[test]
    fn attach_updates_both_sides() {
        let (mut tree, ids) = tree_with(&["shoes", "boots"]);
        tree.attach(ids[0], ids[1]).unwrap();

        assert_eq!(tree.get(ids[0]).unwrap().children(), &[ids[1]]);
        assert_eq!(tree.get(ids[1]).unwrap().parent(), Some(ids[0]));
        assert_eq!(names(tree.roots()), vec!["shoes"]);
    }

    #[test]
    fn attach_twice_is_invalid_state() {
        let (mut tree, ids) = tree_with(&["shoes", "boots"]);
        tree.attach(ids[0], ids[1]).unwrap();
        assert!(matches!(tree.attach(ids[0], ids[1]), Err(DomainError::InvalidState(_))));
        assert_eq!(tree.get(ids[0]).unwrap().children().len(), 1);
    }

    #[test]
    fn attach_rejects_second_parent() {
        let (mut tree, ids) = tree_with(&["shoes", "sale", "boots"]);
        tree.attach(ids[0], ids[2]).unwrap();
        match tree.attach(ids[1], ids[2]).unwrap_err() {
            DomainError::InvalidState(msg) => assert!(msg.contains("already has a parent")),
            other => panic!("Expected InvalidState, got {other:?}"),
        }
        assert!(tree.get(ids[1]).unwrap().children().is_empty());
    }

    #[test]
    fn attach_rejects_cycles() {
        let (mut tree, ids) = tree_with(&["a", "b", "c"]);
        tree.attach(ids[0], ids[1]).unwrap();
        tree.attach(ids[1], ids[2]).unwrap();

        match tree.attach(ids[2], ids[0]).unwrap_err() {
            DomainError::InvalidState(msg) => assert!(msg.contains("cycle")),
            other => panic!("Expected InvalidState, got {other:?}"),
        }
        assert!(tree.get(ids[2]).unwrap().children().is_empty());
        assert_eq!(tree.get(ids[0]).unwrap().parent(), None);
    }

    #[test]
    fn attach_rejects_self_and_unknown_ids() {
        let (mut tree, ids) = tree_with(&["a"]);
        let stranger = CategoryId::generate();

        assert!(matches!(tree.attach(ids[0], ids[0]), Err(DomainError::InvalidArgument(_))));
        assert_eq!(tree.attach(ids[0], stranger), Err(DomainError::NotFound));
        assert_eq!(tree.attach(stranger, ids[0]), Err(DomainError::NotFound));
    }

    #[test]
    fn detach_unlinks_both_sides() {
        let (mut tree, ids) = tree_with(&["shoes", "boots"]);
        tree.attach(ids[0], ids[1]).unwrap();

        assert_eq!(tree.detach(ids[1]).unwrap(), ids[0]);
        assert!(tree.get(ids[0]).unwrap().children().is_empty());
        assert_eq!(tree.get(ids[1]).unwrap().parent(), None);
        assert!(matches!(tree.detach(ids[1]), Err(DomainError::InvalidState(_))));

        // Once detached the category can move under a new parent.
        tree.attach(ids[1], ids[0]).unwrap();
        assert_eq!(tree.get(ids[0]).unwrap().parent(), Some(ids[1]));
    }

    #[test]
    fn ancestors_and_descendants() {
        let (mut tree, ids) = tree_with(&["root", "left", "right", "leaf"]);
        tree.attach(ids[0], ids[1]).unwrap();
        tree.attach(ids[0], ids[2]).unwrap();
        tree.attach(ids[1], ids[3]).unwrap();

        assert_eq!(names(tree.ancestors(ids[3])), vec!["left", "root"]);
        assert!(tree.ancestors(ids[0]).next().is_none());
        assert_eq!(names(tree.descendants(ids[0])), vec!["left", "leaf", "right"]);
        assert!(tree.descendants(ids[3]).is_empty());
    }

    #[test]
    fn insert_rejects_duplicates_and_prelinked_categories() {
        let mut tree = CategoryTree::new();
        let shoes = Category::create("C1", "Shoes", "/shoes").unwrap();
        let mut boots = Category::create("C2", "Boots", "/boots").unwrap();

        tree.insert(shoes.clone()).unwrap();
        assert!(matches!(tree.insert(shoes.clone()), Err(DomainError::InvalidState(_))));

        boots.set_parent_category(&shoes).unwrap();
        assert!(matches!(tree.insert(boots), Err(DomainError::InvalidArgument(_))));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn update_applies_field_changes() {
        let (mut tree, ids) = tree_with(&["shoes"]);
        tree.update(ids[0], |c| c.change_name("Footwear")).unwrap();
        assert_eq!(tree.get(ids[0]).unwrap().name(), "Footwear");

        assert!(matches!(
            tree.update(ids[0], |c| c.change_name("")),
            Err(DomainError::InvalidArgument(_))
        ));
        assert_eq!(tree.update(CategoryId::generate(), |c| c.delete()), Err(DomainError::NotFound));
    }

    #[test]
    fn failed_update_rolls_back_earlier_changes() {
        let (mut tree, ids) = tree_with(&["shoes"]);
        let err = tree
            .update(ids[0], |c| {
                c.change_name("Footwear")?;
                c.change_code("")
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(tree.get(ids[0]).unwrap().name(), "shoes");
    }

    #[test]
    fn update_cannot_bypass_attach() {
        let (mut tree, ids) = tree_with(&["shoes", "boots"]);
        let boots = tree.get(ids[1]).unwrap().clone();

        let err = tree
            .update(ids[0], |c| {
                c.change_name("Footwear")?;
                c.add_children(&boots)
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));

        let shoes = tree.get(ids[0]).unwrap();
        assert!(shoes.children().is_empty());
        assert_eq!(shoes.name(), "shoes");
    }
}
