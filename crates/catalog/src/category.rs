use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{guard, AggregateRoot, DomainError, DomainResult};

use crate::ids::{CategoryId, ProductId};
use crate::product::Product;

/// Association row between a category and a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductCategory {
    pub category_id: CategoryId,
    pub product_id: ProductId,
}

/// Aggregate root: Category.
///
/// Parent and children are held by id. `set_parent_category` and
/// `add_children` each touch one side of the link only; use
/// [`CategoryTree`](crate::CategoryTree) to keep both sides in agreement and
/// to rule out cycles.
///
/// Invariant: when both `visible_from` and `visible_to` are set,
/// `visible_from < visible_to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    code: String,
    name: String,
    url: String,
    description: Option<String>,
    is_visible: bool,
    visible_from: Option<DateTime<Utc>>,
    visible_to: Option<DateTime<Utc>>,
    deleted: bool,
    parent: Option<CategoryId>,
    children: Vec<CategoryId>,
    products: Vec<ProductCategory>,
}

impl Category {
    /// Create a new, hidden category with a freshly allocated id.
    pub fn create(
        code: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> DomainResult<Self> {
        let code = code.into();
        let name = name.into();
        let url = url.into();
        guard::non_empty("code", &code)?;
        guard::non_empty("name", &name)?;
        guard::non_empty("url", &url)?;

        Ok(Self {
            id: CategoryId::generate(),
            code,
            name,
            url,
            description: None,
            is_visible: false,
            visible_from: None,
            visible_to: None,
            deleted: false,
            parent: None,
            children: Vec::new(),
            products: Vec::new(),
        })
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn visible_from(&self) -> Option<DateTime<Utc>> {
        self.visible_from
    }

    pub fn visible_to(&self) -> Option<DateTime<Utc>> {
        self.visible_to
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn parent(&self) -> Option<CategoryId> {
        self.parent
    }

    /// Child ids in insertion order. Never contains duplicates.
    pub fn children(&self) -> &[CategoryId] {
        &self.children
    }

    pub fn has_child(&self, child_id: CategoryId) -> bool {
        self.children.contains(&child_id)
    }

    pub fn product_associations(&self) -> &[ProductCategory] {
        &self.products
    }

    /// Flattened product view of the associations.
    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.products.iter().map(|pc| pc.product_id)
    }

    /// Products of `catalog` associated with this category, in catalog order.
    pub fn products_in<'a>(
        &self,
        catalog: impl IntoIterator<Item = &'a Product>,
    ) -> impl Iterator<Item = &'a Product> {
        let ids: Vec<ProductId> = self.product_ids().collect();
        catalog
            .into_iter()
            .filter(move |product| ids.contains(&product.id_typed()))
    }

    /// Whether the category is shown at `instant`: not deleted, flagged
    /// visible, and `visible_from <= instant < visible_to` for whichever
    /// bounds are set.
    pub fn is_visible_at(&self, instant: DateTime<Utc>) -> bool {
        !self.deleted
            && self.is_visible
            && self.visible_from.is_none_or(|from| from <= instant)
            && self.visible_to.is_none_or(|to| instant < to)
    }

    /// Visible from now on. See [`Category::set_as_visible`].
    pub fn set_as_visible_now(&mut self) -> DomainResult<()> {
        self.set_as_visible(Utc::now())
    }

    /// Visible from `from`; an existing `visible_to` is kept, so `from` must
    /// still precede it.
    pub fn set_as_visible(&mut self, from: DateTime<Utc>) -> DomainResult<()> {
        if let Some(to) = self.visible_to {
            if from >= to {
                return Err(DomainError::invalid_argument(
                    "the from date should be previous to the end date",
                ));
            }
        }
        self.is_visible = true;
        self.visible_from = Some(from);
        Ok(())
    }

    /// Visible within `[from, to)`.
    pub fn set_as_visible_between(
        &mut self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<()> {
        if from >= to {
            return Err(DomainError::invalid_argument(
                "the from date should be previous to the end date",
            ));
        }
        self.is_visible = true;
        self.visible_from = Some(from);
        self.visible_to = Some(to);
        Ok(())
    }

    /// Hide the category and clear its visibility window.
    pub fn set_as_hidden(&mut self) {
        self.is_visible = false;
        self.visible_from = None;
        self.visible_to = None;
    }

    pub fn add_children(&mut self, child: &Category) -> DomainResult<()> {
        let child_id = child.id_typed();
        if child_id == self.id {
            return Err(DomainError::invalid_argument("a category cannot be its own child"));
        }
        if self.has_child(child_id) {
            return Err(DomainError::invalid_state("the category already contains the child"));
        }
        self.children.push(child_id);
        Ok(())
    }

    pub fn set_parent_category(&mut self, parent: &Category) -> DomainResult<()> {
        if parent.id_typed() == self.id {
            return Err(DomainError::invalid_argument("a category cannot be its own parent"));
        }
        self.parent = Some(parent.id_typed());
        Ok(())
    }

    pub(crate) fn link_child(&mut self, child_id: CategoryId) {
        if !self.has_child(child_id) {
            self.children.push(child_id);
        }
    }

    pub(crate) fn link_parent(&mut self, parent_id: CategoryId) {
        self.parent = Some(parent_id);
    }

    pub(crate) fn unlink_child(&mut self, child_id: CategoryId) {
        self.children.retain(|id| *id != child_id);
    }

    pub(crate) fn unlink_parent(&mut self) {
        self.parent = None;
    }

    pub fn add_product(&mut self, product_id: ProductId) -> DomainResult<()> {
        if self.products.iter().any(|pc| pc.product_id == product_id) {
            return Err(DomainError::invalid_state("the category already contains the product"));
        }
        self.products.push(ProductCategory {
            category_id: self.id,
            product_id,
        });
        Ok(())
    }

    pub fn remove_product(&mut self, product_id: ProductId) -> DomainResult<()> {
        let index = self
            .products
            .iter()
            .position(|pc| pc.product_id == product_id)
            .ok_or_else(|| DomainError::invalid_state("the category does not contain the product"))?;
        self.products.remove(index);
        Ok(())
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        guard::non_empty("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn change_code(&mut self, code: impl Into<String>) -> DomainResult<()> {
        let code = code.into();
        guard::non_empty("code", &code)?;
        self.code = code;
        Ok(())
    }

    pub fn change_description(&mut self, description: impl Into<String>) -> DomainResult<()> {
        let description = description.into();
        guard::non_empty("description", &description)?;
        self.description = Some(description);
        Ok(())
    }

    pub fn change_url(&mut self, url: impl Into<String>) -> DomainResult<()> {
        let url = url.into();
        guard::non_empty("url", &url)?;
        self.url = url;
        Ok(())
    }

    pub fn delete(&mut self) -> DomainResult<()> {
        if self.deleted {
            return Err(DomainError::invalid_state("the category is already deleted"));
        }
        self.deleted = true;
        tracing::debug!(category_id = %self.id, "category deleted");
        Ok(())
    }

    pub fn restore(&mut self) -> DomainResult<()> {
        if !self.deleted {
            return Err(DomainError::invalid_state("the category is not deleted"));
        }
        self.deleted = false;
        tracing::debug!(category_id = %self.id, "category restored");
        Ok(())
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    const ENTITY_TYPE: &'static str = "catalog.category";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
