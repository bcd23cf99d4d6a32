//! Action contexts: one layer of bindings on the input stack.

use crate::binding::{BindingGroup, BindingHandle};
use indexmap::IndexMap;
use std::cell::{BorrowMutError, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Key of a binding inside a context.
///
/// With aliasing off this is the physical axis name; with aliasing on it is
/// the logical action name looked up in the [`AliasTable`](crate::AliasTable).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisId(Arc<str>);

impl AxisId {
    pub fn new(id: impl Into<String>) -> Self {
        let id: String = id.into();
        Self(Arc::<str>::from(id.into_boxed_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AxisId {
    fn from(value: &str) -> Self {
        Self(Arc::<str>::from(value))
    }
}

impl From<String> for AxisId {
    fn from(value: String) -> Self {
        Self(Arc::<str>::from(value.into_boxed_str()))
    }
}

impl std::borrow::Borrow<str> for AxisId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named set of bindings keyed by [`AxisId`].
///
/// The name is informational only; two contexts with the same name are still
/// distinct layers.
#[derive(Debug, Default)]
pub struct ActionContext {
    name: String,
    bindings: IndexMap<AxisId, BindingHandle>,
}

impl ActionContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: IndexMap::new(),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_binding(
        mut self,
        axis: impl Into<AxisId>,
        group: impl Into<BindingHandle>,
    ) -> Self {
        self.insert(axis, group);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add or replace the binding for `axis`, returning the previous one.
    pub fn insert(
        &mut self,
        axis: impl Into<AxisId>,
        group: impl Into<BindingHandle>,
    ) -> Option<BindingHandle> {
        self.bindings.insert(axis.into(), group.into())
    }

    pub fn remove(&mut self, axis: &str) -> Option<BindingHandle> {
        self.bindings.shift_remove(axis)
    }

    pub fn get(&self, axis: &str) -> Option<&BindingHandle> {
        self.bindings.get(axis)
    }

    pub fn contains(&self, axis: &str) -> bool {
        self.bindings.contains_key(axis)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over `(axis, binding)` pairs in insertion order.
    pub fn bindings(&self) -> impl ExactSizeIterator<Item = (&AxisId, &BindingHandle)> {
        self.bindings.iter()
    }

    /// Build the view used by a reserving push: this context's bindings plus
    /// every binding of `below` whose key this context does not define.
    ///
    /// Inherited bindings are shared handles, not copies.
    pub(crate) fn merged_over(&self, below: Option<&ActionContext>) -> ActionContext {
        let mut bindings = self.bindings.clone();
        for (axis, binding) in below.into_iter().flat_map(|below| below.bindings()) {
            if !bindings.contains_key(axis.as_str()) {
                bindings.insert(axis.clone(), binding.clone());
            }
        }
        ActionContext {
            name: self.name.clone(),
            bindings,
        }
    }
}

/// Shared, identity-compared handle to an [`ActionContext`].
///
/// The stack manager tracks contexts by handle identity, so the same handle
/// must be passed to [`InputStack::remove`](crate::InputStack::remove) that
/// was passed to [`InputStack::push`](crate::InputStack::push).
#[derive(Clone)]
pub struct ContextHandle(Rc<RefCell<ActionContext>>);

impl ContextHandle {
    pub fn new(context: ActionContext) -> Self {
        Self(Rc::new(RefCell::new(context)))
    }

    pub fn borrow(&self) -> Ref<'_, ActionContext> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, ActionContext> {
        self.0.borrow_mut()
    }

    pub(crate) fn try_borrow_mut(&self) -> Result<RefMut<'_, ActionContext>, BorrowMutError> {
        self.0.try_borrow_mut()
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    /// Convenience for adding a binding through the handle.
    pub fn insert(&self, axis: impl Into<AxisId>, group: BindingGroup) -> Option<BindingHandle> {
        self.0.borrow_mut().insert(axis, group)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<ActionContext> for ContextHandle {
    fn from(context: ActionContext) -> Self {
        Self::new(context)
    }
}

impl PartialEq for ContextHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ContextHandle {}

impl fmt::Debug for ContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(context) => f
                .debug_struct("ContextHandle")
                .field("name", &context.name)
                .field("bindings", &context.bindings.len())
                .finish(),
            Err(_) => f.write_str("ContextHandle(<borrowed>)"),
        }
    }
}
