//! The context stack manager.
//!
//! [`InputStack`] keeps two stacks in lock-step:
//!
//! - the *main* stack holds the context each layer actually evaluates. For a
//!   reserving push this is a merged view of the new context over the layer
//!   below it, rebuilt whenever the stack reads it so that later edits to
//!   either context show through.
//! - the *non-reserve* stack holds the context exactly as the caller pushed
//!   it.
//!
//! Only the top of the main stack is evaluated by [`InputStack::tick`]; lower
//! layers stay inert until the layers above them are popped or removed.
//! Popped layers are parked in a retirement pool.

use crate::alias::{AliasEntry, AliasTable};
use crate::axis::AxisSource;
use crate::binding::BindingHandle;
use crate::config::InputStackConfig;
use crate::context::{ActionContext, AxisId, ContextHandle};
use crate::error::{AliasError, StackError};
use crate::store::AliasFile;
use anyhow::Result;
use indexmap::IndexMap;
use tracing::{debug, error};

/// Counters describing one call to [`InputStack::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Bindings whose axis was polled.
    pub evaluated: usize,
    /// Bindings that fired a callback.
    pub fired: usize,
    /// Bindings skipped because their action has no alias.
    pub unresolved: usize,
}

/// Layered input contexts driven once per frame.
#[derive(Debug)]
pub struct InputStack {
    main: Vec<ContextHandle>,
    non_reserve: Vec<ContextHandle>,
    pool: Vec<ContextHandle>,
    current: Option<ContextHandle>,
    use_alias_table: bool,
    aliases: AliasTable,
    cancel_on_exit: bool,
}

impl Default for InputStack {
    fn default() -> Self {
        Self::initialize(false, None)
    }
}

impl InputStack {
    /// Create an empty stack.
    ///
    /// With `use_alias_table` set, context keys are action names resolved
    /// through a table built from `alias_config`. A missing config is logged
    /// and leaves the table empty, so every aliased binding stays unresolved
    /// until [`set_aliases`](Self::set_aliases) is called.
    pub fn initialize(use_alias_table: bool, alias_config: Option<&[AliasEntry]>) -> Self {
        let mut stack = Self {
            main: Vec::new(),
            non_reserve: Vec::new(),
            pool: Vec::new(),
            current: None,
            use_alias_table: false,
            aliases: AliasTable::new(),
            cancel_on_exit: false,
        };
        stack.reinitialize(use_alias_table, alias_config);
        stack
    }

    /// Build a stack from settings, loading the alias file if one is named.
    pub fn from_config(config: &InputStackConfig) -> Result<Self> {
        let entries = match (&config.alias_file, config.use_alias_table) {
            (Some(path), true) => Some(AliasFile::load(path)?.entries),
            _ => None,
        };

        let mut stack = Self::initialize(config.use_alias_table, entries.as_deref());
        stack.cancel_on_exit = config.cancel_on_exit;
        Ok(stack)
    }

    /// Reset every stack and rebuild the alias table.
    pub fn reinitialize(&mut self, use_alias_table: bool, alias_config: Option<&[AliasEntry]>) {
        self.dispose();
        self.use_alias_table = use_alias_table;
        self.aliases = match (use_alias_table, alias_config) {
            (false, _) => AliasTable::new(),
            (true, Some(entries)) => AliasTable::from_entries(entries),
            (true, None) => {
                error!(error = %AliasError::MissingConfig, "alias table left empty");
                AliasTable::new()
            }
        };
    }

    /// Drop all contexts, including retired ones.
    pub fn dispose(&mut self) {
        self.main.clear();
        self.non_reserve.clear();
        self.pool.clear();
        self.current = None;
    }

    pub fn uses_alias_table(&self) -> bool {
        self.use_alias_table
    }

    pub fn set_cancel_on_exit(&mut self, enabled: bool) {
        self.cancel_on_exit = enabled;
    }

    // ------------------------------------------------------------------
    // Stack structure
    // ------------------------------------------------------------------

    /// Push a new layer.
    ///
    /// With `reserve`, bindings of the current top that `context` does not
    /// define stay active in the new layer. The inherited bindings are shared
    /// with the layer below, execution state included. `context` itself is
    /// not modified; bindings added to it later are picked up by the merged
    /// view on the next tick.
    pub fn push(&mut self, context: ContextHandle, reserve: bool) -> Result<(), StackError> {
        let effective = if reserve {
            if self.main.is_empty() {
                return Err(StackError::NothingToReserve(context.name()));
            }
            ContextHandle::new(ActionContext::new(context.name()))
        } else {
            context.clone()
        };

        debug!(
            context = %context.name(),
            reserve,
            depth = self.main.len() + 1,
            "pushed input context"
        );

        self.main.push(effective.clone());
        self.non_reserve.push(context);
        self.current = Some(effective);
        self.refresh_top();
        Ok(())
    }

    /// Pop the top layer and return the context the caller pushed for it.
    ///
    /// The evaluated view of the popped layer goes to the retirement pool.
    pub fn pop_top(&mut self) -> Result<ContextHandle, StackError> {
        debug_assert_eq!(self.main.len(), self.non_reserve.len());
        let (Some(top), Some(own)) = (self.main.pop(), self.non_reserve.pop()) else {
            return Err(StackError::Empty);
        };

        if let Some(previous) = self.current.take() {
            self.pool.push(previous);
        }
        self.current = self.main.last().cloned();

        if self.cancel_on_exit {
            self.cancel_exited(&top);
        }

        debug!(context = %own.name(), depth = self.main.len(), "popped input context");
        Ok(own)
    }

    /// Remove the topmost layer holding `context`, wherever it sits.
    ///
    /// `context` may be either the handle the caller pushed or the merged
    /// view of a reserving push. Layers above the removed one keep their
    /// order. Fails without touching anything when `context` is not on the
    /// stack.
    ///
    /// A reserving layer directly above the removed one inherits from
    /// whatever layer ends up below it.
    pub fn remove(&mut self, context: &ContextHandle) -> Result<(), StackError> {
        debug_assert_eq!(self.main.len(), self.non_reserve.len());
        let depth = self
            .main
            .iter()
            .zip(&self.non_reserve)
            .rposition(|(main, own)| main.ptr_eq(context) || own.ptr_eq(context))
            .ok_or_else(|| StackError::NotFound(context.name()))?;

        let was_top = depth + 1 == self.main.len();
        let removed = self.main.remove(depth);
        self.non_reserve.remove(depth);

        if was_top {
            self.current = self.main.last().cloned();
            if self.cancel_on_exit {
                self.cancel_exited(&removed);
            }
        }

        debug!(context = %context.name(), depth, "removed input context");
        Ok(())
    }

    /// The layer evaluated by the next tick.
    ///
    /// For a reserving layer this is the merged view, not the handle passed
    /// to [`push`](Self::push). Edits made through the view are discarded
    /// when it is rebuilt; add bindings to the pushed context instead.
    pub fn current(&self) -> Option<&ContextHandle> {
        self.refresh_top();
        self.current.as_ref()
    }

    pub fn depth(&self) -> usize {
        self.main.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }

    /// Evaluated views, bottom to top.
    pub fn contexts(&self) -> &[ContextHandle] {
        for depth in 0..self.main.len() {
            self.rebuild_view(depth);
        }
        &self.main
    }

    /// Contexts as they were pushed, bottom to top.
    pub fn pushed_contexts(&self) -> &[ContextHandle] {
        &self.non_reserve
    }

    /// Layers retired by [`pop_top`](Self::pop_top), oldest first.
    pub fn retired(&self) -> &[ContextHandle] {
        &self.pool
    }

    pub fn contains(&self, context: &ContextHandle) -> bool {
        self.main
            .iter()
            .chain(&self.non_reserve)
            .any(|entry| entry.ptr_eq(context))
    }

    fn is_reserving(&self, depth: usize) -> bool {
        match (self.main.get(depth), self.non_reserve.get(depth)) {
            (Some(view), Some(own)) => !view.ptr_eq(own),
            _ => false,
        }
    }

    /// Rebuild the top view and the chain of reserving layers it inherits
    /// from, bottom-up.
    fn refresh_top(&self) {
        let Some(top) = self.main.len().checked_sub(1) else {
            return;
        };
        let mut start = top + 1;
        while start > 0 && self.is_reserving(start - 1) {
            start -= 1;
        }
        for depth in start..=top {
            self.rebuild_view(depth);
        }
    }

    /// Re-merge the context pushed at `depth` over the view below it.
    /// Plain layers are their own view and are left alone.
    fn rebuild_view(&self, depth: usize) {
        if !self.is_reserving(depth) {
            return;
        }
        let (Some(view), Some(own)) = (self.main.get(depth), self.non_reserve.get(depth)) else {
            return;
        };
        let below = depth.checked_sub(1).and_then(|below| self.main.get(below));
        let below = below.map(|below| below.borrow());
        let merged = own.borrow().merged_over(below.as_deref());
        drop(below);

        match view.try_borrow_mut() {
            Ok(mut view) => *view = merged,
            Err(_) => debug!(depth, "merged view is borrowed, keeping previous bindings"),
        }
    }

    /// Cancel executing bindings of a layer that just left the top, unless
    /// the new top shares them.
    fn cancel_exited(&self, exited: &ContextHandle) {
        self.refresh_top();
        let survivors: Vec<BindingHandle> = self
            .main
            .last()
            .map(|top| top.borrow().bindings().map(|(_, b)| b.clone()).collect())
            .unwrap_or_default();
        let exited = snapshot_bindings(exited);

        for (axis, binding) in exited {
            if survivors.iter().any(|s| s.ptr_eq(&binding)) {
                continue;
            }
            if binding.force_cancel() {
                debug!(axis = %axis, "cancelled binding on context exit");
            }
        }
    }

    // ------------------------------------------------------------------
    // Alias table
    // ------------------------------------------------------------------

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn aliases_mut(&mut self) -> &mut AliasTable {
        &mut self.aliases
    }

    /// Replace the alias mapping wholesale.
    pub fn set_aliases(&mut self, entries: IndexMap<String, String>) {
        self.aliases.set(entries);
    }

    /// Rebind `action` to `axis`, e.g. from a controls menu.
    pub fn rename_alias(
        &mut self,
        action: &str,
        axis: impl Into<String>,
    ) -> Result<(), AliasError> {
        self.aliases.rename(action, axis).inspect_err(|err| {
            error!(%err, "alias rename rejected");
        })
    }

    pub fn swap_aliases(&mut self, action: &str, other: &str) -> Result<(), AliasError> {
        self.aliases.swap(action, other).inspect_err(|err| {
            error!(%err, "alias swap rejected");
        })
    }

    pub fn export_aliases(&self) -> Vec<AliasEntry> {
        self.aliases.export()
    }

    // ------------------------------------------------------------------
    // Per-frame evaluation
    // ------------------------------------------------------------------

    /// Poll every binding of the top layer once and advance its state.
    ///
    /// Call once per frame after the frame's input is available. A binding
    /// whose action has no alias is logged and skipped; its siblings are
    /// still evaluated. Callbacks run synchronously. No context or binding
    /// is borrowed while they run, so they may edit contexts on the stack;
    /// such edits take effect on the next tick.
    pub fn tick<S: AxisSource + ?Sized>(&mut self, source: &S) -> TickStats {
        let mut stats = TickStats::default();
        self.refresh_top();
        let Some(top) = self.main.last() else {
            return stats;
        };

        let name = top.name();
        for (key, binding) in snapshot_bindings(top) {
            let axis = if self.use_alias_table {
                match self.aliases.resolve(key.as_str()) {
                    Some(axis) => axis,
                    None => {
                        error!(
                            action = %key,
                            context = %name,
                            "action not present in alias table"
                        );
                        stats.unresolved += 1;
                        continue;
                    }
                }
            } else {
                key.as_str()
            };

            let value = source.axis(axis);
            stats.evaluated += 1;
            if binding.advance(value).is_some() {
                stats.fired += 1;
            }
        }
        stats
    }
}

fn snapshot_bindings(context: &ContextHandle) -> Vec<(AxisId, BindingHandle)> {
    context
        .borrow()
        .bindings()
        .map(|(key, binding)| (key.clone(), binding.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisValues;
    use crate::binding::{BindingGroup, BindingPhase};
    use crate::context::ActionContext;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn context(name: &str, axes: &[&str]) -> ContextHandle {
        let mut context = ActionContext::new(name);
        for axis in axes {
            context.insert(*axis, BindingGroup::new());
        }
        ContextHandle::new(context)
    }

    fn snapshot(stack: &InputStack) -> (Vec<ContextHandle>, Vec<ContextHandle>) {
        (stack.contexts().to_vec(), stack.pushed_contexts().to_vec())
    }

    #[test]
    fn push_and_pop_keep_stacks_in_step() {
        let mut stack = InputStack::default();
        let a = context("A", &["Horizontal"]);
        let b = context("B", &["Vertical"]);

        stack.push(a.clone(), false).unwrap();
        stack.push(b.clone(), false).unwrap();
        assert_eq!(stack.contexts().len(), stack.pushed_contexts().len());
        assert_eq!(stack.current(), Some(&b));

        assert_eq!(stack.pop_top().unwrap(), b);
        assert_eq!(stack.contexts().len(), stack.pushed_contexts().len());
        assert_eq!(stack.current(), Some(&a));
        assert_eq!(stack.retired(), &[b]);
    }

    #[test]
    fn pop_on_empty_fails_without_mutation() {
        let mut stack = InputStack::default();
        assert_eq!(stack.pop_top(), Err(StackError::Empty));
        assert!(stack.is_empty());
        assert!(stack.retired().is_empty());
        assert!(stack.current().is_none());
    }

    #[test]
    fn reserve_on_empty_stack_fails() {
        let mut stack = InputStack::default();
        let a = context("A", &["Fire"]);

        assert_eq!(
            stack.push(a, true),
            Err(StackError::NothingToReserve("A".into()))
        );
        assert!(stack.is_empty());
        assert!(stack.current().is_none());
    }

    #[test]
    fn reserve_merges_without_touching_pushed_context() {
        let mut stack = InputStack::default();
        let a = context("A", &["Fire", "Jump"]);
        let b = context("B", &["Fire"]);
        let b_fire = b.borrow().get("Fire").cloned().unwrap();
        let a_jump = a.borrow().get("Jump").cloned().unwrap();

        stack.push(a, false).unwrap();
        stack.push(b.clone(), true).unwrap();

        let top = stack.current().unwrap().clone();
        assert_ne!(top, b);
        assert_eq!(top.borrow().get("Fire"), Some(&b_fire));
        assert_eq!(top.borrow().get("Jump"), Some(&a_jump));
        assert_eq!(b.borrow().len(), 1);
        assert_eq!(stack.pushed_contexts().last(), Some(&b));
    }

    #[test]
    fn remove_absent_context_is_a_no_op() {
        let mut stack = InputStack::default();
        stack.push(context("A", &[]), false).unwrap();
        stack.push(context("B", &[]), false).unwrap();
        let before = snapshot(&stack);

        let stranger = context("A", &[]);
        assert_eq!(
            stack.remove(&stranger),
            Err(StackError::NotFound("A".into()))
        );
        assert_eq!(snapshot(&stack), before);
    }

    #[test]
    fn remove_from_middle_preserves_order() {
        let mut stack = InputStack::default();
        let a = context("A", &[]);
        let b = context("B", &[]);
        let c = context("C", &[]);
        for ctx in [&a, &b, &c] {
            stack.push(ctx.clone(), false).unwrap();
        }

        stack.remove(&b).unwrap();

        assert_eq!(stack.contexts(), &[a.clone(), c.clone()]);
        assert_eq!(stack.pushed_contexts(), &[a, c.clone()]);
        assert_eq!(stack.current(), Some(&c));
    }

    #[test]
    fn remove_matches_reserved_layer_by_pushed_handle() {
        let mut stack = InputStack::default();
        let a = context("A", &["Fire"]);
        let b = context("B", &["Jump"]);
        stack.push(a.clone(), false).unwrap();
        stack.push(b.clone(), true).unwrap();

        stack.remove(&b).unwrap();

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), Some(&a));
        assert!(!stack.contains(&b));
    }

    #[test]
    fn remove_takes_topmost_duplicate() {
        let mut stack = InputStack::default();
        let a = context("A", &[]);
        let b = context("B", &[]);
        stack.push(a.clone(), false).unwrap();
        stack.push(b.clone(), false).unwrap();
        stack.push(a.clone(), false).unwrap();

        stack.remove(&a).unwrap();

        assert_eq!(stack.contexts(), &[a, b.clone()]);
        assert_eq!(stack.current(), Some(&b));
    }

    #[test]
    fn tick_only_evaluates_top_layer() {
        let mut stack = InputStack::default();
        let a = context("A", &["Horizontal"]);
        let b = context("B", &["Vertical"]);
        stack.push(a.clone(), false).unwrap();
        stack.push(b.clone(), false).unwrap();

        let axes: AxisValues = [("Horizontal", 1.0), ("Vertical", 1.0)].into_iter().collect();
        let stats = stack.tick(&axes);

        assert_eq!(stats.evaluated, 1);
        assert!(b.borrow().get("Vertical").unwrap().is_executing());
        assert!(!a.borrow().get("Horizontal").unwrap().is_executing());
    }

    #[test_log::test]
    fn unresolved_alias_does_not_block_siblings() {
        let entries = [AliasEntry::new("Jump", "Vertical")];
        let mut stack = InputStack::initialize(true, Some(&entries[..]));
        let ctx = context("Gameplay", &["Fire", "Jump"]);
        stack.push(ctx.clone(), false).unwrap();

        let axes: AxisValues = [("Vertical", 1.0), ("Fire", 1.0)].into_iter().collect();
        let stats = stack.tick(&axes);

        assert_eq!(
            stats,
            TickStats {
                evaluated: 1,
                fired: 1,
                unresolved: 1
            }
        );
        assert!(ctx.borrow().get("Jump").unwrap().is_executing());
        assert!(!ctx.borrow().get("Fire").unwrap().is_executing());
    }

    #[test_log::test]
    fn missing_alias_config_leaves_table_empty() {
        let stack = InputStack::initialize(true, None);
        assert!(stack.uses_alias_table());
        assert!(stack.aliases().is_empty());
    }

    #[test]
    fn cancel_on_exit_skips_shared_bindings() {
        let cancels = Rc::new(RefCell::new(Vec::new()));
        let group = |name: &'static str| {
            let cancels = Rc::clone(&cancels);
            BindingGroup::new().on_cancel(move |_| cancels.borrow_mut().push(name))
        };

        let mut stack = InputStack::default();
        stack.set_cancel_on_exit(true);
        let a = ContextHandle::new(ActionContext::new("A").with_binding("Move", group("move")));
        let b = ContextHandle::new(ActionContext::new("B").with_binding("Fire", group("fire")));
        stack.push(a, false).unwrap();
        stack.push(b, true).unwrap();

        let axes: AxisValues = [("Move", 1.0), ("Fire", 1.0)].into_iter().collect();
        stack.tick(&axes);
        stack.pop_top().unwrap();

        // "Move" is shared with the exposed layer and keeps executing
        assert_eq!(*cancels.borrow(), vec!["fire"]);
        let current = stack.current().unwrap().clone();
        assert!(current.borrow().get("Move").unwrap().is_executing());
    }

    #[test]
    fn bindings_added_after_reserving_push_are_evaluated() {
        let mut stack = InputStack::default();
        let a = context("A", &["Fire"]);
        let b = context("B", &[]);
        stack.push(a, false).unwrap();
        stack.push(b.clone(), true).unwrap();

        b.insert("Late", BindingGroup::new());
        let axes: AxisValues = [("Late", 1.0)].into_iter().collect();
        let stats = stack.tick(&axes);

        assert_eq!(stats.fired, 1);
        assert_eq!(stats.evaluated, 2);
        assert!(b.borrow().get("Late").unwrap().is_executing());
        assert!(stack.current().unwrap().borrow().contains("Late"));
    }

    #[test]
    fn reserving_layer_follows_lower_layer_edits() {
        let mut stack = InputStack::default();
        let a = context("A", &[]);
        let b = context("B", &["Fire"]);
        stack.push(a.clone(), false).unwrap();
        stack.push(b, true).unwrap();

        a.insert("Jump", BindingGroup::new());

        let top = stack.current().unwrap().clone();
        assert_eq!(top.borrow().get("Jump"), a.borrow().get("Jump"));
    }

    #[test]
    fn removing_the_reserved_layer_drops_inherited_bindings() {
        let mut stack = InputStack::default();
        let a = context("A", &["Fire"]);
        let b = context("B", &["Jump"]);
        stack.push(a.clone(), false).unwrap();
        stack.push(b.clone(), true).unwrap();

        stack.remove(&a).unwrap();
        let axes: AxisValues = [("Fire", 1.0), ("Jump", 1.0)].into_iter().collect();
        let stats = stack.tick(&axes);

        assert_eq!(stats.evaluated, 1);
        assert!(!a.borrow().get("Fire").unwrap().is_executing());
        assert!(b.borrow().get("Jump").unwrap().is_executing());
    }

    #[test]
    fn callbacks_may_touch_their_context_during_tick() {
        let mut stack = InputStack::default();
        let ctx = ContextHandle::new(ActionContext::new("Main"));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let (inner, observed) = (ctx.clone(), Rc::clone(&seen));
        let handle = BindingHandle::new(BindingGroup::new());
        let own = handle.clone();
        handle
            .borrow_mut()
            .set_callback(BindingPhase::Start, move |_| {
                observed.borrow_mut().push(own.is_executing());
                inner.insert("Spawned", BindingGroup::new());
            });
        ctx.borrow_mut().insert("Fire", handle);
        stack.push(ctx.clone(), false).unwrap();

        let axes: AxisValues = [("Fire", 1.0), ("Spawned", 1.0)].into_iter().collect();
        let first = stack.tick(&axes);
        let second = stack.tick(&axes);

        assert_eq!(*seen.borrow(), vec![true]);
        assert_eq!(first.evaluated, 1);
        assert_eq!(second.evaluated, 2);
        assert!(ctx.borrow().get("Spawned").unwrap().is_executing());
    }

    #[test]
    fn cancel_on_exit_applies_to_removed_top() {
        let cancels = Rc::new(RefCell::new(Vec::new()));
        let group = |name: &'static str| {
            let cancels = Rc::clone(&cancels);
            BindingGroup::new().on_cancel(move |_| cancels.borrow_mut().push(name))
        };

        let mut stack = InputStack::default();
        stack.set_cancel_on_exit(true);
        let a = ContextHandle::new(ActionContext::new("A").with_binding("Move", group("move")));
        let b = ContextHandle::new(ActionContext::new("B").with_binding("Fire", group("fire")));
        stack.push(a, false).unwrap();
        stack.push(b.clone(), false).unwrap();

        let axes: AxisValues = [("Fire", 1.0)].into_iter().collect();
        stack.tick(&axes);
        stack.remove(&b).unwrap();

        assert_eq!(*cancels.borrow(), vec!["fire"]);
        assert!(!b.borrow().get("Fire").unwrap().is_executing());
    }

    #[test]
    fn removing_a_lower_layer_does_not_cancel() {
        let cancels = Rc::new(RefCell::new(Vec::new()));
        let group = |name: &'static str| {
            let cancels = Rc::clone(&cancels);
            BindingGroup::new().on_cancel(move |_| cancels.borrow_mut().push(name))
        };

        let mut stack = InputStack::default();
        stack.set_cancel_on_exit(true);
        let a = ContextHandle::new(ActionContext::new("A").with_binding("Move", group("move")));
        let b = ContextHandle::new(ActionContext::new("B").with_binding("Fire", group("fire")));
        stack.push(a.clone(), false).unwrap();
        stack.tick(&[("Move", 1.0)].into_iter().collect::<AxisValues>());
        stack.push(b.clone(), false).unwrap();
        stack.tick(&[("Fire", 1.0)].into_iter().collect::<AxisValues>());

        stack.remove(&a).unwrap();

        assert!(cancels.borrow().is_empty());
        assert!(a.borrow().get("Move").unwrap().is_executing());
        assert_eq!(stack.current(), Some(&b));
    }

    #[test]
    fn remove_accepts_merged_view_handle() {
        let mut stack = InputStack::default();
        let a = context("A", &["Fire"]);
        let b = context("B", &["Jump"]);
        stack.push(a.clone(), false).unwrap();
        stack.push(b.clone(), true).unwrap();

        let view = stack.current().unwrap().clone();
        assert_ne!(view, b);
        stack.remove(&view).unwrap();

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), Some(&a));
        assert!(!stack.contains(&b));
        assert!(!stack.contains(&view));
    }

    #[test]
    fn dispose_clears_everything() {
        let mut stack = InputStack::default();
        stack.push(context("A", &[]), false).unwrap();
        stack.push(context("B", &[]), false).unwrap();
        stack.pop_top().unwrap();

        stack.dispose();

        assert!(stack.is_empty());
        assert!(stack.pushed_contexts().is_empty());
        assert!(stack.retired().is_empty());
        assert!(stack.current().is_none());
    }
}
