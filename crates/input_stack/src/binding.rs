//! Binding groups and their per-tick state machine.
//!
//! A [`BindingGroup`] owns the three lifecycle callbacks of one action and the
//! state needed to detect edges on its axis: whether it is currently
//! executing and which value it saw on the previous tick.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Value handed to every callback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionParam {
    /// Axis value polled this tick.
    pub axis_value: f32,
    /// Axis value the same binding observed on its previous tick.
    pub previous_frame_axis_value: f32,
}

/// Which callback of a binding fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingPhase {
    /// The axis left zero.
    Start,
    /// The axis stayed non-zero.
    Execute,
    /// The axis returned to zero.
    Cancel,
}

type Callback = Box<dyn FnMut(&ActionParam)>;

/// The callbacks and execution state attached to one axis identifier.
#[derive(Default)]
pub struct BindingGroup {
    is_executing: bool,
    previous_value: f32,
    on_start: Option<Callback>,
    on_execute: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl BindingGroup {
    /// Create an idle group without callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback fired when the axis leaves zero.
    pub fn on_start(mut self, callback: impl FnMut(&ActionParam) + 'static) -> Self {
        self.on_start = Some(Box::new(callback));
        self
    }

    /// Set the callback fired every tick the axis stays non-zero.
    pub fn on_execute(mut self, callback: impl FnMut(&ActionParam) + 'static) -> Self {
        self.on_execute = Some(Box::new(callback));
        self
    }

    /// Set the callback fired when the axis returns to zero.
    pub fn on_cancel(mut self, callback: impl FnMut(&ActionParam) + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    /// Replace the callback for `phase` on an existing group.
    pub fn set_callback(
        &mut self,
        phase: BindingPhase,
        callback: impl FnMut(&ActionParam) + 'static,
    ) {
        *self.slot(phase) = Some(Box::new(callback));
    }

    pub fn is_executing(&self) -> bool {
        self.is_executing
    }

    /// Value seen on the last call to [`advance`](Self::advance).
    pub fn previous_value(&self) -> f32 {
        self.previous_value
    }

    /// Feed this tick's axis value and fire the matching callback.
    ///
    /// Returns the phase that fired, or `None` when the axis is zero and the
    /// group was already idle.
    pub fn advance(&mut self, value: f32) -> Option<BindingPhase> {
        let (phase, param) = self.step(value)?;
        if let Some(callback) = self.slot(phase).as_mut() {
            callback(&param);
        }
        Some(phase)
    }

    /// Update the execution state for `value` and report what should fire.
    fn step(&mut self, value: f32) -> Option<(BindingPhase, ActionParam)> {
        let phase = match (value != 0.0, self.is_executing) {
            (true, false) => Some(BindingPhase::Start),
            (true, true) => Some(BindingPhase::Execute),
            (false, true) => Some(BindingPhase::Cancel),
            (false, false) => None,
        };
        let param = ActionParam {
            axis_value: value,
            previous_frame_axis_value: self.previous_value,
        };
        self.previous_value = value;

        let phase = phase?;
        self.is_executing = phase != BindingPhase::Cancel;
        Some((phase, param))
    }

    /// Drop an executing group back to idle as if its axis had hit zero.
    fn cancel_step(&mut self) -> Option<ActionParam> {
        if !self.is_executing {
            return None;
        }
        self.is_executing = false;
        let param = ActionParam {
            axis_value: 0.0,
            previous_frame_axis_value: self.previous_value,
        };
        self.previous_value = 0.0;
        Some(param)
    }

    fn slot(&mut self, phase: BindingPhase) -> &mut Option<Callback> {
        match phase {
            BindingPhase::Start => &mut self.on_start,
            BindingPhase::Execute => &mut self.on_execute,
            BindingPhase::Cancel => &mut self.on_cancel,
        }
    }
}

impl fmt::Debug for BindingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingGroup")
            .field("is_executing", &self.is_executing)
            .field("previous_value", &self.previous_value)
            .field("on_start", &self.on_start.is_some())
            .field("on_execute", &self.on_execute.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

/// Shared handle to a [`BindingGroup`].
///
/// A reserving push copies handles, not groups, so the execution flag of an
/// inherited binding is the same flag in every context that holds it.
/// The group is not borrowed while a callback runs, so callbacks may inspect
/// or reconfigure their own handle.
#[derive(Clone, Default)]
pub struct BindingHandle(Rc<RefCell<BindingGroup>>);

impl BindingHandle {
    pub fn new(group: BindingGroup) -> Self {
        Self(Rc::new(RefCell::new(group)))
    }

    pub fn borrow(&self) -> Ref<'_, BindingGroup> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, BindingGroup> {
        self.0.borrow_mut()
    }

    pub fn is_executing(&self) -> bool {
        self.0.borrow().is_executing()
    }

    /// Handle-level [`BindingGroup::advance`].
    pub fn advance(&self, value: f32) -> Option<BindingPhase> {
        let (phase, param) = self.0.borrow_mut().step(value)?;
        self.run(phase, &param);
        Some(phase)
    }

    /// Cancel an executing group as if its axis had dropped to zero.
    ///
    /// Returns `false` when the group was idle.
    pub(crate) fn force_cancel(&self) -> bool {
        let param = self.0.borrow_mut().cancel_step();
        let Some(param) = param else {
            return false;
        };
        self.run(BindingPhase::Cancel, &param);
        true
    }

    fn run(&self, phase: BindingPhase, param: &ActionParam) {
        let callback = self.0.borrow_mut().slot(phase).take();
        let Some(mut callback) = callback else {
            return;
        };
        callback(param);

        // a callback installed while this one ran takes precedence
        let mut group = self.0.borrow_mut();
        let slot = group.slot(phase);
        if slot.is_none() {
            *slot = Some(callback);
        }
    }

    /// `true` when both handles point at the same group.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<BindingGroup> for BindingHandle {
    fn from(group: BindingGroup) -> Self {
        Self::new(group)
    }
}

impl PartialEq for BindingHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for BindingHandle {}

impl fmt::Debug for BindingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(group) => group.fmt(f),
            Err(_) => f.write_str("BindingGroup(<borrowed>)"),
        }
    }
}
