//! Layered input contexts with per-frame axis bindings.
//!
//! Screens and game modes push [`ActionContext`]s onto an [`InputStack`]; once
//! per frame [`InputStack::tick`] polls the axes bound by the topmost context
//! and drives each binding through start, execute and cancel. Contexts can be
//! pushed *reserving* the layer below, which keeps the lower layer's bindings
//! alive wherever the new layer does not override them.
//!
//! Axis names can be indirected through an [`AliasTable`] so that bindings
//! refer to logical actions ("Jump") while the table decides which physical
//! axis ("Vertical") feeds them.
//!
//! # Example
//!
//! ```
//! use input_stack::{ActionContext, AxisValues, BindingGroup, ContextHandle, InputStack};
//!
//! let mut stack = InputStack::default();
//! let main = ContextHandle::new(
//!     ActionContext::new("Main")
//!         .with_binding(
//!             "Fire1",
//!             BindingGroup::new().on_start(|p| println!("fire {}", p.axis_value)),
//!         ),
//! );
//! stack.push(main, false).unwrap();
//!
//! let mut axes = AxisValues::new();
//! axes.set("Fire1", 1.0);
//! stack.tick(&axes);
//! ```

pub mod alias;
pub mod axis;
pub mod binding;
pub mod config;
pub mod context;
pub mod error;
pub mod stack;
pub mod store;

#[cfg(feature = "bevy")]
pub mod bevy;

// Re-export main types
pub use alias::{AliasEntry, AliasTable};
pub use axis::{AxisSource, AxisValues};
pub use binding::{ActionParam, BindingGroup, BindingHandle, BindingPhase};
pub use config::InputStackConfig;
pub use context::{ActionContext, AxisId, ContextHandle};
pub use error::{AliasError, StackError};
pub use stack::{InputStack, TickStats};
pub use store::AliasFile;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
