//! Bevy integration for the input stack.
//!
//! The plugin installs:
//! - [`InputStack`] as a non-send resource (bindings hold `Rc` callbacks),
//! - [`AxisValues`] as a regular resource the game fills every frame,
//! - a `PreUpdate` system in [`InputStackSystems`] that ticks the stack.
//!
//! # Usage
//!
//! ```ignore
//! use bevy::prelude::*;
//! use input_stack::bevy::{InputStackPlugin, InputStackSystems};
//! use input_stack::AxisValues;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(InputStackPlugin::default())
//!         .add_systems(PreUpdate, read_gamepad.before(InputStackSystems))
//!         .run();
//! }
//!
//! fn read_gamepad(mut axes: ResMut<AxisValues>) {
//!     axes.set("Horizontal", 0.5);
//! }
//! ```

use crate::axis::AxisValues;
use crate::config::InputStackConfig;
use crate::stack::InputStack;
use bevy::prelude::*;

/// System set containing the per-frame tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputStackSystems;

#[derive(Default)]
pub struct InputStackPlugin {
    pub config: InputStackConfig,
}

impl InputStackPlugin {
    pub fn with_config(config: InputStackConfig) -> Self {
        Self { config }
    }
}

impl Plugin for InputStackPlugin {
    fn build(&self, app: &mut App) {
        let stack = InputStack::from_config(&self.config).unwrap_or_else(|err| {
            tracing::error!("Failed to load input stack config: {err:#}");
            InputStack::default()
        });

        app.insert_non_send_resource(stack)
            .init_resource::<AxisValues>()
            .add_systems(PreUpdate, tick_input_stack.in_set(InputStackSystems));
    }

    fn name(&self) -> &str {
        "InputStackPlugin"
    }
}

fn tick_input_stack(mut stack: NonSendMut<InputStack>, axes: Res<AxisValues>) {
    stack.tick(&*axes);
}
