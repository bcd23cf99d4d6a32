//! The per-frame axis value source.

use std::collections::HashMap;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Something that can report the current value of a named axis.
///
/// Unknown axes read as `0.0`, which leaves their bindings idle.
pub trait AxisSource {
    fn axis(&self, name: &str) -> f32;
}

impl<F> AxisSource for F
where
    F: Fn(&str) -> f32,
{
    fn axis(&self, name: &str) -> f32 {
        self(name)
    }
}

/// Axis values written by the host once per frame.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct AxisValues {
    values: HashMap<String, f32>,
}

impl AxisValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f32) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    /// Drop every value, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl AxisSource for AxisValues {
    fn axis(&self, name: &str) -> f32 {
        self.get(name).unwrap_or(0.0)
    }
}

impl<K: Into<String>> FromIterator<(K, f32)> for AxisValues {
    fn from_iter<T: IntoIterator<Item = (K, f32)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
