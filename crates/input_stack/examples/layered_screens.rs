//! Two-layer input stack driven by a scripted sequence of frames.
//!
//! A gameplay layer binds "Fire" and "Move". A pause menu is pushed on top,
//! reserving the gameplay layer so "Move" keeps working, while "Fire" is
//! rebound to the menu's confirm action. Logical names are resolved through
//! an alias table.
//!
//! Run with `cargo run -p input_stack --example layered_screens`.

use input_stack::{
    ActionContext, AliasEntry, AxisValues, BindingGroup, ContextHandle, InputStack,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn logging(name: &'static str) -> BindingGroup {
    BindingGroup::new()
        .on_start(move |p| info!(action = name, value = p.axis_value, "start"))
        .on_execute(move |p| {
            info!(
                action = name,
                value = p.axis_value,
                delta = p.axis_value - p.previous_frame_axis_value,
                "execute"
            )
        })
        .on_cancel(move |_| info!(action = name, "cancel"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let aliases = [
        AliasEntry::new("Fire", "Fire1"),
        AliasEntry::new("Move", "Horizontal"),
    ];
    let mut stack = InputStack::initialize(true, Some(&aliases[..]));

    let gameplay = ContextHandle::new(
        ActionContext::new("Gameplay")
            .with_binding("Fire", logging("gameplay/fire"))
            .with_binding("Move", logging("gameplay/move")),
    );
    let pause = ContextHandle::new(
        ActionContext::new("Pause").with_binding("Fire", logging("pause/confirm")),
    );

    if let Err(err) = stack.push(gameplay, false) {
        eprintln!("push failed: {err}");
        return;
    }

    let frames: [&[(&str, f32)]; 6] = [
        &[("Horizontal", 0.3)],
        &[("Horizontal", 0.6), ("Fire1", 1.0)],
        &[("Horizontal", 0.6)],
        &[("Horizontal", 0.6), ("Fire1", 1.0)],
        &[("Horizontal", 0.0), ("Fire1", 1.0)],
        &[],
    ];

    for (index, frame) in frames.iter().enumerate() {
        if index == 2 {
            info!("opening pause menu");
            if let Err(err) = stack.push(pause.clone(), true) {
                eprintln!("push failed: {err}");
                return;
            }
        }
        if index == 5 {
            info!("closing pause menu");
            if let Err(err) = stack.remove(&pause) {
                eprintln!("remove failed: {err}");
                return;
            }
        }

        let axes: AxisValues = frame.iter().copied().collect();
        let stats = stack.tick(&axes);
        info!(frame = index, evaluated = stats.evaluated, fired = stats.fired, "tick");
    }

    if let Err(err) = stack.swap_aliases("Fire", "Move") {
        eprintln!("swap failed: {err}");
        return;
    }
    for entry in stack.export_aliases() {
        info!(action = %entry.action, axis = %entry.axis, "alias");
    }
}
