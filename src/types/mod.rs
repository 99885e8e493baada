// ABOUTME: Domain types shared by the runtime and configuration layers.
// ABOUTME: Container references are opaque strings owned by the engine.

mod container_ref;

pub use container_ref::ContainerRef;
