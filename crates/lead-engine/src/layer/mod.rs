//! Layers and the ordered stack that holds them.

#[allow(clippy::module_inception)]
mod layer;
mod stack;

pub use layer::{Layer, LayerId};
pub use stack::LayerStack;
