//! Controller layer: UI events, navigation state, and event dispatch onto the order form.

pub mod events;
pub mod navigation;
pub mod orchestration;
