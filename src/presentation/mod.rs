//! Leptos views. Each top-level view owns its input and one `RemoteResource`.

pub mod components;
pub mod resource;

pub use resource::RemoteResource;
