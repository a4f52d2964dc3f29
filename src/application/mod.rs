//! The fetch/render contract shared by every view: endpoint definitions,
//! the per-view request state machine and chart assembly.

pub mod chart_service;
pub mod endpoints;
pub mod resource;
