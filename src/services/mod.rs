// Service module exports

pub mod event;
pub mod gesture;
pub mod layout;
pub mod settings;
