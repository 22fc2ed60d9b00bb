//! Core, DOM-free state machines and helpers for the behavior layer.
pub mod ancillary;
pub mod breakpoints;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod menu;
pub mod reveal;
pub mod startup;
pub mod tabs;
pub mod theme;
pub mod time;
pub mod tooltip;
