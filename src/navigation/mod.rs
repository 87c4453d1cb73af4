//! Chapter menu and programmatic smooth scrolling.

pub mod menu;
pub mod smooth_scroll;
