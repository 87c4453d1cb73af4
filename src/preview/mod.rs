//! Flat storyboard previews of frame snapshots.
//!
//! Boxes stand in for every choreographed element so timing and motion can be eyeballed
//! without a browser.

pub mod raster;
