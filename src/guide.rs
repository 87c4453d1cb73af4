//! # Curtain guide
//!
//! A walkthrough of how a scroll position becomes per-element styles.
//! For commands, see the CLI's `--help`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Page`](crate::Page): the ordered sections, chapter menu and soundtrack of one story page
//! - [`SectionKind`](crate::SectionKind): a section type plus its content (text lines, media)
//! - [`Recipe`](crate::Recipe): a section's scroll offset and keyframe tables, built by
//!   [`recipe`](crate::recipe)
//! - [`ScrollHub`](crate::ScrollHub): computes each tracked region's
//!   [`Progress`](crate::Progress) once per tick
//! - [`Stage`](crate::Stage): a mounted page that turns a scroll offset into a
//!   [`FrameSnapshot`](crate::FrameSnapshot)
//!
//! One tick is explicitly staged:
//!
//! 1. Build a [`ScrollState`](crate::ScrollState) from the scroll offset, viewport and document
//!    height
//! 2. Dispatch it once: every subscription caches its progress in `[0, 1]`
//! 3. Pull styles: each section's [`Choreography`](crate::Choreography) maps the cached progress
//!    through its keyframe tables into [`StyleRecord`](crate::StyleRecord)s
//!
//! Every element of a section reads the same cached progress in a tick, so there are no torn
//! reads between elements.
//!
//! ---
//!
//! ## Progress
//!
//! A tracked region spans from the scroll offset where its `enter` edges meet to where its `exit`
//! edges meet. [`ScrollOffset::THROUGH`](crate::ScrollOffset::THROUGH) (`start end` / `end
//! start`) runs while any part of the region is on screen;
//! [`ScrollOffset::PINNED`](crate::ScrollOffset::PINNED) (`start start` / `end end`) runs while
//! the region fills the viewport, as sticky sections do.
//!
//! Regions with no scrollable extent read `0`. Overscroll clamps.
//!
//! ---
//!
//! ## Keyframes
//!
//! [`Keyframes`](crate::Keyframes) pair sorted breakpoints in `[0, 1]` with output values. Tables
//! are validated when built, so a malformed section fails at page validation instead of
//! misrendering. Progress before the first or after the last breakpoint holds the edge value.
//!
//! ---
//!
//! ## Building a page (Rust DSL)
//!
//! ```rust,no_run
//! use curtain::{PageBuilder, SectionKind, Stage, Variant, Viewport};
//!
//! # fn main() -> curtain::CurtainResult<()> {
//! let page = PageBuilder::new("Curtain call")
//!     .section(
//!         "opening",
//!         SectionKind::Monologue {
//!             lines: vec!["The lights go down.".into(), "The room goes quiet.".into()],
//!             variant: Variant::Dark,
//!         },
//!     )?
//!     .chapter("opening", "Opening", 0.0)
//!     .build()?;
//!
//! let mut stage = Stage::mount(page, Viewport::new(1440.0, 900.0)?)?;
//! let frame = stage.tick(450.0);
//! for (element, style) in frame.sections[0].styles.iter() {
//!     println!("{element}: {}", style.to_css());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The same page can be written as JSON and loaded with
//! [`Page::from_path`](crate::Page::from_path).
//!
//! ---
//!
//! ## Media
//!
//! Playback controllers own their element through a [`MediaHandle`](crate::MediaHandle). A host
//! that refuses `play()` leaves the controller paused; it is logged, not returned as an error.
