#![forbid(unsafe_code)]
//! Scroll-driven choreography: scroll position in, per-element style records out.
//!
//! See [`guide`] for a walkthrough of the pipeline.

pub mod animation;
pub mod choreography;
pub mod foundation;
pub mod guide;
pub mod navigation;
pub mod page;
pub mod playback;
pub mod preview;
pub mod scroll;
pub mod sections;
pub mod stage;

pub use animation::{
    ease::Ease,
    keyframes::{Keyframes, interpolate},
    value::{Blur, Length, Lerp},
};
pub use choreography::{
    channel::{Channel, Curve},
    choreo::{Choreography, ElementChoreo},
    slides::SlideDeck,
    stagger::{Stagger, Window},
    style::{FrameStyles, Property, StyleRecord, StyleValue},
};
pub use foundation::{
    core::{Progress, Rect, Rgba8, Viewport},
    error::{CurtainError, CurtainResult},
};
pub use navigation::{
    menu::{MenuState, Navigation, ScrollCommand},
    smooth_scroll::SmoothScroll,
};
pub use page::{
    demo::demo_page,
    dsl::PageBuilder,
    layout::{PageLayout, SectionBox},
    model::{MusicConfig, NavChapter, Page, SectionDef},
};
pub use playback::{
    media::{HeadlessMedia, MediaElement, MediaHandle, PlaybackRejected, PlaybackState},
    music::{BackgroundMusic, Track},
    video::VideoPlayer,
};
pub use preview::raster::{render_snapshot, save_png, storyboard_positions};
pub use scroll::{
    hub::{ScrollHub, ScrollSubscription},
    offset::{Edge, Intersection, ScrollOffset},
    tracker::{ScrollState, ScrollTarget, ScrollTracker},
};
pub use sections::{
    content::{MediaItem, MediaKind, SectionKind},
    recipes::{Recipe, recipe},
    variant::Variant,
};
pub use stage::{
    fingerprint::{FrameFingerprint, fingerprint_snapshot},
    frame::{FrameSnapshot, SectionFrame},
    runtime::Stage,
};
