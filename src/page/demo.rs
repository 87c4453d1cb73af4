use crate::{
    foundation::error::CurtainResult,
    page::{dsl::PageBuilder, model::Page},
    sections::{
        content::{Alignment, DividerStyle, MediaItem, RevealLayout, SectionKind},
        variant::Variant,
    },
};

const PHOTOS: [&str; 10] = [
    "assets/stage_01.jpg",
    "assets/curtain_call.jpg",
    "assets/theater_seats.jpg",
    "assets/script.jpg",
    "assets/audience.jpg",
    "assets/final_bow.jpg",
    "assets/scene_hanbok.jpg",
    "assets/solo_reading.jpg",
    "assets/group_scene.jpg",
    "assets/classroom.jpg",
];

fn photo(i: usize) -> MediaItem {
    let src = PHOTOS[i % PHOTOS.len()];
    MediaItem::image(src, format!("photo {}", i + 1))
}

fn photos(indices: &[usize]) -> Vec<MediaItem> {
    indices.iter().map(|i| photo(*i)).collect()
}

fn text(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| (*s).to_owned()).collect()
}

/// A complete sample narrative: a school theater club looking back on its stage years.
pub fn demo_page() -> CurtainResult<Page> {
    PageBuilder::new("ARTE | theater & musical club")
        .section(
            "landing",
            SectionKind::ParallaxText {
                heading: Some("ARTE".into()),
                lines: text(&["Every story starts with the lights going down."]),
                alignment: Alignment::Center,
                variant: Variant::Default,
            },
        )?
        .section(
            "opening",
            SectionKind::Monologue {
                lines: text(&[
                    "Of all the moments we live through,",
                    "only a few stay with us as memories.",
                    "For us, the stage was always at their center.",
                ]),
                variant: Variant::Dark,
            },
        )?
        .section(
            "divider-opening",
            SectionKind::Divider {
                style: DividerStyle::Line,
                from: None,
                to: None,
            },
        )?
        .section(
            "story",
            SectionKind::ParallaxText {
                heading: Some("Our first stage together".into()),
                lines: text(&[
                    "Theater used to be something we watched.",
                    "Here we learned that a stage connects people.",
                ]),
                alignment: Alignment::Left,
                variant: Variant::DeepPurple,
            },
        )?
        .section(
            "gallery",
            SectionKind::HorizontalGallery {
                images: (0..8)
                    .map(|i| photo(i).with_ratio(if i >= 6 { 1.7 } else { 0.8 }))
                    .collect(),
                description: Some(
                    "Acting felt as natural as breathing; feeling a character's lines was the joy."
                        .into(),
                ),
                title: Some("Dead Poets Society, annual show".into()),
                link_text: Some("Watch the performance".into()),
            },
        )?
        .section(
            "rewind",
            SectionKind::ZoomImage {
                image: photo(3),
                overlay_text: Some("Then we found a club called ARTE.".into()),
                sub_text: Some("A new world, reached through the stage.".into()),
            },
        )?
        .section(
            "ensemble",
            SectionKind::TripleImage {
                images: photos(&[8, 7, 9]),
                top_text: Some("Not only our acting, but staging in tune with it,".into()),
                bottom_text: None,
                title: Some("Ensemble".into()),
            },
        )?
        .section(
            "journey",
            SectionKind::Monologue {
                lines: text(&[
                    "People came not only for the shows,",
                    "but for ARTE itself.",
                ]),
                variant: Variant::Purple,
            },
        )?
        .section(
            "fans",
            SectionKind::FanStory {
                images: photos(&[4, 2, 1, 3]),
                top_text: Some("Knowing an audience waits for us is a special feeling.".into()),
                bottom_text: None,
            },
        )?
        .section(
            "divider-festival",
            SectionKind::Divider {
                style: DividerStyle::Gradient,
                from: None,
                to: None,
            },
        )?
        .section(
            "festival",
            SectionKind::MasonryGallery {
                images: photos(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
                title: Some("Memories".into()),
                subtitle: None,
            },
        )?
        .section(
            "rehearsal",
            SectionKind::ImageReveal {
                images: photos(&[3, 7, 9]),
                layout: RevealLayout::Row,
            },
        )?
        .section(
            "performance",
            SectionKind::Video {
                src: "assets/performance.mp4".into(),
                poster: Some(PHOTOS[0].into()),
                title: Some("Annual performance".into()),
            },
        )?
        .section(
            "final-message",
            SectionKind::FinalMessage {
                background_image: Some(PHOTOS[4].into()),
                lines: text(&[
                    "So we step onto the stage again,",
                    "with the same passion and sincerity,",
                    "to tell you ARTE's story,",
                    "from the memories behind us to the ones ahead,",
                    "hoping to leave you moved.",
                    "See you at the 2026 show.",
                ]),
            },
        )?
        .section(
            "finale",
            SectionKind::Finale {
                slides: photos(&[0, 5, 1, 6, 8, 4]),
            },
        )?
        .section("credits", SectionKind::Credits)?
        .chapter("landing", "Start", 0.0)
        .chapter("story", "Story", 0.1)
        .chapter("gallery", "Songs", 0.25)
        .chapter("journey", "Journey", 0.5)
        .chapter("festival", "Stage", 0.75)
        .chapter("credits", "Experience", 0.95)
        .music("assets/bgm_mr.mp3", "assets/bgm_vocal.mp3", 0.3)
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/page/demo.rs"]
mod tests;
