//! Section content, active-section tracking, and the scroll-scrubbed reveal.

use crate::constants::*;
use crate::ease::{Ease, Tween};

/// Caller-supplied page section. Immutable once the hero is mounted.
#[derive(Clone, Debug)]
pub struct Section {
    pub id: String,
    pub headline: String,
    pub subheadline: String,
    pub body: String,
}

impl Section {
    pub fn new(id: &str, headline: &str, subheadline: &str, body: &str) -> Self {
        Self {
            id: id.to_string(),
            headline: headline.to_string(),
            subheadline: subheadline.to_string(),
            body: body.to_string(),
        }
    }
}

/// Stock content used when the caller supplies no sections.
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new(
            "hero",
            "Grove",
            "Clarity From Data",
            "Sustainability analytics rendered in real time",
        ),
        Section::new(
            "about",
            "Measure",
            "What Matters",
            "Every metric traced to a verifiable source",
        ),
        Section::new(
            "services",
            "Reduce",
            "With Confidence",
            "Turning footprint data into operational change",
        ),
        Section::new(
            "contact",
            "Connect",
            "Work With Us",
            "Let's build a lighter future together",
        ),
    ]
}

/// Document-space extent of one rendered section, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBand {
    pub top: f32,
    pub height: f32,
}

impl SectionBand {
    #[inline]
    fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Tracks which section currently owns the viewport center and eases the
/// shader's section index toward it.
pub struct SectionTracker {
    bands: Vec<SectionBand>,
    active: usize,
    index_tween: Tween,
}

impl SectionTracker {
    pub fn new(bands: Vec<SectionBand>) -> Self {
        Self {
            bands,
            active: 0,
            index_tween: Tween::new(0.0, SECTION_TWEEN_SEC, Ease::CubicInOut),
        }
    }

    /// Replace band geometry after a layout change. The active index is kept.
    pub fn set_bands(&mut self, bands: Vec<SectionBand>) {
        self.bands = bands;
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Check the viewport-center line against the bands. Returns the new
    /// active index when a boundary was crossed (in either direction). Rapid
    /// crossings overwrite the uniform tween target; the latest crossing
    /// always wins.
    pub fn observe(&mut self, scroll_y: f32, viewport_height: f32) -> Option<usize> {
        let center = scroll_y + viewport_height * 0.5;
        let hit = self.bands.iter().position(|b| b.contains(center))?;
        if hit == self.active {
            return None;
        }
        self.active = hit;
        self.index_tween.retarget(hit as f32);
        log::debug!("[sections] active -> {hit}");
        Some(hit)
    }

    pub fn advance(&mut self, dt: f32) {
        self.index_tween.advance(dt);
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Eased section index for the shader; continuous, never snapped.
    pub fn uniform_index(&self) -> f32 {
        self.index_tween.value()
    }
}

/// Visual state for one reveal-animated text element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset_y: f32,
    pub tilt_deg: f32,
}

/// Scrub position of a section's reveal: 0 while its top is below 80% of the
/// viewport height, 1 once it has risen to 20%. Linear in scroll position.
pub fn reveal_progress(band: &SectionBand, scroll_y: f32, viewport_height: f32) -> f32 {
    let start = band.top - viewport_height * REVEAL_WINDOW_START;
    let end = band.top - viewport_height * REVEAL_WINDOW_END;
    let span = end - start;
    if span <= 0.0 {
        return 1.0;
    }
    ((scroll_y - start) / span).clamp(0.0, 1.0)
}

/// Per-element reveal state at scrub position `t`, with elements staggered
/// along a shared timeline.
pub fn reveal_style(t: f32, element_index: usize, element_count: usize) -> RevealStyle {
    let count = element_count.max(1);
    let span = REVEAL_ELEMENT_SEC + REVEAL_STAGGER_SEC * (count - 1) as f32;
    let local = ((t * span - element_index as f32 * REVEAL_STAGGER_SEC) / REVEAL_ELEMENT_SEC)
        .clamp(0.0, 1.0);
    let eased = Ease::QuadOut.apply(local);
    RevealStyle {
        opacity: eased,
        offset_y: REVEAL_OFFSET_Y_PX * (1.0 - eased),
        tilt_deg: REVEAL_TILT_DEG * (1.0 - eased),
    }
}
