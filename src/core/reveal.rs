//! Scroll reveal and navbar state
//!
//! Decides which `.reveal` sections become active, whether the skill
//! progress bars fill, and whether the navbar takes its scrolled style.
//! Activation is one-way: the driver never removes `active` again.

/// A section activates once its top is this far above the viewport bottom
pub const REVEAL_OFFSET: f64 = 120.0;

/// Navbar switches style once the page is scrolled past this
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Class on the reveal section whose activation fills the progress bars
pub const SKILLS_CLASS: &str = "skills-container";

/// A `.reveal` element as measured on one scroll event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTarget {
    /// `getBoundingClientRect().top`, relative to the viewport
    pub top: f64,
    /// Element carries [`SKILLS_CLASS`]
    pub fills_progress: bool,
}

/// What one scroll event should change on the page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    /// Indices into the measured targets that are now in view
    pub revealed: Vec<usize>,
    /// A revealed skills section asks for the progress bars to fill
    pub fill_progress: bool,
    pub navbar_scrolled: bool,
}

pub fn is_revealed(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_OFFSET
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Width to apply to a progress bar from its `data-width` attribute.
/// Bars without a usable value are left alone.
pub fn progress_width(data_width: Option<&str>) -> Option<&str> {
    data_width.map(str::trim).filter(|w| !w.is_empty())
}

pub fn scroll_update(
    targets: &[RevealTarget],
    viewport_height: f64,
    scroll_y: f64,
) -> ScrollUpdate {
    let mut update = ScrollUpdate {
        navbar_scrolled: navbar_scrolled(scroll_y),
        ..ScrollUpdate::default()
    };
    for (i, target) in targets.iter().enumerate() {
        if is_revealed(target.top, viewport_height) {
            update.revealed.push(i);
            update.fill_progress |= target.fills_progress;
        }
    }
    update
}
