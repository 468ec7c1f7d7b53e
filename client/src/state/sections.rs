//! Navigable page sections and scroll-spy state.
//!
//! DESIGN
//! ======
//! The section set is closed, so ids and nav labels live on the enum rather
//! than in markup. `ScrollSpy` only highlights while an observer is actually
//! tracking; without one the nav renders unhighlighted.
//!
//! TRADE-OFFS
//! ==========
//! When several sections qualify in the same visibility batch, the one with
//! the greatest visible ratio wins instead of whichever the browser happened
//! to deliver last. Exact ratio ties still fall back to delivery order.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Minimum visible ratio (exclusive) for a section to become active.
pub const ACTIVE_RATIO: f64 = 0.25;

/// Page regions reachable from the header navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section in page order.
    pub const ALL: [Self; 5] = [Self::Hero, Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// DOM id of the `<section>` element.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// In-page anchor used by nav links.
    pub fn href(self) -> String {
        format!("#{}", self.dom_id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// Active-section state shared with the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollSpy {
    pub active: SectionId,
    /// True while a section observer is attached.
    pub tracking: bool,
}

impl ScrollSpy {
    /// Whether the nav link for `section` should render highlighted.
    pub fn is_highlighted(&self, section: SectionId) -> bool {
        self.tracking && self.active == section
    }
}

/// Pick the section a visibility batch makes active, if any.
///
/// Entries arrive in delivery order. Only ratios above [`ACTIVE_RATIO`]
/// qualify; among those the greatest ratio wins, and on an exact tie the
/// later entry wins.
pub fn pick_active<I>(batch: I) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, f64)>,
{
    let mut best: Option<(SectionId, f64)> = None;
    for (section, ratio) in batch {
        if ratio <= ACTIVE_RATIO || ratio.is_nan() {
            continue;
        }
        match best {
            Some((_, best_ratio)) if ratio < best_ratio => {}
            _ => best = Some((section, ratio)),
        }
    }
    best.map(|(section, _)| section)
}
