//! Mobile menu state and scroll-to-section targets.

use std::collections::HashMap;

/// The page's fixed sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    WebProjects,
    Games,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::WebProjects,
        Section::Games,
        Section::Contact,
    ];

    /// Stable DOM id for the section's anchor element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about-me",
            Section::WebProjects => "web-projects",
            Section::Games => "games",
            Section::Contact => "contact-me",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About Me",
            Section::WebProjects => "Web Projects",
            Section::Games => "Games",
            Section::Contact => "Contact",
        }
    }
}

/// Opaque "bring this section into view" capability. The menu logic never
/// sees how the target is represented.
pub trait SectionAnchor {
    fn scroll_into_view(&self);
}

/// Owns the slide-out menu's open flag and the registered section anchors.
pub struct NavController<A> {
    open: bool,
    anchors: HashMap<Section, A>,
}

impl<A: SectionAnchor> NavController<A> {
    pub fn new() -> Self {
        Self {
            open: false,
            anchors: HashMap::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Associates a section with its anchor. Sections mount once, but a
    /// repeat registration simply replaces the previous handle.
    pub fn register(&mut self, section: Section, anchor: A) {
        self.anchors.insert(section, anchor);
    }

    /// Scrolls to the section's anchor, if one has been registered, and
    /// dismisses the menu either way. A missing anchor only happens while
    /// sections are still mounting, so it is not an error.
    pub fn scroll_to(&mut self, section: Section) {
        if let Some(anchor) = self.anchors.get(&section) {
            anchor.scroll_into_view();
        }
        self.close();
    }
}

impl<A: SectionAnchor> Default for NavController<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingAnchor {
        hits: Rc<Cell<usize>>,
    }

    impl SectionAnchor for CountingAnchor {
        fn scroll_into_view(&self) {
            self.hits.set(self.hits.get() + 1);
        }
    }

    #[test]
    fn starts_closed_and_cycles_through_open_close_toggle() {
        let mut nav = NavController::<CountingAnchor>::new();
        assert!(!nav.is_open());

        nav.open();
        assert!(nav.is_open());
        nav.open();
        assert!(nav.is_open());

        nav.close();
        assert!(!nav.is_open());

        nav.toggle();
        assert!(nav.is_open());
        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn scroll_to_scrolls_the_registered_anchor_and_closes_the_menu() {
        let anchor = CountingAnchor::default();
        let mut nav = NavController::new();
        nav.register(Section::Games, anchor.clone());
        nav.open();

        nav.scroll_to(Section::Games);

        assert_eq!(anchor.hits.get(), 1);
        assert!(!nav.is_open());
    }

    #[test]
    fn scroll_to_an_unregistered_section_is_a_quiet_no_op() {
        let mut nav = NavController::<CountingAnchor>::new();

        nav.scroll_to(Section::Contact);
        assert!(!nav.is_open());

        nav.open();
        nav.scroll_to(Section::Contact);
        assert!(!nav.is_open());
    }

    #[test]
    fn reregistering_a_section_replaces_its_anchor() {
        let first = CountingAnchor::default();
        let second = CountingAnchor::default();
        let mut nav = NavController::new();

        nav.register(Section::About, first.clone());
        nav.register(Section::About, second.clone());
        nav.scroll_to(Section::About);

        assert_eq!(first.hits.get(), 0);
        assert_eq!(second.hits.get(), 1);
    }

    #[test]
    fn every_section_has_a_distinct_anchor_id() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
