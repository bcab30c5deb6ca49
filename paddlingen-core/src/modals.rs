//! Bookkeeping for the page's simple dialogs
use std::collections::BTreeSet;

/// Dialogs whose only state is visible or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModalId {
    Faq,
    Contact,
    Overview,
}

impl ModalId {
    /// DOM id of the dialog container.
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Faq => "faqModal",
            Self::Contact => "contactModal",
            Self::Overview => "overviewPanel",
        }
    }
}

/// The set of currently visible simple dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSet {
    open: BTreeSet<ModalId>,
}

impl ModalSet {
    /// Returns `false` if `id` was not open.
    pub fn close(&mut self, id: ModalId) -> bool {
        self.open.remove(&id)
    }

    /// Show `id` on its own, hiding any other dialog.
    pub fn open_only(&mut self, id: ModalId) {
        self.open.clear();
        self.open.insert(id);
    }

    #[must_use]
    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.contains(&id)
    }
}

/// Tabs inside the FAQ dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaqTab {
    #[default]
    Questions,
    Rules,
}

impl FaqTab {
    pub const ALL: [Self; 2] = [Self::Questions, Self::Rules];

    /// Panel id, also used as the tab's `data-tab` value.
    #[must_use]
    pub const fn panel_id(self) -> &'static str {
        match self {
            Self::Questions => "questions",
            Self::Rules => "rules",
        }
    }
}

/// Keyboard commands understood by open dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Previous,
    Next,
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialogs_open_one_at_a_time() {
        let mut set = ModalSet::default();
        set.open_only(ModalId::Faq);
        assert!(set.is_open(ModalId::Faq));
        set.open_only(ModalId::Contact);
        assert!(set.is_open(ModalId::Contact));
        assert!(!set.is_open(ModalId::Faq));
        assert!(set.close(ModalId::Contact));
        assert!(!set.close(ModalId::Contact));
        assert!(!set.is_open(ModalId::Overview));
    }

    #[test]
    fn dialogs_and_tabs_expose_dom_ids() {
        assert_eq!(ModalId::Overview.dom_id(), "overviewPanel");
        assert_eq!(FaqTab::Rules.panel_id(), "rules");
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(KeyCommand::from_key("Escape"), Some(KeyCommand::Close));
        assert_eq!(KeyCommand::from_key("ArrowRight"), Some(KeyCommand::Next));
        assert_eq!(KeyCommand::from_key("Enter"), None);
    }
}
