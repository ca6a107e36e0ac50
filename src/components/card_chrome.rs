//! Card Chrome Capabilities
//!
//! The mutator handle an [`InfoCard`](super::InfoCard) hands to its nested
//! content. A child that receives it can override the title detail,
//! description, and action-link destination the surrounding card displays,
//! without the card ever knowing the child's type.
//!
//! The handle is distributed through context rather than per-child props,
//! so a card's whole subtree can reach it; a nested card shadows its
//! ancestor's handle for its own subtree.

use dioxus::prelude::*;

/// One of the three display slots a card owns on behalf of its content.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ChromeSlot {
    TitleDetail,
    Description,
    ActionLink,
}

/// Whether a fresh configuration value replaces whatever a slot currently
/// holds.
///
/// Only the title detail re-syncs from configuration after mount. The
/// description and action link are seeded once at construction and from
/// then on belong to whichever child last set them.
pub fn config_overrides_slot(slot: ChromeSlot, incoming_present: bool) -> bool {
    incoming_present && slot == ChromeSlot::TitleDetail
}

/// Mutator capabilities for one card instance.
///
/// A copyable handle over the card's view-state signals. The card provides
/// it via context; children obtain it with [`use_card_chrome`]. A write
/// through any setter is observed by the card's next render pass and by no
/// earlier one.
///
/// Because it travels through context, the handle reaches every descendant
/// of the card, not just direct children: deeply nested content mutates
/// the nearest enclosing card, which need not be its logical parent. A
/// nested card shadows its ancestor's handle for its own subtree.
///
/// # Example
///
/// ```ignore
/// let chrome = use_card_chrome();
/// chrome.set_action_link(Some("/hosts?status=online".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct CardChrome {
    title_detail: Signal<Option<Element>>,
    description: Signal<Option<Element>>,
    action_link: Signal<Option<String>>,
}

impl CardChrome {
    pub(crate) fn new(
        title_detail: Signal<Option<Element>>,
        description: Signal<Option<Element>>,
        action_link: Signal<Option<String>>,
    ) -> Self {
        Self {
            title_detail,
            description,
            action_link,
        }
    }

    /// Current title detail region.
    pub fn title_detail(&self) -> Option<Element> {
        self.title_detail.read().clone()
    }

    /// Current description region.
    pub fn description(&self) -> Option<Element> {
        self.description.read().clone()
    }

    /// Current destination override for the card's link action.
    pub fn action_link(&self) -> Option<String> {
        self.action_link.read().clone()
    }

    /// Replace the detail shown next to the card title.
    pub fn set_title_detail(mut self, value: Option<Element>) {
        self.title_detail.set(value);
    }

    /// Replace the description shown under the card header.
    pub fn set_description(mut self, value: Option<Element>) {
        self.description.set(value);
    }

    /// Replace the destination of the card's link action.
    pub fn set_action_link(mut self, value: Option<String>) {
        self.action_link.set(value);
    }

    /// Alias kept for content written against the legacy injected name.
    pub fn set_title_description(self, value: Option<Element>) {
        self.set_description(value);
    }

    /// Alias kept for content written against the legacy injected name.
    pub fn set_action_url(self, value: Option<String>) {
        self.set_action_link(value);
    }
}

/// Hook: the chrome handle of the nearest enclosing card.
///
/// Panics when called outside a card subtree; content that may render on
/// its own should use [`try_use_card_chrome`].
pub fn use_card_chrome() -> CardChrome {
    use_context::<CardChrome>()
}

/// The chrome handle of the nearest enclosing card, or `None` when there
/// is no card above this scope.
pub fn try_use_card_chrome() -> Option<CardChrome> {
    try_consume_context::<CardChrome>()
}
