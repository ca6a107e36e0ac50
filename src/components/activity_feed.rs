//! Activity Feed
//!
//! Recent fleet activity entries. On mount it pushes a summary line up
//! into the surrounding card's description slot.

use dioxus::prelude::*;

use super::card_chrome::use_card_chrome;

#[derive(Clone, PartialEq)]
pub struct ActivityEntry {
    pub actor: String,
    pub what: String,
    pub when: String,
}

#[component]
pub fn ActivityFeed(entries: Vec<ActivityEntry>) -> Element {
    let chrome = use_card_chrome();
    let count = entries.len();

    use_hook(move || {
        chrome.set_description(Some(rsx! {
            "Showing the {count} most recent events across your fleet."
        }));
    });

    rsx! {
        ul { class: "activity-feed",
            for entry in entries.iter() {
                li { key: "{entry.when}-{entry.actor}", class: "activity-feed__entry",
                    span { class: "activity-feed__actor", "{entry.actor}" }
                    span { class: "activity-feed__what", "{entry.what}" }
                    span { class: "activity-feed__when", "{entry.when}" }
                }
            }
            if entries.is_empty() {
                li { class: "activity-feed__empty", "No activity yet..." }
            }
        }
    }
}
