//! Host Summary Panel
//!
//! Per-platform host counts with an "online only" filter. Lives inside the
//! dashboard's hosts card and steers the card's chrome: filtering narrows
//! the card's link action to the online listing and annotates the title.

use dioxus::prelude::*;

use super::card_chrome::use_card_chrome;

/// Hosts broken down by platform for the summary tiles.
#[derive(Clone, PartialEq)]
pub struct PlatformCount {
    pub platform: &'static str,
    pub total: u32,
    pub online: u32,
}

#[component]
pub fn HostSummary(platforms: Vec<PlatformCount>) -> Element {
    let chrome = use_card_chrome();
    let mut online_only = use_signal(|| false);

    let toggle = move |_| {
        let filtered = !online_only();
        online_only.set(filtered);
        if filtered {
            chrome.set_action_link(Some("/hosts?status=online".to_string()));
            chrome.set_title_detail(Some(rsx! {
                span { class: "host-summary__filter-note", "online hosts only" }
            }));
        } else {
            chrome.set_action_link(None);
            chrome.set_title_detail(None);
        }
    };

    rsx! {
        div { class: "host-summary",
            div { class: "host-summary__tiles",
                for platform in platforms.iter() {
                    div { key: "{platform.platform}", class: "host-summary__tile",
                        span { class: "host-summary__platform", "{platform.platform}" }
                        span { class: "host-summary__count",
                            if online_only() {
                                "{platform.online}"
                            } else {
                                "{platform.total}"
                            }
                        }
                    }
                }
            }
            label { class: "host-summary__filter",
                input {
                    r#type: "checkbox",
                    checked: online_only(),
                    onchange: toggle,
                }
                "Online only"
            }
        }
    }
}
