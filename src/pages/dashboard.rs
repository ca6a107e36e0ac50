//! Dashboard Page
//!
//! Overview cards for the fleet: host counts with a link into the full
//! listing, and recent activity with a refresh action.

use chrono::Local;
use dioxus::prelude::*;

use crate::components::{
    ActivityEntry, ActivityFeed, CardAction, HostCount, HostSummary, InfoCard, PlatformCount,
};

fn demo_platforms() -> Vec<PlatformCount> {
    vec![
        PlatformCount {
            platform: "macOS",
            total: 17,
            online: 12,
        },
        PlatformCount {
            platform: "Linux",
            total: 21,
            online: 19,
        },
        PlatformCount {
            platform: "Windows",
            total: 4,
            online: 2,
        },
    ]
}

fn demo_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            actor: "mika".to_string(),
            what: "enrolled bastion-02".to_string(),
            when: "2m ago".to_string(),
        },
        ActivityEntry {
            actor: "devon".to_string(),
            what: "ran a live query on 21 hosts".to_string(),
            when: "14m ago".to_string(),
        },
        ActivityEntry {
            actor: "mika".to_string(),
            what: "removed build-runner-7".to_string(),
            when: "1h ago".to_string(),
        },
    ]
}

#[component]
pub fn Dashboard() -> Element {
    let platforms = use_signal(demo_platforms);
    let mut refreshing = use_signal(|| false);
    let mut last_refresh = use_signal(Local::now);

    // Evaluated fresh on every card render, so the count tracks the data.
    let total_hosts = use_callback(move |_: ()| {
        let total: u32 = platforms().iter().map(|p| p.total).sum();
        Some(total.to_string())
    });

    let on_refresh = move |_: ()| {
        if refreshing() {
            return;
        }
        refreshing.set(true);
        spawn(async move {
            // Stand-in for a fleet poll.
            tokio::time::sleep(std::time::Duration::from_millis(400)).await;
            last_refresh.set(Local::now());
            refreshing.set(false);
            tracing::info!("Activity refreshed");
        });
    };

    let refreshed_at = last_refresh().format("%H:%M:%S").to_string();

    rsx! {
        main { class: "dashboard",
            h1 { class: "dashboard__heading", "Dashboard" }

            InfoCard {
                title: "Hosts",
                total_host_count: Some(HostCount::Supplier(total_hosts)),
                action: Some(CardAction::Link {
                    to: Some("/hosts".to_string()),
                    label: "View all hosts".to_string(),
                }),
                HostSummary { platforms: platforms() }
            }

            InfoCard {
                title: "Activity",
                title_detail: Some(rsx! {
                    span { class: "dashboard__refreshed-at",
                        if refreshing() {
                            "refreshing..."
                        } else {
                            "updated {refreshed_at}"
                        }
                    }
                }),
                action: Some(CardAction::Button {
                    label: "Refresh".to_string(),
                    on_activate: Some(EventHandler::new(on_refresh)),
                }),
                ActivityFeed { entries: demo_activity() }
            }
        }
    }
}
