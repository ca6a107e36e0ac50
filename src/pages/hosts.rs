//! Hosts Page
//!
//! Full host listing, the destination of the dashboard hosts card action.
//! Honors the `status` query filter a card child may have pointed at.

use dioxus::prelude::*;

use crate::app::Route;

#[derive(Clone, PartialEq)]
struct HostRow {
    hostname: &'static str,
    platform: &'static str,
    online: bool,
}

const DEMO_HOSTS: &[HostRow] = &[
    HostRow {
        hostname: "bastion-02",
        platform: "Linux",
        online: true,
    },
    HostRow {
        hostname: "build-runner-3",
        platform: "Linux",
        online: true,
    },
    HostRow {
        hostname: "design-mbp",
        platform: "macOS",
        online: true,
    },
    HostRow {
        hostname: "finance-win",
        platform: "Windows",
        online: false,
    },
    HostRow {
        hostname: "staging-db",
        platform: "Linux",
        online: false,
    },
];

#[component]
pub fn Hosts(status: String) -> Element {
    let online_only = status == "online";
    let rows: Vec<&HostRow> = DEMO_HOSTS
        .iter()
        .filter(|host| !online_only || host.online)
        .collect();

    rsx! {
        main { class: "hosts",
            header { class: "hosts__header",
                h1 { "Hosts" }
                if online_only {
                    span { class: "hosts__filter-badge", "online only" }
                }
                Link { class: "hosts__back", to: Route::Dashboard {}, "Back to dashboard" }
            }
            table { class: "hosts__table",
                thead {
                    tr {
                        th { "Hostname" }
                        th { "Platform" }
                        th { "Status" }
                    }
                }
                tbody {
                    for host in rows {
                        tr { key: "{host.hostname}",
                            td { "{host.hostname}" }
                            td { "{host.platform}" }
                            td {
                                if host.online {
                                    "online"
                                } else {
                                    "offline"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
