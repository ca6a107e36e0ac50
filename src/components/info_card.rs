//! Info Card Component
//!
//! Titled dashboard section with an optional call-to-action and arbitrary
//! nested content. The card owns three pieces of displayed state (title
//! detail, description, action-link destination) but delegates the
//! authority to change them to its content: every composable child can
//! obtain a [`CardChrome`] handle and reach up to override what the card
//! displays.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use super::card_chrome::{config_overrides_slot, CardChrome, ChromeSlot};

/// Declarative description of the card's single call-to-action.
#[derive(Clone, PartialEq)]
pub enum CardAction {
    /// Client-side navigation. `to` is the declared destination; a child
    /// may override it at runtime through the chrome handle.
    Link { to: Option<String>, label: String },
    /// Plain activation callback. Rendered whenever the action exists,
    /// independent of any link state.
    Button {
        label: String,
        on_activate: Option<EventHandler<()>>,
    },
}

/// Host-count indicator for the card header.
///
/// Either a literal value or a zero-argument supplier. The supplier is
/// invoked fresh on every render, never memoized, so a live count stays
/// live.
#[derive(Clone, PartialEq)]
pub enum HostCount {
    Text(String),
    Supplier(Callback<(), Option<String>>),
}

impl HostCount {
    pub fn resolve(&self) -> Option<String> {
        match self {
            HostCount::Text(count) => Some(count.clone()),
            HostCount::Supplier(supplier) => supplier.call(()),
        }
    }
}

impl From<&str> for HostCount {
    fn from(count: &str) -> Self {
        HostCount::Text(count.to_string())
    }
}

impl From<String> for HostCount {
    fn from(count: String) -> Self {
        HostCount::Text(count)
    }
}

/// Outcome of resolving an action descriptor against the current link
/// state.
#[derive(Clone, PartialEq)]
enum ResolvedAction {
    Button {
        label: String,
        on_activate: Option<EventHandler<()>>,
    },
    Link {
        label: String,
        to: String,
    },
}

/// Decide what interactive control the action region gets, if any.
///
/// A link action without a resolvable destination renders nothing; that is
/// the documented degraded case, not an error.
fn resolve_action(
    action: Option<&CardAction>,
    current_link: Option<&str>,
) -> Option<ResolvedAction> {
    match action? {
        CardAction::Button { label, on_activate } => Some(ResolvedAction::Button {
            label: label.clone(),
            on_activate: *on_activate,
        }),
        CardAction::Link { to, label } => {
            let target = current_link.map(str::to_string).or_else(|| to.clone());
            match target {
                Some(to) => Some(ResolvedAction::Link {
                    label: label.clone(),
                    to,
                }),
                None => {
                    tracing::debug!(label = %label, "link action has no destination, rendering no action region");
                    None
                }
            }
        }
    }
}

/// Trailing arrow glyph shared by both action control kinds.
#[component]
fn LinkArrow() -> Element {
    rsx! {
        img {
            class: "info-card__action-arrow",
            src: "assets/icon-arrow-right.svg",
            alt: "link arrow",
        }
    }
}

fn render_action(action: ResolvedAction) -> Element {
    match action {
        ResolvedAction::Button { label, on_activate } => rsx! {
            Button {
                variant: ButtonVariant::TextLink,
                class: Some("info-card__action-button".to_string()),
                onclick: move |_| {
                    if let Some(handler) = on_activate {
                        handler.call(());
                    }
                },
                span { class: "info-card__action-text", "{label}" }
                LinkArrow {}
            }
        },
        ResolvedAction::Link { label, to } => rsx! {
            Link {
                class: "info-card__action-button",
                to: to.clone(),
                span { class: "info-card__action-text", "{label}" }
                LinkArrow {}
            }
        },
    }
}

/// Dashboard section card.
///
/// # Examples
///
/// ```ignore
/// rsx! {
///     InfoCard {
///         title: "Hosts",
///         total_host_count: Some(HostCount::from("42")),
///         action: Some(CardAction::Link {
///             to: Some("/hosts".to_string()),
///             label: "View all hosts".to_string(),
///         }),
///         HostSummary { platforms }
///     }
/// }
/// ```
#[component]
pub fn InfoCard(
    /// Section title shown in the header
    title: String,
    /// Initial detail next to the title; later configuration updates win
    /// over child-set values for this slot
    #[props(default = None)]
    title_detail: Option<Element>,
    /// Initial description; read once, afterwards owned by the children
    #[props(default = None)]
    description: Option<Element>,
    /// Initial link-action destination override; read once
    #[props(default = None)]
    action_url: Option<String>,
    /// Call-to-action for the header
    #[props(default = None)]
    action: Option<CardAction>,
    /// Host-count indicator, literal or supplier
    #[props(default = None)]
    total_host_count: Option<HostCount>,
    /// When false, only the children render; state is still tracked and
    /// the chrome handle is still provided
    #[props(default = true)]
    show_title: bool,
    children: Element,
) -> Element {
    // Per-instance view state, seeded once from configuration.
    let title_detail_slot = use_signal({
        let seed = title_detail.clone();
        move || seed
    });
    let description_slot = use_signal(move || description);
    let action_link_slot = use_signal(move || action_url);

    // Hand the mutator capabilities to every composable descendant.
    let chrome = use_context_provider(|| {
        CardChrome::new(title_detail_slot, description_slot, action_link_slot)
    });

    // Reconcile configuration changes. Only the title detail slot re-syncs;
    // a fresh present value supersedes whatever a child set.
    let mut seen_config_detail = use_signal({
        let seed = title_detail.clone();
        move || seed
    });
    if *seen_config_detail.peek() != title_detail {
        seen_config_detail.set(title_detail.clone());
        if config_overrides_slot(ChromeSlot::TitleDetail, title_detail.is_some()) {
            chrome.set_title_detail(title_detail.clone());
        }
    }

    let detail = chrome.title_detail();
    let description_now = chrome.description();
    let action_link = chrome.action_link();

    let resolved = resolve_action(action.as_ref(), action_link.as_deref());
    let host_count = total_host_count.as_ref().and_then(HostCount::resolve);

    rsx! {
        div { class: "info-card",
            if show_title {
                div { class: "info-card__title-cta",
                    div { class: "info-card__title-group",
                        div { class: "info-card__title",
                            h2 { "{title}" }
                            if let Some(count) = host_count {
                                span { class: "info-card__host-count", "{count}" }
                            }
                        }
                        div { class: "info-card__title-detail", {detail} }
                    }
                    {resolved.map(render_action)}
                }
                div { class: "info-card__description", {description_now} }
            }
            {children}
        }
    }
}


#[cfg(test)]
mod render_tests {
    use dioxus::dioxus_core::NoOpMutations;
    use dioxus::prelude::*;

    use super::super::card_chrome::{try_use_card_chrome, use_card_chrome};
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.render_immediate(&mut NoOpMutations);
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn header_shows_title_count_and_description() {
        fn app() -> Element {
            rsx! {
                InfoCard {
                    title: "Hosts",
                    total_host_count: Some(HostCount::from("42")),
                    description: Some(rsx! { "All hosts enrolled in your fleet" }),
                    div { "summary-panel" }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Hosts"));
        assert!(html.contains("42"));
        assert!(html.contains("All hosts enrolled in your fleet"));
        assert!(html.contains("summary-panel"));
    }

    #[test]
    fn children_keep_order_and_count() {
        fn app() -> Element {
            rsx! {
                InfoCard {
                    title: "Hosts",
                    div { "alpha-panel" }
                    "plain text passes through"
                    div { "gamma-panel" }
                }
            }
        }

        let html = render(app);
        let alpha = html.find("alpha-panel").unwrap();
        let plain = html.find("plain text passes through").unwrap();
        let gamma = html.find("gamma-panel").unwrap();
        assert!(alpha < plain && plain < gamma);
    }

    #[test]
    fn button_action_renders_with_arrow_glyph() {
        fn app() -> Element {
            rsx! {
                InfoCard {
                    title: "Activity",
                    action: Some(CardAction::Button {
                        label: "Refresh".to_string(),
                        on_activate: None,
                    }),
                    div { "feed" }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Refresh"));
        assert!(html.contains("info-card__action-button"));
        assert!(html.contains("link arrow"));
    }

    #[test]
    fn hidden_title_still_injects_working_chrome() {
        #[component]
        fn ChromeProbe() -> Element {
            let chrome = try_use_card_chrome();
            rsx! {
                div {
                    if chrome.is_some() {
                        "chrome-present"
                    } else {
                        "chrome-missing"
                    }
                }
            }
        }

        fn app() -> Element {
            rsx! {
                InfoCard {
                    title: "Hosts",
                    description: Some(rsx! { "hidden description" }),
                    action: Some(CardAction::Button {
                        label: "Refresh".to_string(),
                        on_activate: None,
                    }),
                    show_title: false,
                    ChromeProbe {}
                }
            }
        }

        let html = render(app);
        assert!(html.contains("chrome-present"));
        assert!(!html.contains("hidden description"));
        assert!(!html.contains("Refresh"));
        assert!(!html.contains("info-card__title"));
    }

    #[test]
    fn child_set_description_shows_on_next_render() {
        #[component]
        fn DescriptionSetter() -> Element {
            let chrome = use_card_chrome();
            use_hook(move || {
                chrome.set_description(Some(rsx! { "fresh description" }));
            });
            rsx! {
                div { "setter" }
            }
        }

        fn app() -> Element {
            rsx! {
                InfoCard {
                    title: "Hosts",
                    description: Some(rsx! { "seed description" }),
                    DescriptionSetter {}
                }
            }
        }

        let html = render(app);
        assert!(html.contains("fresh description"));
        assert!(!html.contains("seed description"));
    }

    #[test]
    fn child_set_action_link_updates_destination() {
        #[component]
        fn LinkSetter() -> Element {
            let chrome = use_card_chrome();
            use_hook(move || {
                chrome.set_action_link(Some("/hosts?status=online".to_string()));
            });
            rsx! {
                div { "setter" }
            }
        }

        #[component]
        fn Home() -> Element {
            rsx! {
                InfoCard {
                    title: "Hosts",
                    action: Some(CardAction::Link {
                        to: Some("/hosts".to_string()),
                        label: "View all hosts".to_string(),
                    }),
                    LinkSetter {}
                }
            }
        }

        #[derive(Clone, Routable, PartialEq)]
        enum TestRoute {
            #[route("/")]
            Home {},
        }

        fn app() -> Element {
            rsx! {
                Router::<TestRoute> {}
            }
        }

        let html = render(app);
        assert!(html.contains("View all hosts"));
        assert!(html.contains("/hosts?status=online"));
        assert!(!html.contains("href=\"/hosts\""));
    }

    #[test]
    fn legacy_alias_names_reach_the_same_slots() {
        #[component]
        fn LegacySetter() -> Element {
            let chrome = use_card_chrome();
            use_hook(move || {
                chrome.set_title_description(Some(rsx! { "legacy description" }));
                chrome.set_action_url(Some("/hosts?tag=legacy".to_string()));
            });
            rsx! {
                div { "setter" }
            }
        }

        #[component]
        fn Home() -> Element {
            rsx! {
                InfoCard {
                    title: "Hosts",
                    action: Some(CardAction::Link {
                        to: None,
                        label: "View all hosts".to_string(),
                    }),
                    LegacySetter {}
                }
            }
        }

        #[derive(Clone, Routable, PartialEq)]
        enum TestRoute {
            #[route("/")]
            Home {},
        }

        fn app() -> Element {
            rsx! {
                Router::<TestRoute> {}
            }
        }

        let html = render(app);
        assert!(html.contains("legacy description"));
        assert!(html.contains("/hosts?tag=legacy"));
    }

    #[test]
    fn description_config_change_does_not_override_child_value() {
        static CONFIG_DESC: GlobalSignal<String> =
            Signal::global(|| "first config description".to_string());

        #[component]
        fn DescriptionSetter() -> Element {
            let chrome = use_card_chrome();
            use_hook(move || {
                chrome.set_description(Some(rsx! { "child description" }));
            });
            rsx! {
                div { "setter" }
            }
        }

        fn app() -> Element {
            rsx! {
                InfoCard {
                    title: "Hosts",
                    description: Some(rsx! { span { "{CONFIG_DESC}" } }),
                    DescriptionSetter {}
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.render_immediate(&mut NoOpMutations);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("child description"));

        // Unlike the title detail, the description slot never re-syncs
        // from configuration; the child-set value survives.
        dom.in_runtime(|| *CONFIG_DESC.write() = "second config description".to_string());
        dom.render_immediate(&mut NoOpMutations);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("child description"));
        assert!(!html.contains("second config description"));
    }

    #[test]
    fn config_title_detail_supersedes_child_value() {
        static CONFIG_DETAIL: GlobalSignal<Option<String>> =
            Signal::global(|| Some("initial detail".to_string()));

        #[component]
        fn DetailSetter() -> Element {
            let chrome = use_card_chrome();
            use_hook(move || {
                chrome.set_title_detail(Some(rsx! { "child detail" }));
            });
            rsx! {
                div { "setter" }
            }
        }

        fn app() -> Element {
            let detail = CONFIG_DETAIL().map(|text| rsx! { span { "{text}" } });
            rsx! {
                InfoCard { title: "Hosts", title_detail: detail, DetailSetter {} }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.render_immediate(&mut NoOpMutations);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("child detail"));

        // A later configuration update wins over the child-set value.
        dom.in_runtime(|| *CONFIG_DETAIL.write() = Some("updated detail".to_string()));
        dom.render_immediate(&mut NoOpMutations);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("updated detail"));
        assert!(!html.contains("child detail"));
    }
}
