//! Button Component
//!
//! Generic clickable control. The card's action region consumes the
//! text-link variant.

use dioxus::prelude::*;

/// Visual treatment for a [`Button`].
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Solid filled button
    Solid,
    /// Renders like an inline link
    TextLink,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "button button--solid",
            ButtonVariant::TextLink => "button button--text-link",
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Solid)] variant: ButtonVariant,
    /// Extra classes appended after the variant classes
    #[props(default = None)]
    class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let extra = class.unwrap_or_default();
    rsx! {
        button {
            r#type: "button",
            class: "{variant.class()} {extra}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
