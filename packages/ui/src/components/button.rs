use dioxus::prelude::*;

use crate::colors;

/// Named style presets for [`Button`].
///
/// Each variant selects one background/foreground pair from
/// [`crate::colors`]; everything else about the control is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
    White,
}

impl ButtonVariant {
    /// Parse a variant tag. Anything unrecognized falls back to `Primary`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "secondary" => ButtonVariant::Secondary,
            "accent" => ButtonVariant::Accent,
            "white" => ButtonVariant::White,
            _ => ButtonVariant::Primary,
        }
    }

    /// The (background, foreground) pair for this variant.
    pub fn palette(self) -> (&'static str, &'static str) {
        match self {
            ButtonVariant::Primary => (colors::PRIMARY, colors::ON_PRIMARY),
            ButtonVariant::Secondary => (colors::SECONDARY, colors::ON_SECONDARY),
            ButtonVariant::Accent => (colors::ACCENT, colors::ON_ACCENT),
            ButtonVariant::White => (colors::WHITE, colors::ON_WHITE),
        }
    }
}

/// A solid, rounded button carrying the palette pair of its variant.
///
/// Purely presentational: the variant picks the colors, the rest of the
/// styling is fixed, and any extra attributes (`r#type`, `disabled`, ids,
/// aria tags) spread onto the underlying `button` element.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(extends = button, extends = GlobalAttributes)] attributes: Vec<Attribute>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let (background, color) = variant.palette();

    rsx! {
        button {
            style: "background-color: {background}; color: {color}; padding: 0.75rem 1.5rem; border: none; border-radius: 0.375rem; cursor: pointer; font-size: 1rem; font-weight: 600;",
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}
