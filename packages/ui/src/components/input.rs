use dioxus::prelude::*;

/// A plain text input that spreads its attributes onto the element.
///
/// Styling comes from the page stylesheet, not from here; the wrapper
/// exists so forms read uniformly and events stay explicitly forwarded.
#[component]
pub fn Input(
    #[props(extends = input, extends = GlobalAttributes)] attributes: Vec<Attribute>,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            oninput: move |event| {
                if let Some(handler) = &oninput {
                    handler.call(event);
                }
            },
            ..attributes,
        }
    }
}

/// A form label tied to a control by id.
#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { r#for: html_for, {children} }
    }
}
