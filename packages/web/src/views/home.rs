use dioxus::prelude::*;

use crate::Route;

/// Landing page. Successful registrations navigate back here.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-page",
            h1 { "Engineering Fest Registration" }
            p { "Sign up with your college and branch to take part." }
            Link { class: "home-cta", to: Route::Register {}, "Register now" }
        }
    }
}
