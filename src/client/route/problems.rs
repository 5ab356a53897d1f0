use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, model::auth::AuthContext};

/// Problem set, only reachable through the signed-in gate.
#[component]
pub fn Problems() -> Element {
    let auth_context = use_context::<AuthContext>();
    let user_name = auth_context
        .read()
        .user()
        .map(|user| user.name.clone())
        .unwrap_or_default();

    rsx! {
        document::Title { "Problems | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4",
            h1 { class: "text-3xl font-bold", "Problems" }
            p { "Welcome back, {user_name}." }
        }
    }
}
