use dioxus::prelude::*;

use crate::client::{
    api::endpoint,
    component::Page,
    constant::SITE_NAME,
    model::auth::AuthContext,
    router::Route,
};

#[component]
pub fn Home() -> Element {
    let auth_context = use_context::<AuthContext>();
    let signed_in = auth_context.read().is_authenticated();

    rsx! {
        document::Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center",
            h1 { class: "text-4xl font-bold", {SITE_NAME} }
            p {
                class: "text-lg text-center max-w-xl",
                "Practice coding problems and talk them through with other developers."
            }
            if signed_in {
                Link {
                    to: Route::Problems {},
                    class: "btn btn-primary",
                    "Browse problems"
                }
            } else {
                a {
                    href: endpoint("/auth/login"),
                    class: "btn btn-primary",
                    "Sign in to get started"
                }
            }
        }
    }
}
