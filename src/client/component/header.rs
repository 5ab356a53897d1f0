use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCode, FaRightFromBracket, FaRightToBracket},
    Icon,
};

use crate::client::{
    api::endpoint, constant::SITE_NAME, model::auth::AuthContext, router::Route,
};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();

    let state = auth_context.read();
    let fetch_completed = state.is_resolved();
    let user_name = state.user().map(|user| user.name.clone());

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaCode
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(name) = user_name {
                Link {
                    to: Route::Problems {},
                    class: "btn btn-ghost",
                    "Problems"
                }
                p { class: "hidden md:block", "{name}" }
                a {
                    href: endpoint("/auth/logout"),
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 18,
                            height: 18,
                            icon: FaRightFromBracket
                        }
                        p {
                            "Sign out"
                        }
                    }
                }
            } else if fetch_completed {
                a {
                    href: endpoint("/auth/login"),
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 18,
                            height: 18,
                            icon: FaRightToBracket
                        }
                        p {
                            "Sign in"
                        }
                    }
                }
            }
        }
    })
}
