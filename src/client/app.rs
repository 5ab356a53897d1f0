use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth_context = use_context_provider(AuthContext::new);

    // Fetch user on first load
    #[cfg(feature = "web")]
    auth_context.fetch_user();

    rsx! {
        document::Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Practice coding problems with other developers"
        }
        Router::<Route> {}
    }
}
