use dioxus::prelude::*;

use crate::client::{
    component::page::LoadingPage,
    model::auth::{gate, Access, AuthContext, GateDecision},
    router::Route,
};

#[component]
pub fn RequiresSignedIn() -> Element {
    rsx! {
        ProtectedLayout { access: Access::SignedIn }
    }
}

/// Renders the nested route only when `access` allows it for the current auth state.
///
/// The decision is re-evaluated whenever the auth state changes; a denied visit replaces the
/// current history entry with the home route.
#[component]
pub fn ProtectedLayout(access: Access) -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if gate(access, &auth_context.read()) == GateDecision::RedirectHome {
            nav.replace(Route::Home {});
        }
    });

    let decision = gate(access, &auth_context.read());

    rsx! {
        match decision {
            GateDecision::Render => rsx! { Outlet::<Route> {} },
            GateDecision::Pending => rsx! { LoadingPage {} },
            // Render nothing while redirecting
            GateDecision::RedirectHome => rsx! {},
        }
    }
}
