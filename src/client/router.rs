use dioxus::prelude::*;

use crate::client::{
    component::{Layout, RequiresSignedIn},
    model::auth::Access,
    route::{Home, NotFound, Problems},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[layout(RequiresSignedIn)]
            #[route("/problems")]
            Problems {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Access required to view this route, matching the layout it is nested in.
    pub fn access(&self) -> Access {
        match self {
            Route::Problems {} => Access::SignedIn,
            Route::Home {} | Route::NotFound { .. } => Access::Public,
        }
    }
}
