use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{NotFound, Passport},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Passport {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
