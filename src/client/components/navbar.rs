use dioxus::prelude::*;

pub use crate::client::router::Route;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Passport {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Pilot Passport"
                        }
                        p { class: "text-xs",
                            "v{VERSION}"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                a { href: "/api/docs",
                    button {
                        class: "btn btn-outline btn-sm",
                        "API Docs"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
