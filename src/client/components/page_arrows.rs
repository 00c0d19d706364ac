use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::client::{app::Controller, store::passport::PassportState};

#[component]
pub fn PageArrows() -> Element {
    let state = use_context::<Signal<PassportState>>();
    let controller = use_context::<Controller>();

    let page = state.read().page;
    let prev_controller = controller.clone();

    rsx!(
        if page.prev().is_some() {
            button {
                class: "btn btn-circle btn-ghost absolute left-0 top-1/2 -translate-x-12",
                title: "Previous page",
                onclick: move |_| {
                    let controller = prev_controller.clone();
                    spawn(async move { controller.prev_page().await });
                },
                Icon { width: 24, height: 24, icon: FaChevronLeft }
            }
        }
        if page.next().is_some() {
            button {
                class: "btn btn-circle btn-ghost absolute right-0 top-1/2 translate-x-12",
                title: "Next page",
                onclick: move |_| {
                    let controller = controller.clone();
                    spawn(async move { controller.next_page().await });
                },
                Icon { width: 24, height: 24, icon: FaChevronRight }
            }
        }
    )
}
