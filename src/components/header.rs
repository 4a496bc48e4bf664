use crate::nav::{NAV_ITEMS, NavItem};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="grid-container">
            <ul class="nav-list-left">
                {NAV_ITEMS.iter().map(|item| view! { <NavLink item=*item /> }).collect_view()}
            </ul>
        </header>
    }
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    view! {
        <li class=item.placement.class()>
            <a href=item.href>{item.label}</a>
        </li>
    }
}
