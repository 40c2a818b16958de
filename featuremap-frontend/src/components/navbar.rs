use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
      <nav>
        <A href=Page::Home.path()>"Map"</A>
        <A href=Page::Locations.path()>"Locations"</A>
      </nav>
    }
}
