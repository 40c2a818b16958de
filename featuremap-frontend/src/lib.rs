use leptos::*;
use leptos_router::*;

use featuremap_frontend_api::FeatureApi;

pub mod form;
pub mod markers;

mod components;
use components::*;

mod pages;
use pages::*;

const DEFAULT_API_URL: &str = "/api";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let api = FeatureApi::new(DEFAULT_API_URL);

    view! {
      <Router>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home api /> }
            />
            <Route
              path=Page::Locations.path()
              view=move || view! { <Locations api /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
