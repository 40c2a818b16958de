use leptos::*;

use featuremap_frontend_api::FeatureApi;

use crate::markers::{MarkerSet, ReloadSequence};

/// Tabular list of all stored features.
#[component]
pub fn Locations(api: FeatureApi) -> impl IntoView {
    let features = RwSignal::new(MarkerSet::default());
    let error = RwSignal::new(None::<String>);
    let reload_sequence = store_value(ReloadSequence::default());

    let load_features = create_action(move |(): &()| {
        let ticket = reload_sequence.try_update_value(ReloadSequence::start);
        async move {
            let Some(ticket) = ticket else {
                return;
            };
            match api.list_features().await {
                Ok(list) => {
                    if reload_sequence
                        .try_with_value(|seq| seq.is_latest(ticket))
                        .unwrap_or(false)
                    {
                        features.try_update(|f| f.replace(list));
                        error.try_set(None);
                    }
                }
                Err(err) => {
                    log::error!("Error loading features: {err}");
                    error.try_set(Some(err.to_string()));
                }
            }
        }
    });

    let delete_feature = create_action(move |id: &String| {
        let id = id.clone();
        async move {
            match api.delete_feature(&id).await {
                Ok(()) => {
                    log::info!("Deleted feature {id}");
                    features.try_update(|f| f.remove(&id));
                }
                Err(err) => {
                    log::error!("Unable to delete feature {id}: {err}");
                    error.try_set(Some(err.to_string()));
                }
            }
        }
    });

    load_features.dispatch(());

    view! {
      <section class="locations">
        <h2>"Locations"</h2>
        { move || error.get().map(|err| view! { <p style="color: red">{ err }</p> }) }
        <Show
          when=move || features.with(|f| !f.is_empty())
          fallback=|| view! { <p>"There are no features yet."</p> }
        >
          <table>
            <thead>
              <tr>
                <th>"Name"</th>
                <th>"Category"</th>
                <th>"Latitude"</th>
                <th>"Longitude"</th>
                <th></th>
              </tr>
            </thead>
            <tbody>
              <For
                each=move || features.with(|f| f.features().to_vec())
                key=|feature| feature.id.clone()
                let:feature
              >
                <tr>
                  <td>{ feature.name.clone() }</td>
                  <td>{ feature.category.clone() }</td>
                  <td>{ format!("{:.6}", feature.lat) }</td>
                  <td>{ format!("{:.6}", feature.lng) }</td>
                  <td>
                    <button on:click={
                      let id = feature.id.clone();
                      move |_| delete_feature.dispatch(id.clone())
                    }>
                      "delete"
                    </button>
                  </td>
                </tr>
              </For>
            </tbody>
          </table>
        </Show>
      </section>
    }
}
