use leptos::{ev, *};

use featuremap_boundary::NewFeature;

use crate::form::{FeatureForm, SubmitStatus};

#[component]
pub fn FeatureFormView(
    form: RwSignal<FeatureForm>,
    status: Signal<Option<SubmitStatus>>,
    on_submit: Callback<NewFeature>,
) -> impl IntoView {
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let new_feature = form.with_untracked(FeatureForm::to_new_feature);
        on_submit.call(new_feature);
    };

    view! {
      <form id="featureForm" on:submit=submit>
        <label for="name">"Name"</label>
        <input
          id="name"
          type="text"
          prop:value=move || form.with(|f| f.name.clone())
          on:input=move |ev| {
            let val = event_target_value(&ev);
            form.update(|f| f.name = val);
          }
        />
        <label for="lat">"Latitude"</label>
        <input
          id="lat"
          type="text"
          prop:value=move || form.with(|f| f.lat.clone())
          on:input=move |ev| {
            let val = event_target_value(&ev);
            form.update(|f| f.lat = val);
          }
        />
        <label for="lng">"Longitude"</label>
        <input
          id="lng"
          type="text"
          prop:value=move || form.with(|f| f.lng.clone())
          on:input=move |ev| {
            let val = event_target_value(&ev);
            form.update(|f| f.lng = val);
          }
        />
        <label for="category">"Category"</label>
        <input
          id="category"
          type="text"
          prop:value=move || form.with(|f| f.category.clone())
          on:input=move |ev| {
            let val = event_target_value(&ev);
            form.update(|f| f.category = val);
          }
        />
        <span></span>
        <button type="submit">"Add feature"</button>
      </form>
      <p
        id="message"
        style:color=move || status.get().map(SubmitStatus::color)
      >
        { move || status.get().map(SubmitStatus::message) }
      </p>
    }
}
