use leptos::*;

use featuremap_boundary::NewFeature;
use featuremap_frontend_api::FeatureApi;

use crate::{
    components::*,
    form::{FeatureForm, SubmitStatus},
    markers::{MarkerSet, ReloadSequence},
};

#[component]
pub fn Home(api: FeatureApi) -> impl IntoView {
    // -- signals -- //

    let markers = RwSignal::new(MarkerSet::default());
    let form = RwSignal::new(FeatureForm::default());
    let status = RwSignal::new(None::<SubmitStatus>);
    let reload_trigger = RwSignal::new(0_u64);
    let reload_sequence = store_value(ReloadSequence::default());

    // -- actions -- //

    let load_features = create_action(move |(): &()| {
        let ticket = reload_sequence.try_update_value(ReloadSequence::start);
        async move {
            let Some(ticket) = ticket else {
                return;
            };
            match api.list_features().await {
                Ok(features) => {
                    let is_latest = reload_sequence
                        .try_with_value(|seq| seq.is_latest(ticket))
                        .unwrap_or(false);
                    if is_latest {
                        log::debug!("Loaded {} features", features.len());
                        markers.try_update(|m| m.replace(features));
                    } else {
                        log::debug!("Discard outdated feature list #{ticket}");
                    }
                }
                Err(err) => {
                    log::error!("Error loading features: {err}");
                }
            }
        }
    });

    let create_feature = create_action(move |new_feature: &NewFeature| {
        let new_feature = new_feature.clone();
        async move {
            let result = api.create_feature(&new_feature).await;
            match &result {
                Ok(()) => log::info!("Added feature {}", new_feature.name),
                Err(err) => log::error!("Error adding feature: {err}"),
            }
            finish_create(form, status, reload_trigger, result.is_ok());
        }
    });

    // -- effects -- //

    create_effect(move |_| {
        let round = reload_trigger.get();
        log::debug!("Load features (round {round})");
        load_features.dispatch(());
    });

    // -- callbacks -- //

    let on_click = Callback::new(move |point| {
        form.update(|f| f.fill_coordinates(point));
    });

    let on_submit = Callback::new(move |new_feature| {
        create_feature.dispatch(new_feature);
    });

    view! {
      <section>
        <FeatureMap markers=markers.into() on_click />
        <FeatureFormView form status=status.into() on_submit />
      </section>
    }
}

// The page may be gone when a request finishes,
// so the signals are only touched with `try_*`.
fn finish_create(
    form: RwSignal<FeatureForm>,
    status: RwSignal<Option<SubmitStatus>>,
    reload_trigger: RwSignal<u64>,
    created: bool,
) {
    let Some((submit_status, reload)) = form.try_update(|f| f.apply_create_result(created)) else {
        log::debug!("Page is gone, ignore result of create request");
        return;
    };
    status.try_set(Some(submit_status));
    if reload {
        reload_trigger.try_update(|n| *n += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FeatureForm {
        FeatureForm {
            name: "Monas".to_string(),
            lat: "-6.175392".to_string(),
            lng: "106.827153".to_string(),
            category: "landmark".to_string(),
        }
    }

    #[test]
    fn finish_successful_create() {
        let runtime = create_runtime();
        let form = RwSignal::new(filled_form());
        let status = RwSignal::new(None);
        let reload_trigger = RwSignal::new(0);
        finish_create(form, status, reload_trigger, true);
        assert_eq!(form.get_untracked(), FeatureForm::default());
        assert_eq!(status.get_untracked(), Some(SubmitStatus::Success));
        assert_eq!(reload_trigger.get_untracked(), 1);
        runtime.dispose();
    }

    #[test]
    fn finish_failed_create() {
        let runtime = create_runtime();
        let form = RwSignal::new(filled_form());
        let status = RwSignal::new(None);
        let reload_trigger = RwSignal::new(0);
        finish_create(form, status, reload_trigger, false);
        assert_eq!(form.get_untracked(), filled_form());
        assert_eq!(status.get_untracked(), Some(SubmitStatus::Failure));
        assert_eq!(reload_trigger.get_untracked(), 0);
        runtime.dispose();
    }

    #[test]
    fn finish_create_after_page_is_disposed() {
        let runtime = create_runtime();
        let create_page_state = as_child_of_current_owner(|()| {
            (
                RwSignal::new(filled_form()),
                RwSignal::new(None::<SubmitStatus>),
                RwSignal::new(0_u64),
            )
        });
        let ((form, status, reload_trigger), disposer) = create_page_state(());
        drop(disposer);
        finish_create(form, status, reload_trigger, true);
        assert_eq!(form.try_get_untracked(), None);
        assert_eq!(status.try_get_untracked(), None);
        assert_eq!(reload_trigger.try_get_untracked(), None);
        runtime.dispose();
    }
}
