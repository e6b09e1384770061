#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use greyn_core::SeedBundle;
#[cfg(any(target_arch = "wasm32", test))]
use std::rc::Rc;
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Clone)]
struct BootstrapHandles {
    seeds: UseStateHandle<Option<Rc<SeedBundle>>>,
    load_error: UseStateHandle<Option<String>>,
    boot_ready: UseStateHandle<bool>,
}

#[cfg(any(target_arch = "wasm32", test))]
fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        seeds: app_state.seeds.clone(),
        load_error: app_state.load_error.clone(),
        boot_ready: app_state.boot_ready.clone(),
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn bootstrap_load(handles: &BootstrapHandles) {
    match crate::engine::create_web_engine().seeds() {
        Ok(seeds) => {
            log::info!(
                "seeds loaded: {} projects, {} activities",
                seeds.catalog.len(),
                seeds.activities.activities.len()
            );
            handles.seeds.set(Some(Rc::new(seeds)));
        }
        Err(err) => {
            crate::dom::console_error(&format!("seed load failed: {err}"));
            handles.load_error.set(Some(err.to_string()));
        }
    }
    handles.boot_ready.set(true);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            bootstrap_load(&handles);
        });
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(BootstrapHarness)]
    fn bootstrap_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let handles = handles_from_state(&app_state);
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            bootstrap_load(&handles);
        }
        Html::default()
    }

    #[test]
    fn bootstrap_loads_seeds_for_tests() {
        let _ = block_on(LocalServerRenderer::<BootstrapHarness>::new().render());
    }
}
