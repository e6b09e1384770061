//! Carbon credit marketplace: catalog filters and add-to-cart.
use crate::a11y;
use crate::components::daisy_ui::{Button, DaisyColor, DaisySize, Range, Select, SelectOption};
use crate::components::nav_link::NavLink;
use crate::components::project_card::ProjectCard;
use crate::i18n::{fmt_currency, fmt_number, t, tr, tr_count};
use crate::router::Route;
use crate::storage::BrowserStore;
use greyn_core::filter::{
    ALL_COUNTRIES, ALL_NGOS, ALL_TYPES, PRICE_CEILING, PRICE_FLOOR, PRICE_STEP, facet_options,
};
use greyn_core::{AddOutcome, CartStore, MarketplaceFilter, Project, ProjectCatalog, SeedBundle};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MarketplacePageProps {
    pub seeds: Rc<SeedBundle>,
    pub on_cart_change: Callback<usize>,
    pub on_navigate: Callback<Route>,
}

#[derive(Clone, PartialEq)]
struct Facets {
    countries: Vec<SelectOption>,
    ngos: Vec<SelectOption>,
    impact_types: Vec<SelectOption>,
}

impl Facets {
    fn of(catalog: &ProjectCatalog) -> Self {
        let options = |sentinel: &str, values: Vec<String>| -> Vec<SelectOption> {
            facet_options(sentinel, values)
                .into_iter()
                .map(SelectOption::plain)
                .collect()
        };
        Self {
            countries: options(ALL_COUNTRIES, catalog.countries()),
            ngos: options(ALL_NGOS, catalog.ngos()),
            impact_types: options(ALL_TYPES, catalog.impact_types()),
        }
    }
}

fn announce_add(catalog: &ProjectCatalog, id: &str, outcome: AddOutcome) {
    let Some(project) = catalog.find(id) else {
        log::warn!("add requested for unknown project {id}");
        return;
    };
    let key = match outcome {
        AddOutcome::Added => "marketplace.announce_added",
        AddOutcome::AlreadyInCart => "marketplace.announce_duplicate",
        AddOutcome::UnknownItem => return,
    };
    let vars = BTreeMap::from([("name", project.project_name.as_str())]);
    a11y::set_status(&tr(key, Some(&vars)));
}

#[function_component(MarketplacePage)]
pub fn marketplace_page(props: &MarketplacePageProps) -> Html {
    let filter = use_state(MarketplaceFilter::default);
    let membership = use_state(|| CartStore::new(BrowserStore).load_membership());
    let facets = use_memo(props.seeds.clone(), |seeds| Facets::of(&seeds.catalog));
    let visible = use_memo(
        ((*filter).clone(), props.seeds.clone()),
        |(filter, seeds)| {
            filter
                .apply(&seeds.catalog)
                .into_iter()
                .cloned()
                .collect::<Vec<Project>>()
        },
    );

    let update = |apply: fn(MarketplaceFilter, &str) -> MarketplaceFilter| {
        let filter = filter.clone();
        Callback::from(move |value: String| filter.set(apply((*filter).clone(), &value)))
    };
    let on_country = update(|f, v| f.with_country(v));
    let on_ngo = update(|f, v| f.with_ngo(v));
    let on_impact = update(|f, v| f.with_impact_type(v));
    let on_price = {
        let filter = filter.clone();
        Callback::from(move |max: f64| {
            let mut next = (*filter).clone();
            next.price.set_max(max);
            filter.set(next);
        })
    };
    let on_reset = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(MarketplaceFilter::default()))
    };
    let on_add = {
        let seeds = props.seeds.clone();
        let membership = membership.clone();
        let on_cart_change = props.on_cart_change.clone();
        Callback::from(move |id: String| {
            let cart = CartStore::new(BrowserStore);
            match cart.add(&seeds.catalog, &id) {
                Ok(outcome) => {
                    announce_add(&seeds.catalog, &id, outcome);
                    if outcome == AddOutcome::Added {
                        let next = cart.load_membership();
                        on_cart_change.emit(next.len());
                        membership.set(next);
                    }
                }
                Err(err) => {
                    crate::dom::console_error(&format!("cart write failed: {err}"));
                    a11y::set_status(&t("marketplace.save_failed"));
                }
            }
        })
    };

    let price = filter.price;
    let price_label = {
        let min = fmt_number(price.min);
        let max = fmt_number(price.max);
        tr(
            "marketplace.price",
            Some(&BTreeMap::from([("min", min.as_str()), ("max", max.as_str())])),
        )
    };

    let results = if visible.is_empty() {
        html! {
            <div class="card bg-base-100 shadow text-center" data-testid="marketplace-empty">
                <div class="card-body items-center">
                    <p class="text-5xl" aria-hidden="true">{ "🔍" }</p>
                    <h2 class="card-title">{ t("marketplace.empty_title") }</h2>
                    <p class="text-base-content/70">{ t("marketplace.empty_hint") }</p>
                    <Button variant={DaisyColor::Success} onclick={on_reset.clone()}>{ t("marketplace.clear_all") }</Button>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="grid gap-6 md:grid-cols-2 xl:grid-cols-3">
                { for visible.iter().map(|project| html! {
                    <ProjectCard
                        key={project.id.clone()}
                        project={project.clone()}
                        in_cart={membership.contains(&project.id)}
                        on_add={on_add.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <section class="space-y-6" data-testid="marketplace">
            <header>
                <h1 class="text-3xl font-bold">{ t("marketplace.title") }</h1>
                <p class="text-base-content/70">{ t("marketplace.subtitle") }</p>
            </header>
            <form class="card bg-base-100 shadow" aria-label={t("marketplace.filters")} onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <div class="card-body grid gap-4 md:grid-cols-2 xl:grid-cols-5 items-end">
                    <div class="form-control">
                        <label class="label" for="filter-country">{ t("marketplace.country") }</label>
                        <Select id="filter-country" options={facets.countries.clone()} value={filter.country.as_choice(ALL_COUNTRIES).to_string()} on_change={on_country} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="filter-ngo">{ t("marketplace.ngo") }</label>
                        <Select id="filter-ngo" options={facets.ngos.clone()} value={filter.ngo.as_choice(ALL_NGOS).to_string()} on_change={on_ngo} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="filter-price">{ price_label.clone() }</label>
                        <Range id="filter-price" value={price.max} min={PRICE_FLOOR} max={PRICE_CEILING} step={PRICE_STEP} aria_label={price_label} value_text={fmt_currency(price.max)} on_change={on_price} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="filter-impact">{ t("marketplace.impact_type") }</label>
                        <Select id="filter-impact" options={facets.impact_types.clone()} value={filter.impact_type.as_choice(ALL_TYPES).to_string()} on_change={on_impact} />
                    </div>
                    <Button outline=true size={DaisySize::Md} disabled={filter.is_default()} onclick={on_reset}>
                        { t("marketplace.reset") }
                    </Button>
                </div>
            </form>
            <div class="flex flex-wrap items-center justify-between gap-2 text-sm">
                <p aria-live="polite">{ tr_count("marketplace.showing", visible.len()) }</p>
                <NavLink to={Route::Cart} on_navigate={props.on_navigate.clone()} class={classes!("link", "link-success")}>
                    { tr_count("marketplace.in_cart", membership.len()) }
                </NavLink>
            </div>
            { results }
        </section>
    }
}
