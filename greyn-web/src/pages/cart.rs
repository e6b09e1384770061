//! Cart review page.
use crate::a11y;
use crate::components::daisy_ui::{Badge, Button, DaisyColor, DaisySize, Stat, StatItem};
use crate::components::nav_link::NavLink;
use crate::i18n::{fmt_currency, fmt_number, t, tr, tr_count};
use crate::router::Route;
use crate::storage::BrowserStore;
use greyn_core::numbers::u64_to_f64;
use greyn_core::{CartEntry, CartStore, CartSummary};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CartPageProps {
    pub on_cart_change: Callback<usize>,
    pub on_navigate: Callback<Route>,
}

fn cart_row(entry: &CartEntry, on_remove: &Callback<String>) -> Html {
    let onclick = {
        let cb = on_remove.clone();
        let id = entry.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let price = fmt_currency(entry.price_per_tonne);
    let per_tonne = tr("cart.per_tonne", Some(&BTreeMap::from([("price", price.as_str())])));
    html! {
        <li class="flex flex-wrap items-center justify-between gap-4 py-4" data-cart-id={entry.id.clone()}>
            <div>
                <p class="font-semibold">{ entry.project_name.clone() }</p>
                <p class="text-sm text-base-content/70">{ format!("{} • {}", entry.ngo_name, entry.location) }</p>
                <div class="mt-1 flex gap-2">
                    <Badge outline=true label={entry.impact_type.clone()} />
                    { if entry.is_verified {
                        html! { <Badge variant={DaisyColor::Success} label={t("marketplace.verified")} /> }
                    } else {
                        Html::default()
                    } }
                </div>
            </div>
            <div class="flex items-center gap-4">
                <span class="text-sm">{ per_tonne }</span>
                <span class="font-bold">{ fmt_currency(entry.line_total()) }</span>
                <Button size={DaisySize::Sm} variant={DaisyColor::Error} outline=true aria_label={format!("{}: {}", t("cart.remove"), entry.project_name)} {onclick}>
                    { t("cart.remove") }
                </Button>
            </div>
        </li>
    }
}

#[function_component(CartPage)]
pub fn cart_page(props: &CartPageProps) -> Html {
    let entries = use_state(|| CartStore::new(BrowserStore).entries());

    let on_remove = {
        let entries = entries.clone();
        let on_cart_change = props.on_cart_change.clone();
        Callback::from(move |id: String| {
            let cart = CartStore::new(BrowserStore);
            let name = entries
                .iter()
                .find(|entry| entry.id == id)
                .map(|entry| entry.project_name.clone())
                .unwrap_or_default();
            match cart.remove(&id) {
                Ok(true) => {
                    let vars = BTreeMap::from([("name", name.as_str())]);
                    a11y::set_status(&tr("cart.announce_removed", Some(&vars)));
                    let next = cart.entries();
                    on_cart_change.emit(next.len());
                    entries.set(next);
                }
                Ok(false) => log::debug!("{id} was not in the cart"),
                Err(err) => crate::dom::console_error(&format!("cart write failed: {err}")),
            }
        })
    };
    let on_clear = {
        let entries = entries.clone();
        let on_cart_change = props.on_cart_change.clone();
        Callback::from(move |_: MouseEvent| match CartStore::new(BrowserStore).clear() {
            Ok(()) => {
                a11y::set_status(&t("cart.announce_cleared"));
                on_cart_change.emit(0);
                entries.set(Vec::new());
            }
            Err(err) => crate::dom::console_error(&format!("cart clear failed: {err}")),
        })
    };

    if entries.is_empty() {
        return html! {
            <section class="card bg-base-100 shadow" data-testid="cart-empty">
                <div class="card-body items-center text-center">
                    <h1 class="card-title text-2xl">{ t("cart.title") }</h1>
                    <p>{ t("cart.empty") }</p>
                    <NavLink to={Route::Marketplace} on_navigate={props.on_navigate.clone()} class={classes!("btn", "btn-success")}>
                        { t("cart.browse") }
                    </NavLink>
                </div>
            </section>
        };
    }

    let summary = CartSummary::of(&entries);
    html! {
        <section class="space-y-6" data-testid="cart">
            <header>
                <h1 class="text-3xl font-bold">{ t("cart.title") }</h1>
                <p class="text-base-content/70">{ t("cart.subtitle") }</p>
            </header>
            <Stat items={vec![
                StatItem::new(t("nav.cart"), tr_count("cart.lines", summary.lines)),
                StatItem::new(t("cart.tonnes"), fmt_number(u64_to_f64(summary.tonnes))),
                StatItem::new(t("cart.subtotal"), fmt_currency(summary.subtotal)),
            ]} />
            <div class="card bg-base-100 shadow">
                <ul class="card-body divide-y divide-base-200">
                    { for entries.iter().map(|entry| cart_row(entry, &on_remove)) }
                </ul>
            </div>
            <div class="flex flex-wrap items-center justify-between gap-4">
                <p class="text-sm text-base-content/60">{ t("cart.checkout_note") }</p>
                <Button outline=true variant={DaisyColor::Error} onclick={on_clear}>{ t("cart.clear") }</Button>
            </div>
        </section>
    }
}
