use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center p-6 text-base-content/60">
            <p>{ t("footer.copyright") }</p>
        </footer>
    }
}
