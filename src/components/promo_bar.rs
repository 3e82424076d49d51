use chrono::{Local, Locale, NaiveDate};
use yew::prelude::*;

/// Long pt-BR date with a two digit day, e.g. `05 de janeiro de 2026`.
pub fn long_date(date: NaiveDate) -> String {
    date.format_localized("%d de %B de %Y", Locale::pt_BR).to_string()
}

/// Sticky "only today" banner, dated with the visitor's local day.
#[function_component(PromoBar)]
pub fn promo_bar() -> Html {
    let today = use_state(|| long_date(Local::now().date_naive()));

    html! {
        <div class="bg-slate-900 text-white text-[10px] md:text-xs py-2.5 px-4 text-center font-bold tracking-widest uppercase sticky top-0 z-[60]">
            {format!("🔥 Promoção válida somente hoje, {}", *today)}
        </div>
    }
}
