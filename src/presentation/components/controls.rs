use leptos::*;

use crate::application::period_selection::periods;
use crate::domain::market_data::{CURRENCIES, Currency, TimePeriod};
use crate::presentation::hooks::use_click_outside;

/// Flag + symbol picker over the static currency catalog. Closes on
/// selection or on a pointer-down anywhere outside it.
#[component]
pub fn CurrencyDropdown(
    label: &'static str,
    #[prop(into)] selected: Signal<Currency>,
    #[prop(into)] on_select: Callback<Currency>,
) -> impl IntoView {
    let is_open = create_rw_signal(false);
    let wrapper = create_node_ref::<html::Div>();
    use_click_outside(wrapper, is_open.into(), move || is_open.set(false));

    let choose = move |currency: Currency| {
        on_select.call(currency);
        is_open.set(false);
    };

    view! {
        <div class="currency-dropdown-container">
            <label class="currency-dropdown-label">{label}</label>
            <div class="currency-dropdown-wrapper" node_ref=wrapper>
                <button
                    type="button"
                    class="currency-dropdown-button"
                    aria-haspopup="listbox"
                    aria-expanded=move || is_open.get().to_string()
                    on:click=move |_| is_open.update(|open| *open = !*open)
                >
                    <span class=move || format!("fi {}", selected.get().flag_class)></span>
                    <span>{move || selected.get().symbol}</span>
                    <span class="currency-dropdown-arrow">{move || if is_open.get() { "▲" } else { "▼" }}</span>
                </button>
                <Show when=move || is_open.get()>
                    <ul class="currency-dropdown-list" role="listbox">
                        {CURRENCIES
                            .iter()
                            .map(|currency| {
                                let currency = *currency;
                                let is_selected = move || selected.get().id == currency.id;
                                view! {
                                    <li
                                        class="currency-dropdown-item"
                                        class:selected=is_selected
                                        role="option"
                                        aria-selected=move || is_selected().to_string()
                                        on:click=move |_| choose(currency)
                                    >
                                        <span class=format!("fi {}", currency.flag_class)></span>
                                        <span>{currency.symbol}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn PeriodToolbar(
    #[prop(into)] selected: Signal<TimePeriod>,
    #[prop(into)] on_change: Callback<TimePeriod>,
) -> impl IntoView {
    view! {
        <div class="period-toolbar">
            {periods()
                .iter()
                .map(|period| {
                    let period = *period;
                    view! {
                        <button
                            type="button"
                            class="period-button"
                            class:active=move || selected.get() == period
                            on:click=move |_| on_change.call(period)
                        >
                            {period.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
