use leptos::*;

use crate::domain::{
    chart::{ChartPoint, ValueFormat},
    market_data::{Currency, PublicPropInfo, Symbol, TimePeriod},
};
use crate::infrastructure::rendering::ChartStyle;
use crate::presentation::components::{AreaChart, CurrencyDropdown, PeriodToolbar};
use crate::presentation::hooks::{
    use_click_outside, use_currency_data, use_period_selection, use_yfinance_data, use_yfinance_search,
};

#[component]
pub fn CurrencySection() -> impl IntoView {
    let period = use_period_selection();
    let fx = use_currency_data(period.range);

    let from = Signal::derive(move || fx.pair.get().from);
    let to = Signal::derive(move || fx.pair.get().to);
    let points = Signal::derive(move || fx.snapshot.with(|s| s.rates.iter().map(ChartPoint::from).collect::<Vec<_>>()));

    view! {
        <section class="market-page-container">
            <h1>"Currency Rates"</h1>
            <div class="currencies-dropdown-container">
                <CurrencyDropdown
                    label="From Currency"
                    selected=from
                    on_select=move |currency: Currency| fx.pair.update(|pair| pair.from = currency)
                />
                <CurrencyDropdown
                    label="To Currency"
                    selected=to
                    on_select=move |currency: Currency| fx.pair.update(|pair| pair.to = currency)
                />
                <div class="current-fx-rate-container">
                    <p>
                        "As of "
                        <span class="current-fx-rate-date">
                            {move || fx.snapshot.with(|s| s.as_of().unwrap_or_default().to_string())}
                        </span>
                    </p>
                    <p>
                        {move || format!("1 {} = ", from.get().symbol)}
                        <span class="current-fx-rate-value">
                            {move || ValueFormat::Rate.format(fx.snapshot.with(|s| s.current_rate))}
                        </span>
                        {move || format!(" {}", to.get().symbol)}
                    </p>
                </div>
            </div>
            <div class="chart-container">
                <PeriodToolbar selected=period.selected on_change=move |p: TimePeriod| period.select(p) />
                <Show when=move || fx.loading.get()>
                    <p class="chart-status">"Loading..."</p>
                </Show>
                <AreaChart points=points style=ChartStyle::exchange_rate() tooltip_format=ValueFormat::Rate />
            </div>
        </section>
    }
}

#[component]
fn SearchBoardItem(info: PublicPropInfo) -> impl IntoView {
    let flag = info.currency().map(|c| c.flag_class).unwrap_or_default();
    view! {
        <div class="yfinance-search-board-item">
            <div class="yfinance-search-board-item-header">
                <span class="yfinance-search-board-item-symbol">{info.symbol.clone()}</span>
                <div class="yfinance-search-board-item-tags">
                    <span class=format!("fi {}", flag)></span>
                    <span class="yfinance-search-board-item-prop-type">{info.prop_type.to_string()}</span>
                    <span class="yfinance-search-board-item-exchange">{info.exchange.clone().unwrap_or_default()}</span>
                </div>
            </div>
            <span class="yfinance-search-board-item-name">{info.display_name().to_string()}</span>
        </div>
    }
}

#[component]
fn PropertyDetails(info: PublicPropInfo) -> impl IntoView {
    let rows: Vec<(&'static str, String)> = [
        ("Exchange", info.exchange.clone()),
        ("Sector", info.sector.clone()),
        ("Industry", info.industry.clone()),
        ("Country", info.country.clone()),
        ("Website", info.website.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect();

    view! {
        <div class="property-details">
            <h4>{info.display_name().to_string()}</h4>
            <dl>
                {rows
                    .into_iter()
                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                    .collect_view()}
            </dl>
            {info.description.clone().map(|d| view! { <p class="property-description">{d}</p> })}
        </div>
    }
}

/// Symbol search with suggestions, then price history for the chosen symbol.
#[component]
pub fn YFinanceSection() -> impl IntoView {
    let period = use_period_selection();
    let search = use_yfinance_search();
    let selected = create_rw_signal(None::<Symbol>);
    let data = use_yfinance_data(selected, period.range);

    let is_focused = create_rw_signal(false);
    let search_bar = create_node_ref::<html::Div>();
    use_click_outside(search_bar, is_focused.into(), move || is_focused.set(false));

    let choose = move |symbol: String| {
        if let Some(symbol) = Symbol::parse(&symbol) {
            selected.set(Some(symbol));
            is_focused.set(false);
        }
    };

    let points = Signal::derive(move || data.history.with(|h| h.iter().map(ChartPoint::from).collect::<Vec<_>>()));

    let board = move || {
        if !is_focused.get() {
            return None;
        }
        let exact = search.result.get();
        let suggestions: Vec<PublicPropInfo> = search
            .suggestions
            .get()
            .into_iter()
            .filter(|s| exact.as_ref().map_or(true, |e| e.symbol != s.symbol))
            .collect();
        Some(view! {
            <div class="yfinance-search-board" on:mousedown=|ev| ev.prevent_default()>
                {match exact {
                    Some(info) => {
                        let symbol = info.symbol.clone();
                        view! {
                            <div class="yfinance-search-board-exact" on:click=move |_| choose(symbol.clone())>
                                <SearchBoardItem info=info />
                            </div>
                        }
                        .into_view()
                    }
                    None => view! {
                        <div class="yfinance-search-board-item">
                            <span class="yfinance-search-board-item-symbol">"No results found"</span>
                        </div>
                    }
                    .into_view(),
                }}
                {suggestions
                    .into_iter()
                    .map(|info| {
                        let symbol = info.symbol.clone();
                        view! {
                            <div class="yfinance-search-board-suggestion" on:click=move |_| choose(symbol.clone())>
                                <SearchBoardItem info=info />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        })
    };

    let chart_panel = move || {
        let symbol = selected.get()?;
        Some(view! {
            <div class="chart-container">
                <div class="chart-toolbar">
                    <div class="chart-header-title">
                        <h3>{symbol.value().to_string()}</h3>
                        <p>
                            {move || {
                                let range = period.range.get();
                                format!("{} - {}", range.start_param(), range.end_param())
                            }}
                        </p>
                    </div>
                    <PeriodToolbar selected=period.selected on_change=move |p: TimePeriod| period.select(p) />
                </div>
                {move || data.info.get().map(|info| view! { <PropertyDetails info=info /> })}
                {move || {
                    if data.waiting.get() {
                        view! { <p class="chart-status">"Loading..."</p> }.into_view()
                    } else if data.history.with(|h| h.is_empty()) {
                        view! { <p class="chart-status">"No historical data found"</p> }.into_view()
                    } else {
                        view! {
                            <AreaChart points=points style=ChartStyle::price() tooltip_format=ValueFormat::Usd />
                        }
                        .into_view()
                    }
                }}
            </div>
        })
    };

    view! {
        <section class="yfinance-section">
            <div class="yfinance-search-bar-container" node_ref=search_bar>
                <div class="yfinance-search-bar">
                    <input
                        type="text"
                        placeholder="Enter a symbol to search"
                        prop:value=move || search.query.get()
                        on:input=move |ev| search.query.set(event_target_value(&ev))
                        on:focus=move |_| is_focused.set(true)
                    />
                    <Show when=move || search.loading.get()>
                        <span class="search-spinner">"…"</span>
                    </Show>
                </div>
                {board}
            </div>
            {chart_panel}
        </section>
    }
}
