use std::rc::Rc;

use leptos::*;

use crate::application::{
    click_outside::ClickOutside,
    market_queries::{load_fx, load_history, lookup_symbol, search_properties},
    period_selection::PeriodSelection,
    remote::{RemoteLoader, ResourceSink},
};
use crate::domain::market_data::{
    CurrencyPair, DateRange, FxSnapshot, PublicPropInfo, Symbol, TimePeriod, YFinancePricePoint,
};
use crate::infrastructure::dom_events::DocumentPointerDown;
use crate::presentation::context::{use_api, use_config};
use crate::time_utils::today;

/// Value and loading flag held in signals.
pub struct SignalSink<T: 'static> {
    pub value: RwSignal<T>,
    pub loading: RwSignal<bool>,
}

impl<T: 'static> Clone for SignalSink<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalSink<T> {}

impl<T: 'static> SignalSink<T> {
    pub fn new(initial: T) -> Self {
        Self { value: create_rw_signal(initial), loading: create_rw_signal(false) }
    }
}

impl<T: 'static> ResourceSink<T> for SignalSink<T> {
    fn publish(&self, value: T) {
        self.value.set(value);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

#[derive(Clone, Copy)]
pub struct PeriodHandle {
    selection: RwSignal<PeriodSelection>,
    pub selected: Memo<TimePeriod>,
    pub range: Memo<DateRange>,
}

impl PeriodHandle {
    pub fn select(&self, period: TimePeriod) {
        self.selection.update(|selection| {
            selection.select(period);
        });
    }
}

pub fn use_period_selection() -> PeriodHandle {
    let config = use_config();
    let selection = create_rw_signal(PeriodSelection::new(config.default_period, today(), config.data_lag_days));
    let selected = create_memo(move |_| selection.with(|s| s.selected()));
    let range = create_memo(move |_| selection.with(|s| s.range()));
    PeriodHandle { selection, selected, range }
}

#[derive(Clone, Copy)]
pub struct CurrencyData {
    pub pair: RwSignal<CurrencyPair>,
    pub snapshot: RwSignal<FxSnapshot>,
    pub loading: RwSignal<bool>,
}

/// Refetches rates whenever the pair or the range changes.
pub fn use_currency_data(range: Memo<DateRange>) -> CurrencyData {
    let api = use_api();
    let pair = create_rw_signal(CurrencyPair::default());
    let sink = SignalSink::new(FxSnapshot::default());
    let loader = RemoteLoader::new("currency", sink);

    create_effect(move |_| {
        let (pair, range) = (pair.get(), range.get());
        let api = api.clone();
        spawn_local(loader.load_detached(async move { load_fx(&api, pair, range).await }));
    });

    CurrencyData { pair, snapshot: sink.value, loading: sink.loading }
}

#[derive(Clone, Copy)]
pub struct SymbolSearch {
    pub query: RwSignal<String>,
    pub result: RwSignal<Option<PublicPropInfo>>,
    pub suggestions: RwSignal<Vec<PublicPropInfo>>,
    pub loading: RwSignal<bool>,
}

/// Exact lookup plus fuzzy suggestions for the typed symbol. Blank input
/// clears both without a request.
pub fn use_yfinance_search() -> SymbolSearch {
    let api = use_api();
    let limit = use_config().search_limit;
    let query = create_rw_signal(String::new());
    let exact = SignalSink::new(None::<PublicPropInfo>);
    let fuzzy = SignalSink::new(Vec::<PublicPropInfo>::new());
    let exact_loader = RemoteLoader::new("symbol-lookup", exact);
    let fuzzy_loader = RemoteLoader::new("symbol-suggestions", fuzzy);

    create_effect(move |_| {
        let typed = query.get();
        if Symbol::parse(&typed).is_none() {
            exact_loader.reset(None);
            fuzzy_loader.reset(Vec::new());
            return;
        }
        let lookup_api = api.clone();
        let lookup_input = typed.clone();
        spawn_local(exact_loader.load_detached(async move { lookup_symbol(&lookup_api, &lookup_input).await }));
        let search_api = api.clone();
        spawn_local(fuzzy_loader.load_detached(async move { search_properties(&search_api, &typed, limit).await }));
    });

    SymbolSearch { query, result: exact.value, suggestions: fuzzy.value, loading: exact.loading }
}

#[derive(Clone, Copy)]
pub struct SelectedSymbolData {
    pub info: RwSignal<Option<PublicPropInfo>>,
    pub history: RwSignal<Vec<YFinancePricePoint>>,
    pub waiting: RwSignal<bool>,
}

/// Details follow the selected symbol; price history follows the symbol and the range.
pub fn use_yfinance_data(selected: RwSignal<Option<Symbol>>, range: Memo<DateRange>) -> SelectedSymbolData {
    let api = use_api();
    let info = SignalSink::new(None::<PublicPropInfo>);
    let history = SignalSink::new(Vec::<YFinancePricePoint>::new());
    let info_loader = RemoteLoader::new("selected-info", info);
    let history_loader = RemoteLoader::new("selected-history", history);

    let info_api = api.clone();
    create_effect(move |_| {
        if let Some(symbol) = selected.get() {
            let api = info_api.clone();
            spawn_local(info_loader.load_detached(async move { lookup_symbol(&api, symbol.value()).await }));
        }
    });

    create_effect(move |_| {
        let range = range.get();
        if let Some(symbol) = selected.get() {
            let api = api.clone();
            spawn_local(history_loader.load_detached(async move { load_history(&api, &symbol, range).await }));
        }
    });

    SelectedSymbolData { info: info.value, history: history.value, waiting: history.loading }
}

/// Run `on_outside` on pointer-down outside `region`, listening only while `enabled`.
pub fn use_click_outside(region: NodeRef<html::Div>, enabled: Signal<bool>, on_outside: impl Fn() + 'static) {
    let source = DocumentPointerDown::new(move || {
        region.get_untracked().map(|el| {
            let element: &web_sys::Element = &el;
            element.clone()
        })
    });
    let guard = Rc::new(ClickOutside::new(source, on_outside));

    let tracked = guard.clone();
    create_effect(move |_| tracked.set_enabled(enabled.get()));
    on_cleanup(move || guard.set_enabled(false));
}
