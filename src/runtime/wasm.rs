// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search modal and the smart header.
//!
//! The page passes a host object whose methods do the DOM work. Missing
//! methods are skipped silently, so a theme without, say, a loading indicator
//! simply leaves `setLoadingVisible` out.
//!
//! # Usage
//!
//! ```js
//! const modal = SearchModal.mount(host, { indexPath: "/index.json" });
//! document.addEventListener("keydown", (e) => {
//!     if (modal.onGlobalKey(e.key, e.altKey)) e.preventDefault();
//! });
//! // host.fetchIndex(path)  -> later modal.indexLoaded(text) / modal.indexFailed(status)
//! // host.schedule(ms, tok) -> later modal.timerFired(tok)
//! ```
//!
//! Host callbacks must not call back into the same object synchronously;
//! timers and fetches are asynchronous by nature, which is what keeps this
//! true for the choreography above.

use js_sys::{Array, Function, Reflect};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{HeaderConfig, ModalConfig};
use crate::error::IndexLoadError;
use crate::fuzzy::FuzzyOptions;
use crate::header::{HeaderController, HeaderHost, HeaderVisibility};
use crate::index::{SearchIndexHandle, DEFAULT_RESULT_LIMIT};
use crate::modal::{IndexEvent, Key, KeyPress, ModalController, ModalHost, TimerToken};

/// Parse an optional options object, falling back to defaults.
fn options_or_default<T: Default + serde::de::DeserializeOwned>(options: Option<JsValue>) -> T {
    match options {
        Some(opts) if !opts.is_undefined() && !opts.is_null() => {
            from_value(opts).unwrap_or_default()
        }
        _ => T::default(),
    }
}

/// Thin caller for methods on a JS object.
struct JsObject {
    target: JsValue,
}

impl JsObject {
    fn call(&self, method: &str, args: &[JsValue]) -> Option<JsValue> {
        let func = Reflect::get(&self.target, &JsValue::from_str(method))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        let result = match args {
            [] => func.call0(&self.target),
            [a] => func.call1(&self.target, a),
            [a, b] => func.call2(&self.target, a, b),
            _ => func.apply(&self.target, &args.iter().collect::<Array>()),
        };
        result.ok()
    }
}

/// [`ModalHost`] over a JS host object.
struct JsModalHost(JsObject);

impl ModalHost for JsModalHost {
    fn has_required_elements(&self) -> bool {
        self.0
            .call("hasRequiredElements", &[])
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    fn set_container_visible(&mut self, visible: bool) {
        self.0.call("setContainerVisible", &[visible.into()]);
    }

    fn set_active(&mut self, active: bool) {
        self.0.call("setActive", &[active.into()]);
    }

    fn focus_input(&mut self) {
        self.0.call("focusInput", &[]);
    }

    fn clear_input(&mut self) {
        self.0.call("clearInput", &[]);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.0.call("setScrollLocked", &[locked.into()]);
    }

    fn set_aria_hidden(&mut self, hidden: bool) {
        self.0.call("setAriaHidden", &[hidden.into()]);
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.0.call("setLoadingVisible", &[visible.into()]);
    }

    fn set_empty_visible(&mut self, visible: bool) {
        self.0.call("setEmptyVisible", &[visible.into()]);
    }

    fn set_results_markup(&mut self, markup: &str) {
        self.0.call("setResultsMarkup", &[markup.into()]);
    }

    fn row_urls(&self) -> Vec<String> {
        self.0
            .call("rowUrls", &[])
            .filter(Array::is_array)
            .map(|urls| {
                Array::from(&urls)
                    .iter()
                    .filter_map(|url| url.as_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn set_row_focused(&mut self, row: usize, focused: bool) {
        self.0
            .call("setRowFocused", &[(row as u32).into(), focused.into()]);
    }

    fn scroll_row_into_view(&mut self, row: usize) {
        self.0.call("scrollRowIntoView", &[(row as u32).into()]);
    }

    fn navigate(&mut self, url: &str) {
        self.0.call("navigate", &[url.into()]);
    }

    fn fetch_index(&mut self, path: &str) {
        self.0.call("fetchIndex", &[path.into()]);
    }

    fn schedule(&mut self, delay_ms: u32, token: TimerToken) {
        let token = JsValue::from_f64(token.to_bits() as f64);
        self.0.call("schedule", &[delay_ms.into(), token]);
    }

    fn attach_query_listeners(&mut self) {
        self.0.call("attachQueryListeners", &[]);
    }

    fn log_error(&mut self, message: &str) {
        self.0.call("logError", &[message.into()]);
    }
}

/// The search modal, driven from page events.
#[wasm_bindgen]
pub struct SearchModal {
    inner: ModalController<JsModalHost>,
}

#[wasm_bindgen]
impl SearchModal {
    /// Attach to the page. Returns `undefined` when the host reports missing
    /// required elements.
    #[wasm_bindgen]
    pub fn mount(host: JsValue, options: Option<JsValue>) -> Option<SearchModal> {
        let config: ModalConfig = options_or_default(options);
        ModalController::mount(JsModalHost(JsObject { target: host }), config)
            .map(|inner| SearchModal { inner })
    }

    #[wasm_bindgen]
    pub fn open(&mut self) {
        self.inner.open();
    }

    #[wasm_bindgen]
    pub fn close(&mut self) {
        self.inner.close();
    }

    #[wasm_bindgen]
    pub fn toggle(&mut self) {
        self.inner.toggle();
    }

    /// Page-wide keydown. Returns `true` when the event should be prevented.
    #[wasm_bindgen(js_name = "onGlobalKey")]
    pub fn on_global_key(&mut self, key: &str, alt: bool) -> bool {
        self.inner.on_global_key(KeyPress {
            key: Key::from_dom(key),
            alt,
        })
    }

    /// Keydown inside the query field. Returns `true` when handled.
    #[wasm_bindgen(js_name = "onQueryKey")]
    pub fn on_query_key(&mut self, key: &str) -> bool {
        self.inner.on_query_key(Key::from_dom(key))
    }

    #[wasm_bindgen(js_name = "onInput")]
    pub fn on_input(&mut self, value: &str) {
        self.inner.on_input(value);
    }

    /// A result row was clicked.
    #[wasm_bindgen]
    pub fn activate(&mut self, row: usize) {
        self.inner.activate(row);
    }

    /// The index response body arrived.
    #[wasm_bindgen(js_name = "indexLoaded")]
    pub fn index_loaded(&mut self, body: String) {
        self.inner.on_index_event(IndexEvent::Ready(body));
    }

    /// The index fetch failed: with an HTTP status for error responses,
    /// without one for network errors.
    #[wasm_bindgen(js_name = "indexFailed")]
    pub fn index_failed(&mut self, status: Option<u16>, message: Option<String>) {
        let err = match status {
            Some(status) => IndexLoadError::Fetch { status },
            None => IndexLoadError::Network(message.unwrap_or_default()),
        };
        self.inner.on_index_event(IndexEvent::Failed(err));
    }

    #[wasm_bindgen(js_name = "timerFired")]
    pub fn timer_fired(&mut self, token: f64) {
        self.inner.on_timer(TimerToken::from_bits(token as u64));
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.inner.state().as_str().to_string()
    }

    /// Focused row, `-1` when none.
    #[wasm_bindgen(getter, js_name = "focusIndex")]
    pub fn focus_index(&self) -> i32 {
        self.inner.cursor().as_dom_index()
    }

    #[wasm_bindgen(js_name = "isIndexLoaded")]
    pub fn is_index_loaded(&self) -> bool {
        self.inner.is_index_loaded()
    }
}

/// [`HeaderHost`] over a JS host object.
struct JsHeaderHost(JsObject);

impl HeaderHost for JsHeaderHost {
    fn apply(&mut self, visibility: HeaderVisibility) {
        self.0.call("apply", &[visibility.class_name().into()]);
    }

    fn request_frame(&mut self) {
        self.0.call("requestFrame", &[]);
    }

    fn schedule_idle(&mut self, delay_ms: u32, token: u64) {
        self.0
            .call("scheduleIdle", &[delay_ms.into(), JsValue::from_f64(token as f64)]);
    }
}

/// The scroll-aware header.
#[wasm_bindgen]
pub struct SmartHeader {
    inner: HeaderController<JsHeaderHost>,
}

#[wasm_bindgen]
impl SmartHeader {
    #[wasm_bindgen(constructor)]
    pub fn new(host: JsValue, options: Option<JsValue>) -> SmartHeader {
        let config: HeaderConfig = options_or_default(options);
        SmartHeader {
            inner: HeaderController::mount(JsHeaderHost(JsObject { target: host }), config),
        }
    }

    #[wasm_bindgen(js_name = "onScroll")]
    pub fn on_scroll(&mut self, offset: f64) {
        self.inner.on_scroll(offset);
    }

    #[wasm_bindgen(js_name = "onFrame")]
    pub fn on_frame(&mut self) {
        self.inner.on_frame();
    }

    #[wasm_bindgen(js_name = "onIdle")]
    pub fn on_idle(&mut self, token: f64) {
        self.inner.on_idle(token as u64);
    }

    #[wasm_bindgen(getter)]
    pub fn hidden(&self) -> bool {
        self.inner.visibility() == HeaderVisibility::Hidden
    }
}

/// Standalone query engine, for pages that render results themselves.
#[wasm_bindgen]
pub struct SiteIndex {
    handle: SearchIndexHandle,
}

#[wasm_bindgen]
impl SiteIndex {
    /// Build from the `index.json` body.
    #[wasm_bindgen(constructor)]
    pub fn new(body: &str, options: Option<JsValue>) -> Result<SiteIndex, JsValue> {
        let fuzzy: FuzzyOptions = options_or_default(options);
        let handle = SearchIndexHandle::from_json(body, fuzzy)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SiteIndex { handle })
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.handle.len()
    }

    /// Ranked `{record, rank, position}` objects, best first.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
        let results = self
            .handle
            .search(query.trim(), limit.unwrap_or(DEFAULT_RESULT_LIMIT));
        to_value(&results).map_err(|e| e.to_string().into())
    }
}
