//! WASM bindings for the nav toggle
//!
//! Lets a plain page script install the toggle without a Rust UI:
//!
//! ```js
//! import init, { initLogging, installNavToggle } from "./nav_toggle.js";
//! await init();
//! initLogging("debug");
//! const nav = installNavToggle({ className: "show-nav" });
//! ```

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

use crate::config::NavToggleConfig;
use crate::controller::{NavToggleController, NavToggleHandle};
use crate::dom::WebDom;

/// Forwards `log` records to the browser console
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&message),
            Level::Warn => web_sys::console::warn_1(&message),
            Level::Info => web_sys::console::info_1(&message),
            Level::Debug => web_sys::console::debug_1(&message),
            Level::Trace => web_sys::console::log_1(&message),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the panic hook and console logger.
///
/// `level` is a `log` level name ("error" .. "trace"); defaults to "info".
/// Safe to call more than once, only the first logger install wins.
#[wasm_bindgen(js_name = "initLogging")]
pub fn init_logging(level: Option<String>) {
    console_error_panic_hook::set_once();

    let level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn parse_config(config: JsValue) -> Result<NavToggleConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(NavToggleConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid nav toggle config: {e}")))
}

/// Installed toggle, as seen from JS. Calling `free()` detaches it.
#[wasm_bindgen]
pub struct NavToggle {
    handle: Option<NavToggleHandle<WebDom>>,
}

/// Install against the whole document. `config` may be omitted.
#[wasm_bindgen(js_name = "installNavToggle")]
pub fn install_nav_toggle(config: JsValue) -> Result<NavToggle, JsError> {
    let config = parse_config(config)?;
    let handle = NavToggleController::install(WebDom::from_window()?, &config)?;
    Ok(NavToggle {
        handle: Some(handle),
    })
}

/// Install with selector lookups limited to descendants of `root`
#[wasm_bindgen(js_name = "installNavToggleIn")]
pub fn install_nav_toggle_in(root: web_sys::Element, config: JsValue) -> Result<NavToggle, JsError> {
    let config = parse_config(config)?;
    let handle = NavToggleController::install(WebDom::scoped(root), &config)?;
    Ok(NavToggle {
        handle: Some(handle),
    })
}

#[wasm_bindgen]
impl NavToggle {
    /// Toggle without a click; returns the number of elements flipped
    pub fn toggle(&self) -> usize {
        self.handle.as_ref().map_or(0, |handle| handle.toggle())
    }

    #[wasm_bindgen(getter, js_name = "isAttached")]
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    #[wasm_bindgen(getter, js_name = "linkCount")]
    pub fn link_count(&self) -> usize {
        self.handle.as_ref().map_or(0, |handle| handle.links().len())
    }

    /// Remove the click listener; later calls are no-ops
    pub fn detach(&mut self) -> Result<(), JsError> {
        if let Some(handle) = self.handle.take() {
            handle.detach()?;
        }
        Ok(())
    }
}
