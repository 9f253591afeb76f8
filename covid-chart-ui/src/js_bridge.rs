//! Typed wrappers around JS interop.
//!
//! Plotly.js is injected from its CDN as a `<script>` tag on startup through
//! `web_sys`. Figures are handed over as JSON string literals and drawn with
//! `Plotly.react` via `js_sys::eval()`, which updates an existing plot in
//! place when the container already holds one.

use covid_view::figure::Figure;
use wasm_bindgen::JsValue;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const PLOTLY_SCRIPT_ID: &str = "covid-plotly-js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('COVID JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

fn inject_plotly_script() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.get_element_by_id(PLOTLY_SCRIPT_ID).is_some() {
        return Ok(());
    }
    let head = document
        .query_selector("head")?
        .ok_or_else(|| JsValue::from_str("no <head> element"))?;
    let script = document.create_element("script")?;
    script.set_id(PLOTLY_SCRIPT_ID);
    script.set_attribute("src", PLOTLY_CDN)?;
    head.append_child(&script)?;
    Ok(())
}

/// Inject the Plotly script tag once. Safe to call on every render.
pub fn init_charts() {
    if let Err(e) = inject_plotly_script() {
        log::error!("Failed to load Plotly: {:?}", e);
    }
}

/// Render figure JSON into the given container.
///
/// Uses a polling loop to wait for Plotly to load and the container DOM
/// element to exist before rendering.
pub fn render_figure_json(container_id: &str, figure_json: &str) {
    // JSON-encode the JSON text again to get a JS string literal
    let literal = serde_json::to_string(figure_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof Plotly !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        var fig = JSON.parse({literal});
                        Plotly.react('{container_id}', fig.data, fig.layout, {{responsive: true}});
                    }} catch(e) {{ console.error('[COVID] Plotly.react error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Serialize and render a figure. Serialization failures are logged.
pub fn render_figure(container_id: &str, figure: &Figure) {
    match figure.to_json() {
        Ok(json) => render_figure_json(container_id, &json),
        Err(e) => log::error!("Failed to serialize figure for {}: {}", container_id, e),
    }
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{0}'); if (el) {{ if (typeof Plotly !== 'undefined') Plotly.purge(el); el.innerHTML = ''; }}",
        container_id
    ));
}
