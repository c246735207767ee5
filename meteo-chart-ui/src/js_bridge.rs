//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly is loaded from a CDN `<script>` tag in each app's index.html and
//! exposed as `window.Plotly`. The apps treat it as a black box: traces and
//! layout are serialized to JSON on the Rust side and handed over as-is.

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[meteo] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Render (or re-render) a plot into the given container.
///
/// Uses a polling loop to wait for the Plotly script to load and the
/// container DOM element to exist before calling `Plotly.newPlot`. Calling
/// again with the same container replaces the previous plot.
pub fn render_plot(container_id: &str, data_json: &str, layout_json: &str) {
    let escaped_data = data_json.replace('\\', "\\\\").replace('\'', "\\'");
    let escaped_layout = layout_json.replace('\\', "\\\\").replace('\'', "\\'");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof Plotly !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        Plotly.newPlot(
                            '{container_id}',
                            JSON.parse('{escaped_data}'),
                            JSON.parse('{escaped_layout}'),
                            {{responsive: true, displayModeBar: false}}
                        );
                    }} catch(e) {{ console.error('[meteo] newPlot error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Tear down a plot and free its resources.
pub fn purge_plot(container_id: &str) {
    call_js(&format!(
        "if (typeof Plotly !== 'undefined') {{ var el = document.getElementById('{0}'); if (el) Plotly.purge(el); }}",
        container_id
    ));
}
