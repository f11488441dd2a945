use shared::{VerifyResult, ACCEPTED_TYPES};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::super::{Model, Msg};
use super::tooltip::render_tooltip;
use super::utils::debounce;

pub fn render_verify_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <section id="verify" class="verify-section">
            <div class="section-intro">
                <h2>{"Image Authenticity Verifier"}</h2>
                <p>{"Secure, private, and powered by neural networks."}</p>
            </div>
            <div class="verify-grid">
                { render_upload_box(model, ctx) }
                { render_result_panel(model) }
            </div>
        </section>
    }
}

fn render_upload_box(model: &Model, ctx: &Context<Model>) -> Html {
    let on_change = ctx.link().callback(Msg::FileChosen);

    let open_picker = debounce(300, || {
        if let Some(input) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"))
        {
            if let Ok(element) = input.dyn_into::<web_sys::HtmlElement>() {
                element.click();
            }
        }
    });

    let file_label = model
        .session
        .selected_file()
        .map_or_else(|| "Upload Image".to_string(), |meta| meta.name.clone());

    html! {
        <div class="upload-box" onclick={open_picker}>
            <input
                type="file"
                id="file-input"
                style="display: none;"
                accept={ACCEPTED_TYPES.join(",")}
                onchange={on_change}
            />
            <div class="upload-icon">{"📁"}</div>
            <p class="upload-filename">{ file_label }</p>
            <p class="upload-hint">{"JPG, PNG or WEBP • Up to 10MB"}</p>
            <button type="button" class="upload-button">
                { if model.session.is_busy() { "Processing..." } else { "Select File" } }
            </button>
        </div>
    }
}

fn render_result_panel(model: &Model) -> Html {
    let body = if model.session.is_busy() {
        html! {
            <div class="panel-state panel-busy">
                <p class="panel-glyph">{"⚙️"}</p>
                <p>{"Analyzing pixels..."}</p>
            </div>
        }
    } else if let Some(message) = model.session.user_error() {
        html! {
            <div class="panel-state panel-error">
                <p class="panel-error-title">{"Error"}</p>
                <p>{ message }</p>
            </div>
        }
    } else if let Some(result) = model.session.result() {
        render_verdict(model, result)
    } else {
        html! {
            <div class="panel-state panel-waiting">
                <p class="panel-glyph">{"🔍"}</p>
                <p>{"Waiting for upload..."}</p>
            </div>
        }
    };

    html! { <div class="result-panel">{ body }</div> }
}

fn render_verdict(model: &Model, result: &VerifyResult) -> Html {
    // Authentic styling is gated on the completed state, never on the bare
    // label, so it cannot appear before a real verdict exists.
    let verdict_class = if model.session.is_authentic() {
        "verdict-authentic"
    } else {
        "verdict-tampered"
    };

    html! {
        <div class="result-complete">
            <p class="result-title">{"Analysis Complete"}</p>

            <div class="result-card">
                <p class="result-card-label">{"Verdict"}</p>
                <p class={classes!("verdict-label", verdict_class)}>
                    { model.session.label() }
                </p>
            </div>

            <div class="result-card">
                <p class="result-card-label">{"Confidence"}</p>
                <p class="confidence-value">
                    { format!("{:.2}%", model.session.confidence_percent()) }
                </p>
            </div>

            if !result.evidence.heatmap_image.is_empty() {
                <div class="result-evidence">
                    { render_tooltip(
                        "ELA Heatmap",
                        "Error-level analysis highlights regions whose compression \
                         differs from the rest of the image.",
                    )}
                    <img
                        src={result.evidence.heatmap_image.clone()}
                        alt="ELA Heatmap"
                        class="heatmap-image"
                    />
                </div>
            }

            if !result.evidence.metadata.is_empty() {
                <div class="result-card">
                    <p class="result-card-label">{"Metadata"}</p>
                    <p class="metadata-text">{ result.evidence.metadata.clone() }</p>
                </div>
            }
        </div>
    }
}
