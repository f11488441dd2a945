use yew::prelude::*;

/// Hover tooltip primitive. Pure markup; positioning and visibility live in CSS.
pub fn render_tooltip(trigger: &str, tip: &str) -> Html {
    html! {
        <span class="tooltip">
            { trigger }
            <span class="tooltip-content" role="tooltip">{ tip }</span>
        </span>
    }
}
