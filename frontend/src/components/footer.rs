use yew::prelude::*;

pub fn render_footer() -> Html {
    html! {
        <footer class="app-footer">
            <p class="footer-brand">{"Aletheia"}</p>
            <p class="footer-copy">
                {"The global standard for AI-powered image verification and digital trust."}
            </p>
        </footer>
    }
}
