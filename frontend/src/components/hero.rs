use yew::prelude::*;

pub fn render_hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-badge">{"Next-Gen Authenticity"}</div>
            <h1 class="hero-title">{"Aletheia"}</h1>
            <p class="hero-tagline">{"Truth Revealed Through Innovation"}</p>
            <p class="hero-copy">
                {"Verify image authenticity using cutting-edge AI before you trust or \
                  share content online. Identify deepfakes and manipulations in seconds."}
            </p>
            <div class="hero-actions">
                <a class="button-primary" href="#verify">{"Start Verification"}</a>
                <a class="button-secondary" href="#about">{"Learn More"}</a>
            </div>
        </section>
    }
}
