use yew::prelude::*;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🤖",
        "AI-Powered Detection",
        "Our neural networks identify microscopic inconsistencies in pixel patterns.",
    ),
    (
        "⚡",
        "Lightning Fast",
        "Distributed GPU processing delivers comprehensive results in under 2 seconds.",
    ),
    (
        "📊",
        "Metadata Analysis",
        "Deep dive into EXIF data and file structures to find hidden tampering history.",
    ),
];

pub fn render_features() -> Html {
    html! {
        <section id="about" class="features">
            <h2>{"Powerful Features"}</h2>
            <div class="feature-grid">
                { for FEATURES.iter().map(|(icon, title, desc)| html! {
                    <div class="feature-card" key={*title}>
                        <div class="feature-icon">{ *icon }</div>
                        <h3>{ *title }</h3>
                        <p>{ *desc }</p>
                    </div>
                })}
            </div>
        </section>
    }
}
