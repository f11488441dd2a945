use yew::prelude::*;

pub fn render_navbar() -> Html {
    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="brand">
                    <span class="brand-mark">{"🛡"}</span>
                    {" Aletheia"}
                </div>
                <div class="nav-links">
                    <a href="#home">{"Home"}</a>
                    <a href="#verify">{"Verify"}</a>
                    <a href="#about">{"About"}</a>
                    <a class="nav-cta" href="#verify">{"Get Started"}</a>
                </div>
            </div>
        </nav>
    }
}
