use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-brand">
                <h3>{"Storia"}</h3>
                <p>{"A clean, minimalist platform for thoughtful articles. Write, share, connect."}</p>
            </div>
            <div class="footer-links">
                <a href="#/">{"Home"}</a>
                <a href="#/login">{"Admin"}</a>
            </div>
        </footer>
    }
}
