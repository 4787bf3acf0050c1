use yew::prelude::*;

use crate::components::{Footer, Navbar};

#[derive(Properties, PartialEq)]
pub struct PublicLayoutProps {
    pub children: Children,
}

#[function_component(PublicLayout)]
pub fn public_layout(props: &PublicLayoutProps) -> Html {
    html! {
        <div class="public-layout">
            <Navbar />
            <main class="public-main">
                { props.children.clone() }
            </main>
            <Footer />
        </div>
    }
}
