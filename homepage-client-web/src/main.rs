use yew::prelude::*;

mod about;

use about::AboutUs;

#[function_component(App)]
fn app() -> Html {
    html! {
        <main style="font-family: system-ui, Arial, sans-serif; padding: 2rem;">
            <AboutUs />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
