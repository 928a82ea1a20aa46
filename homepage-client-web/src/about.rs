use gloo::console::error;
use gloo::net::http::Request;
use homepage_core::{AboutContent, AboutState};
use web_sys::RequestCache;
use yew::prelude::*;

/// Base dell'API, fissata a compile time.
const API_BASE: &str = match option_env!("HOMEPAGE_API_URL") {
    Some(url) => url,
    None => "http://localhost:5002",
};

/// GET /api/about; il body viene letto come testo prima del parse.
async fn fetch_about() -> Result<AboutContent, String> {
    let url = format!("{}/api/about", API_BASE);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    let body = response.text().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        let preview: String = body.chars().take(200).collect();
        let msg = format!("{} {}", status, preview);
        error!(&msg);
    }
    AboutState::outcome_from_response(status, &body)
}

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    let state = use_state(AboutState::default);

    {
        let state = state.clone();
        // fetch una volta al mount; se il componente non c'è più il setter non ha effetto
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = fetch_about().await;
                state.set((*state).clone().resolve(outcome));
            });
            || ()
        });
    }

    match &*state {
        AboutState::Content(about) => html! {
            <div class="about-us">
                <img src={about.img_url.clone()} alt="Jiaying" style="max-width: 300px; border-radius: 8px;" />
                <h1>{ &about.title }</h1>
                <p style="white-space: pre-line;">{ &about.body }</p>
            </div>
        },
        other => html! {
            <div>{ other.placeholder().unwrap_or_default() }</div>
        },
    }
}
