use yew::prelude::*;

use super::{InfoPanel, MapView};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="App">
            <MapView />
            <InfoPanel />
        </div>
    }
}
