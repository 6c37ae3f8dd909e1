use yew::prelude::*;

pub const TITLE: &str = "Bike Path";

pub const INTRO: &str = "The Ballona Creek Bike Path starts at Syd Kronenthal Park in east Culver City \
and extends about 7 miles to the Coast Bike Path along the beach. This page details its various \
entrances and gives suggested approaches. Hover over an entrance to see its accessibility. There is \
some free street parking near most of the entrances, except for Lincoln Blvd (11) and Marina del Rey (12).";

pub const RAIN_NOTE: &str = "Note that the bikepath entrances are locked when there is a possibility \
of substantial rain. During rainstorms, the creek waters become fast and dangerous and may submerge \
parts of the bikepath.";

#[function_component(InfoPanel)]
pub fn info_panel() -> Html {
    html! {
        <div class="info">
            <h1>{ TITLE }</h1>
            <p>{ INTRO }</p>
            <p>{ RAIN_NOTE }</p>
        </div>
    }
}
