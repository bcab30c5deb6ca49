use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub year: AttrValue,
    pub button_id: AttrValue,
    /// Shuffled subset shown as the background grid, in display order.
    pub grid: Vec<String>,
    /// Receives the grid's URLs when the year's button is pressed.
    pub on_show: Callback<Vec<String>>,
}

/// One year block: a photo grid behind a "show photos" button.
#[function_component(PhotoSection)]
pub fn photo_section(props: &Props) -> Html {
    let on_click = {
        let grid = props.grid.clone();
        let cb = props.on_show.clone();
        Callback::from(move |_: MouseEvent| cb.emit(grid.clone()))
    };
    let heading_id = format!("year-{}", props.year);

    html! {
        <section class="year-section" aria-labelledby={heading_id.clone()}>
            <div class="photo-grid-bg" aria-hidden="true">
                { for props.grid.iter().map(|url| html! {
                    <div class="grid-cell" style={format!("background-image: url(\"{url}\")")}></div>
                }) }
            </div>
            <div class="year-overlay">
                <h2 id={heading_id}>{ props.year.clone() }</h2>
                <button id={props.button_id.clone()} type="button" class="show-photos"
                    disabled={props.grid.is_empty()} onclick={on_click}>
                    { t("gallery.show") }
                </button>
            </div>
        </section>
    }
}
