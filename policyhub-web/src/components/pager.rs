use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PagerProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

const fn nav_class(disabled: bool) -> &'static str {
    if disabled {
        "px-4 py-2 rounded bg-gray-300 cursor-not-allowed"
    } else {
        "px-4 py-2 rounded bg-blue-500 text-white hover:bg-blue-600"
    }
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let prev_disabled = props.current_page <= 1;
    let next_disabled = props.current_page >= props.total_pages;
    let on_previous = {
        let cb = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <nav class="flex justify-between mt-6" aria-label="Pagination">
            <button id="prev-page" onclick={on_previous} disabled={prev_disabled} class={nav_class(prev_disabled)}>
                { "Previous" }
            </button>
            <span class="text-gray-700">
                { format!("Page {} of {}", props.current_page, props.total_pages) }
            </span>
            <button id="next-page" onclick={on_next} disabled={next_disabled} class={nav_class(next_disabled)}>
                { "Next" }
            </button>
        </nav>
    }
}
