use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="text-center mt-10 not-found" aria-live="assertive">
            <h1 class="text-2xl font-bold mb-4">{ "Page not found" }</h1>
            <p class="mb-4">{ "The page you requested does not exist." }</p>
            <button type="button" onclick={go_home} class="bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-600">
                { "Back to policies" }
            </button>
        </section>
    }
}
