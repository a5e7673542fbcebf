use policyhub_core::Policy;
use yew::prelude::*;

const SUMMARY_CHARS: usize = 100;

#[derive(Properties, PartialEq, Clone)]
pub struct PolicyCardProps {
    pub policy: Policy,
    pub on_view: Callback<String>,
}

#[function_component(PolicyCard)]
pub fn policy_card(props: &PolicyCardProps) -> Html {
    let policy = &props.policy;
    let on_view = {
        let cb = props.on_view.clone();
        let id = policy.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };

    html! {
        <article class="bg-white shadow-lg rounded-lg p-6 policy-card" data-policy-id={policy.id.clone()}>
            <h2 class="text-xl font-bold mb-2">{ policy.title.clone() }</h2>
            <p class="text-gray-700 mb-2">{ policy.summary(SUMMARY_CHARS) }</p>
            <p class="text-gray-500"><strong>{ "Category:" }</strong>{ " " }{ policy.category.clone() }</p>
            <p class="text-gray-500"><strong>{ "Owner:" }</strong>{ " " }{ policy.owner.clone() }</p>
            <p class="text-gray-500"><strong>{ "Date:" }</strong>{ " " }{ policy.date.clone() }</p>
            <p class="text-gray-500"><strong>{ "Votes:" }</strong>{ " " }{ policy.vote_count().to_string() }</p>
            <button
                class="mt-4 bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-600 transition"
                onclick={on_view}
            >
                { "View More" }
            </button>
        </article>
    }
}
