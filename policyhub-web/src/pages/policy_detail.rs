use policyhub_core::Policy;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PolicyDetailPageProps {
    /// `None` while the policy is still loading.
    #[prop_or_default]
    pub policy: Option<Policy>,
    #[prop_or_default]
    pub already_voted: bool,
    pub on_upvote: Callback<()>,
}

#[function_component(PolicyDetailPage)]
pub fn policy_detail_page(props: &PolicyDetailPageProps) -> Html {
    let Some(policy) = props.policy.as_ref() else {
        return html! {
            <div class="text-center mt-10" aria-live="polite">{ "Loading policy details..." }</div>
        };
    };

    let on_upvote = {
        let cb = props.on_upvote.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let (label, class) = if props.already_voted {
        ("Already Voted", "px-4 py-2 rounded text-white bg-gray-400 cursor-not-allowed")
    } else {
        ("Upvote", "px-4 py-2 rounded text-white bg-blue-500 hover:bg-blue-600")
    };

    html! {
        <article class="max-w-3xl mx-auto mt-10 p-6 bg-white rounded shadow-md" data-testid="policy-detail">
            <h1 class="text-3xl font-bold mb-4">{ policy.title.clone() }</h1>
            <p class="text-gray-700 mb-4">{ policy.description.clone() }</p>
            <div class="text-gray-600 mb-4">
                <p><strong>{ "Category:" }</strong>{ " " }{ policy.category.clone() }</p>
                <p><strong>{ "Owner:" }</strong>{ " " }{ policy.owner.clone() }</p>
                <p><strong>{ "Date:" }</strong>{ " " }{ policy.display_date() }</p>
                <p><strong>{ "Votes:" }</strong>{ " " }{ policy.vote_count().to_string() }</p>
            </div>
            <button id="upvote-btn" class={class} disabled={props.already_voted} onclick={on_upvote}>
                { label }
            </button>
        </article>
    }
}
