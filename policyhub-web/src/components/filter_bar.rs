use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FilterBarProps {
    pub years: Vec<i32>,
    pub categories: Vec<String>,
    #[prop_or_default]
    pub year: AttrValue,
    #[prop_or_default]
    pub category: AttrValue,
    pub on_year: Callback<String>,
    pub on_category: Callback<String>,
    pub on_add_policy: Callback<()>,
}

fn select_callback(cb: &Callback<String>) -> Callback<Event> {
    let cb = cb.clone();
    Callback::from(move |e: Event| {
        if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
            cb.emit(sel.value());
        }
    })
}

/// Year and category selects plus the add-policy button above the list.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_add = {
        let cb = props.on_add_policy.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="mb-6 flex justify-between items-center">
            <div class="flex gap-4">
                <select
                    id="filter-year"
                    aria-label="Filter by Year"
                    value={props.year.clone()}
                    onchange={select_callback(&props.on_year)}
                    class="border border-gray-300 rounded px-4 py-2"
                >
                    <option value="" selected={props.year.is_empty()}>{ "Filter by Year" }</option>
                    { for props.years.iter().map(|year| {
                        let value = year.to_string();
                        let selected = *props.year == *value;
                        html! { <option value={value.clone()} {selected}>{ value }</option> }
                    })}
                </select>
                <select
                    id="filter-category"
                    aria-label="Filter by Category"
                    value={props.category.clone()}
                    onchange={select_callback(&props.on_category)}
                    class="border border-gray-300 rounded px-4 py-2"
                >
                    <option value="" selected={props.category.is_empty()}>{ "Filter by Category" }</option>
                    { for props.categories.iter().map(|category| {
                        let selected = *props.category == **category;
                        html! { <option value={category.clone()} {selected}>{ category.clone() }</option> }
                    })}
                </select>
            </div>
            <button
                id="add-policy-btn"
                onclick={on_add}
                class="bg-green-500 text-white py-2 px-6 rounded hover:bg-green-600 transition"
            >
                { "Add Policy" }
            </button>
        </div>
    }
}
