use crate::components::field::{SelectField, TextAreaField, TextField};
use crate::components::notice::Notice;
use policyhub_core::{Category, PolicyForm};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AddPolicyPageProps {
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<PolicyForm>,
}

fn category_labels() -> Vec<AttrValue> {
    Category::ALL
        .into_iter()
        .map(|c| AttrValue::Static(c.label()))
        .collect()
}

#[function_component(AddPolicyPage)]
pub fn add_policy_page(props: &AddPolicyPageProps) -> Html {
    let form = use_state(PolicyForm::default);

    let on_title = {
        let form = form.clone();
        Callback::from(move |title: String| {
            form.set(PolicyForm {
                title,
                ..(*form).clone()
            });
        })
    };
    let on_description = {
        let form = form.clone();
        Callback::from(move |description: String| {
            form.set(PolicyForm {
                description,
                ..(*form).clone()
            });
        })
    };
    let on_category = {
        let form = form.clone();
        Callback::from(move |category: String| {
            form.set(PolicyForm {
                category,
                ..(*form).clone()
            });
        })
    };
    let on_submit = {
        let form = form.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((*form).clone());
        })
    };

    html! {
        <div class="max-w-3xl mx-auto mt-10 p-8 bg-white rounded shadow-lg" data-testid="add-policy-page">
            <h1 class="text-2xl font-bold mb-6">{ "Add New Policy" }</h1>
            <Notice message={props.error.clone()} />
            <form onsubmit={on_submit}>
                <TextField label="Title" name="title" value={form.title.clone()} on_input={on_title} />
                <TextAreaField
                    label="Description"
                    name="description"
                    value={form.description.clone()}
                    on_input={on_description}
                />
                <SelectField
                    label="Category"
                    name="category"
                    placeholder="Select a category"
                    options={category_labels()}
                    value={form.category.clone()}
                    on_change={on_category}
                />
                <button type="submit" class="w-full bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-600 transition">
                    { "Add Policy" }
                </button>
            </form>
        </div>
    }
}
