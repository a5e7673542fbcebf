use yew::html::TargetCast;
use yew::prelude::*;

const INPUT_CLASS: &str = "w-full border border-gray-300 rounded px-4 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500";

#[derive(Properties, PartialEq, Clone)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    pub on_input: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let id = format!("field-{}", props.name);
    html! {
        <div class="mb-4">
            <label for={id.clone()} class="block text-gray-700 mb-2">
                { props.label.clone() }
                { props.hint.as_ref().map(|hint| html! {
                    <>{ " " }<span class="text-sm text-gray-500">{ hint.clone() }</span></>
                }).unwrap_or_default() }
            </label>
            <input
                id={id}
                type={props.input_type.clone()}
                name={props.name.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                oninput={oninput}
                class={INPUT_CLASS}
            />
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TextAreaFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    pub on_input: Callback<String>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                cb.emit(area.value());
            }
        })
    };
    let id = format!("field-{}", props.name);
    html! {
        <div class="mb-6">
            <label for={id.clone()} class="block text-gray-700 font-medium mb-2">{ props.label.clone() }</label>
            <textarea
                id={id}
                name={props.name.clone()}
                value={props.value.clone()}
                oninput={oninput}
                class={format!("{INPUT_CLASS} h-32 resize-none")}
            />
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub placeholder: AttrValue,
    pub options: Vec<AttrValue>,
    #[prop_or_default]
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit(sel.value());
            }
        })
    };
    let id = format!("field-{}", props.name);
    html! {
        <div class="mb-6">
            <label for={id.clone()} class="block text-gray-700 font-medium mb-2">{ props.label.clone() }</label>
            <select
                id={id}
                name={props.name.clone()}
                value={props.value.clone()}
                onchange={onchange}
                class={INPUT_CLASS}
            >
                <option value="" selected={props.value.is_empty()}>{ props.placeholder.clone() }</option>
                { for props.options.iter().map(|opt| {
                    let selected = *opt == props.value;
                    html! { <option value={opt.clone()} {selected}>{ opt.clone() }</option> }
                })}
            </select>
        </div>
    }
}
