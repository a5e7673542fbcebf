use crate::components::field::TextField;
use crate::components::notice::{Notice, NoticeKind};
use policyhub_core::SignupForm;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SignupPageProps {
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub success: Option<AttrValue>,
    pub on_submit: Callback<SignupForm>,
}

fn field_setter(
    form: &UseStateHandle<SignupForm>,
    apply: fn(&mut SignupForm, String),
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

#[function_component(SignupPage)]
pub fn signup_page(props: &SignupPageProps) -> Html {
    let form = use_state(SignupForm::default);

    let on_submit = {
        let form = form.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((*form).clone());
        })
    };

    html! {
        <div class="max-w-md mx-auto mt-10 p-6 bg-white rounded shadow-lg" data-testid="signup-page">
            <h1 class="text-2xl font-bold mb-4">{ "Sign Up" }</h1>
            <Notice message={props.error.clone()} />
            <Notice message={props.success.clone()} kind={NoticeKind::Success} />
            <form onsubmit={on_submit}>
                <TextField
                    label="First Name"
                    name="firstName"
                    value={form.first_name.clone()}
                    on_input={field_setter(&form, |f, v| f.first_name = v)}
                />
                <TextField
                    label="Last Name"
                    name="lastName"
                    value={form.last_name.clone()}
                    on_input={field_setter(&form, |f, v| f.last_name = v)}
                />
                <TextField
                    label="Email (Username)"
                    name="username"
                    input_type="email"
                    placeholder={Some(AttrValue::from("Enter your email"))}
                    value={form.username.clone()}
                    on_input={field_setter(&form, |f, v| f.username = v)}
                />
                <TextField
                    label="Password"
                    name="password"
                    input_type="password"
                    value={form.password.clone()}
                    on_input={field_setter(&form, |f, v| f.password = v)}
                />
                <button type="submit" class="w-full bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-600 transition">
                    { "Sign Up" }
                </button>
            </form>
        </div>
    }
}
