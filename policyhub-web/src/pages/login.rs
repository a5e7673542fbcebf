use crate::components::field::TextField;
use crate::components::notice::Notice;
use policyhub_core::LoginForm;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoginPageProps {
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<LoginForm>,
    pub on_signup: Callback<()>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let form = use_state(LoginForm::default);

    let on_username = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(LoginForm {
                username: value,
                ..(*form).clone()
            });
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(LoginForm {
                password: value,
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
    let on_signup = {
        let cb = props.on_signup.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="max-w-md mx-auto mt-10 p-6 bg-white rounded shadow-lg" data-testid="login-page">
            <h1 class="text-2xl font-bold mb-4">{ "Login" }</h1>
            <Notice message={props.error.clone()} />
            <form onsubmit={on_submit}>
                <TextField
                    label="Email"
                    hint={Some(AttrValue::from("(used as your username)"))}
                    name="username"
                    input_type="email"
                    required={true}
                    value={form.username.clone()}
                    on_input={on_username}
                />
                <TextField
                    label="Password"
                    name="password"
                    input_type="password"
                    required={true}
                    value={form.password.clone()}
                    on_input={on_password}
                />
                <button type="submit" class="w-full bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-600 transition">
                    { "Login" }
                </button>
            </form>
            <div class="mt-6 text-center">
                <p class="text-gray-700">{ "Don't have an account?" }</p>
                <button type="button" id="to-signup" onclick={on_signup} class="text-blue-500 hover:underline font-medium">
                    { "Sign Up" }
                </button>
            </div>
        </div>
    }
}
