use yew::prelude::*;

pub const APP_TITLE: &str = "Maharishi International University Student Policies";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub display_name: Option<AttrValue>,
    pub on_login: Callback<()>,
    pub on_signup: Callback<()>,
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Shared page chrome: title bar, session controls and the content column.
#[function_component(PageLayout)]
pub fn page_layout(p: &Props) -> Html {
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let session_controls = if let Some(name) = p.display_name.as_ref() {
        html! {
            <>
                <span class="text-lg" data-testid="welcome">{ format!("Welcome, {name}") }</span>
                <button
                    id="logout-btn"
                    onclick={emit(&p.on_logout)}
                    class="bg-red-500 text-white py-2 px-4 rounded hover:bg-red-600"
                >
                    { "Logout" }
                </button>
            </>
        }
    } else {
        html! {
            <>
                <button
                    id="login-btn"
                    onclick={emit(&p.on_login)}
                    class="bg-green-500 text-white py-2 px-4 rounded hover:bg-green-600 mr-2"
                >
                    { "Login" }
                </button>
                <button
                    id="signup-btn"
                    onclick={emit(&p.on_signup)}
                    class="bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-600"
                >
                    { "Sign Up" }
                </button>
            </>
        }
    };

    html! {
        <div class="min-h-screen bg-blue-100">
            <header role="banner" class="bg-blue-600 text-white py-4 px-8 shadow-md flex justify-between items-center">
                <h1 class="text-2xl font-bold">{ APP_TITLE }</h1>
                <div class="flex items-center space-x-4">
                    { session_controls }
                </div>
            </header>
            <div class="text-center mt-8 mb-4">
                <h2 class="text-xl font-semibold">{ p.title.clone() }</h2>
            </div>
            <main id="main" role="main" class="max-w-3xl mx-auto">
                { for p.children.iter() }
            </main>
        </div>
    }
}
