use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Error,
    Success,
}

impl NoticeKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Error => "text-red-500 mb-4",
            Self::Success => "text-green-500 mb-4",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or_default]
    pub kind: NoticeKind,
}

/// Inline form feedback; renders nothing without a message.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let Some(message) = props.message.clone() else {
        return Html::default();
    };
    let role = if props.kind == NoticeKind::Error {
        "alert"
    } else {
        "status"
    };
    html! {
        <p class={props.kind.class()} role={role}>{ message }</p>
    }
}
