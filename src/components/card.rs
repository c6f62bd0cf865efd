use yew::prelude::*;

use super::class_list::class_list;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let class = class_list([Some("card"), props.class.as_deref()]);

    html! {
        <div class={class}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &CardProps) -> Html {
    let class = class_list([Some("card-content"), props.class.as_deref()]);

    html! {
        <div class={class}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_base_stays_first_and_override_last() {
        assert_eq!(class_list([Some("card"), Some("contact-card")]), "card contact-card");
        assert_eq!(class_list([Some("card"), None]), "card");
    }
}
