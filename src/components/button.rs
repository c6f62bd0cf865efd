use yew::prelude::*;
use web_sys::MouseEvent;

use super::class_list::class_list;

const BASE_CLASSES: &str = "btn";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "btn-default",
            Self::Outline => "btn-outline",
            Self::Ghost => "btn-ghost",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
    Large,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "btn-md",
            Self::Small => "btn-sm",
            Self::Large => "btn-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Extra classes appended after the resolved ones, so callers win
    /// source-order ties against the variant styling.
    #[prop_or_default]
    pub class: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

fn composed_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    class_list([
        Some(BASE_CLASSES),
        Some(variant.class()),
        Some(size.class()),
        extra,
    ])
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = composed_class(props.variant, props.size, props.class.as_deref());

    html! {
        <button class={class} disabled={props.disabled} onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_default_fragments() {
        let class = composed_class(ButtonVariant::default(), ButtonSize::default(), None);
        assert_eq!(class, "btn btn-default btn-md");
    }

    #[test]
    fn outline_large_composes_base_variant_size() {
        let class = composed_class(ButtonVariant::Outline, ButtonSize::Large, None);
        assert_eq!(class, "btn btn-outline btn-lg");
    }

    #[test]
    fn base_classes_survive_every_variant_and_size() {
        for variant in [
            ButtonVariant::Default,
            ButtonVariant::Outline,
            ButtonVariant::Ghost,
        ] {
            for size in [ButtonSize::Default, ButtonSize::Small, ButtonSize::Large] {
                let class = composed_class(variant, size, None);
                assert!(class.starts_with("btn "), "missing base in {class:?}");
            }
        }
    }

    #[test]
    fn caller_override_comes_last() {
        let class = composed_class(ButtonVariant::Ghost, ButtonSize::Small, Some("nav-cta"));
        assert_eq!(class, "btn btn-ghost btn-sm nav-cta");
        assert!(class.ends_with("nav-cta"));
    }

    #[test]
    fn fragments_are_nonempty_and_space_free() {
        for variant in [
            ButtonVariant::Default,
            ButtonVariant::Outline,
            ButtonVariant::Ghost,
        ] {
            assert!(!variant.class().is_empty());
            assert!(!variant.class().contains(' '));
        }
        for size in [ButtonSize::Default, ButtonSize::Small, ButtonSize::Large] {
            assert!(!size.class().is_empty());
            assert!(!size.class().contains(' '));
        }
    }
}
