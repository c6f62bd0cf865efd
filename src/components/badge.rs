use yew::prelude::*;

use super::class_list::class_list;

const BASE_CLASSES: &str = "badge";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "badge-default",
            Self::Secondary => "badge-secondary",
            Self::Destructive => "badge-destructive",
            Self::Outline => "badge-outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub class: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

fn composed_class(variant: BadgeVariant, extra: Option<&str>) -> String {
    class_list([Some(BASE_CLASSES), Some(variant.class()), extra])
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let class = composed_class(props.variant, props.class.as_deref());

    html! {
        <div class={class}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARIANTS: [BadgeVariant; 4] = [
        BadgeVariant::Default,
        BadgeVariant::Secondary,
        BadgeVariant::Destructive,
        BadgeVariant::Outline,
    ];

    #[test]
    fn unspecified_variant_falls_back_to_default() {
        assert_eq!(composed_class(BadgeVariant::default(), None), "badge badge-default");
    }

    #[test]
    fn base_classes_survive_every_variant() {
        for variant in ALL_VARIANTS {
            let class = composed_class(variant, None);
            assert!(class.starts_with("badge "), "missing base in {class:?}");
        }
    }

    #[test]
    fn caller_override_comes_last() {
        let class = composed_class(BadgeVariant::Secondary, Some("project-tag"));
        assert_eq!(class, "badge badge-secondary project-tag");
    }

    #[test]
    fn fragments_are_nonempty_and_space_free() {
        for variant in ALL_VARIANTS {
            assert!(!variant.class().is_empty());
            assert!(!variant.class().contains(' '));
        }
    }
}
