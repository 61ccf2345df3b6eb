//! Removable chip for one selected option.

use tuidom::Element;

use crate::overrides::{Overrides, Slot};
use crate::style::tag_style;

pub struct TagProps<'a> {
    pub id: String,
    pub disabled: bool,
    pub label: Element,
    pub overrides: &'a Overrides,
}

/// Id of the remove action inside the tag with `tag_id`.
pub fn action_id(tag_id: &str) -> String {
    format!("{tag_id}-remove")
}

pub fn render_tag(props: TagProps<'_>) -> Element {
    let action = Element::text("×")
        .id(action_id(&props.id))
        .clickable(!props.disabled)
        .disabled(props.disabled)
        .attr("aria-label", "remove");

    let tag = Element::row()
        .id(props.id)
        .gap(1)
        .role("listitem")
        .disabled(props.disabled)
        .style(tag_style(props.disabled))
        .child(props.label)
        .child(action);

    props.overrides.resolve(Slot::Tag, tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuidom::find_element;

    #[test]
    fn tag_is_listitem_with_action() {
        let overrides = Overrides::new();
        let tag = render_tag(TagProps {
            id: "t".into(),
            disabled: false,
            label: Element::text("Apple"),
            overrides: &overrides,
        });
        assert_eq!(tag.get_attr("role"), Some("listitem"));
        let action = find_element(&tag, "t-remove").unwrap();
        assert!(action.clickable);
    }

    #[test]
    fn disabled_tag_action_is_inert() {
        let overrides = Overrides::new();
        let tag = render_tag(TagProps {
            id: "t".into(),
            disabled: true,
            label: Element::text("Apple"),
            overrides: &overrides,
        });
        assert!(!find_element(&tag, "t-remove").unwrap().clickable);
    }
}
