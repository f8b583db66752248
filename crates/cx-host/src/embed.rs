// ABOUTME: Child view controller embedding.
// ABOUTME: Places a child controller's view in a container and pins it edge to edge.

use crate::layout::{add_constraint, Attribute, Constraint, LayoutHost};

/// Host that manages a view hierarchy and a controller hierarchy.
pub trait ControllerHost: LayoutHost {
    type Controller;

    fn view_of(&self, controller: &Self::Controller) -> Self::View;

    fn add_subview(&mut self, container: &Self::View, view: &Self::View);

    fn add_child_controller(&mut self, parent: &Self::Controller, child: &Self::Controller);
}

const PINNED_EDGES: [Attribute; 4] = [
    Attribute::Top,
    Attribute::Leading,
    Attribute::Trailing,
    Attribute::Bottom,
];

/// Make `child` a child of `parent`, with its view filling `container` with no margin.
///
/// `container` must be `parent`'s view or one of its subviews.
pub fn add_child<H: ControllerHost + ?Sized>(
    host: &mut H,
    parent: &H::Controller,
    child: &H::Controller,
    container: &H::View,
) {
    let view = host.view_of(child);
    host.add_subview(container, &view);

    for edge in PINNED_EDGES {
        add_constraint(host, Constraint::equal(view.clone(), container.clone(), edge));
    }

    host.add_child_controller(parent, child);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::RecordingHost;
    use crate::layout::{LayoutError, Relation};
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct Host {
        layout: RecordingHost,
        subviews: Vec<(u32, u32)>,
        children: Vec<(&'static str, &'static str)>,
    }

    impl LayoutHost for Host {
        type View = u32;

        fn set_translates_autoresizing_mask(&mut self, view: &u32, enabled: bool) {
            self.layout.set_translates_autoresizing_mask(view, enabled);
        }

        fn constraints_with_visual_format(
            &mut self,
            format: &str,
            views: &BTreeMap<String, u32>,
        ) -> Result<Vec<Constraint<u32>>, LayoutError> {
            self.layout.constraints_with_visual_format(format, views)
        }

        fn add_constraints(&mut self, view: &u32, constraints: Vec<Constraint<u32>>) {
            self.layout.add_constraints(view, constraints);
        }
    }

    impl ControllerHost for Host {
        type Controller = &'static str;

        fn view_of(&self, controller: &&'static str) -> u32 {
            match *controller {
                "sidebar" => 20,
                _ => 10,
            }
        }

        fn add_subview(&mut self, container: &u32, view: &u32) {
            self.subviews.push((*container, *view));
        }

        fn add_child_controller(&mut self, parent: &&'static str, child: &&'static str) {
            self.children.push((*parent, *child));
        }
    }

    #[test]
    fn child_view_is_added_pinned_and_registered() {
        let mut host = Host::default();
        add_child(&mut host, &"main", &"sidebar", &99);

        assert_eq!(host.subviews, vec![(99, 20)]);
        assert_eq!(host.children, vec![("main", "sidebar")]);
        assert_eq!(host.layout.translates.get(&20), Some(&false));

        let edges: Vec<Attribute> = host
            .layout
            .added
            .iter()
            .map(|(_, c)| c.first_attribute)
            .collect();
        assert_eq!(edges, PINNED_EDGES.to_vec());
        for (owner, constraint) in &host.layout.added {
            assert_eq!(*owner, 20);
            assert_eq!(constraint.second, Some(99));
            assert_eq!(constraint.relation, Relation::Equal);
            assert_eq!(constraint.first_attribute, constraint.second_attribute);
            assert_eq!(constraint.constant, 0.0);
        }
    }
}
