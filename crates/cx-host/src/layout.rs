// ABOUTME: Layout constraint helpers over a host constraint system.
// ABOUTME: Names views v0, v1, ... for visual format strings and opts views into constraints.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Left,
    Right,
    Top,
    Bottom,
    Leading,
    Trailing,
    Width,
    Height,
    CenterX,
    CenterY,
    /// Used as the second attribute of constant-only constraints
    NotAnAttribute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    LessThanOrEqual,
    Equal,
    GreaterThanOrEqual,
}

/// `first.first_attribute <relation> second.second_attribute * multiplier + constant`
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint<V> {
    pub first: V,
    pub first_attribute: Attribute,
    pub relation: Relation,
    pub second: Option<V>,
    pub second_attribute: Attribute,
    pub multiplier: f64,
    pub constant: f64,
}

impl<V> Constraint<V> {
    pub fn new(
        first: V,
        first_attribute: Attribute,
        relation: Relation,
        second: Option<V>,
        second_attribute: Attribute,
    ) -> Self {
        Self {
            first,
            first_attribute,
            relation,
            second,
            second_attribute,
            multiplier: 1.0,
            constant: 0.0,
        }
    }

    /// Same-attribute equality between two views, as used when pinning edges
    pub fn equal(first: V, second: V, attribute: Attribute) -> Self {
        Self::new(first, attribute, Relation::Equal, Some(second), attribute)
    }

    pub fn with_constant(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid visual format {format:?}: {reason}")]
    InvalidFormat { format: String, reason: String },
}

/// Host constraint system. Views are cheap handles owned by the host.
pub trait LayoutHost {
    type View: Clone;

    /// Whether the host derives constraints from the view's autoresizing mask.
    fn set_translates_autoresizing_mask(&mut self, view: &Self::View, enabled: bool);

    fn constraints_with_visual_format(
        &mut self,
        format: &str,
        views: &BTreeMap<String, Self::View>,
    ) -> Result<Vec<Constraint<Self::View>>, LayoutError>;

    fn add_constraints(&mut self, view: &Self::View, constraints: Vec<Constraint<Self::View>>);
}

/// Key views by position: the first view is `v0`, the next `v1`, and so on.
pub fn view_dictionary<V: Clone>(views: &[V]) -> BTreeMap<String, V> {
    views
        .iter()
        .enumerate()
        .map(|(index, view)| (format!("v{}", index), view.clone()))
        .collect()
}

/// Parse `format` against `views` (named `v0`, `v1`, ...) and add the result to `container`.
///
/// Every listed view stops translating its autoresizing mask. Returns the
/// number of constraints added.
pub fn add_constraints_with_visual_format<H: LayoutHost + ?Sized>(
    host: &mut H,
    container: &H::View,
    format: &str,
    views: &[H::View],
) -> Result<usize, LayoutError> {
    let dictionary = view_dictionary(views);
    for view in views {
        host.set_translates_autoresizing_mask(view, false);
    }

    let constraints = host.constraints_with_visual_format(format, &dictionary)?;
    let count = constraints.len();
    host.add_constraints(container, constraints);
    tracing::debug!("Added {} constraints for {:?}", count, format);
    Ok(count)
}

/// Add a single constraint to its first view, opting both views into constraint layout.
pub fn add_constraint<H: LayoutHost + ?Sized>(host: &mut H, constraint: Constraint<H::View>) {
    host.set_translates_autoresizing_mask(&constraint.first, false);
    if let Some(second) = &constraint.second {
        host.set_translates_autoresizing_mask(second, false);
    }
    let owner = constraint.first.clone();
    host.add_constraints(&owner, vec![constraint]);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Records calls. Understands only `H:|[vN]|` and `V:|[vN]|`.
    #[derive(Default)]
    pub(crate) struct RecordingHost {
        pub translates: HashMap<u32, bool>,
        pub added: Vec<(u32, Constraint<u32>)>,
    }

    impl LayoutHost for RecordingHost {
        type View = u32;

        fn set_translates_autoresizing_mask(&mut self, view: &u32, enabled: bool) {
            self.translates.insert(*view, enabled);
        }

        fn constraints_with_visual_format(
            &mut self,
            format: &str,
            views: &BTreeMap<String, u32>,
        ) -> Result<Vec<Constraint<u32>>, LayoutError> {
            let invalid = |reason: &str| LayoutError::InvalidFormat {
                format: format.to_string(),
                reason: reason.to_string(),
            };
            let (axis, rest) = format.split_once(':').ok_or_else(|| invalid("missing axis"))?;
            let name = rest
                .strip_prefix("|[")
                .and_then(|r| r.strip_suffix("]|"))
                .ok_or_else(|| invalid("unsupported format"))?;
            let view = *views.get(name).ok_or_else(|| invalid("unknown view"))?;
            let (leading, trailing) = match axis {
                "H" => (Attribute::Leading, Attribute::Trailing),
                "V" => (Attribute::Top, Attribute::Bottom),
                _ => return Err(invalid("unknown axis")),
            };
            Ok(vec![
                Constraint::new(view, leading, Relation::Equal, None, Attribute::NotAnAttribute),
                Constraint::new(view, trailing, Relation::Equal, None, Attribute::NotAnAttribute),
            ])
        }

        fn add_constraints(&mut self, view: &u32, constraints: Vec<Constraint<u32>>) {
            self.added
                .extend(constraints.into_iter().map(|constraint| (*view, constraint)));
        }
    }

    #[test]
    fn views_are_keyed_by_position() {
        let dictionary = view_dictionary(&[10, 20, 30]);
        assert_eq!(dictionary.get("v0"), Some(&10));
        assert_eq!(dictionary.get("v1"), Some(&20));
        assert_eq!(dictionary.get("v2"), Some(&30));
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn visual_format_adds_constraints_to_container() {
        let mut host = RecordingHost::default();
        let count =
            add_constraints_with_visual_format(&mut host, &1, "H:|[v1]|", &[7, 8]).unwrap();

        assert_eq!(count, 2);
        assert_eq!(host.translates.get(&7), Some(&false));
        assert_eq!(host.translates.get(&8), Some(&false));
        assert!(host.added.iter().all(|(owner, c)| *owner == 1 && c.first == 8));
    }

    #[test]
    fn visual_format_errors_propagate() {
        let mut host = RecordingHost::default();
        let result = add_constraints_with_visual_format(&mut host, &1, "H:|[v5]|", &[7]);
        assert!(matches!(result, Err(LayoutError::InvalidFormat { .. })));
        assert!(host.added.is_empty());
    }

    #[test]
    fn single_constraint_defaults() {
        let constraint =
            Constraint::new(3, Attribute::Width, Relation::Equal, None, Attribute::NotAnAttribute);
        assert_eq!(constraint.multiplier, 1.0);
        assert_eq!(constraint.constant, 0.0);
    }

    #[test]
    fn single_constraint_is_owned_by_first_view() {
        let mut host = RecordingHost::default();
        let constraint = Constraint::new(
            3,
            Attribute::Width,
            Relation::GreaterThanOrEqual,
            Some(4),
            Attribute::Width,
        )
        .with_multiplier(0.5)
        .with_constant(12.0);
        add_constraint(&mut host, constraint.clone());

        assert_eq!(host.translates.get(&3), Some(&false));
        assert_eq!(host.translates.get(&4), Some(&false));
        assert_eq!(host.added, vec![(3, constraint)]);
    }

    #[test]
    fn constant_only_constraint_touches_one_view() {
        let mut host = RecordingHost::default();
        add_constraint(
            &mut host,
            Constraint::new(3, Attribute::Height, Relation::Equal, None, Attribute::NotAnAttribute)
                .with_constant(44.0),
        );
        assert_eq!(host.translates.len(), 1);
        assert_eq!(host.added[0].1.constant, 44.0);
    }
}
