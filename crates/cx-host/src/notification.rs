// ABOUTME: Observer removal for a host notification center.
// ABOUTME: Accepts an optional observer token and forwards only present ones.

pub trait NotificationCenter {
    type Observer;

    /// Drop every dispatch table entry for `observer`.
    fn remove_observer(&mut self, observer: &Self::Observer);
}

/// Remove `observer` if there is one. Returns whether anything was forwarded.
pub fn remove_observer<C: NotificationCenter + ?Sized>(
    center: &mut C,
    observer: Option<&C::Observer>,
) -> bool {
    if let Some(observer) = observer {
        center.remove_observer(observer);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Center {
        observers: Vec<String>,
    }

    impl NotificationCenter for Center {
        type Observer = String;

        fn remove_observer(&mut self, observer: &String) {
            self.observers.retain(|o| o != observer);
        }
    }

    #[test]
    fn removes_present_observer() {
        let mut center = Center {
            observers: vec!["window".to_string(), "theme".to_string()],
        };
        let token = "theme".to_string();
        assert!(remove_observer(&mut center, Some(&token)));
        assert_eq!(center.observers, vec!["window".to_string()]);
    }

    #[test]
    fn missing_observer_is_ignored() {
        let mut center = Center {
            observers: vec!["window".to_string()],
        };
        assert!(!remove_observer(&mut center, None));
        assert_eq!(center.observers.len(), 1);
    }
}
