//! Unsaved-changes bookkeeping shared by every form of the console.

use std::collections::HashSet;

use crate::model::resource::ResourceKind;

/// Which resource forms currently hold unsaved changes.
///
/// The page-level "leave site?" prompt must fire while any form is dirty, so
/// one panel closing its form never clears another panel's changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtyForms {
    kinds: HashSet<ResourceKind>,
}

impl DirtyForms {
    /// Records the state of `kind`'s form and returns whether any form is dirty.
    pub fn mark(&mut self, kind: ResourceKind, dirty: bool) -> bool {
        if dirty {
            self.kinds.insert(kind);
        } else {
            self.kinds.remove(&kind);
        }
        self.any()
    }

    pub fn any(&self) -> bool {
        !self.kinds.is_empty()
    }

    pub fn clear(&mut self) {
        self.kinds.clear();
    }
}

/// Whether the form contents may be thrown away. A clean form always may;
/// for a dirty one `ask` decides, and it is only called in that case.
pub fn may_discard(dirty: bool, ask: impl FnOnce() -> bool) -> bool {
    !dirty || ask()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_one_form_keeps_another_dirty() {
        let mut forms = DirtyForms::default();
        assert!(forms.mark(ResourceKind::Sites, true));
        assert!(forms.mark(ResourceKind::Payments, true));
        assert!(forms.mark(ResourceKind::Sites, false));
        assert!(!forms.mark(ResourceKind::Payments, false));
    }

    #[test]
    fn clean_marks_on_other_kinds_change_nothing() {
        let mut forms = DirtyForms::default();
        forms.mark(ResourceKind::Laborers, true);
        assert!(forms.mark(ResourceKind::Materials, false));
        assert!(forms.mark(ResourceKind::Attendance, false));
        forms.clear();
        assert!(!forms.any());
    }

    #[test]
    fn clean_forms_are_discarded_without_asking() {
        let mut asked = false;
        assert!(may_discard(false, || {
            asked = true;
            false
        }));
        assert!(!asked);
    }

    #[test]
    fn dirty_forms_follow_the_answer() {
        assert!(may_discard(true, || true));
        assert!(!may_discard(true, || false));
    }
}
