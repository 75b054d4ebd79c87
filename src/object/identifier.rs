// src/object/identifier.rs
// Compact names for objects in log lines: `Kind[.Group]:[Namespace/]Name`.
use super::Object;
use std::fmt::{Display, Formatter};

/// Display adapter that renders an object's human name without allocating.
#[derive(Debug, Clone, Copy)]
pub struct HumanName<'a> {
    object: &'a Object,
}

impl<'a> HumanName<'a> {
    pub fn new(object: &'a Object) -> Self {
        Self { object }
    }
}

impl Display for HumanName<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let gvk = self.object.group_version_kind();

        f.write_str(&gvk.kind)?;
        if !gvk.group.is_empty() {
            write!(f, ".{}", gvk.group)?;
        }
        f.write_str(":")?;

        let namespace = self.object.namespace();
        if !namespace.is_empty() {
            write!(f, "{}/", namespace)?;
        }
        f.write_str(self.object.name())
    }
}

/// Returns an identifier for the object suitable for printing in log messages.
/// Not a stable key for anything else.
pub fn human_name(object: &Object) -> String {
    HumanName::new(object).to_string()
}
