//! Factory pattern: map a discriminator to a constructed dialog.

use crate::console::Console;
use crate::error::{PatternError, Result};
use std::fmt;
use std::str::FromStr;

/// Which dialog to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    /// Dialog for creating an item
    Create,
    /// Dialog for editing an item
    Edit,
    /// Dialog for deleting an item
    Delete,
}

impl DialogKind {
    /// Every kind, in declaration order.
    pub const ALL: [DialogKind; 3] = [DialogKind::Create, DialogKind::Edit, DialogKind::Delete];

    /// Lowercase name used for parsing and display.
    pub fn name(self) -> &'static str {
        match self {
            DialogKind::Create => "create",
            DialogKind::Edit => "edit",
            DialogKind::Delete => "delete",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialogKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        DialogKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PatternError::UnknownDialogKind(s.to_string()))
    }
}

/// A stateless dialog variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Create dialog
    Create,
    /// Edit dialog
    Edit,
    /// Delete dialog
    Delete,
}

/// Build the dialog for `kind`.
pub fn create_dialog(kind: DialogKind) -> Dialog {
    match kind {
        DialogKind::Create => Dialog::Create,
        DialogKind::Edit => Dialog::Edit,
        DialogKind::Delete => Dialog::Delete,
    }
}

/// Print one `kind -> Dialog` line per kind.
pub fn run(console: &Console) {
    for kind in DialogKind::ALL {
        console.println(format_args!("{} -> {:?}", kind, create_dialog(kind)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_maps_to_its_dialog() {
        assert_eq!(create_dialog(DialogKind::Create), Dialog::Create);
        assert_eq!(create_dialog(DialogKind::Edit), Dialog::Edit);
        assert_eq!(create_dialog(DialogKind::Delete), Dialog::Delete);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("EDIT".parse::<DialogKind>().unwrap(), DialogKind::Edit);
        assert_eq!(" delete ".parse::<DialogKind>().unwrap(), DialogKind::Delete);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "archive".parse::<DialogKind>().unwrap_err();
        assert!(matches!(err, PatternError::UnknownDialogKind(ref s) if s == "archive"));
    }

    #[test]
    fn test_run_output() {
        let console = Console::capture();
        run(&console);
        assert_eq!(
            console.lines(),
            vec!["create -> Create", "edit -> Edit", "delete -> Delete"]
        );
    }
}
