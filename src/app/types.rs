//! Type definitions for the App module.

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Issue table navigation
    #[default]
    Table,
    /// Search box
    Search,
    /// New-issue form
    AddForm,
    /// Edit dialog for the selection
    EditForm,
}

/// Which form a field edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Draft,
    Selection,
}
