use shared_types::FormMode;

/// What an open form sheet is doing.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetMode<T> {
    Create,
    Edit(T),
}

impl<T> SheetMode<T> {
    pub fn form_mode(&self) -> FormMode {
        match self {
            SheetMode::Create => FormMode::Create,
            SheetMode::Edit(_) => FormMode::Edit,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, SheetMode::Edit(_))
    }
}
