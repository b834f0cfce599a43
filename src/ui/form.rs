//! Working copy of a record edited inside the add/edit dialog.

use crate::model::{VaccineRecord, PLACEHOLDER_ID};

/// Editable fields, in the order the dialog shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Kind,
    Description,
    ManufacturingDate,
    ExpirationDate,
    Price,
    Stock,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Kind,
        FormField::Description,
        FormField::ManufacturingDate,
        FormField::ExpirationDate,
        FormField::Price,
        FormField::Stock,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Kind => "Type",
            FormField::Description => "Description",
            FormField::ManufacturingDate => "Manufactured",
            FormField::ExpirationDate => "Expires",
            FormField::Price => "Price",
            FormField::Stock => "Stock",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping to the last.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// A single keystroke-level change to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEdit {
    Insert(char),
    Backspace,
    FocusNext,
    FocusPrev,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordForm {
    pub record: VaccineRecord,
    pub focused: FormField,
}

impl RecordForm {
    /// Form for a record that does not exist yet, holding the placeholder id.
    pub fn blank() -> Self {
        Self {
            record: VaccineRecord {
                id: Some(PLACEHOLDER_ID),
                ..VaccineRecord::default()
            },
            focused: FormField::default(),
        }
    }

    /// Form holding its own copy of an existing record.
    pub fn from_record(record: &VaccineRecord) -> Self {
        Self {
            record: record.clone(),
            focused: FormField::default(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.record.name,
            FormField::Kind => &self.record.kind,
            FormField::Description => &self.record.description,
            FormField::ManufacturingDate => &self.record.manufacturing_date,
            FormField::ExpirationDate => &self.record.expiration_date,
            FormField::Price => &self.record.price,
            FormField::Stock => &self.record.stock,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.record.name,
            FormField::Kind => &mut self.record.kind,
            FormField::Description => &mut self.record.description,
            FormField::ManufacturingDate => &mut self.record.manufacturing_date,
            FormField::ExpirationDate => &mut self.record.expiration_date,
            FormField::Price => &mut self.record.price,
            FormField::Stock => &mut self.record.stock,
        }
    }

    pub fn apply(mut self, edit: FormEdit) -> Self {
        match edit {
            FormEdit::Insert(ch) => {
                let field = self.focused;
                self.value_mut(field).push(ch);
            }
            FormEdit::Backspace => {
                let field = self.focused;
                self.value_mut(field).pop();
            }
            FormEdit::FocusNext => self.focused = self.focused.next(),
            FormEdit::FocusPrev => self.focused = self.focused.prev(),
        }
        self
    }
}
