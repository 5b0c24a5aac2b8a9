use async_trait::async_trait;

use crate::verification::application::ports::outgoing::LabelKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLabelCommand {
    kind: LabelKind,
    value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddLabelCommandError {
    #[error("Label cannot be empty")]
    EmptyLabel,
}

impl AddLabelCommand {
    pub fn new(kind: LabelKind, value: String) -> Result<Self, AddLabelCommandError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AddLabelCommandError::EmptyLabel);
        }

        Ok(Self {
            kind,
            value: value.to_string(),
        })
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Returns false when the label was already known.
#[async_trait]
pub trait AddLabelUseCase: Send + Sync {
    async fn execute(&self, command: AddLabelCommand) -> bool;
}
