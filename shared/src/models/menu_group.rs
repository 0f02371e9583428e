//! Menu Group Model

use crate::error::AppResult;
use crate::validation::{MAX_NAME_LEN, validate_required_text};

/// Menu group to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuGroup {
    name: String,
}

impl NewMenuGroup {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Stored menu group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    id: i64,
    name: String,
}

impl MenuGroup {
    pub fn restore(id: i64, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
