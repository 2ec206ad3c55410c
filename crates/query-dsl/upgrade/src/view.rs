//! The view entity, described at the level of detail the deployment hooks
//! need. Full schema metadata lives with the embedding application.

use serde::{Deserialize, Serialize};

/// A named database view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    pub columns: Vec<String>,
}
