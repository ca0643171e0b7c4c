//! Index assignment and composite field expansion
//!
//!     Declarations get consecutive indices starting at 0, in declaration order. A declaration
//!     matching an [`Expansion`] exactly (same name and type) is replaced by the expansion's
//!     components, each taking its own index. Numbering then resumes after the last component.
//!
//!     The built-in expansion turns a Bro connection id (`id: conn_id`) into its 4-tuple, which
//!     is how connection logs lay the value out on disk:
//!
//!         id: conn_id   =>   src(ip) src_port(port) dst(ip) dst_port(port)

use super::declaration::Declaration;
use crate::resource::Field;

/// One synthetic field produced by an expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub data_type: String,
}

impl Component {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Component {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// A composite declaration that is replaced by several fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub name: String,
    pub data_type: String,
    pub components: Vec<Component>,
}

impl Expansion {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        components: Vec<Component>,
    ) -> Self {
        Expansion {
            name: name.into(),
            data_type: data_type.into(),
            components,
        }
    }

    /// The `id: conn_id` connection 4-tuple
    pub fn conn_id() -> Self {
        Expansion::new(
            "id",
            "conn_id",
            vec![
                Component::new("src", "ip"),
                Component::new("src_port", "port"),
                Component::new("dst", "ip"),
                Component::new("dst_port", "port"),
            ],
        )
    }

    pub fn matches(&self, declaration: &Declaration) -> bool {
        declaration.name == self.name && declaration.data_type == self.data_type
    }
}

/// Assign indices to declarations, expanding composites.
///
/// The first expansion that matches a declaration wins.
pub fn assign_indices(declarations: &[Declaration], expansions: &[Expansion]) -> Vec<Field> {
    let mut fields = Vec::with_capacity(declarations.len());

    for declaration in declarations {
        match expansions.iter().find(|e| e.matches(declaration)) {
            Some(expansion) => {
                for component in &expansion.components {
                    let index = fields.len();
                    fields.push(Field::new(&component.name, &component.data_type, index));
                }
            }
            None => {
                let index = fields.len();
                fields.push(Field::new(&declaration.name, &declaration.data_type, index));
            }
        }
    }

    fields
}
