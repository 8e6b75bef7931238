use serde::{Deserialize, Serialize};

// extra fields sent by the api (codigo, provincia, ...) are ignored
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
    pub nombre: String,
    pub localidad: String,
}

impl Center {
    pub fn new(nombre: impl Into<String>, localidad: impl Into<String>) -> Self {
        Self {
            nombre: nombre.into(),
            localidad: localidad.into(),
        }
    }

    /// Visible text of the element rendered for this center.
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.nombre, self.localidad)
    }
}
