use serde::{Deserialize, Serialize};

/// Usuario autenticado (lo que se guarda en localStorage, sin contraseña)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Entrada de la lista fija de usuarios de demostración
#[derive(Clone, PartialEq, Debug)]
pub struct DemoUser {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub password: &'static str,
}

impl DemoUser {
    pub fn to_user(&self) -> User {
        User {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            role: self.role.to_string(),
        }
    }

    /// Coincide por id (nómina) o por email, sin distinguir mayúsculas
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        self.id.eq_ignore_ascii_case(identifier) || self.email.eq_ignore_ascii_case(identifier)
    }
}

pub const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        id: "1",
        name: "Administrador",
        email: "admin@bioflex.com",
        role: "Administrador",
        password: "admin123",
    },
    DemoUser {
        id: "2",
        name: "Inspector",
        email: "inspector@bioflex.com",
        role: "Inspector de Calidad",
        password: "inspector123",
    },
    DemoUser {
        id: "3",
        name: "Inspector de Pruebas",
        email: "test@bioflex.com",
        role: "Inspector de Calidad",
        password: "test123",
    },
];
