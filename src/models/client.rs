use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subsistema de origen del lote. Cada uno tiene su propia llave de búsqueda
/// y forma de etiqueta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Client {
    Bioflex,
    Destiny,
    Quality,
}

impl Client {
    pub const ALL: [Client; 3] = [Client::Bioflex, Client::Destiny, Client::Quality];

    pub fn as_str(&self) -> &'static str {
        match self {
            Client::Bioflex => "BIOFLEX",
            Client::Destiny => "DESTINY",
            Client::Quality => "QUALITY",
        }
    }

    /// Nombre para botones y encabezados
    pub fn label(&self) -> &'static str {
        match self {
            Client::Bioflex => "Bioflex",
            Client::Destiny => "Destiny",
            Client::Quality => "Quality",
        }
    }

    /// Nombre de la llave con la que se busca la etiqueta
    pub fn lookup_key_label(&self) -> &'static str {
        match self {
            Client::Bioflex => "Trazabilidad",
            Client::Destiny => "ItemNo, InventoryLot y ShippingUnitId",
            Client::Quality => "PO2 e Item Number",
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Client::Bioflex
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Client {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BIOFLEX" => Ok(Client::Bioflex),
            "DESTINY" => Ok(Client::Destiny),
            "QUALITY" => Ok(Client::Quality),
            other => Err(format!("Cliente desconocido: '{}'", other)),
        }
    }
}

impl TryFrom<String> for Client {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Client> for String {
    fn from(client: Client) -> Self {
        client.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("destiny".parse::<Client>().unwrap(), Client::Destiny);
        assert_eq!(" Quality ".parse::<Client>().unwrap(), Client::Quality);
        assert!("ACME".parse::<Client>().is_err());
    }

    #[test]
    fn wire_format_is_uppercase() {
        assert_eq!(serde_json::to_string(&Client::Bioflex).unwrap(), "\"BIOFLEX\"");
        let parsed: Client = serde_json::from_str("\"DESTINY\"").unwrap();
        assert_eq!(parsed, Client::Destiny);
    }
}
