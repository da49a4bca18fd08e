//! Distinguished names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::oid::ObjectIdentifier;

/// A single attribute of a distinguished name, such as `CN=example.com`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTypeAndValue {
    #[serde(rename = "type")]
    pub attribute_type: ObjectIdentifier,
    pub value: String,
}

impl AttributeTypeAndValue {
    pub const OID_COMMON_NAME: &'static str = "2.5.4.3";
    pub const OID_SERIAL_NUMBER: &'static str = "2.5.4.5";
    pub const OID_COUNTRY_NAME: &'static str = "2.5.4.6";
    pub const OID_LOCALITY_NAME: &'static str = "2.5.4.7";
    pub const OID_STATE_OR_PROVINCE_NAME: &'static str = "2.5.4.8";
    pub const OID_STREET_ADDRESS: &'static str = "2.5.4.9";
    pub const OID_ORGANIZATION_NAME: &'static str = "2.5.4.10";
    pub const OID_ORGANIZATIONAL_UNIT_NAME: &'static str = "2.5.4.11";
    pub const OID_POSTAL_CODE: &'static str = "2.5.4.17";

    pub fn new(attribute_type: ObjectIdentifier, value: impl Into<String>) -> Self {
        Self {
            attribute_type,
            value: value.into(),
        }
    }

    /// Short label used in string form (`CN`, `O`, ...), if known.
    pub fn short_name(&self) -> Option<&'static str> {
        let label = match self.attribute_type.to_string().as_str() {
            Self::OID_COMMON_NAME => "CN",
            Self::OID_SERIAL_NUMBER => "SERIALNUMBER",
            Self::OID_COUNTRY_NAME => "C",
            Self::OID_LOCALITY_NAME => "L",
            Self::OID_STATE_OR_PROVINCE_NAME => "ST",
            Self::OID_STREET_ADDRESS => "STREET",
            Self::OID_ORGANIZATION_NAME => "O",
            Self::OID_ORGANIZATIONAL_UNIT_NAME => "OU",
            Self::OID_POSTAL_CODE => "POSTALCODE",
            _ => return None,
        };
        Some(label)
    }
}

impl fmt::Display for AttributeTypeAndValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.short_name() {
            Some(label) => write!(f, "{}={}", label, self.value),
            None => write!(f, "{}={}", self.attribute_type, self.value),
        }
    }
}

/// An X.509 distinguished name.
///
/// The well-known attributes are broken out into their own fields; `names`
/// holds every attribute in the order it appeared in the certificate and
/// `extra_names` holds attributes that override the parsed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub country: Vec<String>,
    pub organization: Vec<String>,
    pub organizational_unit: Vec<String>,
    pub locality: Vec<String>,
    pub province: Vec<String>,
    pub street_address: Vec<String>,
    pub postal_code: Vec<String>,
    pub serial_number: String,
    pub common_name: String,
    pub names: Vec<AttributeTypeAndValue>,
    pub extra_names: Vec<AttributeTypeAndValue>,
}

impl Name {
    /// A name with only a common name set.
    pub fn with_common_name(common_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            ..Default::default()
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.names.is_empty() || !self.extra_names.is_empty() {
            let formatted = self
                .names
                .iter()
                .chain(self.extra_names.iter())
                .map(|attr| attr.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return write!(f, "{}", formatted);
        }

        let mut parts = Vec::new();
        if !self.common_name.is_empty() {
            parts.push(format!("CN={}", self.common_name));
        }
        if !self.serial_number.is_empty() {
            parts.push(format!("SERIALNUMBER={}", self.serial_number));
        }
        let multi = [
            ("OU", &self.organizational_unit),
            ("O", &self.organization),
            ("POSTALCODE", &self.postal_code),
            ("STREET", &self.street_address),
            ("L", &self.locality),
            ("ST", &self.province),
            ("C", &self.country),
        ];
        for (label, values) in multi {
            parts.extend(values.iter().map(|value| format!("{}={}", label, value)));
        }
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(oid: &str, value: &str) -> AttributeTypeAndValue {
        AttributeTypeAndValue::new(oid.parse().unwrap(), value)
    }

    #[test]
    fn test_display_from_attributes() {
        let name = Name {
            names: vec![
                attr("2.5.4.6", "JP"),
                attr("2.5.4.10", "Example Org"),
                attr("2.5.4.3", "example.com"),
                attr("1.2.840.113549.1.9.1", "admin@example.com"),
            ],
            ..Default::default()
        };
        assert_eq!(
            name.to_string(),
            "C=JP, O=Example Org, CN=example.com, 1.2.840.113549.1.9.1=admin@example.com"
        );
    }

    #[test]
    fn test_display_from_fields() {
        let name = Name {
            common_name: "Example CA".into(),
            organization: vec!["Example Org".into()],
            country: vec!["JP".into(), "US".into()],
            ..Default::default()
        };
        assert_eq!(name.to_string(), "CN=Example CA, O=Example Org, C=JP, C=US");
        assert_eq!(Name::with_common_name("leaf").to_string(), "CN=leaf");
        assert_eq!(Name::default().to_string(), "");
    }
}
