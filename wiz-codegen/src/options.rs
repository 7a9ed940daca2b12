//! Option types shared by every ecosystem.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wizgen_ir::ContractBuilder;

/// Access-control scheme. Absent in a record means no access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Ownable,
    Roles,
}

impl Access {
    /// The chosen scheme, or `Ownable` when a feature needs one and none was
    /// chosen.
    pub fn required(access: Option<Access>) -> Access {
        access.unwrap_or(Access::Ownable)
    }

    /// The scheme to use, forcing `Ownable` when a feature needs one.
    pub fn effective(access: Option<Access>, required: bool) -> Option<Access> {
        if required {
            Some(Self::required(access))
        } else {
            access
        }
    }

    /// Blueprint domain of an `access` option.
    pub fn values() -> [Value; 3] {
        [Value::Bool(false), "ownable".into(), "roles".into()]
    }
}

/// Metadata printed with the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Info {
    pub security_contact: Option<String>,
    pub license: Option<String>,
}

/// Doc tag key under which the security contact is recorded.
pub const SECURITY_CONTACT: &str = "security-contact";

impl Info {
    pub fn apply(&self, c: &mut ContractBuilder) {
        if let Some(contact) = self.security_contact.as_deref().filter(|s| !s.is_empty()) {
            c.add_doc_tag(SECURITY_CONTACT, contact);
        }
        if let Some(license) = self.license.as_deref().filter(|s| !s.is_empty()) {
            c.set_license(license);
        }
    }
}

/// Serde adapter for options written as `false` or a variant name.
///
/// ```
/// use serde::Deserialize;
/// use wizgen_codegen::options::{Access, false_or};
///
/// #[derive(Deserialize)]
/// struct Options {
///     #[serde(default, with = "false_or")]
///     access: Option<Access>,
/// }
///
/// let off: Options = serde_json::from_str(r#"{"access": false}"#).unwrap();
/// assert_eq!(off.access, None);
/// let on: Options = serde_json::from_str(r#"{"access": "roles"}"#).unwrap();
/// assert_eq!(on.access, Some(Access::Roles));
/// ```
pub mod false_or {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Flag(bool),
        Value(T),
    }

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        match Option::<Raw<T>>::deserialize(deserializer)? {
            None | Some(Raw::Flag(false)) => Ok(None),
            Some(Raw::Flag(true)) => Err(D::Error::custom(
                "expected `false` or one of the named variants",
            )),
            Some(Raw::Value(v)) => Ok(Some(v)),
        }
    }
}
