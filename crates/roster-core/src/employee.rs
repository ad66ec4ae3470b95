use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Storage-assigned identifier of an employee record.
///
/// Valid ids start at 1. Zero is rejected when deserializing and by every
/// storage backend, since MySQL reads an explicit 0 in an `AUTO_INCREMENT`
/// column as a request for a fresh id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub const MIN: u64 = 1;

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns `None` for values outside the valid id range.
    pub const fn try_new(value: u64) -> Option<Self> {
        if value >= Self::MIN {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 >= Self::MIN
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        Self::try_new(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "employee id must be at least {}, got {value}",
                Self::MIN
            ))
        })
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An employee record.
///
/// `id` is `None` until the record has been saved; every record handed back
/// by a [`Repository`](crate::Repository) carries the id the store assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
}

impl Employee {
    /// Creates a record that has not been persisted yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Creates a record with a known identifier.
    pub fn with_id(
        id: impl Into<EmployeeId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Overwrites the mutable fields with the ones from `incoming`.
    ///
    /// The identifier is left untouched.
    pub fn apply(&mut self, incoming: Employee) {
        self.name = incoming.name;
        self.email = incoming.email;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_identifier() {
        let mut stored = Employee::with_id(1, "gokul", "gokul@mail.com");
        stored.apply(Employee::with_id(7, "raj", "raj@mail.com"));

        assert_eq!(stored.id, Some(EmployeeId::new(1)));
        assert_eq!(stored.name, "raj");
        assert_eq!(stored.email, "raj@mail.com");
    }

    #[test]
    fn serializes_flat_record() {
        let employee = Employee::with_id(1, "John", "john.doe@example.com");
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "John", "email": "john.doe@example.com"})
        );
    }

    #[test]
    fn deserializes_without_id() {
        let employee: Employee =
            serde_json::from_str(r#"{"name":"gokul","email":"gokul@gmail.com"}"#).unwrap();

        assert_eq!(employee, Employee::new("gokul", "gokul@gmail.com"));
    }

    #[test]
    fn zero_id_is_rejected() {
        let json = r#"{"id":0,"name":"gokul","email":"g@mail.com"}"#;
        let err = serde_json::from_str::<Employee>(json).unwrap_err();

        assert!(err.to_string().contains("employee id must be at least 1"));
        assert!(!EmployeeId::new(0).is_valid());
        assert_eq!(EmployeeId::try_new(0), None);
        assert_eq!(EmployeeId::try_new(1), Some(EmployeeId::new(1)));
    }

    #[test]
    fn display_id() {
        assert_eq!(EmployeeId::new(42).to_string(), "42");
    }
}
