use std::{convert::Infallible, fmt, str::FromStr};

/// A value assigned to a record field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Text(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Boolean(_) => "boolean",
            Value::Text(_) => "text",
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Integer reading of the value; booleans count as 1 and 0.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Boolean(b) => Some(*b as i64),
            Value::Text(_) => None,
        }
    }

    /// Literal form, with text quoted: `'mayo'`, `2`, `True`.
    pub fn repr(&self) -> String {
        match self {
            Value::Integer(i) => i.to_string(),
            Value::Boolean(true) => "True".to_string(),
            Value::Boolean(false) => "False".to_string(),
            Value::Text(s) => format!("'{}'", s),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parses command line input: integers first, then booleans, anything else is text.
impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Value::Integer(i));
        }
        match s {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Ok(Value::Text(s.to_string())),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!("2".parse::<Value>().unwrap(), Value::Integer(2));
        assert_eq!("-7".parse::<Value>().unwrap(), Value::Integer(-7));
    }

    #[test]
    fn test_parse_boolean_and_text() {
        assert_eq!("true".parse::<Value>().unwrap(), Value::Boolean(true));
        assert_eq!(
            "2.5".parse::<Value>().unwrap(),
            Value::Text("2.5".to_string())
        );
        assert_eq!(
            "mayo".parse::<Value>().unwrap(),
            Value::Text("mayo".to_string())
        );
    }

    #[test]
    fn test_display_is_bare_payload() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from("ketchup").to_string(), "ketchup");
        assert_eq!(Value::from(false).to_string(), "false");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(3).as_integer(), Some(3));
        assert_eq!(Value::from("3").as_integer(), None);
        assert_eq!(Value::from("mayo").as_text(), Some("mayo"));
        assert_eq!(Value::from(true).type_name(), "boolean");
    }

    #[test]
    fn test_boolean_reads_as_number() {
        assert_eq!(Value::from(true).as_number(), Some(1));
        assert_eq!(Value::from(false).as_number(), Some(0));
        assert_eq!(Value::from(true).as_integer(), None);
        assert_eq!(Value::from("1").as_number(), None);
    }

    #[test]
    fn test_repr() {
        assert_eq!(Value::from("mayo").repr(), "'mayo'");
        assert_eq!(Value::from(2).repr(), "2");
        assert_eq!(Value::from(false).repr(), "False");
    }
}
