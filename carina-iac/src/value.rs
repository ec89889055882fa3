//! The Terraform attribute value sum type. The distinction
//! between `String` and `Expression` is load-bearing: string values
//! are HCL-quoted on emission, expression values are printed
//! verbatim so they can reference a sibling resource's attribute.

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
    /// Printed unquoted, e.g. `aws_vpc.prod.id`.
    Expression(String),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn expr(s: impl Into<String>) -> Self {
        Value::Expression(s.into())
    }

    pub fn list_of_strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::String(s.into())).collect())
    }

    pub(crate) fn render(&self) -> String {
        match self {
            Value::String(s) => format!("\"{}\"", escape(s)),
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Value::Bool(b) => b.to_string(),
            Value::List(items) => {
                let rendered: Vec<String> = items.iter().map(Value::render).collect();
                format!("[{}]", rendered.join(", "))
            }
            Value::Map(entries) => {
                let rendered: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("\"{}\" = {}", escape(k), v.render()))
                    .collect();
                format!("{{ {} }}", rendered.join(", "))
            }
            Value::Expression(expr) => expr.clone(),
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_value_is_quoted() {
        assert_eq!(Value::string("10.0.0.0/16").render(), "\"10.0.0.0/16\"");
    }

    #[test]
    fn expression_value_is_printed_verbatim() {
        assert_eq!(Value::expr("aws_vpc.prod.id").render(), "aws_vpc.prod.id");
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        assert_eq!(Value::string("a\"b").render(), "\"a\\\"b\"");
    }

    #[test]
    fn list_of_strings_renders_each_element_quoted() {
        let v = Value::list_of_strings(["sg-a", "sg-b"]);
        assert_eq!(v.render(), "[\"sg-a\", \"sg-b\"]");
    }

    #[test]
    fn integral_number_has_no_decimal_point() {
        assert_eq!(Value::Number(443.0).render(), "443");
    }
}
