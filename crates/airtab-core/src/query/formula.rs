//! Filter formula builder.
//!
//! Airtable filters are formula strings evaluated server-side. Building them
//! by string interpolation breaks as soon as a value contains a quote, so
//! this module renders an expression tree with every field reference and
//! text literal escaped.

use std::fmt;

/// A literal value on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A text value, rendered as a quoted, escaped string.
    Text(String),
    /// A numeric value, rendered bare.
    Number(serde_json::Number),
    /// A boolean, rendered as `TRUE()` or `FALSE()`.
    Bool(bool),
}

impl Literal {
    /// Build a numeric literal from a float.
    ///
    /// Returns `None` for NaN and infinities, which formulas cannot express.
    pub fn number(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Literal::Number)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Text(value)
    }
}

impl From<&String> for Literal {
    fn from(value: &String) -> Self {
        Literal::Text(value.clone())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Number(value.into())
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Number(value.into())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Text(text) => {
                f.write_str("'")?;
                for c in text.chars() {
                    match c {
                        '\\' => f.write_str("\\\\")?,
                        '\'' => f.write_str("\\'")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("'")
            }
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Bool(true) => f.write_str("TRUE()"),
            Literal::Bool(false) => f.write_str("FALSE()"),
        }
    }
}

/// A filter formula.
///
/// # Example
///
/// ```
/// use airtab_core::Formula;
///
/// let formula = Formula::and([
///     Formula::eq("Status", "Active"),
///     Formula::eq("Contact Name", "O'Brien"),
/// ]);
/// assert_eq!(
///     formula.to_string(),
///     r"AND({Status} = 'Active', {Contact Name} = 'O\'Brien')"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// `{field} = literal`
    Eq(String, Literal),
    /// `{field} != literal`
    NotEq(String, Literal),
    /// All sub-formulas hold. An empty list is always true.
    And(Vec<Formula>),
    /// Any sub-formula holds. An empty list is always false.
    Or(Vec<Formula>),
    /// Negation.
    Not(Box<Formula>),
    /// A hand-written formula passed through verbatim.
    ///
    /// Nothing inside is escaped. Never build one from untrusted input.
    Raw(String),
}

impl Formula {
    /// Equality between a field and a literal.
    pub fn eq(field: impl Into<String>, value: impl Into<Literal>) -> Self {
        Formula::Eq(field.into(), value.into())
    }

    /// Inequality between a field and a literal.
    pub fn not_eq(field: impl Into<String>, value: impl Into<Literal>) -> Self {
        Formula::NotEq(field.into(), value.into())
    }

    /// Conjunction of formulas.
    pub fn and(parts: impl IntoIterator<Item = Formula>) -> Self {
        Formula::And(parts.into_iter().collect())
    }

    /// Disjunction of formulas.
    pub fn or(parts: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Or(parts.into_iter().collect())
    }

    /// Negation of a formula.
    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    /// A verbatim formula string.
    pub fn raw(formula: impl Into<String>) -> Self {
        Formula::Raw(formula.into())
    }

    /// Render the formula as Airtable formula text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    f.write_str("{")?;
    for c in name.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '}' => f.write_str("\\}")?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("}")
}

fn write_call(f: &mut fmt::Formatter<'_>, name: &str, parts: &[Formula]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", part)?;
    }
    f.write_str(")")
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Eq(field, value) => {
                write_field(f, field)?;
                write!(f, " = {}", value)
            }
            Formula::NotEq(field, value) => {
                write_field(f, field)?;
                write!(f, " != {}", value)
            }
            Formula::And(parts) if parts.is_empty() => f.write_str("TRUE()"),
            Formula::Or(parts) if parts.is_empty() => f.write_str("FALSE()"),
            Formula::And(parts) => write_call(f, "AND", parts),
            Formula::Or(parts) => write_call(f, "OR", parts),
            Formula::Not(inner) => write!(f, "NOT({})", inner),
            Formula::Raw(raw) => f.write_str(raw),
        }
    }
}
