//! The [`Tabular`] trait: how records expose their fields to the engine.

use crate::value::Value;

/// A record type that can be listed.
///
/// Implementors expose a flat, string-keyed view of their fields. Nested
/// structure (a customer's address, say) is flattened into the field
/// namespace by the implementor; the engine never walks into nested objects
/// itself.
///
/// [`FIELDS`](Tabular::FIELDS) is the complete set of names [`field`]
/// answers for. The engine checks sort fields against it so that a
/// misconfigured column is an error rather than a silent no-op. Search and
/// filter fields are not checked: probing a field a record doesn't have
/// simply never matches, which is what optional columns want.
///
/// [`field`]: Tabular::field
///
/// # Example
///
/// ```
/// use shopdeck_listing::{Number, Tabular, Value};
///
/// struct User {
///     name: String,
///     email: String,
///     logins: u32,
/// }
///
/// impl Tabular for User {
///     const FIELDS: &'static [&'static str] = &["name", "email", "logins"];
///
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::Str(&self.name),
///             "email" => Value::Str(&self.email),
///             "logins" => Value::Number(Number::U64(self.logins as u64)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Tabular {
    /// Every field name [`field`](Tabular::field) can answer for.
    const FIELDS: &'static [&'static str];

    /// Returns the named field's value, or [`Value::None`] for names outside
    /// [`FIELDS`](Tabular::FIELDS).
    fn field(&self, name: &str) -> Value<'_>;

    /// Returns `true` if `name` is one of this record type's fields.
    fn has_field(name: &str) -> bool
    where
        Self: Sized,
    {
        Self::FIELDS.contains(&name)
    }
}
