//! Wrapper types and traits for secret management which help ensure secrets
//! aren't accidentally copied, logged, or otherwise exposed.
//!
//! Values that must reach the wire (card numbers, verification codes, API
//! keys) are wrapped in [`Secret`]; their `Debug` output is produced by a
//! masking [`Strategy`] instead of the inner value, while `Serialize`
//! deliberately exposes the inner value so payloads can be built from typed
//! structs.

use std::{fmt, marker::PhantomData};

use serde::{de, Deserialize, Serialize, Serializer};

/// Debugging trait which is specialized for handling secret values.
pub trait Strategy<T> {
    /// Format information about the secret's type.
    fn fmt(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Debug with type.
pub struct WithType;

impl<T> Strategy<T> for WithType {
    fn fmt(_: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*** ")?;
        f.write_str(std::any::type_name::<T>())?;
        f.write_str(" ***")
    }
}

/// Debug without type.
pub struct WithoutType;

impl<T> Strategy<T> for WithoutType {
    fn fmt(_: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*** ***")
    }
}

/// Masking strategy for email addresses: keeps the domain, hides the local
/// part.
pub struct EmailStrategy;

impl<T> Strategy<T> for EmailStrategy
where
    T: AsRef<str>,
{
    fn fmt(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match value.as_ref().split_once('@') {
            Some((_, domain)) => write!(f, "*****@{domain}"),
            None => WithType::fmt(value, f),
        }
    }
}

/// Secret thing.
///
/// To get access to the value use [`PeekInterface::peek`] for a reference or
/// [`ExposeInterface::expose`] to consume the wrapper.
pub struct Secret<S, I = WithType>
where
    I: Strategy<S>,
{
    pub(crate) inner_secret: S,
    pub(crate) marker: PhantomData<I>,
}

impl<S, I> Secret<S, I>
where
    I: Strategy<S>,
{
    /// Take ownership of a secret value.
    pub fn new(secret: S) -> Self {
        Self {
            inner_secret: secret,
            marker: PhantomData,
        }
    }
}

/// Interface to expose a reference to an inner secret.
pub trait PeekInterface<S> {
    /// Only method providing borrowed access to the secret value.
    fn peek(&self) -> &S;
}

/// Interface that consumes a secret and returns the inner value.
pub trait ExposeInterface<S> {
    /// Consume the secret and return the inner value.
    fn expose(self) -> S;
}

impl<S, I> PeekInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S, I> ExposeInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn expose(self) -> S {
        self.inner_secret
    }
}

impl<S, I> From<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl<S, I> Clone for Secret<S, I>
where
    S: Clone,
    I: Strategy<S>,
{
    fn clone(&self) -> Self {
        Self {
            inner_secret: self.inner_secret.clone(),
            marker: PhantomData,
        }
    }
}

impl<S, I> PartialEq for Secret<S, I>
where
    S: PartialEq,
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for Secret<S, I>
where
    S: Eq,
    I: Strategy<S>,
{
}

impl<S, I> fmt::Debug for Secret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S, I> Default for Secret<S, I>
where
    S: Default,
    I: Strategy<S>,
{
    fn default() -> Self {
        S::default().into()
    }
}

impl<'de, T, I> Deserialize<'de> for Secret<T, I>
where
    T: de::DeserializeOwned,
    I: Strategy<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

// The common use cases for serializing a secret are building a request body
// or storing it, both of which require the exposed value; masking applies to
// `Debug` output only.
impl<T, I> Serialize for Secret<T, I>
where
    T: Serialize,
    I: Strategy<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.peek().serialize(serializer)
    }
}

/// An enum that allows us to optionally mask data, based on which variant
/// that data is stored in.
#[derive(Clone, Eq, PartialEq)]
pub enum Maskable<T: Eq + PartialEq + Clone> {
    /// Variant which masks the data by wrapping in a Secret.
    Masked(Secret<T>),
    /// Variant which doesn't mask the data.
    Normal(T),
}

impl<T: fmt::Debug + Clone + Eq + PartialEq> fmt::Debug for Maskable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Masked(secret_value) => fmt::Debug::fmt(secret_value, f),
            Self::Normal(value) => fmt::Debug::fmt(value, f),
        }
    }
}

impl<T: Eq + PartialEq + Clone + std::hash::Hash> std::hash::Hash for Maskable<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Masked(value) => value.peek().hash(state),
            Self::Normal(value) => value.hash(state),
        }
    }
}

impl<T: Eq + PartialEq + Clone> Maskable<T> {
    /// Get the inner data while consuming self.
    pub fn into_inner(self) -> T {
        match self {
            Self::Masked(inner_secret) => inner_secret.expose(),
            Self::Normal(inner) => inner,
        }
    }

    /// Create a new masked data.
    pub fn new_masked(item: Secret<T>) -> Self {
        Self::Masked(item)
    }

    /// Create a new non-masked data.
    pub fn new_normal(item: T) -> Self {
        Self::Normal(item)
    }
}

/// Trait for providing a method on custom types for creating [`Maskable`].
pub trait Mask {
    /// The type of the inner data.
    type Output: Eq + Clone + PartialEq;

    /// Create a new masked data where data is of type `Output`.
    fn into_masked(self) -> Maskable<Self::Output>;
}

impl Mask for String {
    type Output = Self;

    fn into_masked(self) -> Maskable<Self::Output> {
        Maskable::new_masked(self.into())
    }
}

impl Mask for Secret<String> {
    type Output = String;

    fn into_masked(self) -> Maskable<Self::Output> {
        Maskable::new_masked(self)
    }
}

impl<T: Eq + PartialEq + Clone> From<T> for Maskable<T> {
    fn from(value: T) -> Self {
        Self::new_normal(value)
    }
}

impl From<&str> for Maskable<String> {
    fn from(value: &str) -> Self {
        Self::new_normal(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_debug_is_masked() {
        let secret: Secret<String> = Secret::new("4920201996449560".to_string());
        let debugged = format!("{secret:?}");
        assert!(!debugged.contains("4920201996449560"));
    }

    #[test]
    fn secret_serializes_exposed() {
        let secret: Secret<String> = Secret::new("879".to_string());
        assert_eq!(serde_json::to_string(&secret).unwrap(), r#""879""#);
    }

    #[test]
    fn email_strategy_keeps_domain() {
        let email: Secret<String, EmailStrategy> = Secret::new("joe@example.com".to_string());
        assert_eq!(format!("{email:?}"), "*****@example.com");
    }
}
