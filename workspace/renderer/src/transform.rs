mod primary_only;
mod type_identifier;

pub use primary_only::PrimaryOnly;
pub use type_identifier::TypeIdentifierToIdentifier;
use variants::Trait;

/// A pure rewrite of one rendered value.
pub trait Transform {
    type Value;

    fn transform(&self, input: Self::Value) -> Self::Value;

    fn pipe<Other>(self, other: Other) -> Pipe<Self, Other>
    where
        Self: Sized,
    {
        Pipe(self, other)
    }

    /// Restricts the transform to the variant of the `primary` trait; every
    /// other variant is left as it is.
    fn primary_only(self, primary: Trait) -> PrimaryOnly<Self>
    where
        Self: Sized,
    {
        PrimaryOnly::new(self, primary)
    }
}

/// Runs `A` and then `B` on its output.
pub struct Pipe<A, B>(A, B);

impl<A: Transform, B> Transform for Pipe<A, B>
where
    B: Transform<Value = A::Value>,
{
    type Value = A::Value;

    fn transform(&self, input: Self::Value) -> Self::Value {
        self.1.transform(self.0.transform(input))
    }
}
