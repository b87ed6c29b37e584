//! Factory capability for materializing new states.
//!
//! A [`Factory`] turns a typed argument tuple into a fresh state value.
//! Plain closures and `fn` items of arity 0 through 5 implement it
//! infallibly; wrap a closure returning `Result` in [`Fallible`] when the
//! factory itself can fail. Because the argument tuple is part of the
//! trait, supplying the wrong number or type of arguments is a compile
//! error rather than a call-time failure.

use crate::error::BoxError;

/// Produces a fresh state value from a typed argument tuple.
///
/// `Args` is always a tuple with one element per factory parameter:
/// a zero-argument factory takes `()`, a two-argument factory takes
/// `(A1, A2)`, and so on.
pub trait Factory<T, Args> {
    /// Build one state value.
    fn produce(&mut self, args: Args) -> Result<T, BoxError>;
}

/// Adapter for factories that can fail.
///
/// Wraps an `FnMut(..) -> Result<T, E>` so that the factory's own error
/// surfaces from [`Quantum::select_with`](crate::Quantum::select_with) as
/// [`QuantumError::Factory`](crate::QuantumError::Factory) instead of
/// being stored as a `Result` payload.
pub struct Fallible<F>(pub F);

macro_rules! impl_factory {
    ($($arg:ident),*) => {
        impl<T, Fun, $($arg),*> Factory<T, ($($arg,)*)> for Fun
        where
            Fun: FnMut($($arg),*) -> T,
        {
            #[allow(non_snake_case)]
            fn produce(&mut self, ($($arg,)*): ($($arg,)*)) -> Result<T, BoxError> {
                Ok((self)($($arg),*))
            }
        }

        impl<T, E, Fun, $($arg),*> Factory<T, ($($arg,)*)> for Fallible<Fun>
        where
            Fun: FnMut($($arg),*) -> Result<T, E>,
            E: Into<BoxError>,
        {
            #[allow(non_snake_case)]
            fn produce(&mut self, ($($arg,)*): ($($arg,)*)) -> Result<T, BoxError> {
                (self.0)($($arg),*).map_err(Into::into)
            }
        }
    };
}

impl_factory!();
impl_factory!(A1);
impl_factory!(A1, A2);
impl_factory!(A1, A2, A3);
impl_factory!(A1, A2, A3, A4);
impl_factory!(A1, A2, A3, A4, A5);
