//! Helpers over `Result`
//!
//! `std::result::Result` is the two-variant outcome every decoder returns.
//! These free functions mirror its combinators in the order-of-arguments used
//! throughout the decoder API, and add the pieces std does not provide:
//! left-biased `map2`, a raising unwrap, a future bridge and success
//! filtering.

use futures::future::{self, Ready};
use std::any::Any;

/// Wrap a value as `Ok`
pub fn ok<V, E>(value: V) -> Result<V, E> {
    Ok(value)
}

/// Wrap an error as `Err`
pub fn err<V, E>(error: E) -> Result<V, E> {
    Err(error)
}

/// Whether the result is `Ok`
pub fn is_ok<V, E>(r: &Result<V, E>) -> bool {
    r.is_ok()
}

/// Whether the result is `Err`
pub fn is_err<V, E>(r: &Result<V, E>) -> bool {
    r.is_err()
}

/// Apply `f` to an `Ok` value, passing an `Err` through
pub fn map<A, B, E>(f: impl FnOnce(A) -> B, r: Result<A, E>) -> Result<B, E> {
    r.map(f)
}

/// Apply `f` to an `Err` value, passing an `Ok` through
pub fn map_error<V, A, B>(f: impl FnOnce(A) -> B, r: Result<V, A>) -> Result<V, B> {
    r.map_err(f)
}

/// Sequence a computation that may itself fail
pub fn and_then<A, B, E>(f: impl FnOnce(A) -> Result<B, E>, r: Result<A, E>) -> Result<B, E> {
    r.and_then(f)
}

/// Combine two results. When both fail, the error of `ra` is returned.
pub fn map2<A, B, C, E>(
    f: impl FnOnce(A, B) -> C,
    ra: Result<A, E>,
    rb: Result<B, E>,
) -> Result<C, E> {
    match (ra, rb) {
        (Ok(a), Ok(b)) => Ok(f(a, b)),
        (Err(error), _) => Err(error),
        (_, Err(error)) => Err(error),
    }
}

/// Unwrap an `Ok` value or substitute `default`
pub fn with_default<V, E>(default: V, r: Result<V, E>) -> V {
    r.unwrap_or(default)
}

/// Unwrap an `Ok` value or raise the error.
///
/// The error value itself becomes the panic payload, so a caller that catches
/// the unwind can downcast it back to `E`.
pub fn with_exception<V, E: Any + Send>(r: Result<V, E>) -> V {
    match r {
        Ok(value) => value,
        Err(error) => std::panic::panic_any(error),
    }
}

/// Bridge a result into an already-completed future
pub fn as_future<V, E>(r: Result<V, E>) -> Ready<Result<V, E>> {
    future::ready(r)
}

/// Keep the `Ok` values, in order, dropping every `Err`
pub fn successes<V, E>(results: impl IntoIterator<Item = Result<V, E>>) -> Vec<V> {
    results.into_iter().filter_map(Result::ok).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::panic;

    #[test]
    fn test_map_and_map_error() {
        assert_eq!(map(|x: i32| x + 1, ok::<_, String>(1)), Ok(2));
        assert_eq!(
            map(|x: i32| x + 1, err::<i32, _>("bad".to_string())),
            Err("bad".to_string())
        );
        assert_eq!(map_error(|e: &str| e.len(), err::<i32, _>("four")), Err(4));
        assert_eq!(map_error(|e: &str| e.len(), ok::<i32, _>(7)), Ok(7));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let halve = |x: i32| if x % 2 == 0 { Ok(x / 2) } else { Err(format!("{x} is odd")) };
        assert_eq!(and_then(halve, Ok(8)), Ok(4));
        assert_eq!(and_then(halve, Ok(3)), Err("3 is odd".to_string()));
        assert_eq!(and_then(halve, Err("earlier".to_string())), Err("earlier".to_string()));
    }

    #[test]
    fn test_map2_prefers_left_error() {
        let add = |a: i32, b: i32| a + b;
        assert_eq!(map2(add, Ok::<_, &str>(1), Ok(2)), Ok(3));
        assert_eq!(map2(add, Err("left"), Err("right")), Err("left"));
        assert_eq!(map2(add, Ok(1), Err("right")), Err("right"));
        assert_eq!(map2(add, Err("left"), Ok(2)), Err("left"));
    }

    #[test]
    fn test_with_default() {
        assert_eq!(with_default(0, Ok::<_, ()>(12)), 12);
        assert_eq!(with_default(0, Err::<i32, _>("999")), 0);
    }

    #[test]
    fn test_with_exception_raises_error_value() {
        assert_eq!(with_exception(Ok::<_, String>(5)), 5);

        let caught = panic::catch_unwind(|| with_exception(Err::<i32, _>(41_u32)));
        let payload = caught.expect_err("should raise");
        assert_eq!(payload.downcast_ref::<u32>(), Some(&41));
    }

    #[test]
    fn test_as_future_resolves_and_rejects() {
        assert_eq!(block_on(as_future(Ok::<_, String>(true))), Ok(true));
        assert_eq!(
            block_on(as_future(Err::<bool, _>("nope".to_string()))),
            Err("nope".to_string())
        );
    }

    #[test]
    fn test_successes_preserves_order() {
        let results = vec![Ok(1), Err("a"), Ok(2), Ok(3), Err("b"), Ok(4)];
        assert_eq!(successes(results), vec![1, 2, 3, 4]);
        assert!(is_ok(&ok::<_, ()>(1)));
        assert!(is_err(&err::<(), _>(1)));
    }
}
