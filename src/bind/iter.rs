//! The synchronous bind state machine.

use crate::bind::Expand;
use crate::outcome::Outcome;

/// Iterator binding a continuation step against an outcome sequence.
///
/// For each source element: a failure passes through as-is; a success is
/// expanded through the continuation, and every success the expansion
/// yields is projected together with the source value. The source value is
/// held only while its expansion drains.
pub struct Bind<S, F, I, K, P>
where
    K: Expand<S, F>,
{
    source: I,
    expand: K,
    project: P,
    active: Option<(S, K::Iter)>,
}

impl<S, F, I, K, P> Bind<S, F, I, K, P>
where
    K: Expand<S, F>,
{
    pub(crate) fn new(source: I, expand: K, project: P) -> Self {
        Self { source, expand, project, active: None }
    }
}

impl<S, F, R, I, K, P> Iterator for Bind<S, F, I, K, P>
where
    I: Iterator<Item = Outcome<S, F>>,
    K: Expand<S, F>,
    P: FnMut(&S, K::Bound) -> R,
{
    type Item = Outcome<R, F>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((value, inner)) = &mut self.active {
                if let Some(outcome) = inner.next() {
                    return Some(match outcome {
                        Outcome::Success(bound) => {
                            Outcome::Success((self.project)(value, bound))
                        }
                        Outcome::Failure(error) => Outcome::Failure(error),
                    });
                }
                self.active = None;
            }

            match self.source.next()? {
                Outcome::Success(value) => {
                    let inner = self.expand.expand(&value);
                    self.active = Some((value, inner));
                }
                Outcome::Failure(error) => return Some(Outcome::Failure(error)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::{OutcomeFn, ValuesFn};
    use crate::iter::{from_outcomes, lift_values};

    #[test]
    fn test_failure_elements_never_reach_the_continuation() {
        let source = vec![Outcome::<i32, &str>::failure("one"), Outcome::failure("two")];
        let bound: Vec<_> = Bind::new(
            source.into_iter(),
            OutcomeFn::new(|_: &i32| -> Outcome<i32, &str> { panic!("must not be invoked") }),
            |a: &i32, b: i32| a + b,
        )
        .collect();
        assert_eq!(bound, vec![Outcome::failure("one"), Outcome::failure("two")]);
    }

    #[test]
    fn test_elements_bound_in_source_order() {
        let bound: Vec<_> = Bind::new(
            lift_values::<_, &str>(vec![1, 2, 3]),
            ValuesFn::new(|&x: &i32| vec![x * 10, x * 10 + 1]),
            |_: &i32, b: i32| b,
        )
        .collect();
        assert_eq!(
            bound,
            vec![
                Outcome::success(10),
                Outcome::success(11),
                Outcome::success(20),
                Outcome::success(21),
                Outcome::success(30),
                Outcome::success(31),
            ],
        );
    }

    #[test]
    fn test_inner_failure_does_not_stop_outer_iteration() {
        // A continuation whose single element is a failure: the failure
        // propagates for that element and the next source element still
        // gets bound.
        let bound: Vec<_> = Bind::new(
            lift_values::<_, &str>(vec![1, 2, 3]),
            OutcomeFn::new(|&x: &i32| {
                if x == 1 {
                    Outcome::failure("first")
                } else {
                    Outcome::success(x)
                }
            }),
            |a: &i32, b: i32| a * b,
        )
        .collect();
        assert_eq!(
            bound,
            vec![Outcome::failure("first"), Outcome::success(4), Outcome::success(9)],
        );
    }

    #[test]
    fn test_source_value_is_reused_across_expansion_elements() {
        let bound: Vec<_> = from_outcomes(vec![Outcome::<String, &str>::success("ab".to_string())])
            .bind_values(|s| 0..s.len(), |s, i| format!("{s}{i}"))
            .collect();
        assert_eq!(
            bound,
            vec![Outcome::success("ab0".to_string()), Outcome::success("ab1".to_string())],
        );
    }
}
