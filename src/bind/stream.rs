//! The suspension-capable bind state machine.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;

use crate::bind::ExpandStream;
use crate::outcome::Outcome;

/// Stream binding a continuation step against an outcome stream.
///
/// The suspension-capable twin of [`Bind`](crate::bind::Bind): pulling the
/// outer stream and draining each expansion are both suspension points, and
/// elements are bound and projected strictly in source order.
#[must_use = "streams do nothing unless polled"]
pub struct BindStream<S, F, St, K, P>
where
    K: ExpandStream<S, F>,
{
    source: St,
    expand: K,
    project: P,
    active: Option<(S, K::Stream)>,
}

impl<S, F, St, K, P> BindStream<S, F, St, K, P>
where
    K: ExpandStream<S, F>,
{
    pub(crate) fn new(source: St, expand: K, project: P) -> Self {
        Self { source, expand, project, active: None }
    }
}

impl<S, F, R, St, K, P> Stream for BindStream<S, F, St, K, P>
where
    S: Unpin,
    St: Stream<Item = Outcome<S, F>> + Unpin,
    K: ExpandStream<S, F> + Unpin,
    P: FnMut(&S, K::Bound) -> R + Unpin,
{
    type Item = Outcome<R, F>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some((value, inner)) = &mut this.active {
                match Pin::new(inner).poll_next(cx) {
                    Poll::Ready(Some(Outcome::Success(bound))) => {
                        return Poll::Ready(Some(Outcome::Success((this.project)(
                            value, bound,
                        ))));
                    }
                    Poll::Ready(Some(Outcome::Failure(error))) => {
                        return Poll::Ready(Some(Outcome::Failure(error)));
                    }
                    Poll::Pending => return Poll::Pending,
                    Poll::Ready(None) => {}
                }
                this.active = None;
            }

            match Pin::new(&mut this.source).poll_next(cx) {
                Poll::Ready(Some(Outcome::Success(value))) => {
                    let inner = this.expand.expand(&value);
                    this.active = Some((value, inner));
                }
                Poll::Ready(Some(Outcome::Failure(error))) => {
                    return Poll::Ready(Some(Outcome::Failure(error)));
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::iter;
    use crate::outcome::Outcome;
    use crate::stream::from_outcomes;
    use futures::executor::block_on;
    use futures::StreamExt;

    #[test]
    fn test_bind_async_projects_per_element() {
        let bound: Vec<_> = block_on(
            iter::lift_values::<_, &str>(vec![1, 2, 3])
                .into_stream()
                .bind_async(
                    |&x| async move {
                        if x == 2 {
                            Outcome::failure("bad")
                        } else {
                            Outcome::success(x)
                        }
                    },
                    |a, b| a + b,
                )
                .collect::<Vec<_>>(),
        );
        assert_eq!(
            bound,
            vec![Outcome::success(2), Outcome::failure("bad"), Outcome::success(6)],
        );
    }

    #[test]
    fn test_bind_async_never_invokes_continuation_on_failure() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let calls = Rc::new(RefCell::new(0_u32));
        let counter = Rc::clone(&calls);
        let source = vec![Outcome::<i32, &str>::failure("bad"), Outcome::success(1)];
        let bound: Vec<_> = block_on(
            from_outcomes(futures::stream::iter(source))
                .bind_async(
                    move |&x| {
                        *counter.borrow_mut() += 1;
                        async move { Outcome::success(x * 2) }
                    },
                    |a, b| a + b,
                )
                .collect::<Vec<_>>(),
        );
        assert_eq!(bound, vec![Outcome::failure("bad"), Outcome::success(3)]);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_bind_stream_expands_in_order() {
        let bound: Vec<_> = block_on(
            iter::lift_values::<_, &str>(vec![1, 2])
                .into_stream()
                .bind_stream(|&x| futures::stream::iter(vec![x * 10, x * 10 + 1]), |a, b| a + b)
                .collect::<Vec<_>>(),
        );
        assert_eq!(
            bound,
            vec![
                Outcome::success(11),
                Outcome::success(12),
                Outcome::success(22),
                Outcome::success(23),
            ],
        );
    }

    #[test]
    fn test_bind_values_on_stream_source() {
        let bound: Vec<_> = block_on(
            from_outcomes(futures::stream::iter(vec![
                Outcome::<i32, &str>::success(1),
                Outcome::failure("bad"),
                Outcome::success(3),
            ]))
            .bind_values(|&x| vec![x, x + 1], |a, b| a * b)
            .collect::<Vec<_>>(),
        );
        assert_eq!(
            bound,
            vec![
                Outcome::success(1),
                Outcome::success(2),
                Outcome::failure("bad"),
                Outcome::success(9),
                Outcome::success(12),
            ],
        );
    }

    #[test]
    fn test_bind_pending_values_awaits_then_expands() {
        let bound: Vec<_> = block_on(
            iter::lift_values::<_, &str>(vec![2])
                .into_stream()
                .bind_pending_values(|&x| async move { vec![x, x * 10] }, |a, b| a + b)
                .collect::<Vec<_>>(),
        );
        assert_eq!(bound, vec![Outcome::success(4), Outcome::success(22)]);
    }

    #[test]
    fn test_chained_binds_stay_in_source_order() {
        let bound: Vec<_> = block_on(
            iter::lift_values::<_, &str>(vec![1, 2])
                .into_stream()
                .bind_async(|&x| async move { Outcome::success(x + 10) }, |_, b| b)
                .bind(|&x| Outcome::success(x * 2), |_, b| b)
                .collect::<Vec<_>>(),
        );
        assert_eq!(bound, vec![Outcome::success(22), Outcome::success(24)]);
    }
}
