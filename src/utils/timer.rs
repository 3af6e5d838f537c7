use std::cell::Cell;
use std::rc::Rc;
use dioxus::prelude::*;
use super::clock;

/// Keeps at most one timer task pending, armed for the earliest deadline
/// `deadline` reports. The effect re-runs whenever a signal read inside
/// `deadline` changes; the previous task is cancelled before a new one is
/// spawned, and on unmount.
pub fn use_deadline_timer(deadline: impl Fn() -> Option<u64> + 'static, on_due: Callback<u64>) {
    let pending = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    let scheduled = pending.clone();
    use_effect(move || {
        if let Some(task) = scheduled.take() {
            task.cancel();
        }
        if let Some(at) = deadline() {
            let task = spawn(async move {
                clock::sleep_until(at).await;
                on_due.call(clock::now_ms());
            });
            scheduled.set(Some(task));
        }
    });

    use_drop(move || {
        if let Some(task) = pending.take() {
            task.cancel();
        }
    });
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;
    use dioxus::dioxus_core::{ NoOpMutations, VirtualDom };
    use super::*;

    /// Elapsed milliseconds (since mount) at which `on_due` ran.
    #[derive(Clone, Default)]
    struct FiredAt(Rc<RefCell<Vec<u64>>>);

    #[component]
    fn ReplacedDeadline() -> Element {
        let fired = use_context::<FiredAt>();
        let start = use_hook(clock::now_ms);
        let mut deadline = use_signal(move || Some(start + 40));

        use_deadline_timer(
            move || deadline(),
            use_callback(move |now: u64| fired.0.borrow_mut().push(now.saturating_sub(start)))
        );

        use_future(move || async move {
            clock::sleep_ms(10).await;
            deadline.set(Some(start + 80));
        });

        rsx! {}
    }

    #[component]
    fn ArmedDeadline() -> Element {
        let fired = use_context::<FiredAt>();
        let start = use_hook(clock::now_ms);

        use_deadline_timer(
            move || Some(start + 40),
            use_callback(move |now: u64| fired.0.borrow_mut().push(now.saturating_sub(start)))
        );

        rsx! {}
    }

    #[component]
    fn UnmountedEarly() -> Element {
        let mut shown = use_signal(|| true);

        use_future(move || async move {
            clock::sleep_ms(10).await;
            shown.set(false);
        });

        rsx! {
            if shown() {
                ArmedDeadline {}
            }
        }
    }

    async fn run_for(dom: &mut VirtualDom, ms: u64) {
        let end = tokio::time::Instant::now() + Duration::from_millis(ms);
        dom.rebuild(&mut NoOpMutations);
        while tokio::time::Instant::now() < end {
            if tokio::time::timeout_at(end, dom.wait_for_work()).await.is_err() {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[tokio::test]
    async fn test_deadline_fires_once() {
        let fired = FiredAt::default();
        let mut dom = VirtualDom::new(ArmedDeadline).with_root_context(fired.clone());
        run_for(&mut dom, 150).await;

        let fired = fired.0.borrow();
        assert_eq!(fired.len(), 1);
        assert!(fired[0] >= 40);
    }

    #[tokio::test]
    async fn test_replaced_deadline_never_fires() {
        let fired = FiredAt::default();
        let mut dom = VirtualDom::new(ReplacedDeadline).with_root_context(fired.clone());
        run_for(&mut dom, 200).await;

        let fired = fired.0.borrow();
        assert_eq!(fired.len(), 1, "only the replacement deadline fires: {:?}", fired);
        assert!(fired[0] >= 80);
    }

    #[tokio::test]
    async fn test_unmount_cancels_pending_deadline() {
        let fired = FiredAt::default();
        let mut dom = VirtualDom::new(UnmountedEarly).with_root_context(fired.clone());
        run_for(&mut dom, 150).await;

        assert!(fired.0.borrow().is_empty());
    }
}
