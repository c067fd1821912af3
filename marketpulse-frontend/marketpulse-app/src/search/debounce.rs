use std::time::Duration;

/// Something that can run a callback later and take it back before it runs.
pub trait Timer {
    type Handle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// Holds at most one pending callback. Every `call` cancels the pending one
/// and starts the delay over.
pub struct Debouncer<T: Timer> {
    timer: T,
    delay: Duration,
    pending: Option<T::Handle>,
}

impl<T: Timer> Debouncer<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self {
            timer,
            delay,
            pending: None,
        }
    }

    pub fn call(&mut self, callback: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.timer.schedule(self.delay, Box::new(callback)));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }
}

impl<T: Timer> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// `setTimeout` backed timer used in the browser.
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[cfg(not(feature = "ssr"))]
impl Timer for BrowserTimer {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, callback)
    }

    fn cancel(&self, handle: Self::Handle) {
        drop(handle.cancel());
    }
}

/// Input events never fire while rendering on the server, so nothing is
/// ever scheduled there.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct InertTimer;

#[cfg(feature = "ssr")]
impl Timer for InertTimer {
    type Handle = ();

    fn schedule(&self, _delay: Duration, _callback: Box<dyn FnOnce()>) -> Self::Handle {}

    fn cancel(&self, _handle: Self::Handle) {}
}

#[cfg(not(feature = "ssr"))]
pub type PlatformTimer = BrowserTimer;
#[cfg(feature = "ssr")]
pub type PlatformTimer = InertTimer;

#[cfg(test)]
pub(crate) mod manual {
    use super::Timer;
    use std::{cell::RefCell, rc::Rc, time::Duration};

    struct Task {
        id: usize,
        due: Duration,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: usize,
        tasks: Vec<Task>,
    }

    /// Timer driven by `advance` instead of wall time.
    #[derive(Clone, Default)]
    pub(crate) struct ManualTimer {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualTimer {
        pub(crate) fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        pub(crate) fn advance(&self, by: Duration) {
            let target = self.clock.borrow().now + by;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.id))
                        .map(|(index, _)| index);
                    due.map(|index| {
                        let task = clock.tasks.remove(index);
                        clock.now = task.due;
                        task.callback
                    })
                };
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Timer for ManualTimer {
        type Handle = usize;

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> usize {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.tasks.push(Task { id, due, callback });
            id
        }

        fn cancel(&self, handle: usize) {
            self.clock.borrow_mut().tasks.retain(|task| task.id != handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{manual::ManualTimer, Debouncer};
    use std::{cell::RefCell, rc::Rc, time::Duration};

    const DELAY: Duration = Duration::from_millis(300);

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, ManualTimer) {
        (Rc::new(RefCell::new(Vec::new())), ManualTimer::default())
    }

    #[test]
    fn fires_only_after_the_delay() {
        let (fired, timer) = recorder();
        let mut debouncer = Debouncer::new(timer.clone(), DELAY);
        let log = fired.clone();
        debouncer.call(move || log.borrow_mut().push("a"));

        timer.advance(Duration::from_millis(299));
        assert!(fired.borrow().is_empty());
        timer.advance(Duration::from_millis(1));
        assert_eq!(*fired.borrow(), vec!["a"]);
    }

    #[test]
    fn each_call_restarts_the_delay() {
        let (fired, timer) = recorder();
        let mut debouncer = Debouncer::new(timer.clone(), DELAY);
        for text in ["a", "ap", "app"] {
            let log = fired.clone();
            debouncer.call(move || log.borrow_mut().push(text));
            timer.advance(Duration::from_millis(200));
        }
        assert!(fired.borrow().is_empty());
        assert_eq!(timer.pending(), 1);

        timer.advance(Duration::from_millis(100));
        assert_eq!(*fired.borrow(), vec!["app"]);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn cancel_and_drop_discard_the_pending_call() {
        let (fired, timer) = recorder();
        let mut debouncer = Debouncer::new(timer.clone(), DELAY);
        let log = fired.clone();
        debouncer.call(move || log.borrow_mut().push("cancelled"));
        debouncer.cancel();
        timer.advance(DELAY * 2);
        assert!(fired.borrow().is_empty());

        let log = fired.clone();
        debouncer.call(move || log.borrow_mut().push("dropped"));
        drop(debouncer);
        timer.advance(DELAY * 2);
        assert!(fired.borrow().is_empty());
    }
}
