use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

// Debounce to absorb double-click bursts on the picker affordances.
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut slot = timeout.borrow_mut();
        if let Some(pending) = slot.take() {
            pending.cancel();
        }

        let inner = callback.clone();
        *slot = Some(Timeout::new(duration, move || inner()));
    })
}
