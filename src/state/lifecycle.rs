// Open/close scope for everything the overlay attaches outside of Yew's
// own vdom listeners: window key/mouse listeners, the wheel listener and the
// resize observer.

use std::cell::Cell;
use std::rc::Rc;

/// Something attached to the page that has to be detached explicitly.
pub trait Resource {
    fn release(&mut self);
}

/// Cheap handle captured by callbacks. Once the owning scope closes, every
/// gated callback becomes a no-op.
#[derive(Clone, Debug)]
pub struct LiveToken {
    live: Rc<Cell<bool>>,
}

impl LiveToken {
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Runs `f` only while the scope is open. Returns whether it ran.
    pub fn run<F: FnOnce()>(&self, f: F) -> bool {
        if !self.is_live() {
            return false;
        }
        f();
        true
    }
}

pub struct OverlayScope {
    live: Rc<Cell<bool>>,
    resources: Vec<Box<dyn Resource>>,
}

impl OverlayScope {
    pub fn open() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
            resources: Vec::new(),
        }
    }

    pub fn token(&self) -> LiveToken {
        LiveToken {
            live: self.live.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.live.get()
    }

    /// Takes ownership of an attached resource. Holding into a closed scope
    /// releases the resource immediately.
    pub fn hold<R: Resource + 'static>(&mut self, mut resource: R) {
        if !self.is_open() {
            resource.release();
            return;
        }
        self.resources.push(Box::new(resource));
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Gates callbacks off first, then releases in reverse acquisition order.
    /// Safe to call more than once.
    pub fn close(&mut self) {
        self.live.set(false);
        while let Some(mut resource) = self.resources.pop() {
            resource.release();
        }
    }
}

impl Drop for OverlayScope {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContainerSize, Point};
    use crate::state::input::{KeyCommand, ViewerAction, ViewerState};
    use std::cell::RefCell;

    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Resource for Probe {
        fn release(&mut self) {
            self.log.borrow_mut().push(self.name);
        }
    }

    fn probe(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Probe {
        Probe {
            name,
            log: log.clone(),
        }
    }

    #[test]
    fn close_releases_in_reverse_order_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scope = OverlayScope::open();
        scope.hold(probe("resize", &log));
        scope.hold(probe("keydown", &log));
        assert_eq!(scope.len(), 2);
        scope.close();
        scope.close();
        assert_eq!(*log.borrow(), vec!["keydown", "resize"]);
        assert!(scope.is_empty());
        drop(scope);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn drop_closes_scope() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let token = {
            let mut scope = OverlayScope::open();
            scope.hold(probe("wheel", &log));
            scope.token()
        };
        assert!(!token.is_live());
        assert_eq!(*log.borrow(), vec!["wheel"]);
    }

    #[test]
    fn holding_after_close_releases_immediately() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scope = OverlayScope::open();
        scope.close();
        scope.hold(probe("late", &log));
        assert!(scope.is_empty());
        assert_eq!(*log.borrow(), vec!["late"]);
    }

    #[test]
    fn stray_events_after_teardown_do_not_mutate_state() {
        let state = Rc::new(RefCell::new(ViewerState::default()));
        let mut scope = OverlayScope::open();

        let on_key = {
            let token = scope.token();
            let state = state.clone();
            move |key: &str| {
                token.run(|| {
                    if let Some(cmd) = KeyCommand::from_key(key) {
                        state.borrow_mut().apply(cmd.action());
                    }
                })
            }
        };
        let on_resize = {
            let token = scope.token();
            let state = state.clone();
            move |size: ContainerSize| token.run(|| state.borrow_mut().apply(ViewerAction::Resized(size)))
        };

        assert!(on_resize(ContainerSize::new(640.0, 480.0)));
        assert!(on_key("+"));
        assert!(on_key("m"));
        state.borrow_mut().apply(ViewerAction::PointerMove {
            client: Point::new(20.0, 20.0),
            rect: crate::model::ContainerRect::new(0.0, 0.0, 640.0, 480.0),
        });
        state.borrow_mut().apply(ViewerAction::Close);
        scope.close();
        let snapshot = state.borrow().clone();

        assert!(!on_key("+"));
        assert!(!on_key("m"));
        assert!(!on_key("Escape"));
        assert!(!on_resize(ContainerSize::new(1.0, 1.0)));
        assert_eq!(*state.borrow(), snapshot);
        assert_eq!(snapshot.container, ContainerSize::new(640.0, 480.0));
    }
}
