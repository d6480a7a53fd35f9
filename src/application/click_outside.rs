use std::cell::RefCell;
use std::rc::Rc;

/// Something that can report pointer-down events landing outside a region.
pub trait PointerDownSource {
    type Handle;

    /// Start listening; `on_outside` runs for every pointer-down outside the region.
    fn attach(&self, on_outside: Rc<dyn Fn()>) -> Self::Handle;

    fn detach(&self, handle: Self::Handle);
}

/// Keeps at most one outside-pointer listener attached, and only while enabled.
pub struct ClickOutside<S: PointerDownSource> {
    source: S,
    on_outside: Rc<dyn Fn()>,
    handle: RefCell<Option<S::Handle>>,
}

impl<S: PointerDownSource> ClickOutside<S> {
    /// Starts disabled.
    pub fn new(source: S, on_outside: impl Fn() + 'static) -> Self {
        Self { source, on_outside: Rc::new(on_outside), handle: RefCell::new(None) }
    }

    pub fn set_enabled(&self, enabled: bool) {
        let mut handle = self.handle.borrow_mut();
        if enabled {
            if handle.is_none() {
                *handle = Some(self.source.attach(self.on_outside.clone()));
            }
        } else if let Some(attached) = handle.take() {
            self.source.detach(attached);
        }
    }

    pub fn is_listening(&self) -> bool {
        self.handle.borrow().is_some()
    }
}

impl<S: PointerDownSource> Drop for ClickOutside<S> {
    fn drop(&mut self) {
        if let Some(attached) = self.handle.get_mut().take() {
            self.source.detach(attached);
        }
    }
}
