use std::ops::{Deref, DerefMut};

use super::display::Display;

/// Keeps the display device inside a `begin`/`end` bracket.
///
/// Guards nest: only the outermost one calls `begin` (on creation) and
/// `end` (on drop). The guard dereferences to the display, so nested scopes
/// are opened through it.
pub struct NestGuard<'c, 'a> {
    display: &'c mut Display<'a>,
}

impl<'c, 'a> NestGuard<'c, 'a> {
    pub(super) fn new(display: &'c mut Display<'a>) -> Self {
        display.nest();
        Self { display }
    }
}

impl<'a> Deref for NestGuard<'_, 'a> {
    type Target = Display<'a>;

    fn deref(&self) -> &Self::Target {
        self.display
    }
}

impl DerefMut for NestGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.display
    }
}

impl Drop for NestGuard<'_, '_> {
    fn drop(&mut self) {
        self.display.unnest();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingDevice;

    #[test]
    fn only_outermost_scope_reaches_device() {
        let mut dev = CountingDevice::new(4, 4);
        {
            let mut display = Display::new(&mut dev);
            let mut outer = display.enter_scope();
            assert_eq!(outer.nest_level(), 1);
            {
                let inner = outer.enter_scope();
                assert_eq!(inner.nest_level(), 2);
            }
            assert_eq!(outer.nest_level(), 1);
        }
        assert_eq!((dev.begins, dev.ends), (1, 1));
    }

    #[test]
    fn sequential_scopes_each_bracket() {
        let mut dev = CountingDevice::new(4, 4);
        {
            let mut display = Display::new(&mut dev);
            drop(display.enter_scope());
            drop(display.enter_scope());
            assert_eq!(display.nest_level(), 0);
        }
        assert_eq!((dev.begins, dev.ends), (2, 2));
    }
}
