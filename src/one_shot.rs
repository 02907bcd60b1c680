/// A boolean that clears itself the moment it is read.
///
/// Used to scope a modifier to exactly one following operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShotFlag {
    flag: bool,
}

impl OneShotFlag {
    pub fn new(initial: bool) -> Self {
        Self { flag: initial }
    }

    pub fn set(&mut self) {
        self.flag = true;
    }

    /// Return the current value and reset to `false`.
    pub fn read(&mut self) -> bool {
        std::mem::take(&mut self.flag)
    }

    /// Return the current value without resetting it.
    pub fn peek(&self) -> bool {
        self.flag
    }
}
