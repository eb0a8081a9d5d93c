//! GPIO pin abstractions
//!
//! Traits for the digital trigger output and echo input lines. Both are
//! infallible: a pin that can fail is adapted at the platform boundary.

/// Digital output pin driving the sensor's trigger line
pub trait OutputPin {
    /// Drive the pin to a specific level (`true` = high)
    fn set(&mut self, level: bool);

    /// Set the pin high (logic 1)
    fn set_high(&mut self) {
        self.set(true);
    }

    /// Set the pin low (logic 0)
    fn set_low(&mut self) {
        self.set(false);
    }
}

/// Digital input pin reading the sensor's echo line
///
/// Takes `&mut self` because some HALs need mutable access to sample.
pub trait InputPin {
    /// Read the current level (`true` = high)
    fn read(&mut self) -> bool;

    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool {
        self.read()
    }

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.read()
    }
}

// Borrowed capabilities let the platform keep ownership of its pins
impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set(&mut self, level: bool) {
        T::set(self, level);
    }
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn read(&mut self) -> bool {
        T::read(self)
    }
}
