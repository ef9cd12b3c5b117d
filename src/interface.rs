/// The three-line serial interface to the register chain. The driver only ever needs these five
/// primitives; everything platform-specific lives behind them so the bit-ordering logic can run
/// against a spy in tests.
pub trait ChainInterface {
    /// Put all three lines into a known idle state (outputs, driven low).
    fn reset_lines(&mut self) -> Result<(), ()>;
    /// Drive the data line to `high`.
    fn write_data(&mut self, high: bool) -> Result<(), ()>;
    /// Drive the latch line to `high`.
    fn write_latch(&mut self, high: bool) -> Result<(), ()>;
    /// Pulse the clock line once, shifting in whatever level the data line holds.
    fn pulse_clock(&mut self) -> Result<(), ()>;
    /// Block for `us` microseconds.
    fn delay_us(&mut self, us: u16);
}

pub mod gpio {
    //! A `ChainInterface` bit-banged over three embedded-hal GPIO output pins plus a blocking
    //! delay provider. Pin mode is encoded in the pin types on embedded-hal platforms, so
    //! `reset_lines` only has to drive the levels.

    use embedded_hal as hal;

    use super::ChainInterface;

    pub struct GpioInterface<DATA, LATCH, CLOCK, D> {
        /// GPIO output connected to the serial data input of the first register in the chain.
        data: DATA,
        /// GPIO output connected to the (shared) register latch inputs.
        latch: LATCH,
        /// GPIO output connected to the (shared) register shift clock inputs.
        clock: CLOCK,
        /// Delay provider used for the latch settle time.
        delay: D,
    }

    impl<DATA, LATCH, CLOCK, D> GpioInterface<DATA, LATCH, CLOCK, D>
    where
        DATA: hal::digital::OutputPin,
        LATCH: hal::digital::OutputPin,
        CLOCK: hal::digital::OutputPin,
        D: hal::blocking::delay::DelayUs<u16>,
    {
        /// Create a new GPIO interface from the three output pins and a delay provider. The pins
        /// must already be configured as push-pull outputs by the platform HAL.
        pub fn new(data: DATA, latch: LATCH, clock: CLOCK, delay: D) -> Self {
            Self {
                data,
                latch,
                clock,
                delay,
            }
        }
    }

    impl<DATA, LATCH, CLOCK, D> ChainInterface for GpioInterface<DATA, LATCH, CLOCK, D>
    where
        DATA: hal::digital::OutputPin,
        LATCH: hal::digital::OutputPin,
        CLOCK: hal::digital::OutputPin,
        D: hal::blocking::delay::DelayUs<u16>,
    {
        fn reset_lines(&mut self) -> Result<(), ()> {
            self.data.set_low();
            self.latch.set_low();
            self.clock.set_low();
            Ok(())
        }

        fn write_data(&mut self, high: bool) -> Result<(), ()> {
            if high {
                self.data.set_high();
            } else {
                self.data.set_low();
            }
            Ok(())
        }

        fn write_latch(&mut self, high: bool) -> Result<(), ()> {
            if high {
                self.latch.set_high();
            } else {
                self.latch.set_low();
            }
            Ok(())
        }

        fn pulse_clock(&mut self) -> Result<(), ()> {
            self.clock.set_high();
            self.clock.set_low();
            Ok(())
        }

        fn delay_us(&mut self, us: u16) {
            self.delay.delay_us(us);
        }
    }
}

#[cfg(test)]
pub mod test_spy {
    //! An interface for use in unit tests to spy on every line transition the driver makes.

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::ChainInterface;

    /// One observed action on the interface, in the order it happened.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Event {
        LinesReset,
        Data(bool),
        Latch(bool),
        Clock,
        DelayUs(u16),
    }

    pub struct TestSpyInterface {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl TestSpyInterface {
        pub fn new() -> Self {
            TestSpyInterface {
                events: Rc::new(RefCell::new(Vec::new())),
            }
        }

        /// Make a second handle onto the same event log, so the test can keep one while the
        /// driver owns the other.
        pub fn split(&self) -> Self {
            TestSpyInterface {
                events: self.events.clone(),
            }
        }

        pub fn clear(&self) {
            self.events.borrow_mut().clear();
        }

        pub fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        /// The data line level at each clock pulse, i.e. the bit stream the register chain saw.
        pub fn shifted_bits(&self) -> Vec<bool> {
            let mut level = false;
            let mut bits = Vec::new();
            for event in self.events.borrow().iter() {
                match *event {
                    Event::Data(high) => level = high,
                    Event::Clock => bits.push(level),
                    Event::LinesReset => level = false,
                    _ => {}
                }
            }
            bits
        }

        pub fn check(&self, expect: &[Event]) {
            assert_eq!(*self.events.borrow(), expect);
        }
    }

    impl ChainInterface for TestSpyInterface {
        fn reset_lines(&mut self) -> Result<(), ()> {
            self.events.borrow_mut().push(Event::LinesReset);
            Ok(())
        }
        fn write_data(&mut self, high: bool) -> Result<(), ()> {
            self.events.borrow_mut().push(Event::Data(high));
            Ok(())
        }
        fn write_latch(&mut self, high: bool) -> Result<(), ()> {
            self.events.borrow_mut().push(Event::Latch(high));
            Ok(())
        }
        fn pulse_clock(&mut self) -> Result<(), ()> {
            self.events.borrow_mut().push(Event::Clock);
            Ok(())
        }
        fn delay_us(&mut self, us: u16) {
            self.events.borrow_mut().push(Event::DelayUs(us));
        }
    }
}
