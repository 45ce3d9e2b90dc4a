//! Recording transport for tests
//!
//! Every line change, bus byte and delay lands in one shared log so tests
//! can assert exact wire ordering across the separate peripherals.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use glcd_core::{DisplayConfig, Instruction};
use glcd_hal::{DelayMs, OutputPin, SpiBus};

use crate::st7735::St7735;

/// One observable action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Chip-select driven (true = high, deselected)
    Cs(bool),
    /// Command/data line driven (true = data)
    Dc(bool),
    /// Byte shifted out on the bus
    Byte(u8),
    /// Blocking delay
    Delay(u32),
}

/// Decoded bus activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Opcode plus every data byte sent before the next opcode
    Command(Instruction, Vec<u8>),
    Delay(u32),
}

#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Bytes on the bus, in order
    pub fn bytes(&self) -> Vec<u8> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Byte(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    /// Number of times chip-select was asserted
    pub fn selections(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| **e == Event::Cs(false))
            .count()
    }

    /// Number of times the command/data line was driven high
    pub fn data_line_raises(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| **e == Event::Dc(true))
            .count()
    }

    /// Group the log into instructions and delays
    ///
    /// Panics on an opcode missing from the instruction table, or on data
    /// with no preceding opcode.
    pub fn ops(&self) -> Vec<Op> {
        let mut ops = Vec::new();
        let mut data_mode = true;
        for event in self.0.borrow().iter() {
            match *event {
                Event::Dc(high) => data_mode = high,
                Event::Cs(_) => {}
                Event::Delay(ms) => ops.push(Op::Delay(ms)),
                Event::Byte(b) if !data_mode => {
                    let instruction = Instruction::from_opcode(b).expect("unknown opcode");
                    ops.push(Op::Command(instruction, Vec::new()));
                }
                Event::Byte(b) => match ops.last_mut() {
                    Some(Op::Command(_, data)) => data.push(b),
                    _ => panic!("data byte {b:#04x} without a command"),
                },
            }
        }
        ops
    }

    /// Instructions only, without parameters or delays
    pub fn instructions(&self) -> Vec<Instruction> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Command(i, _) => Some(i),
                Op::Delay(_) => None,
            })
            .collect()
    }
}

pub struct MockSpi {
    log: Log,
}

impl MockSpi {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl SpiBus for MockSpi {
    type Error = Infallible;

    fn write(&mut self, data: &[u8]) -> Result<(), Infallible> {
        for &b in data {
            self.log.push(Event::Byte(b));
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Line {
    Cs,
    Dc,
}

pub struct MockPin {
    log: Log,
    line: Line,
    high: bool,
}

impl MockPin {
    pub fn cs(log: &Log) -> Self {
        Self {
            log: log.clone(),
            line: Line::Cs,
            high: false,
        }
    }

    pub fn dc(log: &Log) -> Self {
        Self {
            log: log.clone(),
            line: Line::Dc,
            high: false,
        }
    }

    fn record(&mut self, high: bool) {
        self.high = high;
        self.log.push(match self.line {
            Line::Cs => Event::Cs(high),
            Line::Dc => Event::Dc(high),
        });
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.record(true);
    }

    fn set_low(&mut self) {
        self.record(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

pub struct MockDelay {
    log: Log,
}

impl DelayMs for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::Delay(ms));
    }
}

pub type MockDisplay = St7735<MockSpi, MockPin, MockPin, MockDelay>;

/// Fresh, uninitialised session on a recording transport
pub fn display(config: DisplayConfig) -> (MockDisplay, Log) {
    let log = Log::default();
    let display = St7735::new(
        MockSpi::new(&log),
        MockPin::cs(&log),
        MockPin::dc(&log),
        MockDelay { log: log.clone() },
        config,
    );
    (display, log)
}

/// Initialised session with an empty log
pub fn initialized(config: DisplayConfig) -> (MockDisplay, Log) {
    let (mut display, log) = display(config);
    display.init().unwrap();
    log.clear();
    (display, log)
}
