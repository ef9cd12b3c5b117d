//! Full example code for driving a three-cell braille strip. This runs on an STM32F303RE, with
//! the register chain's data, latch, and clock inputs connected to PA5, PA6, and PA7.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate braille_cells;
extern crate cortex_m;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate panic_abort;

use braille_cells as braille;
use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::prelude::*;

entry!(main);

exception!(*, default_handler);

exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

fn main() -> ! {
    // Get peripherals and set up RCC.
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let delay = hal::delay::Delay::new(cp.SYST, clocks);

    // Get GPIO A where the register chain is connected, and set up the three lines as push-pull
    // outputs.
    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);

    let chain_data = gpioa
        .pa5
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let chain_latch = gpioa
        .pa6
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let chain_clock = gpioa
        .pa7
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);

    // Create the GpioInterface and BrailleDisplay for a three-cell strip, and lower every dot.
    let mut disp = braille::BrailleDisplay::new(
        braille::GpioInterface::new(chain_data, chain_latch, chain_clock, delay),
        3,
    );
    disp.init(braille::Config::new()).unwrap();

    // Spell "abc" across the strip (grade-1 braille: a = dot 1, b = dots 1-2, c = dots 1-4).
    disp.set_dot(0, 0);
    disp.set_dot(1, 0);
    disp.set_dot(1, 1);
    disp.set_dot(2, 0);
    disp.set_dot(2, 3);
    disp.flush().unwrap();

    loop {
        asm::wfi();
    }
}
