//! tiny-cli UART console - firmware entry point
//!
//! Reads UART0 byte by byte, feeds the interpreter, writes output back to
//! the same UART. Ships a few demo commands.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use esp_idf_svc::hal::delay::BLOCK;
use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::uart::{self, UartDriver};
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::log::EspLogger;

use tiny_cli::config::{CliConfig, EchoMode, LineEnding};
use tiny_cli::{cli_println, is_numeric, Args, CliError, Command, Interpreter, Output};

/// Console UART baud rate.
const BAUD_RATE: u32 = 115_200;

/// Demo LED state (no pin attached, just reported).
static LED: AtomicBool = AtomicBool::new(false);

static COMMANDS: [Command<'static>; 4] = [
    Command::new("help", "?", "List commands", &cmd_help),
    Command::new("led", "l", "Set LED: led <0|1>", &cmd_led),
    Command::new("echo", "e", "Print arguments", &cmd_echo),
    Command::new("version", "v", "Firmware version", &cmd_version),
];

/// `core::fmt::Write` adapter over the UART driver.
struct UartSink<'d> {
    uart: &'d UartDriver<'d>,
}

impl fmt::Write for UartSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.uart.write(s.as_bytes()).map(|_| ()).map_err(|_| fmt::Error)
    }
}

fn main() -> Result<(), esp_idf_svc::sys::EspError> {
    // Initialize ESP-IDF
    esp_idf_svc::sys::link_patches();
    EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let uart_config = uart::config::Config::default().baudrate(Hertz(BAUD_RATE));
    let uart = UartDriver::new(
        peripherals.uart0,
        peripherals.pins.gpio43, // TX
        peripherals.pins.gpio44, // RX
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )?;

    let config = CliConfig::new()
        .with_echo(EchoMode::All)
        .with_line_ending(LineEnding::CrOrLf)
        .with_prompt("> ");

    let mut cli = Interpreter::new(UartSink { uart: &uart }, config);
    if let Err(e) = cli.initialize(&COMMANDS) {
        log::error!("command table rejected: {}", e);
        return Ok(());
    }
    cli.print_banner();

    let mut byte = [0u8; 1];
    loop {
        if uart.read(&mut byte, BLOCK)? == 0 {
            continue;
        }

        if let Some(Err(e)) = cli.consume(byte[0]) {
            let _ = cli_println!(cli.output(), "{}", e);
        }
    }
}

fn cmd_help(_cmd: &Command<'_>, _args: &Args<'_>, out: &mut Output<'_>) -> Result<(), CliError> {
    for c in COMMANDS.iter() {
        c.write_row(out)?;
    }
    Ok(())
}

fn cmd_led(_cmd: &Command<'_>, args: &Args<'_>, out: &mut Output<'_>) -> Result<(), CliError> {
    match args.get(0) {
        None => {}
        Some(v) if is_numeric(v) => LED.store(v != "0", Ordering::Relaxed),
        Some(_) => return Err(CliError::Handler),
    }
    cli_println!(out, "led {}", if LED.load(Ordering::Relaxed) { "on" } else { "off" })
}

fn cmd_echo(_cmd: &Command<'_>, args: &Args<'_>, out: &mut Output<'_>) -> Result<(), CliError> {
    for (i, word) in args.iter().enumerate() {
        if i > 0 {
            tiny_cli::cli_print!(out, " ")?;
        }
        tiny_cli::cli_print!(out, "{}", word)?;
    }
    cli_println!(out)
}

fn cmd_version(_cmd: &Command<'_>, _args: &Args<'_>, out: &mut Output<'_>) -> Result<(), CliError> {
    cli_println!(out, "{}", tiny_cli::console::VERSION)
}
