//! Idle status screen
//!
//! The default display content when no hello sequence is running: access
//! point name and passphrase, the device address, a server-ready line and
//! the connected-client count. The record is owned by whoever owns the
//! display; painting goes through any `DrawTarget<Color = Rgb565>`.

use core::fmt::Write as _;
use core::net::Ipv4Addr;

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::WIDTH;

/// Line positions, top to bottom.
const LINE_TITLE: i32 = 10;
const LINE_SSID: i32 = 25;
const LINE_PASS: i32 = 40;
const LINE_IP: i32 = 55;
const LINE_SERVER: i32 = 70;
const LINE_CLIENTS: i32 = 85;

/// Height of the strip cleared before repainting the client count.
const CLIENTS_STRIP_HEIGHT: u32 = 15;

/// Contents of the idle status screen.
#[derive(Debug, Clone, Copy)]
pub struct StatusScreen {
    pub ssid: &'static str,
    pub password: &'static str,
    pub ip: Option<Ipv4Addr>,
    pub server_ready: bool,
    pub clients: u32,
}

impl StatusScreen {
    /// Status record as it exists right after AP configuration: no address
    /// assigned yet, server not started, nobody connected.
    pub const fn new(ssid: &'static str, password: &'static str) -> Self {
        Self {
            ssid,
            password,
            ip: None,
            server_ready: false,
            clients: 0,
        }
    }

    /// Repaint the whole status screen.
    pub fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(Rgb565::BLACK)?;
        let style = text_style();

        draw_line(target, LINE_TITLE, "WiFi AP Active", style)?;

        let mut line = heapless::String::<48>::new();
        let _ = write!(line, "SSID: {}", self.ssid);
        draw_line(target, LINE_SSID, &line, style)?;

        line.clear();
        let _ = write!(line, "Pass: {}", self.password);
        draw_line(target, LINE_PASS, &line, style)?;

        line.clear();
        match self.ip {
            Some(ip) => {
                let _ = write!(line, "IP: {}", ip);
            }
            None => {
                let _ = write!(line, "IP: (unassigned)");
            }
        }
        draw_line(target, LINE_IP, &line, style)?;

        let server = if self.server_ready {
            "Server: Ready"
        } else {
            "Server: Starting"
        };
        draw_line(target, LINE_SERVER, server, style)?;

        self.render_clients(target)
    }

    /// Repaint only the connected-client count strip.
    ///
    /// Used by the periodic refresh so the rest of the screen is left alone.
    pub fn render_clients<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Rectangle::new(
            Point::new(0, LINE_CLIENTS - 5),
            Size::new(WIDTH, CLIENTS_STRIP_HEIGHT),
        )
        .into_styled(PrimitiveStyle::with_fill(Rgb565::BLACK))
        .draw(target)?;

        let mut line = heapless::String::<24>::new();
        let _ = write!(line, "Clients: {}", self.clients);
        draw_line(target, LINE_CLIENTS, &line, text_style())
    }
}

/// Paint the boot message shown while the access point comes up.
pub fn render_starting<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(Rgb565::BLACK)?;
    draw_line(target, LINE_TITLE, "Starting AP...", text_style())
}

fn text_style() -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE)
}

fn draw_line<D>(
    target: &mut D,
    y: i32,
    text: &str,
    style: MonoTextStyle<'static, Rgb565>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_baseline(text, Point::new(0, y), style, Baseline::Top)
        .draw(target)?;
    Ok(())
}
