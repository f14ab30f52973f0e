//! Ordering tests for the hello route.
//!
//! Drives `HelloHttpController` over an in-memory socket with a screen
//! that logs every paint into a shared event list, together with every
//! response byte written. The event order proves that the display
//! sequence completes before the response goes out and that concurrent
//! hello requests paint their sequences strictly back to back.

use std::cell::RefCell;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use embassy_futures::block_on;
use embassy_futures::join::join;
use embassy_futures::yield_now;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Duration;
use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use hellostick_net::http::routes::HELLO_BODY;
use hellostick_net::http::{HelloHttpController, HttpConnection, HttpHandler};
use hellostick_screen::{HEIGHT, ScreenService, StatusScreen, StepDelay, WIDTH};

const PAGE: &str = "<html></html>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    /// A full-screen clear with the given color (one per sequence step).
    Clear(Rgb565),
    /// One batch of pixel draws (text, rectangle fills).
    Pixels,
    /// One write call on the socket of the given request.
    Response(u8),
}

type Log = Rc<RefCell<Vec<Event>>>;

/// Draw target that records paint operations instead of pixels.
struct LogCanvas {
    log: Log,
}

impl LogCanvas {
    fn new(log: &Log) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl OriginDimensions for LogCanvas {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for LogCanvas {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for _ in pixels {}
        self.log.borrow_mut().push(Event::Pixels);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Clear(color));
        Ok(())
    }
}

/// Step delay that yields to the executor instead of waiting, so another
/// pending request gets every chance to interleave.
struct YieldDelay;

impl StepDelay for YieldDelay {
    async fn pause(&self, _dwell: Duration) {
        yield_now().await;
    }
}

struct MemSocket {
    input: Vec<u8>,
    read_pos: usize,
    id: u8,
    log: Log,
    output: Rc<RefCell<Vec<u8>>>,
}

impl MemSocket {
    fn new(request: &str, id: u8, log: &Log) -> (Self, Rc<RefCell<Vec<u8>>>) {
        let output = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                input: request.as_bytes().to_vec(),
                read_pos: 0,
                id,
                log: Rc::clone(log),
                output: Rc::clone(&output),
            },
            output,
        )
    }
}

impl embedded_io_async::ErrorType for MemSocket {
    type Error = core::convert::Infallible;
}

impl embedded_io_async::Read for MemSocket {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = &self.input[self.read_pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.read_pos += n;
        Ok(n)
    }
}

impl embedded_io_async::Write for MemSocket {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.log.borrow_mut().push(Event::Response(self.id));
        self.output.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }
}

type TestScreen = Mutex<NoopRawMutex, ScreenService<LogCanvas>>;

fn fresh_screen(log: &Log) -> TestScreen {
    Mutex::new(ScreenService::new(
        LogCanvas::new(log),
        StatusScreen::new("ap", "pass"),
    ))
}

fn is_paint(event: &Event) -> bool {
    matches!(event, Event::Clear(_) | Event::Pixels)
}

/// Paint events of one hello run on a fresh screen, for comparison.
fn single_run_paints() -> Vec<Event> {
    block_on(async {
        let log: Log = Log::default();
        let screen = fresh_screen(&log);
        let controller = HelloHttpController::new(&screen, YieldDelay, PAGE);

        let (socket, _output) = MemSocket::new("GET /hello HTTP/1.1\r\n\r\n", 1, &log);
        let conn = HttpConnection::from_socket(socket).await.unwrap();
        controller.handle_request(conn).await.unwrap();

        let events = log.borrow();
        events.iter().copied().filter(is_paint).collect()
    })
}

#[test]
fn hello_response_is_written_only_after_the_sequence_restores_idle() {
    block_on(async {
        let log: Log = Log::default();
        let screen = fresh_screen(&log);
        let controller = HelloHttpController::new(&screen, YieldDelay, PAGE);

        let (socket, output) = MemSocket::new("GET /hello HTTP/1.1\r\n\r\n", 1, &log);
        let conn = HttpConnection::from_socket(socket).await.unwrap();
        controller.handle_request(conn).await.unwrap();

        let events = log.borrow();

        // Clear, 12 flashes, message clear, idle restore clear.
        let clears = events.iter().filter(|e| matches!(e, Event::Clear(_))).count();
        assert_eq!(clears, 15);

        // Every paint, the idle restore included, precedes the first byte.
        let last_paint = events.iter().rposition(is_paint).unwrap();
        let first_response = events
            .iter()
            .position(|e| matches!(e, Event::Response(_)))
            .unwrap();
        assert!(last_paint < first_response);

        let response = String::from_utf8(output.borrow().clone()).unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.ends_with(HELLO_BODY));
    });
}

#[test]
fn concurrent_hellos_paint_their_sequences_back_to_back() {
    let baseline = single_run_paints();

    block_on(async {
        let log: Log = Log::default();
        let screen = fresh_screen(&log);
        let controller = HelloHttpController::new(&screen, YieldDelay, PAGE);

        let (first, out_a) = MemSocket::new("GET /hello HTTP/1.1\r\n\r\n", 1, &log);
        let (second, out_b) = MemSocket::new("GET /hello HTTP/1.1\r\n\r\n", 2, &log);
        let conn_a = HttpConnection::from_socket(first).await.unwrap();
        let conn_b = HttpConnection::from_socket(second).await.unwrap();

        let (res_a, res_b) = join(
            controller.handle_request(conn_a),
            controller.handle_request(conn_b),
        )
        .await;
        res_a.unwrap();
        res_b.unwrap();

        // The second sequence must not begin until the first has fully
        // restored the idle screen: the merged paint log is exactly two
        // whole runs, never a step of one inside the other.
        let paints: Vec<Event> = log.borrow().iter().copied().filter(is_paint).collect();
        assert_eq!(paints.len(), baseline.len() * 2);
        assert_eq!(&paints[..baseline.len()], &baseline[..]);
        assert_eq!(&paints[baseline.len()..], &baseline[..]);

        for output in [out_a, out_b] {
            let response = String::from_utf8(output.borrow().clone()).unwrap();
            assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
            assert!(response.ends_with(HELLO_BODY));
        }
    });
}
