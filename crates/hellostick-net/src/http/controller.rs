//! HTTP request controller.
//!
//! Routes by exact path, method ignored. `/hello` plays the full display
//! sequence before the response line is written, so the client sees the
//! answer only once the screen is back to idle. The screen lock is held
//! for the sequence but released before the response goes out; a second
//! hello arriving mid-sequence waits on the lock and paints only after the
//! first run has restored the idle screen.
//!
//! Generic over the screen's draw target, mutex kind and step delay so the
//! whole hello flow is driven by host tests over an in-memory socket.

use core::fmt::Debug;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_io_async::{Read, Write};
use hellostick_screen::{ScreenService, StepDelay};
use log::info;

use super::routes::{HELLO_BODY, NOT_FOUND_BODY};
use super::{HttpConnection, HttpHandler, HttpResult, Route};

pub struct HelloHttpController<'a, M: RawMutex, D, T> {
    screen: &'a Mutex<M, ScreenService<D>>,
    delay: T,
    index_html: &'static str,
}

impl<'a, M: RawMutex, D, T> HelloHttpController<'a, M, D, T> {
    pub fn new(
        screen: &'a Mutex<M, ScreenService<D>>,
        delay: T,
        index_html: &'static str,
    ) -> Self {
        Self {
            screen,
            delay,
            index_html,
        }
    }
}

impl<M, D, T> HttpHandler for HelloHttpController<'_, M, D, T>
where
    M: RawMutex,
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
    T: StepDelay,
{
    async fn handle_request<S: Read + Write>(
        &self,
        mut conn: HttpConnection<S>,
    ) -> HttpResult {
        match Route::resolve(conn.path.as_str()) {
            Route::Index => conn.serve_html(self.index_html).await,
            Route::Hello => {
                info!("http: hello requested, playing sequence");
                {
                    let mut screen = self.screen.lock().await;
                    screen.play_hello(&self.delay).await;
                }
                conn.serve_text(200, HELLO_BODY).await
            }
            Route::NotFound => conn.serve_text(404, NOT_FOUND_BODY).await,
        }
    }
}
